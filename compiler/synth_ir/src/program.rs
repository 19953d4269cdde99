//! In-memory declaration universe.
//!
//! `Program` holds everything a host compiler would normally own for one
//! compilation unit: the interner, the type pool, the symbol allocator, and
//! the resolved classes, constructors and functions. Declarations are kept
//! in insertion order so queries over them are deterministic.

use rustc_hash::FxHashMap;

use crate::{
    BuiltinTypes, ClassDecl, ClassId, ConstructorDecl, ConstructorSymbol, FunctionDecl,
    FunctionSymbol, SharedInterner, StringInterner, SymbolAllocator, TypeId, TypePool,
    ValueParameter,
};

/// Dotted path of the root of the exception hierarchy.
pub const THROWABLE: &str = "kotlin.Throwable";

/// Resolved declarations of one compilation unit.
pub struct Program {
    interner: SharedInterner,
    types: TypePool,
    symbols: SymbolAllocator,
    builtins: BuiltinTypes,
    classes: FxHashMap<ClassId, ClassDecl>,
    constructors: FxHashMap<ConstructorSymbol, ConstructorDecl>,
    functions: FxHashMap<FunctionSymbol, FunctionDecl>,
    function_order: Vec<FunctionSymbol>,
}

impl Program {
    /// An empty program that only knows `kotlin.Throwable`.
    pub fn new() -> Self {
        let interner = SharedInterner::new();
        let types = TypePool::new();
        let throwable_class = ClassId::from_dotted(&interner, THROWABLE);
        let builtins = BuiltinTypes {
            nothing: TypeId::NOTHING,
            null: TypeId::NULLABLE_NOTHING,
            throwable: types.class_type(throwable_class),
            throwable_class,
        };
        let mut program = Self {
            interner,
            types,
            symbols: SymbolAllocator::new(),
            builtins,
            classes: FxHashMap::default(),
            constructors: FxHashMap::default(),
            functions: FxHashMap::default(),
            function_order: Vec::new(),
        };
        program.declare_class(throwable_class, None);
        program.add_constructor(throwable_class, Vec::new());
        program
    }

    /// A program with the exception classes the JVM standard library
    /// exposes, each with a zero-argument constructor.
    pub fn with_std() -> Self {
        let mut program = Self::new();
        let throwable = program.builtins.throwable_class;
        let exception = program.class_id("java.lang.Exception");
        let runtime = program.class_id("java.lang.RuntimeException");
        let illegal_state = program.class_id("java.lang.IllegalStateException");
        for (class, supertype) in [
            (exception, throwable),
            (runtime, exception),
            (illegal_state, runtime),
        ] {
            program.declare_class(class, Some(supertype));
            program.add_constructor(class, Vec::new());
        }
        program
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn types(&self) -> &TypePool {
        &self.types
    }

    pub fn symbols(&self) -> &SymbolAllocator {
        &self.symbols
    }

    pub fn builtins(&self) -> BuiltinTypes {
        self.builtins
    }

    /// Intern a dotted class path.
    pub fn class_id(&self, path: &str) -> ClassId {
        ClassId::from_dotted(&self.interner, path)
    }

    /// Declare a class. Redeclaring keeps the existing constructors.
    pub fn declare_class(&mut self, class_id: ClassId, supertype: Option<ClassId>) {
        self.classes
            .entry(class_id)
            .and_modify(|class| class.supertype = supertype)
            .or_insert(ClassDecl {
                class_id,
                supertype,
                constructors: Vec::new(),
            });
    }

    /// Add a constructor to a declared class.
    ///
    /// # Panics
    /// Panics if `class_id` has not been declared.
    pub fn add_constructor(
        &mut self,
        class_id: ClassId,
        params: Vec<ValueParameter>,
    ) -> ConstructorSymbol {
        let symbol = self.symbols.fresh_constructor();
        let Some(class) = self.classes.get_mut(&class_id) else {
            panic!("constructor added to undeclared class {class_id:?}");
        };
        class.constructors.push(symbol);
        self.constructors.insert(
            symbol,
            ConstructorDecl {
                symbol,
                class_id,
                params,
            },
        );
        symbol
    }

    /// Add a function; its symbol must come from this program's allocator.
    pub fn add_function(&mut self, decl: FunctionDecl) -> FunctionSymbol {
        let symbol = decl.symbol;
        if self.functions.insert(symbol, decl).is_none() {
            self.function_order.push(symbol);
        }
        symbol
    }

    pub fn class(&self, class_id: ClassId) -> Option<&ClassDecl> {
        self.classes.get(&class_id)
    }

    pub fn constructor(&self, symbol: ConstructorSymbol) -> Option<&ConstructorDecl> {
        self.constructors.get(&symbol)
    }

    pub fn function(&self, symbol: FunctionSymbol) -> Option<&FunctionDecl> {
        self.functions.get(&symbol)
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> + '_ {
        self.function_order
            .iter()
            .filter_map(|symbol| self.functions.get(symbol))
    }

    /// The first declared constructor of `class_id` taking no parameters.
    pub fn no_arg_constructor(&self, class_id: ClassId) -> Option<ConstructorSymbol> {
        let class = self.classes.get(&class_id)?;
        class.constructors.iter().copied().find(|symbol| {
            self.constructors
                .get(symbol)
                .is_some_and(|ctor| ctor.params.is_empty())
        })
    }

    /// Whether `class_id` is `ancestor` or inherits from it.
    pub fn is_subclass(&self, class_id: ClassId, ancestor: ClassId) -> bool {
        let mut current = Some(class_id);
        while let Some(class) = current {
            if class == ancestor {
                return true;
            }
            current = self.classes.get(&class).and_then(|decl| decl.supertype);
        }
        false
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
