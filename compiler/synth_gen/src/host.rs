//! The boundary between the synthesizer and the compiler hosting it.
//!
//! The host owns declarations, types and symbols. The synthesizer only ever
//! asks questions through [`DeclarationHost`] and hands back fabricated
//! declarations; it never mutates host state beyond minting symbols and
//! interning names and types, which the host pools allow through `&self`.

use synth_ir::{
    BuiltinTypes, ClassId, ConstructorDecl, ConstructorSymbol, DeclLookup, FunctionDecl,
    FunctionSymbol, Program, StringInterner, SymbolAllocator, TypePool,
};

use crate::DeclarationPredicate;

/// Accepts predicate registrations during setup.
///
/// The host only answers [`DeclarationHost::symbols_by_predicate`] for
/// predicates registered here.
pub trait PredicateRegistrar {
    fn register(&mut self, predicate: DeclarationPredicate);
}

/// Queries the synthesizer makes against the host.
pub trait DeclarationHost: DeclLookup {
    /// Functions whose annotations satisfy `predicate`, in declaration order.
    fn symbols_by_predicate(&self, predicate: &DeclarationPredicate) -> Vec<FunctionSymbol>;

    /// Zero-argument constructor of `class`, if it has one.
    fn no_arg_constructor(&self, class: ClassId) -> Option<ConstructorSymbol>;

    fn builtins(&self) -> BuiltinTypes;

    fn types(&self) -> &TypePool;

    fn interner(&self) -> &StringInterner;

    fn symbols(&self) -> &SymbolAllocator;
}

/// [`DeclarationHost`] over an in-memory [`Program`].
pub struct ProgramHost<'p> {
    program: &'p Program,
    registered: Vec<DeclarationPredicate>,
}

impl<'p> ProgramHost<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            registered: Vec::new(),
        }
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    pub fn is_registered(&self, predicate: &DeclarationPredicate) -> bool {
        self.registered.contains(predicate)
    }

    pub fn registered(&self) -> &[DeclarationPredicate] {
        &self.registered
    }
}

impl PredicateRegistrar for ProgramHost<'_> {
    fn register(&mut self, predicate: DeclarationPredicate) {
        if !self.registered.contains(&predicate) {
            tracing::trace!(?predicate, "registered predicate");
            self.registered.push(predicate);
        }
    }
}

impl DeclLookup for ProgramHost<'_> {
    fn function(&self, symbol: FunctionSymbol) -> Option<&FunctionDecl> {
        self.program.function(symbol)
    }

    fn constructor(&self, symbol: ConstructorSymbol) -> Option<&ConstructorDecl> {
        self.program.constructor(symbol)
    }
}

impl DeclarationHost for ProgramHost<'_> {
    fn symbols_by_predicate(&self, predicate: &DeclarationPredicate) -> Vec<FunctionSymbol> {
        if !self.is_registered(predicate) {
            tracing::warn!(?predicate, "query for an unregistered predicate");
            return Vec::new();
        }
        self.program
            .functions()
            .filter(|decl| predicate.matches(&decl.annotations))
            .map(|decl| decl.symbol)
            .collect()
    }

    fn no_arg_constructor(&self, class: ClassId) -> Option<ConstructorSymbol> {
        self.program.no_arg_constructor(class)
    }

    fn builtins(&self) -> BuiltinTypes {
        self.program.builtins()
    }

    fn types(&self) -> &TypePool {
        self.program.types()
    }

    fn interner(&self) -> &StringInterner {
        self.program.interner()
    }

    fn symbols(&self) -> &SymbolAllocator {
        self.program.symbols()
    }
}
