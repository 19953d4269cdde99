//! Qualified identities and symbol handles.
//!
//! - [`FqName`]: a fully-qualified dotted name (`org.example.Throws`)
//! - [`ClassId`]: package + class name
//! - [`CallableId`]: package + optional owning class + callable name
//! - Symbol handles (`FunctionSymbol`, `ParamSymbol`, `ConstructorSymbol`)
//!   are opaque u32 handles minted by a [`SymbolAllocator`].

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Name, StringInterner};

/// A fully-qualified dotted name, interned as a whole.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FqName(Name);

impl FqName {
    /// Intern a dotted path.
    pub fn new(interner: &StringInterner, path: &str) -> Self {
        FqName(interner.intern(path))
    }

    /// The interned dotted path.
    #[inline]
    pub const fn name(self) -> Name {
        self.0
    }

    /// Split into a [`ClassId`] at the last dot.
    ///
    /// A path without dots lives in the root package.
    pub fn to_class_id(self, interner: &StringInterner) -> ClassId {
        let path = interner.lookup(self.0);
        match path.rsplit_once('.') {
            Some((package, class)) => {
                ClassId::new(interner.intern(package), interner.intern(class))
            }
            None => ClassId::new(Name::EMPTY, self.0),
        }
    }
}

/// Identity of a class: its package and simple name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassId {
    pub package: Name,
    pub name: Name,
}

impl ClassId {
    pub const fn new(package: Name, name: Name) -> Self {
        Self { package, name }
    }

    /// Parse `java.lang.IllegalStateException` into package and name.
    pub fn from_dotted(interner: &StringInterner, path: &str) -> Self {
        FqName::new(interner, path).to_class_id(interner)
    }

    /// Render as a dotted path.
    pub fn display(self, interner: &StringInterner) -> String {
        let package = interner.lookup(self.package);
        let name = interner.lookup(self.name);
        if package.is_empty() {
            name.to_owned()
        } else {
            format!("{package}.{name}")
        }
    }
}

/// Identity of a callable: where it lives and what it is called.
///
/// Overloads share a `CallableId`; the signature is not part of it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallableId {
    pub package: Name,
    /// Owning class, or `None` for top-level callables.
    pub class_id: Option<ClassId>,
    pub name: Name,
}

impl CallableId {
    /// A top-level callable in `package`.
    pub const fn top_level(package: Name, name: Name) -> Self {
        Self {
            package,
            class_id: None,
            name,
        }
    }

    /// A member callable of `owner`.
    pub const fn member(owner: ClassId, name: Name) -> Self {
        Self {
            package: owner.package,
            class_id: Some(owner),
            name,
        }
    }

    /// Same location, different name.
    #[must_use]
    pub const fn with_name(self, name: Name) -> Self {
        Self { name, ..self }
    }

    #[inline]
    pub const fn is_top_level(self) -> bool {
        self.class_id.is_none()
    }

    /// Render as `package.Owner.name` (or `package.name`).
    pub fn display(self, interner: &StringInterner) -> String {
        let name = interner.lookup(self.name);
        match self.class_id {
            Some(owner) => format!("{}.{name}", owner.display(interner)),
            None => {
                let package = interner.lookup(self.package);
                if package.is_empty() {
                    name.to_owned()
                } else {
                    format!("{package}.{name}")
                }
            }
        }
    }
}

macro_rules! symbol_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

symbol_handle!(
    /// Stable handle of a named function declaration.
    FunctionSymbol
);
symbol_handle!(
    /// Handle of a value parameter (function or catch parameter).
    ParamSymbol
);
symbol_handle!(
    /// Handle of a class constructor.
    ConstructorSymbol
);

/// Mints fresh symbol handles.
///
/// Shared by the host and the synthesizer so that fabricated declarations
/// never reuse a handle already bound to user code.
#[derive(Debug, Default)]
pub struct SymbolAllocator {
    functions: AtomicU32,
    params: AtomicU32,
    constructors: AtomicU32,
}

impl SymbolAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_function(&self) -> FunctionSymbol {
        FunctionSymbol(self.functions.fetch_add(1, Ordering::Relaxed))
    }

    pub fn fresh_param(&self) -> ParamSymbol {
        ParamSymbol(self.params.fetch_add(1, Ordering::Relaxed))
    }

    pub fn fresh_constructor(&self) -> ConstructorSymbol {
        ConstructorSymbol(self.constructors.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_id_from_dotted() {
        let interner = StringInterner::new();
        let id = ClassId::from_dotted(&interner, "java.lang.IllegalStateException");
        assert_eq!(interner.lookup(id.package), "java.lang");
        assert_eq!(interner.lookup(id.name), "IllegalStateException");
        assert_eq!(id.display(&interner), "java.lang.IllegalStateException");
    }

    #[test]
    fn test_class_id_root_package() {
        let interner = StringInterner::new();
        let id = ClassId::from_dotted(&interner, "A");
        assert_eq!(id.package, Name::EMPTY);
        assert_eq!(id.display(&interner), "A");
    }

    #[test]
    fn test_callable_id_with_name_keeps_owner() {
        let interner = StringInterner::new();
        let owner = ClassId::from_dotted(&interner, "demo.A");
        let f = CallableId::member(owner, interner.intern("f"));
        let renamed = f.with_name(interner.intern("fOrNull"));

        assert_eq!(renamed.class_id, Some(owner));
        assert_eq!(renamed.package, f.package);
        assert_eq!(renamed.display(&interner), "demo.A.fOrNull");
        assert!(!renamed.is_top_level());
    }

    #[test]
    fn test_top_level_display() {
        let interner = StringInterner::new();
        let g = CallableId::top_level(interner.intern("demo"), interner.intern("g"));
        assert_eq!(g.display(&interner), "demo.g");
        assert!(g.is_top_level());
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let symbols = SymbolAllocator::new();
        let a = symbols.fresh_param();
        let b = symbols.fresh_param();
        assert_ne!(a, b);
        assert!(a < b);
        // Independent counters per symbol kind
        assert_eq!(symbols.fresh_function().raw(), 0);
    }
}
