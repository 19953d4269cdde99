//! Resolved types and the type pool.
//!
//! Every resolved type is interned in a [`TypePool`] and referenced by a
//! 32-bit [`TypeId`]. Nullability is part of the interned data, so
//! `String` and `String?` are distinct ids and forcing nullability is a
//! lookup, not a structural rewrite.
//!
//! # Pre-interned Types
//!
//! The non-null builtins and the type of the `null` literal have fixed ids
//! (`TypeId::INT` ..= `TypeId::NULLABLE_NOTHING`).

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

use crate::{ClassId, StringInterner};

/// Index into a [`TypePool`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const INT: Self = Self(0);
    pub const BOOL: Self = Self(1);
    pub const STRING: Self = Self(2);
    pub const UNIT: Self = Self(3);
    /// The bottom type; no values.
    pub const NOTHING: Self = Self(4);
    pub const ANY: Self = Self(5);
    /// `Nothing?`, the type of the `null` literal.
    pub const NULLABLE_NOTHING: Self = Self(6);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 7;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INT => write!(f, "TypeId::INT"),
            Self::BOOL => write!(f, "TypeId::BOOL"),
            Self::STRING => write!(f, "TypeId::STRING"),
            Self::UNIT => write!(f, "TypeId::UNIT"),
            Self::NOTHING => write!(f, "TypeId::NOTHING"),
            Self::ANY => write!(f, "TypeId::ANY"),
            Self::NULLABLE_NOTHING => write!(f, "TypeId::NULLABLE_NOTHING"),
            _ => write!(f, "TypeId({})", self.0),
        }
    }
}

/// Whether a type admits `null`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Nullability {
    Nullable,
    NotNull,
}

impl Nullability {
    #[inline]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Nullability::Nullable)
    }
}

/// What a type is, independent of nullability.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Int,
    Bool,
    String,
    Unit,
    Nothing,
    Any,
    /// A class type, such as `demo.A` or `kotlin.Throwable`.
    Class(ClassId),
}

/// Interned type payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeData {
    pub kind: TypeKind,
    pub nullability: Nullability,
}

impl TypeData {
    pub const fn not_null(kind: TypeKind) -> Self {
        Self {
            kind,
            nullability: Nullability::NotNull,
        }
    }
}

struct PoolState {
    items: Vec<TypeData>,
    map: FxHashMap<TypeData, TypeId>,
}

/// Interning pool for resolved types.
///
/// Interior mutability lets the synthesizer mint adjusted types while it only
/// holds a shared reference to the host.
pub struct TypePool {
    state: RwLock<PoolState>,
}

impl TypePool {
    pub fn new() -> Self {
        let pool = Self {
            state: RwLock::new(PoolState {
                items: Vec::with_capacity(64),
                map: FxHashMap::default(),
            }),
        };
        // Order must match the TypeId constants
        for data in [
            TypeData::not_null(TypeKind::Int),
            TypeData::not_null(TypeKind::Bool),
            TypeData::not_null(TypeKind::String),
            TypeData::not_null(TypeKind::Unit),
            TypeData::not_null(TypeKind::Nothing),
            TypeData::not_null(TypeKind::Any),
            TypeData {
                kind: TypeKind::Nothing,
                nullability: Nullability::Nullable,
            },
        ] {
            pool.intern(data);
        }
        pool
    }

    /// Intern a type, returning its id.
    ///
    /// # Panics
    /// Panics if the pool exceeds `u32::MAX` types.
    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(&id) = self.state.read().map.get(&data) {
            return id;
        }
        let mut guard = self.state.write();
        if let Some(&id) = guard.map.get(&data) {
            return id;
        }
        let raw = u32::try_from(guard.items.len())
            .unwrap_or_else(|_| panic!("type pool exceeded {} types", u32::MAX));
        let id = TypeId(raw);
        guard.items.push(data);
        guard.map.insert(data, id);
        id
    }

    /// Get the payload of an interned type.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this pool.
    pub fn get(&self, id: TypeId) -> TypeData {
        self.state.read().items[id.index()]
    }

    /// Whether `id` belongs to this pool.
    pub fn contains(&self, id: TypeId) -> bool {
        id.index() < self.state.read().items.len()
    }

    /// The non-null type of instances of `class`.
    pub fn class_type(&self, class: ClassId) -> TypeId {
        self.intern(TypeData::not_null(TypeKind::Class(class)))
    }

    /// `id` with its nullability forced to `nullability`.
    ///
    /// Returns `id` itself when it already has the requested nullability.
    pub fn with_nullability(&self, id: TypeId, nullability: Nullability) -> TypeId {
        let data = self.get(id);
        if data.nullability == nullability {
            return id;
        }
        self.intern(TypeData { nullability, ..data })
    }

    pub fn is_nullable(&self, id: TypeId) -> bool {
        self.get(id).nullability.is_nullable()
    }

    /// The class of a class type, ignoring nullability.
    pub fn class_of(&self, id: TypeId) -> Option<ClassId> {
        match self.get(id).kind {
            TypeKind::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Render a type as source text (`String?`, `demo.A`).
    pub fn format(&self, id: TypeId, interner: &StringInterner) -> String {
        let data = self.get(id);
        let mut out = match data.kind {
            TypeKind::Int => "Int".to_owned(),
            TypeKind::Bool => "Boolean".to_owned(),
            TypeKind::String => "String".to_owned(),
            TypeKind::Unit => "Unit".to_owned(),
            TypeKind::Nothing => "Nothing".to_owned(),
            TypeKind::Any => "Any".to_owned(),
            TypeKind::Class(class) => class.display(interner),
        };
        if data.nullability.is_nullable() {
            out.push('?');
        }
        out
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

/// Builtin types the synthesizer needs from the host.
#[derive(Copy, Clone, Debug)]
pub struct BuiltinTypes {
    /// The bottom type, used for blocks, `try`, `return` and `throw`.
    pub nothing: TypeId,
    /// The type of the `null` literal.
    pub null: TypeId,
    /// Root of the exception hierarchy; the catch parameter's type.
    pub throwable: TypeId,
    pub throwable_class: ClassId,
}

#[cfg(test)]
mod tests;
