//! Declarations: functions, parameters, constructors and classes.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::{Body, CallableId, ClassId, ConstructorSymbol, FqName, FunctionSymbol, Name, ParamSymbol, TypeId};

bitflags! {
    /// Parameter modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ParamFlags: u8 {
        const VARARG = 1 << 0;
        const CROSSINLINE = 1 << 1;
        const NOINLINE = 1 << 2;
    }
}

bitflags! {
    /// Function modifiers that survive into a resolved status.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u8 {
        const INLINE = 1 << 0;
        const SUSPEND = 1 << 1;
        const OPERATOR = 1 << 2;
        const INFIX = 1 << 3;
        const EXTERNAL = 1 << 4;
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub const fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Resolved visibility and modifiers of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclStatus {
    pub visibility: Visibility,
    pub modifiers: Modifiers,
}

/// Provenance of a synthesized node: one key per generation strategy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GeneratedKey {
    /// `xOrNull`: exceptions become `null`.
    NullOnThrow,
    /// `xOrThrow`: `null` becomes an exception.
    ThrowOnNull,
}

/// Where a declaration came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Origin {
    #[default]
    Source,
    Plugin(GeneratedKey),
}

/// How far resolution has progressed for a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum ResolvePhase {
    #[default]
    Raw,
    Types,
    Status,
    /// Signature and body fully resolved.
    BodyResolve,
}

/// A value parameter of a function, constructor or catch clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueParameter {
    pub symbol: ParamSymbol,
    pub name: Name,
    pub ty: TypeId,
    pub flags: ParamFlags,
    pub origin: Origin,
}

impl ValueParameter {
    pub fn new(symbol: ParamSymbol, name: Name, ty: TypeId) -> Self {
        Self {
            symbol,
            name,
            ty,
            flags: ParamFlags::empty(),
            origin: Origin::Source,
        }
    }

    /// A structural copy with its own symbol and provenance.
    #[must_use]
    pub fn copy_as(&self, symbol: ParamSymbol, origin: Origin) -> Self {
        Self {
            symbol,
            origin,
            ..self.clone()
        }
    }
}

/// Annotation list; almost always zero or one entry.
pub type Annotations = SmallVec<[FqName; 2]>;

/// A named function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub symbol: FunctionSymbol,
    pub callable_id: CallableId,
    pub params: Vec<ValueParameter>,
    pub return_type: TypeId,
    pub status: DeclStatus,
    pub origin: Origin,
    pub resolve_phase: ResolvePhase,
    pub annotations: Annotations,
    pub body: Option<Body>,
}

impl FunctionDecl {
    /// A fully-resolved, user-authored declaration without a body.
    pub fn new(symbol: FunctionSymbol, callable_id: CallableId, return_type: TypeId) -> Self {
        Self {
            symbol,
            callable_id,
            params: Vec::new(),
            return_type,
            status: DeclStatus::default(),
            origin: Origin::Source,
            resolve_phase: ResolvePhase::BodyResolve,
            annotations: Annotations::new(),
            body: None,
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.callable_id.name
    }

    #[inline]
    pub fn owner(&self) -> Option<ClassId> {
        self.callable_id.class_id
    }

    pub fn param(&self, symbol: ParamSymbol) -> Option<&ValueParameter> {
        self.params.iter().find(|p| p.symbol == symbol)
    }
}

/// A class constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorDecl {
    pub symbol: ConstructorSymbol,
    pub class_id: ClassId,
    pub params: Vec<ValueParameter>,
}

/// A class: enough structure for constructor lookup and catch matching.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub class_id: ClassId,
    pub supertype: Option<ClassId>,
    pub constructors: Vec<ConstructorSymbol>,
}
