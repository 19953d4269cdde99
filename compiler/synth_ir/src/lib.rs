//! Synth IR - resolved intermediate representation.
//!
//! This crate contains the data structures the declaration synthesizer reads
//! and fabricates:
//! - Names and the string interner
//! - Qualified identities (`FqName`, `ClassId`, `CallableId`) and symbol handles
//! - The type pool, where nullability is part of the interned type
//! - Function bodies as flat expression arenas with forward-declared labels
//! - Declarations and an in-memory `Program` universe
//!
//! # Design Philosophy
//!
//! - **Resolved on construction**: every node carries its type and every
//!   reference is a symbol handle; nothing is looked up by name later.
//! - **Flat bodies**: children are `ExprId` indices into the owning `Body`.
//! - **Interior mutability at the pools**: interner and type pool accept
//!   `&self`, so producers only need shared access to the host.

mod body;
mod decl;
mod expr;
mod ids;
mod interner;
mod lookup;
mod name;
pub mod pretty;
mod program;
mod types;

pub use body::{Body, Label, LabelError};
pub use decl::{
    Annotations, ClassDecl, ConstructorDecl, DeclStatus, FunctionDecl, GeneratedKey, Modifiers,
    Origin, ParamFlags, ResolvePhase, ValueParameter, Visibility,
};
pub use expr::{
    Arg, ArgRange, BinaryOp, Catch, CatchRange, Constant, ExprId, ExprKind, ExprRange,
    LabelId,
};
pub use ids::{
    CallableId, ClassId, ConstructorSymbol, FqName, FunctionSymbol, ParamSymbol, SymbolAllocator,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use lookup::DeclLookup;
pub use pretty::render_function;
pub use program::{Program, THROWABLE};
pub use types::{BuiltinTypes, Nullability, TypeData, TypeId, TypeKind, TypePool};
