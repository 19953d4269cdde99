//! Errors raised while synthesizing declarations.

use synth_ir::{
    ConstructorSymbol, ExprId, FunctionSymbol, LabelError, LabelId, ParamSymbol, TypeId,
};
use thiserror::Error;

/// Failure to produce a companion declaration.
///
/// "No companion for this identity" is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    /// The configured error class has no zero-argument constructor, so an
    /// `OrThrow` body cannot be built.
    #[error("`{class}` has no zero-argument constructor; cannot synthesize `{function}`")]
    MissingNoArgConstructor { class: String, function: String },

    /// The index names an original the host can no longer resolve.
    #[error("original of `{function}` ({symbol:?}) is unknown to the host")]
    UnknownOrigin {
        function: String,
        symbol: FunctionSymbol,
    },

    /// The return target could not be bound to the new declaration.
    #[error("cannot bind the return target of `{function}`: {source}")]
    ReturnTarget {
        function: String,
        #[source]
        source: LabelError,
    },

    /// The assembled declaration failed its structural check.
    #[error("synthesized `{function}` is malformed: {reason}")]
    Malformed {
        function: String,
        reason: Malformed,
    },
}

/// What [`validate`](crate::validate) found wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("declaration has no body")]
    MissingBody,

    #[error("body root {0:?} is not a node of the body")]
    MissingRoot(ExprId),

    #[error("{parent:?} refers to {child:?}, which is not a node of the body")]
    DanglingChild { parent: ExprId, child: ExprId },

    #[error("{expr:?} has type {ty:?}, which is not in the type pool")]
    UnknownType { expr: ExprId, ty: TypeId },

    #[error("label {0:?} is not bound")]
    UnboundLabel(LabelId),

    #[error("label {label:?} returns from {bound:?} instead of the declaration itself")]
    ForeignLabel {
        label: LabelId,
        bound: FunctionSymbol,
    },

    #[error("{expr:?} returns to label {label:?}, which the body does not declare")]
    UnknownLabel { expr: ExprId, label: LabelId },

    #[error("{expr:?} reads {param:?}, which is not in scope")]
    ParamOutOfScope { expr: ExprId, param: ParamSymbol },

    #[error("{expr:?} calls {callee:?}, which the host does not know")]
    UnknownCallee {
        expr: ExprId,
        callee: FunctionSymbol,
    },

    #[error("{expr:?} instantiates through {ctor:?}, which the host does not know")]
    UnknownConstructor {
        expr: ExprId,
        ctor: ConstructorSymbol,
    },

    #[error("{expr:?} passes {found} arguments where {expected} are declared")]
    ArgumentCount {
        expr: ExprId,
        expected: usize,
        found: usize,
    },

    #[error("{expr:?} binds argument {index} to {found:?}, expected {expected:?}")]
    ArgumentBinding {
        expr: ExprId,
        index: usize,
        expected: ParamSymbol,
        found: ParamSymbol,
    },

    #[error("{expr:?} calls a member without a receiver")]
    MissingReceiver { expr: ExprId },

    #[error("parameter {index} does not mirror the original")]
    ParameterMismatch { index: usize },

    #[error("declares {found} parameters, the original declares {expected}")]
    ParameterCount { expected: usize, found: usize },
}
