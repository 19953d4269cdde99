//! Evaluation errors.

use synth_ir::{ConstructorSymbol, FunctionSymbol, LabelId, ParamSymbol};
use thiserror::Error;

use crate::Value;

pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An exception reached the entry call.
    #[error("uncaught exception: {class}")]
    Uncaught { class: String },

    #[error("unknown function {0:?}")]
    UnknownFunction(FunctionSymbol),

    #[error("unknown constructor {0:?}")]
    UnknownConstructor(ConstructorSymbol),

    #[error("function `{0}` has no body")]
    MissingBody(String),

    /// The body exists but its root node was never set.
    #[error("body of `{0}` has no root expression")]
    MissingRoot(String),

    #[error("parameter {0:?} is not bound in this frame")]
    UnboundParam(ParamSymbol),

    #[error("`this` outside a member function")]
    NoReceiver,

    #[error("`return` to label {0:?}, which is not bound to the running function")]
    UnboundLabel(LabelId),

    #[error("only Throwable instances can be thrown, got {0}")]
    NotThrowable(String),

    #[error("condition must be Boolean, got {0}")]
    NonBoolCondition(String),

    #[error("`{op}` cannot be applied to {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: String,
        rhs: String,
    },

    #[error("integer overflow in `{0}`")]
    IntegerOverflow(&'static str),

    #[error("missing argument for parameter {0:?}")]
    MissingArgument(ParamSymbol),

    #[error("expected {expected} arguments, got {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("call depth exceeded {0}")]
    StackOverflow(usize),
}
