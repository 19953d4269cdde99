//! Synth Eval - a small tree-walking interpreter over `synth_ir`.
//!
//! Runs resolved function bodies, synthesized or hand-built, so the
//! behavior of companions can be checked end to end:
//!
//! - exceptions unwind to the nearest `catch` whose parameter type is a
//!   supertype of the thrown class
//! - `return@label` unwinds to the function the label is bound to
//! - an exception escaping the entry call becomes [`EvalError::Uncaught`]
//! - call chains deeper than [`MAX_CALL_DEPTH`] stop with
//!   [`EvalError::StackOverflow`]; the native stack grows as needed below
//!   that cap

mod errors;
mod frame;
mod interpreter;
mod stack;
mod value;

pub use errors::{EvalError, EvalResult};
pub use interpreter::{Interpreter, MAX_CALL_DEPTH};
pub use value::Value;
