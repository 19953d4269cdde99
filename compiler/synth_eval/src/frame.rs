//! Call frames.

use rustc_hash::FxHashMap;
use synth_ir::{Body, FunctionDecl, ParamSymbol};

use crate::{EvalError, Value};

/// The running function, its receiver and its bound parameters.
pub(crate) struct Frame<'a> {
    pub(crate) decl: &'a FunctionDecl,
    pub(crate) body: &'a Body,
    this: Option<Value>,
    locals: FxHashMap<ParamSymbol, Value>,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(decl: &'a FunctionDecl, body: &'a Body, this: Option<Value>) -> Self {
        Self {
            decl,
            body,
            this,
            locals: FxHashMap::default(),
        }
    }

    pub(crate) fn bind(&mut self, param: ParamSymbol, value: Value) {
        self.locals.insert(param, value);
    }

    pub(crate) fn unbind(&mut self, param: ParamSymbol) {
        self.locals.remove(&param);
    }

    pub(crate) fn lookup(&self, param: ParamSymbol) -> Result<Value, EvalError> {
        self.locals
            .get(&param)
            .copied()
            .ok_or(EvalError::UnboundParam(param))
    }

    pub(crate) fn this(&self) -> Result<Value, EvalError> {
        self.this.ok_or(EvalError::NoReceiver)
    }
}
