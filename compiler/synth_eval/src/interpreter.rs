//! The interpreter.

use std::cell::Cell;

use rustc_hash::FxHashMap;
use synth_ir::{
    BinaryOp, CallableId, Constant, ExprId, ExprKind, FunctionDecl, FunctionSymbol, LabelId,
    ParamSymbol, Program, TypeId,
};

use crate::frame::Frame;
use crate::stack::ensure_sufficient_stack;
use crate::{EvalError, EvalResult, Value};

/// Nested calls allowed before evaluation gives up.
pub const MAX_CALL_DEPTH: usize = 200;

/// Non-local exits while evaluating a body.
enum Unwind {
    Return { label: LabelId, value: Value },
    Throw(Value),
    Error(EvalError),
}

impl From<EvalError> for Unwind {
    fn from(err: EvalError) -> Self {
        Unwind::Error(err)
    }
}

type ExecResult = Result<Value, Unwind>;

/// Evaluates functions of a [`Program`], plus any declarations registered
/// on top of it (typically synthesized companions).
pub struct Interpreter<'p> {
    program: &'p Program,
    extra: FxHashMap<FunctionSymbol, FunctionDecl>,
    depth: Cell<usize>,
}

impl<'p> Interpreter<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            extra: FxHashMap::default(),
            depth: Cell::new(0),
        }
    }

    /// Make `decl` callable. Replaces an earlier registration of its symbol.
    pub fn register(&mut self, decl: FunctionDecl) {
        self.extra.insert(decl.symbol, decl);
    }

    pub fn function(&self, symbol: FunctionSymbol) -> Option<&FunctionDecl> {
        self.extra
            .get(&symbol)
            .or_else(|| self.program.function(symbol))
    }

    /// The function declared as `id`.
    ///
    /// `None` when nothing is declared as `id`, or when several functions
    /// are (overloads).
    pub fn resolve(&self, id: CallableId) -> Option<FunctionSymbol> {
        let mut found = self
            .extra
            .values()
            .chain(self.program.functions())
            .filter(|decl| decl.callable_id == id)
            .map(|decl| decl.symbol);
        let first = found.next()?;
        found.all(|other| other == first).then_some(first)
    }

    /// Call `symbol` with positional `args`.
    ///
    /// An exception escaping the call is reported as
    /// [`EvalError::Uncaught`] naming the thrown class.
    pub fn call(&self, symbol: FunctionSymbol, this: Option<Value>, args: &[Value]) -> EvalResult {
        let decl = self
            .function(symbol)
            .ok_or(EvalError::UnknownFunction(symbol))?;
        if args.len() != decl.params.len() {
            return Err(EvalError::ArgumentCount {
                expected: decl.params.len(),
                found: args.len(),
            });
        }
        match self.invoke(decl, this, args) {
            Ok(value) => Ok(value),
            Err(Unwind::Throw(exception)) => Err(EvalError::Uncaught {
                class: match exception.class() {
                    Some(class) => class.display(self.program.interner()),
                    None => exception.type_name().to_owned(),
                },
            }),
            Err(Unwind::Error(err)) => Err(err),
            Err(Unwind::Return { label, .. }) => Err(EvalError::UnboundLabel(label)),
        }
    }

    fn invoke(&self, decl: &FunctionDecl, this: Option<Value>, args: &[Value]) -> ExecResult {
        let body = decl.body.as_ref().ok_or_else(|| {
            EvalError::MissingBody(decl.callable_id.display(self.program.interner()))
        })?;
        let root = body.root();
        if !body.contains(root) {
            let name = decl.callable_id.display(self.program.interner());
            return Err(EvalError::MissingRoot(name).into());
        }

        let depth = self.depth.get();
        if depth >= MAX_CALL_DEPTH {
            return Err(EvalError::StackOverflow(MAX_CALL_DEPTH).into());
        }
        self.depth.set(depth + 1);
        tracing::trace!(
            function = %decl.callable_id.display(self.program.interner()),
            depth,
            "call",
        );

        let mut frame = Frame::new(decl, body, this);
        for (param, &value) in decl.params.iter().zip(args) {
            frame.bind(param.symbol, value);
        }
        let result = self.eval(&mut frame, root);
        self.depth.set(depth);

        match result {
            Err(Unwind::Return { label, value }) => {
                let bound = body.label(label).and_then(|l| l.bound);
                if bound == Some(decl.symbol) {
                    Ok(value)
                } else {
                    Err(EvalError::UnboundLabel(label).into())
                }
            }
            other => other,
        }
    }

    fn eval(&self, frame: &mut Frame<'_>, id: ExprId) -> ExecResult {
        ensure_sufficient_stack(|| self.eval_inner(frame, id))
    }

    fn eval_inner(&self, frame: &mut Frame<'_>, id: ExprId) -> ExecResult {
        let body = frame.body;
        match body.kind(id) {
            ExprKind::Const(constant) => Ok(match constant {
                Constant::Null => Value::Null,
                Constant::Int(n) => Value::Int(n),
                Constant::Bool(b) => Value::Bool(b),
                Constant::Str(name) => Value::Str(name),
            }),
            ExprKind::ParamRef(param) => Ok(frame.lookup(param)?),
            ExprKind::This(_) => Ok(frame.this()?),
            ExprKind::Call {
                callee,
                receiver,
                args,
            } => {
                let this = match receiver.present() {
                    Some(receiver) => Some(self.eval(frame, receiver)?),
                    None => None,
                };
                let mut bound: Vec<(ParamSymbol, Value)> = Vec::with_capacity(args.len());
                for arg in body.args(args) {
                    bound.push((arg.param, self.eval(frame, arg.value)?));
                }
                let decl = self
                    .function(callee)
                    .ok_or(EvalError::UnknownFunction(callee))?;
                let mut positional = Vec::with_capacity(decl.params.len());
                for param in &decl.params {
                    let value = bound
                        .iter()
                        .find(|(symbol, _)| *symbol == param.symbol)
                        .map(|&(_, value)| value)
                        .ok_or(EvalError::MissingArgument(param.symbol))?;
                    positional.push(value);
                }
                if bound.len() != positional.len() {
                    return Err(EvalError::ArgumentCount {
                        expected: positional.len(),
                        found: bound.len(),
                    }
                    .into());
                }
                self.invoke(decl, this, &positional)
            }
            ExprKind::New { ctor, args } => {
                for arg in body.args(args) {
                    self.eval(frame, arg.value)?;
                }
                let decl = self
                    .program
                    .constructor(ctor)
                    .ok_or(EvalError::UnknownConstructor(ctor))?;
                Ok(Value::Object(decl.class_id))
            }
            ExprKind::Block(stmts) => {
                let mut last = Value::Unit;
                for &stmt in body.expr_list(stmts) {
                    last = self.eval(frame, stmt)?;
                }
                Ok(last)
            }
            ExprKind::Return { target, value } => {
                let value = match value.present() {
                    Some(value) => self.eval(frame, value)?,
                    None => Value::Unit,
                };
                Err(Unwind::Return {
                    label: target,
                    value,
                })
            }
            ExprKind::Try {
                body: block,
                catches,
            } => match self.eval(frame, block) {
                Err(Unwind::Throw(exception)) => {
                    for catch in body.catches(catches) {
                        if !self.catches(catch.param.ty, exception) {
                            continue;
                        }
                        tracing::trace!(
                            function = %frame.decl.callable_id.display(self.program.interner()),
                            "exception caught",
                        );
                        frame.bind(catch.param.symbol, exception);
                        let result = self.eval(frame, catch.block);
                        frame.unbind(catch.param.symbol);
                        return result;
                    }
                    Err(Unwind::Throw(exception))
                }
                other => other,
            },
            ExprKind::Throw(value) => {
                let exception = self.eval(frame, value)?;
                let throwable = self.program.builtins().throwable_class;
                match exception.class() {
                    Some(class) if self.program.is_subclass(class, throwable) => {
                        Err(Unwind::Throw(exception))
                    }
                    _ => Err(EvalError::NotThrowable(
                        exception.display(self.program.interner()).to_string(),
                    )
                    .into()),
                }
            }
            ExprKind::Elvis { lhs, rhs } => {
                let value = self.eval(frame, lhs)?;
                if value.is_null() {
                    self.eval(frame, rhs)
                } else {
                    Ok(value)
                }
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(frame, cond)? {
                Value::Bool(true) => self.eval(frame, then_branch),
                Value::Bool(false) => match else_branch.present() {
                    Some(else_branch) => self.eval(frame, else_branch),
                    None => Ok(Value::Unit),
                },
                other => Err(EvalError::NonBoolCondition(
                    other.display(self.program.interner()).to_string(),
                )
                .into()),
            },
            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = self.eval(frame, lhs)?;
                let rhs = self.eval(frame, rhs)?;
                Ok(binary(op, lhs, rhs)?)
            }
        }
    }

    /// Whether a handler typed `ty` accepts `exception`.
    fn catches(&self, ty: TypeId, exception: Value) -> bool {
        match (self.program.types().class_of(ty), exception.class()) {
            (Some(handler), Some(thrown)) => self.program.is_subclass(thrown, handler),
            _ => false,
        }
    }
}

fn binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match (op, lhs, rhs) {
        (BinaryOp::Eq, ..) => Ok(Value::Bool(lhs == rhs)),
        (BinaryOp::NotEq, ..) => Ok(Value::Bool(lhs != rhs)),
        (BinaryOp::Add, Value::Int(a), Value::Int(b)) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow("+")),
        (BinaryOp::Sub, Value::Int(a), Value::Int(b)) => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow("-")),
        (BinaryOp::Lt, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
        (BinaryOp::Le, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a <= b)),
        (BinaryOp::Gt, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a > b)),
        (BinaryOp::Ge, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a >= b)),
        _ => Err(EvalError::TypeMismatch {
            op: op.as_str(),
            lhs: lhs.type_name().to_owned(),
            rhs: rhs.type_name().to_owned(),
        }),
    }
}
