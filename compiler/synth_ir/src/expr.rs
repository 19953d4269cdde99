//! Resolved expression nodes.
//!
//! Expressions are flat: children are referenced by [`ExprId`] into the
//! owning [`Body`](crate::Body), and lists (block statements, call
//! arguments, catch clauses) by compact ranges. Every node carries its
//! resolved [`TypeId`](crate::TypeId); nothing here needs further name lookup.

use std::fmt;

use crate::{ClassId, ConstructorSymbol, FunctionSymbol, Name, ParamSymbol, ValueParameter};

/// Index into a body's expression storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Sentinel for an absent optional child (no receiver, no else branch).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// `None` for the sentinel.
    #[inline]
    pub const fn present(self) -> Option<ExprId> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

macro_rules! list_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }
    };
}

list_range!(
    /// Range of expression ids (block statements).
    ExprRange
);
list_range!(
    /// Range of resolved call arguments.
    ArgRange
);
list_range!(
    /// Range of catch clauses.
    CatchRange
);

/// Label of a `return` target.
///
/// Labels are allocated in a body before the nodes that reference them and
/// bound to the enclosing function once that function exists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct LabelId(u32);

impl LabelId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        LabelId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Literal constants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constant {
    Null,
    Int(i64),
    Bool(bool),
    Str(Name),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    NotEq,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
        }
    }
}

/// A resolved call argument: the value and the callee parameter it binds to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Arg {
    pub value: ExprId,
    pub param: ParamSymbol,
}

/// A catch clause: the bound exception parameter and the handler block.
#[derive(Clone, Debug, PartialEq)]
pub struct Catch {
    pub param: ValueParameter,
    pub block: ExprId,
}

/// Expression kinds.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    Const(Constant),
    /// Read of a value parameter.
    ParamRef(ParamSymbol),
    /// The implicit dispatch receiver of a member function.
    This(ClassId),
    /// Call of a named function. `receiver` is `ExprId::INVALID` for
    /// top-level callees.
    Call {
        callee: FunctionSymbol,
        receiver: ExprId,
        args: ArgRange,
    },
    /// Constructor call.
    New {
        ctor: ConstructorSymbol,
        args: ArgRange,
    },
    Block(ExprRange),
    Return {
        target: LabelId,
        value: ExprId,
    },
    Try {
        body: ExprId,
        catches: CatchRange,
    },
    Throw(ExprId),
    /// `lhs ?: rhs`
    Elvis {
        lhs: ExprId,
        rhs: ExprId,
    },
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
}
