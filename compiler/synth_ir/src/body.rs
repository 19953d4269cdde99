//! Function bodies.
//!
//! A [`Body`] owns the expression storage of exactly one function, so a
//! fabricated declaration never shares nodes with the declaration it was
//! derived from.
//!
//! # Index Spaces
//!
//! - `kinds`/`types`: parallel arrays indexed by [`ExprId`]
//! - `expr_lists`: indexed by [`ExprRange`]
//! - `args`: indexed by [`ArgRange`]
//! - `catches`: indexed by [`CatchRange`]
//! - `labels`: indexed by [`LabelId`]

use std::fmt;

use crate::{
    Arg, ArgRange, Catch, CatchRange, ExprId, ExprKind, ExprRange, FunctionSymbol, LabelId,
    Name, TypeId,
};

fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("too many {what}: {value}"))
}

fn to_u16(value: usize, what: &str) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| panic!("{what} too long: {value}"))
}

/// A `return` target: a name for rendering and the function it resolves to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Label {
    pub name: Name,
    pub bound: Option<FunctionSymbol>,
}

/// Error from [`Body::bind_label`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LabelError {
    /// The label id does not belong to this body.
    Unknown(LabelId),
    /// The label is already bound to another function.
    AlreadyBound {
        label: LabelId,
        bound: FunctionSymbol,
    },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::Unknown(label) => write!(f, "unknown label {label:?}"),
            LabelError::AlreadyBound { label, bound } => {
                write!(f, "label {label:?} is already bound to {bound:?}")
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// Expression storage and root of one function body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    kinds: Vec<ExprKind>,
    types: Vec<TypeId>,
    expr_lists: Vec<ExprId>,
    args: Vec<Arg>,
    catches: Vec<Catch>,
    labels: Vec<Label>,
    root: ExprId,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its id.
    pub fn alloc(&mut self, kind: ExprKind, ty: TypeId) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(kind);
        self.types.push(ty);
        id
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> ExprKind {
        self.kinds[id.index()]
    }

    #[inline]
    pub fn ty(&self, id: ExprId) -> TypeId {
        self.types[id.index()]
    }

    /// Whether `id` refers to a node of this body.
    pub fn contains(&self, id: ExprId) -> bool {
        id.is_valid() && id.index() < self.kinds.len()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over all node ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = ExprId> + '_ {
        (0..self.kinds.len()).map(|i| ExprId::new(to_u32(i, "expressions")))
    }

    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    pub fn push_args(&mut self, args: &[Arg]) -> ArgRange {
        if args.is_empty() {
            return ArgRange::EMPTY;
        }
        let start = to_u32(self.args.len(), "arguments");
        self.args.extend_from_slice(args);
        ArgRange::new(start, to_u16(args.len(), "argument list"))
    }

    pub fn args(&self, range: ArgRange) -> &[Arg] {
        let start = range.start as usize;
        &self.args[start..start + range.len()]
    }

    pub fn push_catches(&mut self, catches: Vec<Catch>) -> CatchRange {
        if catches.is_empty() {
            return CatchRange::EMPTY;
        }
        let start = to_u32(self.catches.len(), "catch clauses");
        let len = to_u16(catches.len(), "catch list");
        self.catches.extend(catches);
        CatchRange::new(start, len)
    }

    pub fn catches(&self, range: CatchRange) -> &[Catch] {
        let start = range.start as usize;
        &self.catches[start..start + range.len()]
    }

    /// Allocate an unbound label.
    pub fn new_label(&mut self, name: Name) -> LabelId {
        let id = LabelId::new(to_u32(self.labels.len(), "labels"));
        self.labels.push(Label { name, bound: None });
        id
    }

    /// Bind `label` to the function it returns from.
    ///
    /// Rebinding to the same function is a no-op.
    pub fn bind_label(&mut self, label: LabelId, function: FunctionSymbol) -> Result<(), LabelError> {
        let slot = self
            .labels
            .get_mut(label.index())
            .ok_or(LabelError::Unknown(label))?;
        match slot.bound {
            Some(bound) if bound != function => Err(LabelError::AlreadyBound { label, bound }),
            _ => {
                slot.bound = Some(function);
                Ok(())
            }
        }
    }

    pub fn label(&self, label: LabelId) -> Option<Label> {
        self.labels.get(label.index()).copied()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn set_root(&mut self, root: ExprId) {
        self.root = root;
    }

    /// The outermost block; `ExprId::INVALID` until set.
    #[inline]
    pub fn root(&self) -> ExprId {
        self.root
    }
}

#[cfg(test)]
mod tests;
