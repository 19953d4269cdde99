//! Structural check of a synthesized declaration.
//!
//! Run on every declaration before it is handed to the host. Catches the
//! mistakes that would otherwise surface much later as a resolution or
//! lowering failure in the host: dangling node ids, types outside the pool,
//! unbound or foreign labels, parameter reads out of scope, and argument
//! lists that do not line up with the callee.

use synth_ir::{
    Body, DeclLookup, ExprId, ExprKind, FunctionDecl, LabelId, ParamSymbol, TypePool,
};

use crate::Malformed;

/// Check `decl`, the companion of `original`.
pub fn validate<L: DeclLookup + ?Sized>(
    decl: &FunctionDecl,
    original: &FunctionDecl,
    lookup: &L,
    types: &TypePool,
) -> Result<(), Malformed> {
    check_params(decl, original)?;

    let body = decl.body.as_ref().ok_or(Malformed::MissingBody)?;
    if !body.contains(body.root()) {
        return Err(Malformed::MissingRoot(body.root()));
    }
    for (index, label) in body.labels().iter().enumerate() {
        let id = LabelId::new(u32::try_from(index).unwrap_or(u32::MAX));
        match label.bound {
            None => return Err(Malformed::UnboundLabel(id)),
            Some(bound) if bound != decl.symbol => {
                return Err(Malformed::ForeignLabel { label: id, bound });
            }
            Some(_) => {}
        }
    }

    let mut walker = Walker {
        body,
        lookup,
        types,
        scope: decl.params.iter().map(|p| p.symbol).collect(),
    };
    walker.expr(ExprId::INVALID, body.root())
}

fn check_params(decl: &FunctionDecl, original: &FunctionDecl) -> Result<(), Malformed> {
    if decl.params.len() != original.params.len() {
        return Err(Malformed::ParameterCount {
            expected: original.params.len(),
            found: decl.params.len(),
        });
    }
    for (index, (own, theirs)) in decl.params.iter().zip(&original.params).enumerate() {
        let mirrors = own.name == theirs.name
            && own.ty == theirs.ty
            && own.flags == theirs.flags
            && own.symbol != theirs.symbol
            && own.origin == decl.origin;
        if !mirrors {
            return Err(Malformed::ParameterMismatch { index });
        }
    }
    Ok(())
}

struct Walker<'a, L: ?Sized> {
    body: &'a Body,
    lookup: &'a L,
    types: &'a TypePool,
    /// Parameters readable at the current node.
    scope: Vec<ParamSymbol>,
}

impl<L: DeclLookup + ?Sized> Walker<'_, L> {
    fn child(&mut self, parent: ExprId, child: ExprId) -> Result<(), Malformed> {
        if child.is_valid() {
            self.expr(parent, child)
        } else {
            Ok(())
        }
    }

    fn expr(&mut self, parent: ExprId, id: ExprId) -> Result<(), Malformed> {
        let body = self.body;
        let lookup = self.lookup;
        if !body.contains(id) {
            return Err(Malformed::DanglingChild { parent, child: id });
        }
        let ty = body.ty(id);
        if !self.types.contains(ty) {
            return Err(Malformed::UnknownType { expr: id, ty });
        }

        match body.kind(id) {
            ExprKind::Const(_) | ExprKind::This(_) => Ok(()),
            ExprKind::ParamRef(param) => {
                if self.scope.contains(&param) {
                    Ok(())
                } else {
                    Err(Malformed::ParamOutOfScope { expr: id, param })
                }
            }
            ExprKind::Call {
                callee,
                receiver,
                args,
            } => {
                let decl = lookup
                    .function(callee)
                    .ok_or(Malformed::UnknownCallee { expr: id, callee })?;
                if decl.owner().is_some() && !receiver.is_valid() {
                    return Err(Malformed::MissingReceiver { expr: id });
                }
                let args = body.args(args);
                if args.len() != decl.params.len() {
                    return Err(Malformed::ArgumentCount {
                        expr: id,
                        expected: decl.params.len(),
                        found: args.len(),
                    });
                }
                for (index, (arg, param)) in args.iter().zip(&decl.params).enumerate() {
                    if arg.param != param.symbol {
                        return Err(Malformed::ArgumentBinding {
                            expr: id,
                            index,
                            expected: param.symbol,
                            found: arg.param,
                        });
                    }
                }
                self.child(id, receiver)?;
                for arg in args {
                    self.expr(id, arg.value)?;
                }
                Ok(())
            }
            ExprKind::New { ctor, args } => {
                let decl = lookup
                    .constructor(ctor)
                    .ok_or(Malformed::UnknownConstructor { expr: id, ctor })?;
                let args = body.args(args);
                if args.len() != decl.params.len() {
                    return Err(Malformed::ArgumentCount {
                        expr: id,
                        expected: decl.params.len(),
                        found: args.len(),
                    });
                }
                for arg in args {
                    self.expr(id, arg.value)?;
                }
                Ok(())
            }
            ExprKind::Block(stmts) => {
                for &stmt in body.expr_list(stmts) {
                    self.expr(id, stmt)?;
                }
                Ok(())
            }
            ExprKind::Return { target, value } => {
                if body.label(target).is_none() {
                    return Err(Malformed::UnknownLabel {
                        expr: id,
                        label: target,
                    });
                }
                self.child(id, value)
            }
            ExprKind::Try {
                body: block,
                catches,
            } => {
                self.expr(id, block)?;
                for catch in body.catches(catches) {
                    self.scope.push(catch.param.symbol);
                    let result = self.expr(id, catch.block);
                    self.scope.pop();
                    result?;
                }
                Ok(())
            }
            ExprKind::Throw(value) => self.expr(id, value),
            ExprKind::Elvis { lhs, rhs } | ExprKind::Binary { lhs, rhs, .. } => {
                self.expr(id, lhs)?;
                self.expr(id, rhs)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.expr(id, cond)?;
                self.expr(id, then_branch)?;
                self.child(id, else_branch)
            }
        }
    }
}
