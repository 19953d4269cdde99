use pretty_assertions::assert_eq;

use super::*;
use crate::{Constant, ParamSymbol};

#[test]
fn test_alloc_and_read_back() {
    let mut body = Body::new();
    let null = body.alloc(ExprKind::Const(Constant::Null), TypeId::NULLABLE_NOTHING);
    let int = body.alloc(ExprKind::Const(Constant::Int(5)), TypeId::INT);

    assert_eq!(body.len(), 2);
    assert_eq!(body.kind(int), ExprKind::Const(Constant::Int(5)));
    assert_eq!(body.ty(null), TypeId::NULLABLE_NOTHING);
    assert!(body.contains(null));
    assert!(!body.contains(ExprId::INVALID));
    assert!(!body.contains(ExprId::new(2)));
}

#[test]
fn test_lists() {
    let mut body = Body::new();
    let a = body.alloc(ExprKind::Const(Constant::Int(1)), TypeId::INT);
    let b = body.alloc(ExprKind::Const(Constant::Int(2)), TypeId::INT);

    let stmts = body.push_expr_list(&[a, b]);
    assert_eq!(body.expr_list(stmts), &[a, b]);
    assert_eq!(body.expr_list(ExprRange::EMPTY), &[] as &[ExprId]);

    let args = body.push_args(&[Arg {
        value: b,
        param: ParamSymbol::from_raw(7),
    }]);
    assert_eq!(body.args(args).len(), 1);
    assert_eq!(body.args(args)[0].param, ParamSymbol::from_raw(7));
}

#[test]
fn test_root_defaults_to_invalid() {
    let body = Body::new();
    assert_eq!(body.root(), ExprId::INVALID);
}

#[test]
fn test_label_bind_once() {
    let mut body = Body::new();
    let label = body.new_label(Name::from_raw(3));
    assert_eq!(body.label(label).and_then(|l| l.bound), None);

    let f = FunctionSymbol::from_raw(1);
    let g = FunctionSymbol::from_raw(2);
    assert_eq!(body.bind_label(label, f), Ok(()));
    assert_eq!(body.bind_label(label, f), Ok(()));
    assert_eq!(
        body.bind_label(label, g),
        Err(LabelError::AlreadyBound { label, bound: f })
    );
    assert_eq!(body.label(label).and_then(|l| l.bound), Some(f));
}

#[test]
fn test_bind_unknown_label() {
    let mut body = Body::new();
    let stray = LabelId::new(4);
    assert_eq!(
        body.bind_label(stray, FunctionSymbol::from_raw(0)),
        Err(LabelError::Unknown(stray))
    );
}
