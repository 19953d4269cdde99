//! Source-like rendering of resolved declarations.
//!
//! Used for debug output and for asserting on the shape of fabricated
//! bodies in tests.

use std::fmt::Write;

use crate::{
    Body, Constant, DeclLookup, ExprId, ExprKind, FunctionDecl, ParamFlags, ParamSymbol,
    StringInterner, TypePool, ValueParameter,
};

const INDENT: &str = "    ";

/// Render `decl` as source text.
///
/// `lookup` resolves callees; unknown symbols render as `<fn#N>` so a
/// dangling reference is visible rather than hidden.
pub fn render_function(
    decl: &FunctionDecl,
    lookup: &dyn DeclLookup,
    types: &TypePool,
    interner: &StringInterner,
) -> String {
    let printer = Printer {
        decl,
        lookup,
        types,
        interner,
    };
    let mut out = String::new();
    printer.header(&mut out);
    if let Some(body) = &decl.body {
        out.push(' ');
        printer.expr(&mut out, body, body.root(), 0);
    }
    out
}

struct Printer<'a> {
    decl: &'a FunctionDecl,
    lookup: &'a dyn DeclLookup,
    types: &'a TypePool,
    interner: &'a StringInterner,
}

impl Printer<'_> {
    fn header(&self, out: &mut String) {
        let status = self.decl.status;
        out.push_str(status.visibility.keyword());
        out.push_str(" fun ");
        out.push_str(&self.decl.callable_id.display(self.interner));
        out.push('(');
        for (i, param) in self.decl.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.param(out, param);
        }
        out.push_str("): ");
        out.push_str(&self.types.format(self.decl.return_type, self.interner));
    }

    fn param(&self, out: &mut String, param: &ValueParameter) {
        if param.flags.contains(ParamFlags::VARARG) {
            out.push_str("vararg ");
        }
        if param.flags.contains(ParamFlags::CROSSINLINE) {
            out.push_str("crossinline ");
        }
        if param.flags.contains(ParamFlags::NOINLINE) {
            out.push_str("noinline ");
        }
        let _ = write!(
            out,
            "{}: {}",
            self.interner.lookup(param.name),
            self.types.format(param.ty, self.interner)
        );
    }

    fn param_name(&self, body: &Body, symbol: ParamSymbol) -> String {
        if let Some(param) = self.decl.param(symbol) {
            return self.interner.lookup(param.name).to_owned();
        }
        body.ids()
            .filter_map(|id| match body.kind(id) {
                ExprKind::Try { catches, .. } => Some(catches),
                _ => None,
            })
            .flat_map(|range| body.catches(range))
            .find(|catch| catch.param.symbol == symbol)
            .map_or_else(
                || format!("<param#{}>", symbol.raw()),
                |catch| self.interner.lookup(catch.param.name).to_owned(),
            )
    }

    fn newline(out: &mut String, depth: usize) {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(INDENT);
        }
    }

    fn args(&self, out: &mut String, body: &Body, args: crate::ArgRange, depth: usize) {
        out.push('(');
        for (i, arg) in body.args(args).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.expr(out, body, arg.value, depth);
        }
        out.push(')');
    }

    fn expr(&self, out: &mut String, body: &Body, id: ExprId, depth: usize) {
        if !body.contains(id) {
            out.push_str("<invalid>");
            return;
        }
        match body.kind(id) {
            ExprKind::Const(constant) => match constant {
                Constant::Null => out.push_str("null"),
                Constant::Int(value) => {
                    let _ = write!(out, "{value}");
                }
                Constant::Bool(value) => {
                    let _ = write!(out, "{value}");
                }
                Constant::Str(name) => {
                    let _ = write!(out, "{:?}", self.interner.lookup(name));
                }
            },
            ExprKind::ParamRef(symbol) => out.push_str(&self.param_name(body, symbol)),
            ExprKind::This(class) => {
                let _ = write!(out, "this@{}", self.interner.lookup(class.name));
            }
            ExprKind::Call {
                callee,
                receiver,
                args,
            } => {
                if let Some(receiver) = receiver.present() {
                    self.expr(out, body, receiver, depth);
                    out.push('.');
                }
                match self.lookup.function(callee) {
                    Some(decl) => out.push_str(self.interner.lookup(decl.name())),
                    None => {
                        let _ = write!(out, "<fn#{}>", callee.raw());
                    }
                }
                self.args(out, body, args, depth);
            }
            ExprKind::New { ctor, args } => {
                match self.lookup.constructor(ctor) {
                    Some(decl) => out.push_str(&decl.class_id.display(self.interner)),
                    None => {
                        let _ = write!(out, "<ctor#{}>", ctor.raw());
                    }
                }
                self.args(out, body, args, depth);
            }
            ExprKind::Block(stmts) => {
                out.push('{');
                for &stmt in body.expr_list(stmts) {
                    Self::newline(out, depth + 1);
                    self.expr(out, body, stmt, depth + 1);
                }
                Self::newline(out, depth);
                out.push('}');
            }
            ExprKind::Return { target, value } => {
                out.push_str("return");
                if let Some(label) = body.label(target) {
                    let _ = write!(out, "@{}", self.interner.lookup(label.name));
                }
                if let Some(value) = value.present() {
                    out.push(' ');
                    self.expr(out, body, value, depth);
                }
            }
            ExprKind::Try { body: block, catches } => {
                out.push_str("try ");
                self.expr(out, body, block, depth);
                for catch in body.catches(catches) {
                    out.push_str(" catch (");
                    self.param(out, &catch.param);
                    out.push_str(") ");
                    self.expr(out, body, catch.block, depth);
                }
            }
            ExprKind::Throw(exception) => {
                out.push_str("throw ");
                self.expr(out, body, exception, depth);
            }
            ExprKind::Elvis { lhs, rhs } => {
                self.expr(out, body, lhs, depth);
                out.push_str(" ?: ");
                self.expr(out, body, rhs, depth);
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("if (");
                self.expr(out, body, cond, depth);
                out.push_str(") ");
                self.expr(out, body, then_branch, depth);
                if let Some(else_branch) = else_branch.present() {
                    out.push_str(" else ");
                    self.expr(out, body, else_branch, depth);
                }
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.expr(out, body, lhs, depth);
                let _ = write!(out, " {} ", op.as_str());
                self.expr(out, body, rhs, depth);
            }
        }
    }
}
