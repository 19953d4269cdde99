//! Body synthesis.
//!
//! Both strategies forward to the original with the companion's own
//! parameters, in order, through the implicit `this` for members:
//!
//! ```text
//! OrNull:   { try { return@fOrNull this@A.f(a, b) } catch (e: Throwable) { return@fOrNull null } }
//! OrThrow:  { return@fOrThrow this@A.f(a, b) ?: throw IllegalStateException() }
//! ```
//!
//! The return label is created with the body and stays unbound until the
//! assembler has minted the companion's symbol.

use synth_ir::{
    Arg, Body, Catch, ClassId, Constant, ExprId, ExprKind, FunctionDecl, LabelId, Name,
    Nullability, ParamFlags, ValueParameter,
};

use crate::{DeclarationHost, Strategy, SynthError};

/// A finished body whose return target still needs binding.
#[derive(Debug)]
pub struct SynthesizedBody {
    pub body: Body,
    pub target: LabelId,
}

pub(crate) struct BodySynthesizer<'a, H> {
    host: &'a H,
    strategy: Strategy,
    original: &'a FunctionDecl,
    /// The companion's parameters, positionally matching the original's.
    params: &'a [ValueParameter],
    body: Body,
    target: LabelId,
}

impl<'a, H: DeclarationHost> BodySynthesizer<'a, H> {
    pub(crate) fn new(
        host: &'a H,
        strategy: Strategy,
        original: &'a FunctionDecl,
        params: &'a [ValueParameter],
        label: Name,
    ) -> Self {
        debug_assert_eq!(original.params.len(), params.len());
        let mut body = Body::new();
        let target = body.new_label(label);
        Self {
            host,
            strategy,
            original,
            params,
            body,
            target,
        }
    }

    pub(crate) fn build(self, error_class: ClassId) -> Result<SynthesizedBody, SynthError> {
        match self.strategy {
            Strategy::NullOnThrow => Ok(self.null_on_throw()),
            Strategy::ThrowOnNull => self.throw_on_null(error_class),
        }
    }

    fn null_on_throw(mut self) -> SynthesizedBody {
        let nothing = self.host.builtins().nothing;

        let call = self.forwarding_call();
        let ret = self.ret(call);
        let try_block = self.block(&[ret]);

        let null = self
            .body
            .alloc(ExprKind::Const(Constant::Null), self.host.builtins().null);
        let ret_null = self.ret(null);
        let catch_block = self.block(&[ret_null]);
        let param = self.catch_param();
        let catches = self.body.push_catches(vec![Catch {
            param,
            block: catch_block,
        }]);

        let try_expr = self.body.alloc(
            ExprKind::Try {
                body: try_block,
                catches,
            },
            nothing,
        );
        let root = self.block(&[try_expr]);
        self.finish(root)
    }

    fn throw_on_null(mut self, error_class: ClassId) -> Result<SynthesizedBody, SynthError> {
        let host = self.host;
        let interner = host.interner();
        let types = host.types();
        let ctor = host.no_arg_constructor(error_class).ok_or_else(|| {
            SynthError::MissingNoArgConstructor {
                class: error_class.display(interner),
                function: self.original.callable_id.display(interner),
            }
        })?;
        let nothing = host.builtins().nothing;

        let call = self.forwarding_call();
        let error = self.body.alloc(
            ExprKind::New {
                ctor,
                args: synth_ir::ArgRange::EMPTY,
            },
            types.class_type(error_class),
        );
        let throw = self.body.alloc(ExprKind::Throw(error), nothing);
        let non_null = types.with_nullability(self.original.return_type, Nullability::NotNull);
        let elvis = self.body.alloc(
            ExprKind::Elvis {
                lhs: call,
                rhs: throw,
            },
            non_null,
        );
        let ret = self.ret(elvis);
        let root = self.block(&[ret]);
        Ok(self.finish(root))
    }

    /// `this@Owner.original(p0, p1, ..)` over the companion's parameters.
    fn forwarding_call(&mut self) -> ExprId {
        let receiver = match self.original.owner() {
            Some(owner) => {
                let ty = self.host.types().class_type(owner);
                self.body.alloc(ExprKind::This(owner), ty)
            }
            None => ExprId::INVALID,
        };

        let mut args = Vec::with_capacity(self.params.len());
        for (declared, own) in self.original.params.iter().zip(self.params) {
            let value = self.body.alloc(ExprKind::ParamRef(own.symbol), own.ty);
            args.push(Arg {
                value,
                param: declared.symbol,
            });
        }
        let args = self.body.push_args(&args);

        self.body.alloc(
            ExprKind::Call {
                callee: self.original.symbol,
                receiver,
                args,
            },
            self.original.return_type,
        )
    }

    fn catch_param(&self) -> ValueParameter {
        let builtins = self.host.builtins();
        ValueParameter {
            symbol: self.host.symbols().fresh_param(),
            name: self.host.interner().intern("e"),
            ty: builtins.throwable,
            flags: ParamFlags::empty(),
            origin: self.strategy.origin(),
        }
    }

    fn ret(&mut self, value: ExprId) -> ExprId {
        let nothing = self.host.builtins().nothing;
        self.body.alloc(
            ExprKind::Return {
                target: self.target,
                value,
            },
            nothing,
        )
    }

    fn block(&mut self, stmts: &[ExprId]) -> ExprId {
        let nothing = self.host.builtins().nothing;
        let range = self.body.push_expr_list(stmts);
        self.body.alloc(ExprKind::Block(range), nothing)
    }

    fn finish(mut self, root: ExprId) -> SynthesizedBody {
        self.body.set_root(root);
        SynthesizedBody {
            body: self.body,
            target: self.target,
        }
    }
}
