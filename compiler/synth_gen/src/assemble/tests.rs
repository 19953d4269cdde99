#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use proptest::prelude::{prop, prop_assert_eq, prop_assert_ne, proptest};
use synth_ir::{
    render_function, DeclStatus, ExprKind, GeneratedKey, Modifiers, Origin, ParamFlags, Program,
    TypeId, Visibility,
};

use super::*;
use crate::testing::{
    add_function, member, registered_host, set_param_flags, top_level, GENERATE_OR_NULL,
    GENERATE_OR_THROW, THROWS,
};
use crate::{Malformed, SynthConfig};

fn generator(strategy: Strategy, program: &Program) -> FunctionGenerator {
    FunctionGenerator::new(
        strategy,
        strategy.predicate(&SynthConfig::default(), program.interner()),
        program.class_id("java.lang.IllegalStateException"),
    )
}

fn render(program: &Program, decl: &FunctionDecl) -> String {
    render_function(decl, program, program.types(), program.interner())
}

#[test]
fn test_member_or_null() {
    let mut program = Program::with_std();
    let f = member(&mut program, "demo.A", "f");
    let original = add_function(&mut program, f, &[], TypeId::STRING, &[THROWS]);
    let host = registered_host(&program);
    let class_a = program.class_id("demo.A");
    let identity = CallableId::member(class_a, program.interner().intern("fOrNull"));

    let generated = generator(Strategy::NullOnThrow, &program)
        .generate(&host, identity, Some(class_a))
        .unwrap()
        .unwrap();

    assert_eq!(generated.original, original);
    assert_eq!(generated.decl.origin, Origin::Plugin(GeneratedKey::NullOnThrow));
    assert_eq!(generated.decl.resolve_phase, ResolvePhase::BodyResolve);
    assert!(generated.decl.annotations.is_empty());
    assert_eq!(
        render(&program, &generated.decl),
        "\
public fun demo.A.fOrNull(): String? {
    try {
        return@fOrNull this@A.f()
    } catch (e: kotlin.Throwable) {
        return@fOrNull null
    }
}"
    );
}

#[test]
fn test_top_level_or_throw() {
    let mut program = Program::with_std();
    let g = top_level(&program, "demo.g");
    let nullable_int = program
        .types()
        .with_nullability(TypeId::INT, synth_ir::Nullability::Nullable);
    add_function(&mut program, g, &[("x", TypeId::INT)], nullable_int, &[GENERATE_OR_THROW]);
    let host = registered_host(&program);

    let generated = generator(Strategy::ThrowOnNull, &program)
        .generate(&host, top_level(&program, "demo.gOrThrow"), None)
        .unwrap()
        .unwrap();

    assert_eq!(generated.decl.return_type, TypeId::INT);
    assert_eq!(
        render(&program, &generated.decl),
        "\
public fun demo.gOrThrow(x: Int): Int {
    return@gOrThrow g(x) ?: throw java.lang.IllegalStateException()
}"
    );

    let body = generated.decl.body.as_ref().unwrap();
    let elvis = body
        .ids()
        .find(|&id| matches!(body.kind(id), ExprKind::Elvis { .. }))
        .unwrap();
    assert_eq!(body.ty(elvis), TypeId::INT);
}

#[test]
fn test_params_are_fresh_copies() {
    let mut program = Program::with_std();
    let h = top_level(&program, "demo.h");
    let original = add_function(
        &mut program,
        h,
        &[("a", TypeId::INT), ("b", TypeId::STRING), ("c", TypeId::BOOL)],
        TypeId::UNIT,
        &[GENERATE_OR_NULL],
    );
    set_param_flags(&mut program, original, 1, ParamFlags::VARARG);
    let host = registered_host(&program);

    let generated = generator(Strategy::NullOnThrow, &program)
        .generate(&host, top_level(&program, "demo.hOrNull"), None)
        .unwrap()
        .unwrap();

    let theirs = &program.function(original).unwrap().params;
    let ours = &generated.decl.params;
    assert_eq!(ours.len(), 3);
    for (own, their) in ours.iter().zip(theirs) {
        assert_eq!(own.name, their.name);
        assert_eq!(own.ty, their.ty);
        assert_eq!(own.flags, their.flags);
        assert_ne!(own.symbol, their.symbol);
        assert_eq!(own.origin, Origin::Plugin(GeneratedKey::NullOnThrow));
    }

    // Arguments read our params and bind to theirs, in order.
    let body = generated.decl.body.as_ref().unwrap();
    let (args, callee) = body
        .ids()
        .find_map(|id| match body.kind(id) {
            ExprKind::Call { args, callee, .. } => Some((args, callee)),
            _ => None,
        })
        .unwrap();
    assert_eq!(callee, original);
    let args = body.args(args);
    for ((arg, own), their) in args.iter().zip(ours).zip(theirs) {
        assert_eq!(body.kind(arg.value), ExprKind::ParamRef(own.symbol));
        assert_eq!(arg.param, their.symbol);
    }
}

#[test]
fn test_status_is_copied() {
    let mut program = Program::with_std();
    let g = top_level(&program, "demo.g");
    let original = add_function(&mut program, g, &[], TypeId::INT, &[THROWS]);
    let mut decl = program.function(original).cloned().unwrap();
    decl.status = DeclStatus {
        visibility: Visibility::Internal,
        modifiers: Modifiers::INLINE,
    };
    program.add_function(decl);
    let host = registered_host(&program);

    let generated = generator(Strategy::NullOnThrow, &program)
        .generate(&host, top_level(&program, "demo.gOrNull"), None)
        .unwrap()
        .unwrap();
    assert_eq!(generated.decl.status.visibility, Visibility::Internal);
    assert_eq!(generated.decl.status.modifiers, Modifiers::INLINE);
}

#[test]
fn test_label_bound_to_companion() {
    let mut program = Program::with_std();
    let g = top_level(&program, "demo.g");
    add_function(&mut program, g, &[], TypeId::INT, &[THROWS]);
    let host = registered_host(&program);

    let generated = generator(Strategy::NullOnThrow, &program)
        .generate(&host, top_level(&program, "demo.gOrNull"), None)
        .unwrap()
        .unwrap();
    let labels = generated.decl.body.as_ref().unwrap().labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].bound, Some(generated.symbol));
}

#[test]
fn test_unknown_identity_is_none() {
    let mut program = Program::with_std();
    let g = top_level(&program, "demo.g");
    add_function(&mut program, g, &[], TypeId::INT, &[THROWS]);
    let host = registered_host(&program);
    let generator = generator(Strategy::NullOnThrow, &program);

    assert_eq!(generator.generate(&host, top_level(&program, "demo.g"), None), Ok(None));
    assert_eq!(
        generator.generate(&host, top_level(&program, "demo.gOrThrow"), None),
        Ok(None)
    );
}

#[test]
fn test_wrong_owner_is_none() {
    let mut program = Program::with_std();
    let f = member(&mut program, "demo.A", "f");
    add_function(&mut program, f, &[], TypeId::STRING, &[THROWS]);
    let class_a = program.class_id("demo.A");
    let class_b = program.class_id("demo.B");
    let host = registered_host(&program);
    let identity = CallableId::member(class_a, program.interner().intern("fOrNull"));
    let generator = generator(Strategy::NullOnThrow, &program);

    assert_eq!(generator.generate(&host, identity, Some(class_b)), Ok(None));
    assert_eq!(generator.generate(&host, identity, None), Ok(None));
}

#[test]
fn test_missing_error_constructor() {
    let mut program = Program::with_std();
    let g = top_level(&program, "demo.g");
    add_function(&mut program, g, &[], TypeId::INT, &[GENERATE_OR_THROW]);
    let boom = program.class_id("demo.Boom");
    program.declare_class(boom, None);
    let host = registered_host(&program);
    let generator = FunctionGenerator::new(
        Strategy::ThrowOnNull,
        Strategy::ThrowOnNull.predicate(&SynthConfig::default(), program.interner()),
        boom,
    );

    let err = generator
        .generate(&host, top_level(&program, "demo.gOrThrow"), None)
        .unwrap_err();
    assert_eq!(
        err,
        SynthError::MissingNoArgConstructor {
            class: "demo.Boom".to_owned(),
            function: "demo.g".to_owned(),
        }
    );
}

#[test]
fn test_generated_decls_pass_validation() {
    let mut program = Program::with_std();
    let g = top_level(&program, "demo.g");
    let original = add_function(&mut program, g, &[("x", TypeId::INT)], TypeId::INT, &[THROWS]);
    let host = registered_host(&program);

    let generated = generator(Strategy::NullOnThrow, &program)
        .generate(&host, top_level(&program, "demo.gOrNull"), None)
        .unwrap()
        .unwrap();
    let original = program.function(original).unwrap();
    assert_eq!(validate(&generated.decl, original, &host, program.types()), Ok(()));

    let mut broken = generated.decl.clone();
    broken.params.pop();
    assert_eq!(
        validate(&broken, original, &host, program.types()),
        Err(Malformed::ParameterCount {
            expected: 1,
            found: 0
        })
    );
}

proptest! {
    #[test]
    fn prop_parameters_mirror_original(
        shape in prop::collection::vec((0usize..3, 0u8..16), 0..6),
        strategy in prop::sample::select(Strategy::ALL.to_vec()),
    ) {
        let types = [TypeId::INT, TypeId::STRING, TypeId::BOOL];
        let names: Vec<String> = (0..shape.len()).map(|i| format!("p{i}")).collect();
        let params: Vec<(&str, TypeId)> = names
            .iter()
            .zip(&shape)
            .map(|(name, &(ty, _))| (name.as_str(), types[ty]))
            .collect();
        let marker = match strategy {
            Strategy::NullOnThrow => THROWS,
            Strategy::ThrowOnNull => GENERATE_OR_THROW,
        };

        let mut program = Program::with_std();
        let g = top_level(&program, "demo.g");
        let original = add_function(&mut program, g, &params, TypeId::INT, &[marker]);
        for (index, &(_, bits)) in shape.iter().enumerate() {
            set_param_flags(&mut program, original, index, ParamFlags::from_bits_truncate(bits));
        }
        let host = registered_host(&program);
        let identity = top_level(&program, &format!("demo.g{}", strategy.suffix()));

        let generated = generator(strategy, &program)
            .generate(&host, identity, None)
            .unwrap()
            .unwrap();

        let theirs = &program.function(original).unwrap().params;
        prop_assert_eq!(generated.decl.params.len(), theirs.len());
        for (own, their) in generated.decl.params.iter().zip(theirs) {
            prop_assert_eq!(own.name, their.name);
            prop_assert_eq!(own.ty, their.ty);
            prop_assert_eq!(own.flags, their.flags);
            prop_assert_ne!(own.symbol, their.symbol);
            prop_assert_eq!(own.origin, strategy.origin());
        }
    }
}
