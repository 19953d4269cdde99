use super::*;
use proptest::prelude::*;

#[test]
fn test_primitives_pre_interned() {
    let pool = TypePool::new();
    assert_eq!(pool.len(), TypeId::PRIMITIVE_COUNT as usize);
    assert_eq!(pool.get(TypeId::STRING), TypeData::not_null(TypeKind::String));
    assert_eq!(pool.intern(TypeData::not_null(TypeKind::Int)), TypeId::INT);
    assert!(pool.is_nullable(TypeId::NULLABLE_NOTHING));
}

#[test]
fn test_with_nullability_returns_same_id_when_unchanged() {
    let pool = TypePool::new();
    assert_eq!(
        pool.with_nullability(TypeId::STRING, Nullability::NotNull),
        TypeId::STRING
    );
    assert_eq!(
        pool.with_nullability(TypeId::NULLABLE_NOTHING, Nullability::Nullable),
        TypeId::NULLABLE_NOTHING
    );
}

#[test]
fn test_with_nullability_round_trip() {
    let pool = TypePool::new();
    let nullable = pool.with_nullability(TypeId::STRING, Nullability::Nullable);
    assert_ne!(nullable, TypeId::STRING);
    assert!(pool.is_nullable(nullable));
    assert_eq!(
        pool.with_nullability(nullable, Nullability::NotNull),
        TypeId::STRING
    );
}

#[test]
fn test_class_types() {
    let interner = StringInterner::new();
    let pool = TypePool::new();
    let a = ClassId::from_dotted(&interner, "demo.A");
    let ty = pool.class_type(a);

    assert_eq!(pool.class_of(ty), Some(a));
    assert_eq!(pool.class_of(TypeId::INT), None);
    assert_eq!(pool.format(ty, &interner), "demo.A");

    let nullable = pool.with_nullability(ty, Nullability::Nullable);
    assert_eq!(pool.class_of(nullable), Some(a));
    assert_eq!(pool.format(nullable, &interner), "demo.A?");
}

#[test]
fn test_format_builtins() {
    let interner = StringInterner::new();
    let pool = TypePool::new();
    assert_eq!(pool.format(TypeId::INT, &interner), "Int");
    assert_eq!(pool.format(TypeId::NULLABLE_NOTHING, &interner), "Nothing?");
}

fn kind_strategy() -> impl Strategy<Value = TypeKind> {
    prop_oneof![
        Just(TypeKind::Int),
        Just(TypeKind::Bool),
        Just(TypeKind::String),
        Just(TypeKind::Unit),
        Just(TypeKind::Nothing),
        Just(TypeKind::Any),
        (0u32..4, 0u32..4).prop_map(|(p, n)| {
            TypeKind::Class(ClassId::new(
                crate::Name::from_raw(p),
                crate::Name::from_raw(n),
            ))
        }),
    ]
}

fn nullability_strategy() -> impl Strategy<Value = Nullability> {
    prop_oneof![Just(Nullability::Nullable), Just(Nullability::NotNull)]
}

proptest! {
    #[test]
    fn prop_forcing_nullability_is_idempotent(
        kind in kind_strategy(),
        start in nullability_strategy(),
        forced in nullability_strategy(),
    ) {
        let pool = TypePool::new();
        let ty = pool.intern(TypeData { kind, nullability: start });
        let once = pool.with_nullability(ty, forced);
        let twice = pool.with_nullability(once, forced);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(pool.get(once).nullability, forced);
        prop_assert_eq!(pool.get(once).kind, kind);
    }
}
