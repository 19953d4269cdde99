//! Return-type transformation.

use synth_ir::{TypeId, TypePool};

use crate::Strategy;

/// The companion's return type: the original's type with nullability
/// forced as `strategy` requires. Everything but nullability is kept.
pub fn make_return_type(strategy: Strategy, original: TypeId, types: &TypePool) -> TypeId {
    types.with_nullability(original, strategy.return_nullability())
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_ir::{ClassId, StringInterner};

    #[test]
    fn test_primitive_forcing() {
        let types = TypePool::new();
        let nullable_string = make_return_type(Strategy::NullOnThrow, TypeId::STRING, &types);
        assert!(types.is_nullable(nullable_string));
        assert_eq!(
            make_return_type(Strategy::ThrowOnNull, nullable_string, &types),
            TypeId::STRING
        );
        assert_eq!(
            make_return_type(Strategy::ThrowOnNull, TypeId::INT, &types),
            TypeId::INT
        );
    }

    #[test]
    fn test_class_type_keeps_class() {
        let interner = StringInterner::new();
        let types = TypePool::new();
        let class = ClassId::from_dotted(&interner, "demo.A");
        let a = types.class_type(class);

        let nullable = make_return_type(Strategy::NullOnThrow, a, &types);
        assert_eq!(types.class_of(nullable), Some(class));
        assert_eq!(types.format(nullable, &interner), "demo.A?");
        assert_eq!(make_return_type(Strategy::NullOnThrow, nullable, &types), nullable);
    }
}
