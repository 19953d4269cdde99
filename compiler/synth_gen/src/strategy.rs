//! The two companion strategies.
//!
//! | Strategy      | Suffix    | Return type      | Body                                  |
//! |---------------|-----------|------------------|---------------------------------------|
//! | `NullOnThrow` | `OrNull`  | forced nullable  | `try { return f(..) } catch { null }` |
//! | `ThrowOnNull` | `OrThrow` | forced non-null  | `return f(..) ?: throw E()`           |

use synth_ir::{GeneratedKey, Nullability, Origin, StringInterner};

use crate::{DeclarationPredicate, SynthConfig};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Strategy {
    /// Exceptions become `null`.
    NullOnThrow,
    /// `null` becomes an exception.
    ThrowOnNull,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::NullOnThrow, Strategy::ThrowOnNull];

    /// Appended to the original name. The two suffixes are not suffixes of
    /// each other, so companions of different strategies never share a name
    /// unless their originals already differ by exactly that text.
    pub const fn suffix(self) -> &'static str {
        match self {
            Strategy::NullOnThrow => "OrNull",
            Strategy::ThrowOnNull => "OrThrow",
        }
    }

    pub const fn key(self) -> GeneratedKey {
        match self {
            Strategy::NullOnThrow => GeneratedKey::NullOnThrow,
            Strategy::ThrowOnNull => GeneratedKey::ThrowOnNull,
        }
    }

    pub const fn origin(self) -> Origin {
        Origin::Plugin(self.key())
    }

    /// Nullability forced onto the original's return type.
    pub const fn return_nullability(self) -> Nullability {
        match self {
            Strategy::NullOnThrow => Nullability::Nullable,
            Strategy::ThrowOnNull => Nullability::NotNull,
        }
    }

    /// The predicate selecting this strategy's originals.
    pub fn predicate(self, config: &SynthConfig, interner: &StringInterner) -> DeclarationPredicate {
        DeclarationPredicate::any_marker(interner, config.markers(self))
    }
}
