//! Declaration predicates: which annotated declarations a strategy wants.

use synth_ir::{FqName, StringInterner};

/// A query over declaration annotations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationPredicate {
    /// Carries this marker.
    Has(FqName),
    /// Matches if any alternative does.
    AnyOf(Vec<DeclarationPredicate>),
}

impl DeclarationPredicate {
    /// Match any of `markers`, given as dotted paths.
    ///
    /// A single marker yields a plain [`Has`](Self::Has).
    pub fn any_marker<S: AsRef<str>>(interner: &StringInterner, markers: &[S]) -> Self {
        let mut alternatives: Vec<Self> = markers
            .iter()
            .map(|marker| Self::Has(FqName::new(interner, marker.as_ref())))
            .collect();
        if alternatives.len() == 1 {
            alternatives.swap_remove(0)
        } else {
            Self::AnyOf(alternatives)
        }
    }

    pub fn matches(&self, annotations: &[FqName]) -> bool {
        match self {
            Self::Has(marker) => annotations.contains(marker),
            Self::AnyOf(alternatives) => alternatives.iter().any(|p| p.matches(annotations)),
        }
    }

    /// Every marker the predicate mentions.
    pub fn markers(&self) -> Vec<FqName> {
        let mut out = Vec::new();
        self.collect_markers(&mut out);
        out
    }

    fn collect_markers(&self, out: &mut Vec<FqName>) {
        match self {
            Self::Has(marker) => out.push(*marker),
            Self::AnyOf(alternatives) => {
                for alternative in alternatives {
                    alternative.collect_markers(out);
                }
            }
        }
    }
}
