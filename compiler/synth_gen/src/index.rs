//! Per-strategy index of marked originals.
//!
//! Built lazily on first query and cached for the rest of the session: the
//! host is asked once for the symbols matching the strategy's predicate, and
//! every derived identity is mapped back to its original.
//!
//! Two distinct originals deriving the same identity (overloads of one
//! name) would make the companion ambiguous. Such identities are left out
//! of the index entirely and reported as [`IndexCollision`]s.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use synth_ir::{CallableId, ClassId, FunctionSymbol, Name};

use crate::debug::{is_debug_enabled, DebugFlags};
use crate::{derive_identity, DeclarationHost, DeclarationPredicate, Strategy};

/// Several originals deriving one companion identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexCollision {
    pub strategy: Strategy,
    pub identity: CallableId,
    /// In host order.
    pub originals: Vec<FunctionSymbol>,
}

/// The cached maps of one strategy.
#[derive(Debug, Default)]
pub struct IndexMaps {
    /// Symbols the predicate matched, deduplicated, in host order.
    matched: Vec<FunctionSymbol>,
    origins: FxHashMap<CallableId, FunctionSymbol>,
    /// Identities in the order their originals were reported.
    order: Vec<CallableId>,
    names_by_class: FxHashMap<ClassId, Vec<Name>>,
    collisions: Vec<IndexCollision>,
}

impl IndexMaps {
    pub fn matched(&self) -> &[FunctionSymbol] {
        &self.matched
    }

    /// The original behind a synthetic identity.
    pub fn origin_of(&self, identity: CallableId) -> Option<FunctionSymbol> {
        self.origins.get(&identity).copied()
    }

    /// Every indexed identity, in host order.
    pub fn identities(&self) -> &[CallableId] {
        &self.order
    }

    pub fn top_level(&self) -> impl Iterator<Item = CallableId> + '_ {
        self.order.iter().copied().filter(|id| id.is_top_level())
    }

    /// Companion names declared in `class`.
    pub fn names_in(&self, class: ClassId) -> &[Name] {
        self.names_by_class.get(&class).map_or(&[], Vec::as_slice)
    }

    pub fn collisions(&self) -> &[IndexCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Lazily-built index for one strategy.
#[derive(Debug)]
pub struct PredicateIndex {
    strategy: Strategy,
    predicate: DeclarationPredicate,
    maps: OnceLock<IndexMaps>,
}

impl PredicateIndex {
    pub fn new(strategy: Strategy, predicate: DeclarationPredicate) -> Self {
        Self {
            strategy,
            predicate,
            maps: OnceLock::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn predicate(&self) -> &DeclarationPredicate {
        &self.predicate
    }

    /// The maps, building them on first use.
    pub fn maps<H: DeclarationHost>(&self, host: &H) -> &IndexMaps {
        self.maps.get_or_init(|| self.build(host))
    }

    /// Whether the maps have been built.
    pub fn is_built(&self) -> bool {
        self.maps.get().is_some()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(strategy = ?self.strategy))]
    fn build<H: DeclarationHost>(&self, host: &H) -> IndexMaps {
        let interner = host.interner();
        let suffix = self.strategy.suffix();

        let mut seen = FxHashSet::default();
        let mut matched = Vec::new();
        let mut candidates: FxHashMap<CallableId, Vec<FunctionSymbol>> = FxHashMap::default();
        let mut order = Vec::new();
        for symbol in host.symbols_by_predicate(&self.predicate) {
            if !seen.insert(symbol) {
                continue;
            }
            matched.push(symbol);
            let Some(decl) = host.function(symbol) else {
                tracing::warn!(?symbol, "predicate matched a symbol with no declaration");
                continue;
            };
            let identity = derive_identity(decl.callable_id, suffix, interner);
            let originals = candidates.entry(identity).or_default();
            if originals.is_empty() {
                order.push(identity);
            }
            originals.push(symbol);
        }

        let mut maps = IndexMaps {
            matched,
            ..IndexMaps::default()
        };
        for identity in order {
            let Some(mut originals) = candidates.remove(&identity) else {
                continue;
            };
            if originals.len() > 1 {
                tracing::warn!(
                    identity = %identity.display(interner),
                    count = originals.len(),
                    "several originals derive the same companion; none is generated",
                );
                maps.collisions.push(IndexCollision {
                    strategy: self.strategy,
                    identity,
                    originals,
                });
                continue;
            }
            let Some(original) = originals.pop() else {
                continue;
            };
            maps.origins.insert(identity, original);
            maps.order.push(identity);
            if let Some(owner) = identity.class_id {
                maps.names_by_class.entry(owner).or_default().push(identity.name);
            }
        }

        tracing::debug!(
            matched = maps.matched.len(),
            companions = maps.len(),
            collisions = maps.collisions.len(),
            "built predicate index",
        );
        if is_debug_enabled(DebugFlags::INDEX) {
            for identity in &maps.order {
                tracing::debug!(identity = %identity.display(interner), "indexed companion");
            }
        }
        maps
    }
}
