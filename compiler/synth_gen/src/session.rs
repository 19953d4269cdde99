//! Session facade: the surface a host drives.
//!
//! A host compiles with one [`SynthSession`]:
//!
//! 1. During setup, [`register_predicates`] tells the host which markers to
//!    index.
//! 2. While building scopes, the host asks for [`top_level_callable_ids`]
//!    and [`callable_names_for_class`] so the companions are visible to
//!    name resolution.
//! 3. When it resolves one of those names, it calls
//!    [`generate_functions`] for the declaration.
//!
//! Indexes are built on first use and cached for the session's lifetime.
//!
//! [`top_level_callable_ids`]: SynthSession::top_level_callable_ids
//! [`callable_names_for_class`]: SynthSession::callable_names_for_class
//! [`generate_functions`]: SynthSession::generate_functions

use rustc_hash::FxHashSet;
use synth_ir::{CallableId, ClassId, Name, StringInterner};

use crate::{
    DeclarationHost, FunctionGenerator, GeneratedFunction, IndexCollision, PredicateRegistrar,
    Strategy, SynthConfig, SynthError,
};

/// Register every strategy's predicate with `registrar`.
pub fn register_predicates<R: PredicateRegistrar + ?Sized>(
    config: &SynthConfig,
    interner: &StringInterner,
    registrar: &mut R,
) {
    for strategy in Strategy::ALL {
        registrar.register(strategy.predicate(config, interner));
    }
}

/// Per-compilation synthesizer state.
pub struct SynthSession<'h, H> {
    host: &'h H,
    generators: [FunctionGenerator; 2],
}

impl<'h, H: DeclarationHost> SynthSession<'h, H> {
    pub fn new(host: &'h H, config: SynthConfig) -> Self {
        let interner = host.interner();
        let error_class = ClassId::from_dotted(interner, &config.error_class);
        let generators = Strategy::ALL.map(|strategy| {
            FunctionGenerator::new(strategy, strategy.predicate(&config, interner), error_class)
        });
        tracing::debug!(error_class = %config.error_class, "synth session created");
        Self { host, generators }
    }

    pub fn generator(&self, strategy: Strategy) -> &FunctionGenerator {
        match strategy {
            Strategy::NullOnThrow => &self.generators[0],
            Strategy::ThrowOnNull => &self.generators[1],
        }
    }

    /// Top-level companion identities across all strategies, in host order.
    pub fn top_level_callable_ids(&self) -> Vec<CallableId> {
        let mut seen = FxHashSet::default();
        self.generators
            .iter()
            .flat_map(|generator| generator.index(self.host).top_level())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Companion names declared inside `class`.
    pub fn callable_names_for_class(&self, class: ClassId) -> Vec<Name> {
        let mut seen = FxHashSet::default();
        self.generators
            .iter()
            .flat_map(|generator| generator.index(self.host).names_in(class).iter().copied())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Fabricate the companion declared as `callable_id` in `owner`.
    ///
    /// `Ok(None)` when no strategy knows the identity.
    pub fn generate_functions(
        &self,
        callable_id: CallableId,
        owner: Option<ClassId>,
    ) -> Result<Option<GeneratedFunction>, SynthError> {
        for generator in &self.generators {
            if let Some(generated) = generator.generate(self.host, callable_id, owner)? {
                return Ok(Some(generated));
            }
        }
        Ok(None)
    }

    /// Every companion the session can produce.
    ///
    /// Stops at the first failure.
    pub fn generate_all(&self) -> Result<Vec<GeneratedFunction>, SynthError> {
        let mut out = Vec::new();
        for generator in &self.generators {
            for &identity in generator.index(self.host).identities() {
                if let Some(generated) = generator.generate(self.host, identity, identity.class_id)? {
                    out.push(generated);
                }
            }
        }
        Ok(out)
    }

    /// Identities dropped because several originals derive them.
    pub fn collisions(&self) -> Vec<IndexCollision> {
        self.generators
            .iter()
            .flat_map(|generator| generator.index(self.host).collisions().iter().cloned())
            .collect()
    }
}
