//! Declaration assembly: one generator per strategy.

use synth_ir::{
    render_function, Annotations, CallableId, ClassId, FunctionDecl, FunctionSymbol,
    ResolvePhase, ValueParameter,
};

use crate::body::BodySynthesizer;
use crate::debug::{is_debug_enabled, DebugFlags};
use crate::{
    make_return_type, validate, DeclarationHost, DeclarationPredicate, IndexMaps,
    PredicateIndex, Strategy, SynthError,
};

/// A fabricated declaration, ready to hand to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedFunction {
    pub symbol: FunctionSymbol,
    /// The original it forwards to.
    pub original: FunctionSymbol,
    pub decl: FunctionDecl,
}

impl GeneratedFunction {
    pub fn into_decl(self) -> FunctionDecl {
        self.decl
    }
}

/// Produces companions for one strategy.
#[derive(Debug)]
pub struct FunctionGenerator {
    index: PredicateIndex,
    /// Thrown by `OrThrow` bodies; unused by `OrNull`.
    error_class: ClassId,
}

impl FunctionGenerator {
    pub fn new(strategy: Strategy, predicate: DeclarationPredicate, error_class: ClassId) -> Self {
        Self {
            index: PredicateIndex::new(strategy, predicate),
            error_class,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.index.strategy()
    }

    #[inline]
    pub fn predicate(&self) -> &DeclarationPredicate {
        self.index.predicate()
    }

    pub fn index<H: DeclarationHost>(&self, host: &H) -> &IndexMaps {
        self.index.maps(host)
    }

    /// The companion declared as `callable_id` in `owner`.
    ///
    /// `Ok(None)` when this strategy has no companion by that identity, or
    /// when `owner` is not the scope the companion lives in.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(strategy = ?self.strategy(), callable = %callable_id.display(host.interner())),
    )]
    pub fn generate<H: DeclarationHost>(
        &self,
        host: &H,
        callable_id: CallableId,
        owner: Option<ClassId>,
    ) -> Result<Option<GeneratedFunction>, SynthError> {
        let Some(original_symbol) = self.index.maps(host).origin_of(callable_id) else {
            return Ok(None);
        };
        if callable_id.class_id != owner {
            tracing::debug!(?owner, "requested under a different owner");
            return Ok(None);
        }

        let interner = host.interner();
        let function = || callable_id.display(interner);
        let original = host
            .function(original_symbol)
            .ok_or_else(|| SynthError::UnknownOrigin {
                function: function(),
                symbol: original_symbol,
            })?;

        let strategy = self.strategy();
        let origin = strategy.origin();
        let params: Vec<ValueParameter> = original
            .params
            .iter()
            .map(|param| param.copy_as(host.symbols().fresh_param(), origin))
            .collect();

        let synthesized =
            BodySynthesizer::new(host, strategy, original, &params, callable_id.name)
                .build(self.error_class)?;

        let symbol = host.symbols().fresh_function();
        let mut body = synthesized.body;
        body.bind_label(synthesized.target, symbol)
            .map_err(|source| SynthError::ReturnTarget {
                function: function(),
                source,
            })?;

        let decl = FunctionDecl {
            symbol,
            callable_id,
            params,
            return_type: make_return_type(strategy, original.return_type, host.types()),
            status: original.status,
            origin,
            resolve_phase: ResolvePhase::BodyResolve,
            annotations: Annotations::new(),
            body: Some(body),
        };

        validate(&decl, original, host, host.types()).map_err(|reason| SynthError::Malformed {
            function: function(),
            reason,
        })?;

        if is_debug_enabled(DebugFlags::BODY) {
            tracing::debug!(
                "synthesized\n{}",
                render_function(&decl, host, host.types(), interner)
            );
        }
        tracing::debug!(?symbol, original = ?original_symbol, "generated companion");

        Ok(Some(GeneratedFunction {
            symbol,
            original: original_symbol,
            decl,
        }))
    }
}

#[cfg(test)]
mod tests;
