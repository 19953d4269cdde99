//! Synth Gen - companion declaration synthesis.
//!
//! For every function carrying one of the configured markers, this crate
//! fabricates a fully-resolved companion declaration:
//!
//! - `xOrNull`: calls `x` and turns any exception into `null`
//! - `xOrThrow`: calls `x` and turns a `null` result into an exception
//!
//! # Pipeline
//!
//! ```text
//! PredicateIndex ──► derive_identity ──► BodySynthesizer ──► FunctionGenerator ──► validate
//!  (marked fns)      (xOrNull ids)      (try/catch, ?:)     (params, type, label)
//! ```
//!
//! The host is reached only through [`DeclarationHost`]; [`ProgramHost`]
//! adapts an in-memory [`synth_ir::Program`].

mod assemble;
mod body;
mod config;
pub mod debug;
mod error;
mod host;
mod identity;
mod index;
mod predicate;
mod session;
mod strategy;
mod transform;
mod validate;

#[cfg(test)]
mod testing;

pub use assemble::{FunctionGenerator, GeneratedFunction};
pub use body::SynthesizedBody;
pub use config::{
    SynthConfig, DEFAULT_ERROR_CLASS, DEFAULT_NULL_ON_THROW_MARKERS,
    DEFAULT_THROW_ON_NULL_MARKERS,
};
pub use error::{Malformed, SynthError};
pub use host::{DeclarationHost, PredicateRegistrar, ProgramHost};
pub use identity::{derive_identity, derive_name};
pub use index::{IndexCollision, IndexMaps, PredicateIndex};
pub use predicate::DeclarationPredicate;
pub use session::{register_predicates, SynthSession};
pub use strategy::Strategy;
pub use transform::make_return_type;
pub use validate::validate;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
