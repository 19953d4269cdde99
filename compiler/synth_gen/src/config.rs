//! Engine configuration.
//!
//! Marker names and the error class are a compatibility contract with the
//! host's annotation facility. The defaults match the published annotations;
//! each can be overridden through the environment:
//!
//! - `SYNTH_NULL_MARKERS`: comma-separated markers selecting `OrNull`
//! - `SYNTH_THROW_MARKERS`: comma-separated markers selecting `OrThrow`
//! - `SYNTH_ERROR_CLASS`: class thrown by `OrThrow` companions

use crate::Strategy;

/// Markers that select the exception-to-null companion.
///
/// `Throws` is the original spelling and is still honored.
pub const DEFAULT_NULL_ON_THROW_MARKERS: &[&str] = &[
    "org.itmo.my.pretty.plugin.GenerateOrNull",
    "org.itmo.my.pretty.plugin.Throws",
];

/// Markers that select the null-to-exception companion.
pub const DEFAULT_THROW_ON_NULL_MARKERS: &[&str] = &["org.itmo.my.pretty.plugin.GenerateOrThrow"];

/// Class instantiated (with its zero-argument constructor) when an
/// `OrThrow` companion sees `null`.
pub const DEFAULT_ERROR_CLASS: &str = "java.lang.IllegalStateException";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthConfig {
    pub null_on_throw_markers: Vec<String>,
    pub throw_on_null_markers: Vec<String>,
    pub error_class: String,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            null_on_throw_markers: to_owned_list(DEFAULT_NULL_ON_THROW_MARKERS),
            throw_on_null_markers: to_owned_list(DEFAULT_THROW_ON_NULL_MARKERS),
            error_class: DEFAULT_ERROR_CLASS.to_owned(),
        }
    }
}

impl SynthConfig {
    /// Defaults overridden by the `SYNTH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    ///
    /// Empty or blank values leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(markers) = lookup("SYNTH_NULL_MARKERS").and_then(|s| parse_list(&s)) {
            config.null_on_throw_markers = markers;
        }
        if let Some(markers) = lookup("SYNTH_THROW_MARKERS").and_then(|s| parse_list(&s)) {
            config.throw_on_null_markers = markers;
        }
        if let Some(class) = lookup("SYNTH_ERROR_CLASS") {
            let class = class.trim();
            if !class.is_empty() {
                class.clone_into(&mut config.error_class);
            }
        }
        config
    }

    /// Marker names that select `strategy`.
    pub fn markers(&self, strategy: Strategy) -> &[String] {
        match strategy {
            Strategy::NullOnThrow => &self.null_on_throw_markers,
            Strategy::ThrowOnNull => &self.throw_on_null_markers,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

fn parse_list(s: &str) -> Option<Vec<String>> {
    let items: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
