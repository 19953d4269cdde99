//! Debug dumps for the synthesizer.
//!
//! Set `SYNTH_DEBUG` to a comma-separated list of flags:
//! - `index` - log every predicate index as it is built
//! - `body` - log each synthesized declaration rendered as source
//! - `all` - everything
//!
//! Output goes through `tracing` at `debug` level, so `RUST_LOG` must also
//! let `synth_gen` through.

use std::sync::OnceLock;

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DebugFlags: u32 {
        const INDEX = 0b0000_0001;
        const BODY = 0b0000_0010;
        const ALL = Self::INDEX.bits() | Self::BODY.bits();
    }
}

impl DebugFlags {
    /// Parse a comma-separated flag list. Unknown names are ignored.
    pub fn parse(s: &str) -> Self {
        let mut flags = DebugFlags::empty();
        for part in s.split(',') {
            match part.trim().to_lowercase().as_str() {
                "index" => flags |= DebugFlags::INDEX,
                "body" => flags |= DebugFlags::BODY,
                "all" => flags |= DebugFlags::ALL,
                _ => {}
            }
        }
        flags
    }
}

static DEBUG_FLAGS: OnceLock<DebugFlags> = OnceLock::new();

/// Flags from `SYNTH_DEBUG`, read once per process.
pub fn debug_flags() -> DebugFlags {
    *DEBUG_FLAGS.get_or_init(|| {
        std::env::var("SYNTH_DEBUG")
            .ok()
            .map(|s| DebugFlags::parse(&s))
            .unwrap_or_default()
    })
}

pub fn is_debug_enabled(flag: DebugFlags) -> bool {
    debug_flags().contains(flag)
}
