//! Companion identities.
//!
//! A companion keeps the original's package and owner; only the name gains
//! the strategy suffix.

use synth_ir::{CallableId, StringInterner};

/// `original` followed by `suffix`.
pub fn derive_name(original: &str, suffix: &str) -> String {
    let mut name = String::with_capacity(original.len() + suffix.len());
    name.push_str(original);
    name.push_str(suffix);
    name
}

/// The identity of the companion of `original`.
pub fn derive_identity(original: CallableId, suffix: &str, interner: &StringInterner) -> CallableId {
    let name = derive_name(interner.lookup(original.name), suffix);
    original.with_name(interner.intern(&name))
}
