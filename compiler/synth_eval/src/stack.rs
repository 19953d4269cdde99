//! Stack growth for the recursive evaluator.
//!
//! Every interpreted call nests several native `eval` frames, so a call
//! chain well inside [`MAX_CALL_DEPTH`](crate::MAX_CALL_DEPTH) can still
//! exhaust the thread's stack. [`ensure_sufficient_stack`] grows it on
//! demand; the depth cap stays the semantic limit.

/// Grow when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to running out.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
