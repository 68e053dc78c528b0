//! Stack growth guard for recursive descent.
//!
//! The expression, type-descriptor and pattern grammars recurse once per
//! nesting level (`((((x))))`, `map<map<map<int>>>`, `[[[a]]]`). Inputs with
//! thousands of nesting levels are legal, so every recursive entry point in
//! the parser runs through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`; on wasm the
//! guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
