//! Stack growth for recursive walks over unbounded input.
//!
//! Recursive descent and recursive tree walks both nest as deeply as the
//! input does. Wrapping each level in [`ensure_sufficient_stack`] grows the
//! native stack on demand instead of overflowing it. On `wasm32` the call is
//! made directly.

/// Minimum stack space to keep available before recursing (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated whenever the red zone is reached (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Run `f` directly; `wasm32` has no stack growth.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
