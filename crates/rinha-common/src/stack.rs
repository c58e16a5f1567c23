//! Stack growth for deep recursion.
//!
//! Decoding and evaluation both recurse once per AST level, and real
//! programs nest `Let` chains thousands of levels deep. On native targets
//! the `stacker` crate grows the stack on demand; on wasm these are plain
//! calls.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Run `f` on a fresh stack of `size` bytes.
///
/// For recursion we don't control frame by frame, such as `serde_json`
/// building a `Value` tree.
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(size: usize, f: impl FnOnce() -> R) -> R {
    stacker::grow(size, f)
}

#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(_size: usize, f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        assert_eq!(depth(200_000), 200_000);
    }

    #[test]
    fn test_with_stack_returns_value() {
        assert_eq!(with_stack(1024 * 1024, || 41 + 1), 42);
    }
}
