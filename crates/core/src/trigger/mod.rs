//! Reactive recompute trigger.
//!
//! Coalesces bursts of input events into a single recomputation once a
//! quiet period has elapsed.

mod debounce;

pub use debounce::Debouncer;
