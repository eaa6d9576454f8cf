//! Atomic type selection supporting both production and model-checking builds.
//!
//! Provides a unified import point for the atomic primitives the tree uses:
//! - Default build: `core::sync::atomic` (lock-free hardware atomics)
//! - `--cfg loom` build: `loom::sync::atomic`, so the whole structure can be
//!   exhaustively model-checked under bounded interleavings
//!
//! # Compile-time Selection
//! ```bash
//! cargo test                                  # hardware atomics
//! RUSTFLAGS="--cfg loom" cargo test --release # loom model checking
//! ```

#[cfg(loom)]
pub use loom::sync::atomic::{AtomicPtr, AtomicU16, AtomicUsize, Ordering};

#[cfg(not(loom))]
pub use core::sync::atomic::{AtomicPtr, AtomicU16, AtomicUsize, Ordering};
