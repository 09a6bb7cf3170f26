//! Filesystem utilities for tinytpl.
//!
//! Expanded output written to a file goes through an atomic replace so a
//! failed run never leaves a half-written file behind.

pub mod atomic;

pub use atomic::atomic_write;
