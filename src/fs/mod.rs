//! Filesystem utilities for whittle.
//!
//! This module provides the atomic write operation used when persisting
//! specification files, so a crash never leaves a half-written category.

pub mod atomic;

pub use atomic::atomic_write_file;
