//! Shared test support
//!
//! The configuration registry is process-wide, so every test that touches it
//! must hold this lock to keep configure/reset sequences from interleaving.

use std::sync::Mutex;

/// Serializes tests that mutate the global registry
pub static GLOBAL_REGISTRY_LOCK: Mutex<()> = Mutex::new(());
