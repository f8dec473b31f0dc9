//! Error types for the handful of genuinely fallible, caller-facing operations this crate adds.
//!
//! Everything the core specification itself defines — stale handles, double frees, kind
//! mismatches — is a *soft* failure: it returns `Option::None` or is a silent no-op, never a
//! `Result`. See [`crate::graph::SceneGraph`] for why `Result` only shows up at construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneGraphError {
	#[error("capacity hint {requested} would overflow the backing allocator")]
	CapacityOverflow { requested: usize },
}
