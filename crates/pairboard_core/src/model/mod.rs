//! Domain model for the pairing board.
//!
//! # Responsibility
//! - Define the canonical project aggregate mirrored from the remote service.
//! - Provide pure location/mutation helpers for optimistic state transitions.
//!
//! # Invariants
//! - Every entity is identified by a stable, remote-assigned numeric id.
//! - A person sits in at most one location; a role in exactly one board.

pub mod history;
pub mod project;
