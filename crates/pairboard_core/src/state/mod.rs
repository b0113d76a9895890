//! Project state ownership and synchronization.
//!
//! # Responsibility
//! - Own the single mutable project mirror and pairing-history log.
//! - Mediate every mutation between optimistic local updates and the remote
//!   service.
//!
//! # Invariants
//! - All writes flow through the coordinator; consumers only see snapshots.
//! - A settled remote response always replaces local state wholesale.

pub mod coordinator;
pub mod snapshot;
