//! Core state layer for the pairing board.
//! This crate owns the project mirror, its mutations, and the remote
//! reconciliation contract.

pub mod dnd;
pub mod logging;
pub mod model;
pub mod remote;
pub mod state;

pub use dnd::{DragKind, DropKind, DropReport, DropTarget, TrashBin};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::history::PairingHistoryEntry;
pub use model::project::{
    BoardId, PairingBoard, Person, PersonId, Project, ProjectId, Role, RoleId,
};
pub use remote::service::{ProjectService, RemoteError, RemoteResult};
pub use state::coordinator::{ProjectCoordinator, StateError, StateResult};
pub use state::snapshot::ProjectSnapshot;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
