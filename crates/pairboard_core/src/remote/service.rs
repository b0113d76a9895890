//! Remote project-service contract.
//!
//! # Responsibility
//! - Name every remote operation the state coordinator depends on.
//! - Carry remote failures as values the coordinator can propagate unchanged.
//!
//! # Invariants
//! - Mutating operations answer with the canonical project; the caller adopts
//!   it wholesale, never merges.
//! - Implementations never assign ids locally; identity comes from the
//!   service.

use crate::model::history::PairingHistoryEntry;
use crate::model::project::{BoardId, PersonId, Project, ProjectId, RoleId};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure of one remote call, tagged with the operation that issued it.
///
/// The coordinator does not retry and does not roll back optimistic state;
/// this value travels to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// Remote operation name, e.g. `set_person_position`.
    pub operation: &'static str,
    /// Human-readable failure description from the transport.
    pub message: String,
}

impl RemoteError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "remote {} failed: {}", self.operation, self.message)
    }
}

impl Error for RemoteError {}

/// Abstract pairing-board service consumed by the state coordinator.
///
/// One method per remote operation. Mutations return the canonical project
/// except `delete_role`, whose payload the caller discards beyond
/// success/failure.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Fetches the ordered pairing history for a project.
    async fn pairing_history(
        &self,
        project_id: ProjectId,
    ) -> RemoteResult<Vec<PairingHistoryEntry>>;

    /// Adds a person to the project; the service assigns the id.
    async fn create_person(&self, project_id: ProjectId, name: &str) -> RemoteResult<Project>;

    /// Adds a pairing board to the project.
    async fn create_pairing_board(
        &self,
        project_id: ProjectId,
        name: &str,
    ) -> RemoteResult<Project>;

    /// Adds a role to one board.
    async fn create_role(
        &self,
        project_id: ProjectId,
        board_id: BoardId,
        name: &str,
    ) -> RemoteResult<Project>;

    /// Deletes one board.
    async fn delete_pairing_board(
        &self,
        project_id: ProjectId,
        board_id: BoardId,
    ) -> RemoteResult<Project>;

    /// Moves a role from its source board to the target board.
    async fn set_role_position(
        &self,
        project_id: ProjectId,
        source_board_id: BoardId,
        role_id: RoleId,
        target_board_id: BoardId,
    ) -> RemoteResult<Project>;

    /// Deletes a role from the board currently holding it.
    async fn delete_role(
        &self,
        project_id: ProjectId,
        board_id: BoardId,
        role_id: RoleId,
    ) -> RemoteResult<()>;

    /// Assigns a person to a board, or back to floating when `None`.
    async fn set_person_position(
        &self,
        project_id: ProjectId,
        person_id: PersonId,
        target_board_id: Option<BoardId>,
    ) -> RemoteResult<Project>;

    /// Deletes a person from the project.
    async fn delete_person(
        &self,
        project_id: ProjectId,
        person_id: PersonId,
    ) -> RemoteResult<Project>;

    /// Moves every person back to floating, server-side.
    async fn reset_pairing(&self, project_id: ProjectId) -> RemoteResult<Project>;

    /// Asks the service for a suggested person/board arrangement.
    async fn recommended_pairing(&self, project_id: ProjectId) -> RemoteResult<Project>;

    /// Records the current arrangement as new history entries.
    async fn save_pairing(
        &self,
        project_id: ProjectId,
    ) -> RemoteResult<Vec<PairingHistoryEntry>>;
}
