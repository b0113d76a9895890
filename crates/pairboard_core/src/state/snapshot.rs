//! Read-only view of coordinator state.

use crate::model::history::PairingHistoryEntry;
use crate::model::project::{PairingBoard, Person, Project, ProjectId};

/// One immutable observation of the project and its pairing history.
///
/// Consumers receive clones of this; routing a change back always goes
/// through a coordinator operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub pairing_history: Vec<PairingHistoryEntry>,
}

impl ProjectSnapshot {
    /// Wraps a freshly loaded project with an empty history log.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            pairing_history: Vec::new(),
        }
    }

    pub fn project_id(&self) -> ProjectId {
        self.project.id
    }

    /// Floating (unassigned) people.
    pub fn people(&self) -> &[Person] {
        &self.project.people
    }

    pub fn pairing_boards(&self) -> &[PairingBoard] {
        &self.project.pairing_boards
    }
}
