//! Shared test doubles for coordinator integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use pairboard_core::{
    BoardId, PairingBoard, PairingHistoryEntry, Person, PersonId, Project, ProjectCoordinator,
    ProjectId, ProjectService, RemoteError, RemoteResult, Role, RoleId,
};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::Notify;

/// One remote call as the coordinator issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    PairingHistory,
    CreatePerson {
        name: String,
    },
    CreatePairingBoard {
        name: String,
    },
    CreateRole {
        board_id: BoardId,
        name: String,
    },
    DeletePairingBoard {
        board_id: BoardId,
    },
    SetRolePosition {
        source_board_id: BoardId,
        role_id: RoleId,
        target_board_id: BoardId,
    },
    DeleteRole {
        board_id: BoardId,
        role_id: RoleId,
    },
    SetPersonPosition {
        person_id: PersonId,
        target_board_id: Option<BoardId>,
    },
    DeletePerson {
        person_id: PersonId,
    },
    ResetPairing,
    RecommendedPairing,
    SavePairing,
}

/// Scripted `ProjectService` that records every call.
///
/// Project-returning operations answer with a fixed canonical project.
/// `gated()` makes every call wait for an explicit release first, so tests
/// can observe optimistic state while a remote call is still pending.
pub struct StubService {
    canonical: Project,
    history: Vec<PairingHistoryEntry>,
    saved_entries: Vec<PairingHistoryEntry>,
    failure: Option<String>,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<RemoteCall>>,
}

impl StubService {
    /// Stub whose mutating calls all answer with `canonical`.
    pub fn answering(canonical: Project) -> Self {
        Self {
            canonical,
            history: Vec::new(),
            saved_entries: Vec::new(),
            failure: None,
            gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Stub whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        let mut stub = Self::answering(Project::new(0));
        stub.failure = Some(message.to_string());
        stub
    }

    pub fn with_history(mut self, history: Vec<PairingHistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn with_saved_entries(mut self, entries: Vec<PairingHistoryEntry>) -> Self {
        self.saved_entries = entries;
        self
    }

    /// Holds every call until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn settle(&self, operation: &'static str, call: RemoteCall) -> RemoteResult<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.failure {
            Some(message) => Err(RemoteError::new(operation, message.clone())),
            None => Ok(()),
        }
    }

    async fn settle_with_project(
        &self,
        operation: &'static str,
        call: RemoteCall,
    ) -> RemoteResult<Project> {
        self.settle(operation, call).await?;
        Ok(self.canonical.clone())
    }
}

#[async_trait]
impl ProjectService for StubService {
    async fn pairing_history(
        &self,
        _project_id: ProjectId,
    ) -> RemoteResult<Vec<PairingHistoryEntry>> {
        self.settle("pairing_history", RemoteCall::PairingHistory)
            .await?;
        Ok(self.history.clone())
    }

    async fn create_person(&self, _project_id: ProjectId, name: &str) -> RemoteResult<Project> {
        self.settle_with_project(
            "create_person",
            RemoteCall::CreatePerson {
                name: name.to_string(),
            },
        )
        .await
    }

    async fn create_pairing_board(
        &self,
        _project_id: ProjectId,
        name: &str,
    ) -> RemoteResult<Project> {
        self.settle_with_project(
            "create_pairing_board",
            RemoteCall::CreatePairingBoard {
                name: name.to_string(),
            },
        )
        .await
    }

    async fn create_role(
        &self,
        _project_id: ProjectId,
        board_id: BoardId,
        name: &str,
    ) -> RemoteResult<Project> {
        self.settle_with_project(
            "create_role",
            RemoteCall::CreateRole {
                board_id,
                name: name.to_string(),
            },
        )
        .await
    }

    async fn delete_pairing_board(
        &self,
        _project_id: ProjectId,
        board_id: BoardId,
    ) -> RemoteResult<Project> {
        self.settle_with_project(
            "delete_pairing_board",
            RemoteCall::DeletePairingBoard { board_id },
        )
        .await
    }

    async fn set_role_position(
        &self,
        _project_id: ProjectId,
        source_board_id: BoardId,
        role_id: RoleId,
        target_board_id: BoardId,
    ) -> RemoteResult<Project> {
        self.settle_with_project(
            "set_role_position",
            RemoteCall::SetRolePosition {
                source_board_id,
                role_id,
                target_board_id,
            },
        )
        .await
    }

    async fn delete_role(
        &self,
        _project_id: ProjectId,
        board_id: BoardId,
        role_id: RoleId,
    ) -> RemoteResult<()> {
        self.settle("delete_role", RemoteCall::DeleteRole { board_id, role_id })
            .await
    }

    async fn set_person_position(
        &self,
        _project_id: ProjectId,
        person_id: PersonId,
        target_board_id: Option<BoardId>,
    ) -> RemoteResult<Project> {
        self.settle_with_project(
            "set_person_position",
            RemoteCall::SetPersonPosition {
                person_id,
                target_board_id,
            },
        )
        .await
    }

    async fn delete_person(
        &self,
        _project_id: ProjectId,
        person_id: PersonId,
    ) -> RemoteResult<Project> {
        self.settle_with_project("delete_person", RemoteCall::DeletePerson { person_id })
            .await
    }

    async fn reset_pairing(&self, _project_id: ProjectId) -> RemoteResult<Project> {
        self.settle_with_project("reset_pairing", RemoteCall::ResetPairing)
            .await
    }

    async fn recommended_pairing(&self, _project_id: ProjectId) -> RemoteResult<Project> {
        self.settle_with_project("recommended_pairing", RemoteCall::RecommendedPairing)
            .await
    }

    async fn save_pairing(
        &self,
        _project_id: ProjectId,
    ) -> RemoteResult<Vec<PairingHistoryEntry>> {
        self.settle("save_pairing", RemoteCall::SavePairing).await?;
        Ok(self.saved_entries.clone())
    }
}

/// Builds a coordinator over `service`, returning the alert receiver too.
pub fn coordinator_with(
    project: Project,
    service: Arc<StubService>,
) -> (ProjectCoordinator, UnboundedReceiver<String>) {
    let (alert_tx, alert_rx) = mpsc::unbounded_channel();
    (
        ProjectCoordinator::new(project, service, alert_tx),
        alert_rx,
    )
}

pub fn board_with(id: BoardId, name: &str, people: Vec<Person>, roles: Vec<Role>) -> PairingBoard {
    let mut board = PairingBoard::new(id, name);
    board.people = people;
    board.roles = roles;
    board
}

pub fn history_entry(board_name: &str, people: Vec<Person>, pairing_time: i64) -> PairingHistoryEntry {
    PairingHistoryEntry {
        pairing_board_name: board_name.to_string(),
        people,
        pairing_time,
    }
}

/// Asserts the person occupies exactly one location across floating and all
/// boards.
pub fn assert_single_location(project: &Project, person_id: PersonId) {
    let mut occurrences = project.people.iter().filter(|p| p.id == person_id).count();
    for board in &project.pairing_boards {
        occurrences += board.people.iter().filter(|p| p.id == person_id).count();
    }
    assert_eq!(occurrences, 1, "person {person_id} must sit in exactly one location");
}

/// Asserts the role occupies exactly one board, namely `board_id`.
pub fn assert_role_only_on(project: &Project, role_id: RoleId, board_id: BoardId) {
    for board in &project.pairing_boards {
        let count = board.roles.iter().filter(|r| r.id == role_id).count();
        if board.id == board_id {
            assert_eq!(count, 1, "role {role_id} must sit on board {board_id}");
        } else {
            assert_eq!(count, 0, "role {role_id} duplicated onto board {}", board.id);
        }
    }
}
