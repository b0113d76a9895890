//! Project state coordinator.
//!
//! # Responsibility
//! - Apply optimistic local mutations synchronously, then reconcile with the
//!   canonical project returned by the remote service.
//! - Broadcast state snapshots to consumers over a watch channel.
//!
//! # Invariants
//! - Optimistic phases mutate a detached copy; nothing is published when a
//!   precondition fails.
//! - Reconciliation replaces the project wholesale. If two mutations race,
//!   the response landing last wins; there is no merge and no rollback.
//! - Pending completions are never cancelled; a settled response is applied
//!   even when it is stale.

use crate::model::project::{PairingBoard, Person, Project, ProjectId, Role};
use crate::remote::service::{ProjectService, RemoteError};
use crate::state::snapshot::ProjectSnapshot;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Notification shown once after a pairing is recorded.
const PAIRS_RECORDED_ALERT: &str = "Hello. We just recorded your pairs.";

pub type StateResult<T> = Result<T, StateError>;

/// Coordinator failure taxonomy.
///
/// `CorruptedState` marks a broken local invariant (a bug), distinct from the
/// recoverable `RoleNotFound` rejection and from remote failures, so callers
/// can tell the three apart.
#[derive(Debug)]
pub enum StateError {
    /// The local mirror is missing an entity it must contain. Fail-fast;
    /// callers should treat this as state corruption, not a runtime error.
    CorruptedState(&'static str),
    /// A role slated for deletion sits on no board; anticipated when the
    /// role is already gone.
    RoleNotFound(String),
    /// The remote call failed. Optimistic local state stays applied until a
    /// later successful operation refreshes it.
    Remote(RemoteError),
}

impl StateError {
    /// True for failures that indicate local state corruption rather than a
    /// legitimate runtime condition.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptedState(_))
    }
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CorruptedState(details) => write!(f, "corrupted local state: {details}"),
            Self::RoleNotFound(name) => {
                write!(f, "couldn't find role `{name}` on any pairing board")
            }
            Self::Remote(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Remote(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RemoteError> for StateError {
    fn from(value: RemoteError) -> Self {
        Self::Remote(value)
    }
}

/// Single owner of the project mirror and pairing-history log.
///
/// Operations run on one logical writer: each applies its optimistic phase
/// synchronously, issues the remote call, and adopts the canonical response
/// when it settles.
pub struct ProjectCoordinator {
    service: Arc<dyn ProjectService>,
    alerts: mpsc::UnboundedSender<String>,
    state_tx: watch::Sender<ProjectSnapshot>,
}

impl ProjectCoordinator {
    /// Creates a coordinator around an already-loaded project.
    ///
    /// `alerts` receives one-shot user-visible notification messages; the
    /// history log starts empty until [`Self::load_pairing_history`] runs.
    pub fn new(
        project: Project,
        service: Arc<dyn ProjectService>,
        alerts: mpsc::UnboundedSender<String>,
    ) -> Self {
        let (state_tx, _) = watch::channel(ProjectSnapshot::new(project));
        Self {
            service,
            alerts,
            state_tx,
        }
    }

    /// Subscribes to state snapshots. The receiver always holds the latest
    /// published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ProjectSnapshot> {
        self.state_tx.subscribe()
    }

    /// Returns a clone of the current snapshot.
    pub fn snapshot(&self) -> ProjectSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn project_id(&self) -> ProjectId {
        self.state_tx.borrow().project.id
    }

    /// Fetches the pairing history once and replaces the local log.
    pub async fn load_pairing_history(&self) -> StateResult<()> {
        let history = self.service.pairing_history(self.project_id()).await?;
        info!(
            "event=history_loaded project_id={} entries={}",
            self.project_id(),
            history.len()
        );
        self.state_tx.send_modify(|state| state.pairing_history = history);
        Ok(())
    }

    /// Adds a person by name. Remote-driven: no optimistic step, the
    /// canonical response is adopted wholesale.
    pub async fn create_person(&self, name: &str) -> StateResult<()> {
        debug!("event=create_person project_id={}", self.project_id());
        let canonical = self.service.create_person(self.project_id(), name).await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Adds a pairing board by name. Same remote-driven pattern as
    /// [`Self::create_person`].
    pub async fn create_pairing_board(&self, name: &str) -> StateResult<()> {
        debug!("event=create_pairing_board project_id={}", self.project_id());
        let canonical = self
            .service
            .create_pairing_board(self.project_id(), name)
            .await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Adds a role to the given board.
    pub async fn create_role(&self, name: &str, board: &PairingBoard) -> StateResult<()> {
        debug!(
            "event=create_role project_id={} board_id={}",
            self.project_id(),
            board.id
        );
        let canonical = self
            .service
            .create_role(self.project_id(), board.id, name)
            .await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Deletes a board, optimistic-first: the board disappears locally, its
    /// people join the floating list, and its roles are discarded. The remote
    /// response may still correct the guess; there is no rollback on failure.
    pub async fn delete_pairing_board(&self, board: &PairingBoard) -> StateResult<()> {
        self.state_tx.send_modify(|state| {
            if let Some(mut detached) = state.project.detach_board(board.id) {
                state.project.people.append(&mut detached.people);
            }
        });
        debug!(
            "event=delete_pairing_board project_id={} board_id={} phase=optimistic_applied",
            self.project_id(),
            board.id
        );
        let canonical = self
            .service
            .delete_pairing_board(self.project_id(), board.id)
            .await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Moves a person to a board, or to floating when `target` is `None`.
    ///
    /// Optimistic-first. Removing a person who is nowhere in the project is a
    /// no-op; they are inserted at the target regardless. A missing target
    /// board is state corruption and nothing is published.
    pub async fn move_person(
        &self,
        person: &Person,
        target: Option<&PairingBoard>,
    ) -> StateResult<()> {
        let target_id = target.map(|board| board.id);
        let mut next = self.snapshot();
        next.project.remove_person(person.id);
        if !next.project.add_person(person.clone(), target_id) {
            error!(
                "event=move_person project_id={} person_id={} status=corrupted",
                self.project_id(),
                person.id
            );
            return Err(StateError::CorruptedState(
                "move target board is missing from local state",
            ));
        }
        self.state_tx.send_replace(next);

        let canonical = self
            .service
            .set_person_position(self.project_id(), person.id, target_id)
            .await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Moves a role to another board. Roles have no floating state, so the
    /// target is mandatory.
    ///
    /// A role found on no board, or a target board absent from local state,
    /// is state corruption: the error is returned before anything is
    /// published.
    pub async fn move_role(&self, role: &Role, target: &PairingBoard) -> StateResult<()> {
        let mut next = self.snapshot();
        let Some((source_board_id, _)) = next.project.remove_role(role.id) else {
            error!(
                "event=move_role project_id={} role_id={} status=corrupted",
                self.project_id(),
                role.id
            );
            return Err(StateError::CorruptedState(
                "role to move sits on no pairing board in local state",
            ));
        };
        if !next.project.add_role(role.clone(), target.id) {
            error!(
                "event=move_role project_id={} role_id={} target_board_id={} status=corrupted",
                self.project_id(),
                role.id,
                target.id
            );
            return Err(StateError::CorruptedState(
                "move target board is missing from local state",
            ));
        }
        self.state_tx.send_replace(next);

        let canonical = self
            .service
            .set_role_position(self.project_id(), source_board_id, role.id, target.id)
            .await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Deletes a person, optimistic-first, then reconciles.
    pub async fn delete_person(&self, person: &Person) -> StateResult<()> {
        self.state_tx.send_modify(|state| {
            state.project.remove_person(person.id);
        });
        debug!(
            "event=delete_person project_id={} person_id={} phase=optimistic_applied",
            self.project_id(),
            person.id
        );
        let canonical = self
            .service
            .delete_person(self.project_id(), person.id)
            .await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Deletes a role. No optimistic step: the role's current board is looked
    /// up only to address the remote call, and when the role is on no board
    /// the operation rejects without issuing one.
    pub async fn delete_role(&self, role: &Role) -> StateResult<()> {
        let board_id = {
            let state = self.state_tx.borrow();
            state.project.board_with_role(role.id).map(|board| board.id)
        };
        let Some(board_id) = board_id else {
            return Err(StateError::RoleNotFound(role.name.clone()));
        };
        self.service
            .delete_role(self.project_id(), board_id, role.id)
            .await?;
        Ok(())
    }

    /// Empties every board's people into the floating list, locally first,
    /// then asks the service to reset and adopts its answer. Roles keep their
    /// boards.
    pub async fn reset_pairs(&self) -> StateResult<()> {
        self.state_tx
            .send_modify(|state| state.project.float_all_people());
        debug!(
            "event=reset_pairs project_id={} phase=optimistic_applied",
            self.project_id()
        );
        let canonical = self.service.reset_pairing(self.project_id()).await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Adopts the service-computed suggested arrangement. The assignment is
    /// computed server-side, so there is no local approximation to apply.
    pub async fn get_recommended_pairs(&self) -> StateResult<()> {
        let canonical = self.service.recommended_pairing(self.project_id()).await?;
        self.adopt_project(canonical);
        Ok(())
    }

    /// Records the current arrangement as history and appends the newly
    /// created entries to the local log, notifying the user once.
    pub async fn save_pairing(&self) -> StateResult<()> {
        let new_entries = self.service.save_pairing(self.project_id()).await?;
        info!(
            "event=pairing_saved project_id={} new_entries={}",
            self.project_id(),
            new_entries.len()
        );
        self.state_tx
            .send_modify(|state| state.pairing_history.extend(new_entries));
        // A closed alert channel only means nobody is listening anymore; the
        // save itself has already settled.
        let _ = self.alerts.send(PAIRS_RECORDED_ALERT.to_string());
        Ok(())
    }

    fn adopt_project(&self, canonical: Project) {
        self.state_tx
            .send_modify(|state| state.project = canonical);
    }
}
