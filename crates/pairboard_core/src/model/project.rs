//! Project aggregate and its location helpers.
//!
//! # Responsibility
//! - Mirror the remote service's canonical project shape.
//! - Answer "where is this person/role right now" queries.
//! - Apply single-step placement changes used by optimistic updates.
//!
//! # Invariants
//! - Ids are assigned by the remote service and never invented locally.
//! - Placement helpers move entities; they never clone one into two places.

use serde::{Deserialize, Serialize};

/// Stable identifier for a project, assigned by the remote service.
pub type ProjectId = i64;
/// Stable identifier for a person.
pub type PersonId = i64;
/// Stable identifier for a pairing board.
pub type BoardId = i64;
/// Stable identifier for a role.
pub type RoleId = i64;

/// A person, either floating on the project or assigned to one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A named role pinned to exactly one pairing board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One pairing board with its assigned people and roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingBoard {
    pub id: BoardId,
    pub name: String,
    pub people: Vec<Person>,
    pub roles: Vec<Role>,
}

impl PairingBoard {
    /// Creates an empty board.
    pub fn new(id: BoardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            people: Vec::new(),
            roles: Vec::new(),
        }
    }

    pub fn has_person(&self, person_id: PersonId) -> bool {
        self.people.iter().any(|p| p.id == person_id)
    }

    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.iter().any(|r| r.id == role_id)
    }
}

/// Root aggregate mirrored from the remote service.
///
/// `people` holds the floating (unassigned) people. Field names serialize
/// as camelCase to match the service's JSON naming (`pairingBoards`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub people: Vec<Person>,
    pub pairing_boards: Vec<PairingBoard>,
}

impl Project {
    /// Creates a project with no people and no boards.
    pub fn new(id: ProjectId) -> Self {
        Self {
            id,
            people: Vec::new(),
            pairing_boards: Vec::new(),
        }
    }

    /// Returns the board with the given id.
    pub fn board(&self, board_id: BoardId) -> Option<&PairingBoard> {
        self.pairing_boards.iter().find(|b| b.id == board_id)
    }

    fn board_mut(&mut self, board_id: BoardId) -> Option<&mut PairingBoard> {
        self.pairing_boards.iter_mut().find(|b| b.id == board_id)
    }

    /// Returns the board currently holding the given person, if any.
    pub fn board_with_person(&self, person_id: PersonId) -> Option<&PairingBoard> {
        self.pairing_boards.iter().find(|b| b.has_person(person_id))
    }

    /// Returns the board currently holding the given role, if any.
    pub fn board_with_role(&self, role_id: RoleId) -> Option<&PairingBoard> {
        self.pairing_boards.iter().find(|b| b.has_role(role_id))
    }

    /// Removes the person from wherever they currently sit.
    ///
    /// Checks the floating list first, then every board. Returns `None` when
    /// the person is nowhere in the project; removal of an absent person is
    /// not an error.
    pub fn remove_person(&mut self, person_id: PersonId) -> Option<Person> {
        if let Some(index) = self.people.iter().position(|p| p.id == person_id) {
            return Some(self.people.remove(index));
        }
        for board in &mut self.pairing_boards {
            if let Some(index) = board.people.iter().position(|p| p.id == person_id) {
                return Some(board.people.remove(index));
            }
        }
        None
    }

    /// Places a person onto the target board, or into floating when `None`.
    ///
    /// Returns `false` when the target board id does not exist locally; the
    /// project is left unchanged in that case.
    pub fn add_person(&mut self, person: Person, target: Option<BoardId>) -> bool {
        match target {
            None => {
                self.people.push(person);
                true
            }
            Some(board_id) => match self.board_mut(board_id) {
                Some(board) => {
                    board.people.push(person);
                    true
                }
                None => false,
            },
        }
    }

    /// Removes the role from the board holding it.
    ///
    /// Returns the source board id alongside the role so callers can address
    /// the remote position call. `None` when no board holds the role.
    pub fn remove_role(&mut self, role_id: RoleId) -> Option<(BoardId, Role)> {
        for board in &mut self.pairing_boards {
            if let Some(index) = board.roles.iter().position(|r| r.id == role_id) {
                return Some((board.id, board.roles.remove(index)));
            }
        }
        None
    }

    /// Places a role onto the target board.
    ///
    /// Returns `false` when the target board id does not exist locally.
    pub fn add_role(&mut self, role: Role, target: BoardId) -> bool {
        match self.board_mut(target) {
            Some(board) => {
                board.roles.push(role);
                true
            }
            None => false,
        }
    }

    /// Removes a board from the project and returns it with its contents.
    pub fn detach_board(&mut self, board_id: BoardId) -> Option<PairingBoard> {
        let index = self
            .pairing_boards
            .iter()
            .position(|b| b.id == board_id)?;
        Some(self.pairing_boards.remove(index))
    }

    /// Moves every assigned person back to floating, emptying all boards.
    ///
    /// Roles stay where they are. Applying this twice is the same as once.
    pub fn float_all_people(&mut self) {
        for board in &mut self.pairing_boards {
            self.people.append(&mut board.people);
        }
    }
}
