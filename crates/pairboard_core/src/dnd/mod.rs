//! Drag-and-drop interaction boundary.
//!
//! # Responsibility
//! - Name the draggable kinds and drop-target categories the UI exchanges
//!   with the state layer.
//! - Report completed drops so the UI can invoke the matching coordinator
//!   operation.
//!
//! # Invariants
//! - Drop targets report; they never mutate project state themselves.

/// The two draggable kinds on a pairing board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Person,
    Role,
}

/// Category of the target a drag landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    /// A pairing board; maps to a move operation.
    PairingBoard,
    /// The floating people list; maps to a move-to-floating operation.
    Floating,
    /// The trash bin; maps to a delete operation.
    TrashBin,
}

/// What a drop target hands back after a completed drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropReport {
    /// Display name of the target, e.g. `Trash`.
    pub target_name: String,
    pub kind: DropKind,
}

/// A target a drag gesture can land on.
pub trait DropTarget {
    /// Whether this target takes the given drag kind at all.
    fn accepts(&self, drag: DragKind) -> bool;

    /// Registers a drop and reports it, or `None` when the kind is not
    /// accepted here.
    fn receive(&self, drag: DragKind) -> Option<DropReport>;
}

/// Drop target that removes items via drag gesture.
///
/// Accepts both drag kinds and only reports that the drop happened; the
/// consuming UI decides to call `delete_person` or `delete_role`.
#[derive(Debug, Default)]
pub struct TrashBin;

impl TrashBin {
    pub const NAME: &'static str = "Trash";

    pub fn new() -> Self {
        Self
    }
}

impl DropTarget for TrashBin {
    fn accepts(&self, drag: DragKind) -> bool {
        matches!(drag, DragKind::Person | DragKind::Role)
    }

    fn receive(&self, drag: DragKind) -> Option<DropReport> {
        if !self.accepts(drag) {
            return None;
        }
        Some(DropReport {
            target_name: Self::NAME.to_string(),
            kind: DropKind::TrashBin,
        })
    }
}
