//! Two-phase drag protocol: `begin_drag` hands out a [`DragToken`] that
//! travels through the platform's drag transfer as JSON; `complete_drag`
//! turns it into a move request for the drop target.
//!
//! The token read back at drop time is authoritative. [`DragTracker`] only
//! remembers the in-flight gesture so the UI can style the dragged card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{BoardAction, Category};

/// Format the token is written under on the drag transfer.
pub const DRAG_FORMAT: &str = "text/plain";

#[derive(Debug, Error)]
pub enum DragError {
    #[error("drag transfer carried no data")]
    Empty,
    #[error("malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("drag transfer unavailable: {0}")]
    Transfer(String),
}

/// Identity and origin of the task being dragged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DragToken {
    pub id: String,
    pub source_category: Category,
}

impl DragToken {
    pub fn encode(&self) -> Result<String, DragError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> Result<Self, DragError> {
        if raw.trim().is_empty() {
            return Err(DragError::Empty);
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragTracker {
    #[default]
    Idle,
    Dragging(DragToken),
}

impl DragTracker {
    pub fn begin_drag(&mut self, task_id: impl Into<String>, source: Category) -> DragToken {
        let token = DragToken {
            id: task_id.into(),
            source_category: source,
        };
        *self = DragTracker::Dragging(token.clone());
        token
    }

    /// Ends the gesture on `target`. Returns the move to apply, or `None`
    /// when the drop lands back on the source quadrant.
    pub fn complete_drag(&mut self, token: DragToken, target: Category) -> Option<BoardAction> {
        *self = DragTracker::Idle;
        if token.source_category == target {
            return None;
        }
        Some(BoardAction::MoveTask {
            source: token.source_category,
            target,
            task_id: token.id,
        })
    }

    pub fn cancel(&mut self) {
        *self = DragTracker::Idle;
    }

    pub fn active(&self) -> Option<&DragToken> {
        match self {
            DragTracker::Idle => None,
            DragTracker::Dragging(token) => Some(token),
        }
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.active().is_some_and(|token| token.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::MatrixState;

    #[test]
    fn token_uses_camel_case_wire_fields() {
        let token = DragToken {
            id: "42".into(),
            source_category: Category::UrgentNotImportant,
        };

        let raw = token.encode().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["id"], "42");
        assert_eq!(json["sourceCategory"], "urgentNotImportant");
        assert_eq!(DragToken::decode(&raw).unwrap(), token);
    }

    #[test]
    fn decode_rejects_empty_transfer() {
        assert!(matches!(DragToken::decode(""), Err(DragError::Empty)));
        assert!(matches!(DragToken::decode("  "), Err(DragError::Empty)));
    }

    #[test]
    fn decode_rejects_foreign_payloads() {
        // Plain text dragged in from elsewhere on the page.
        assert!(matches!(DragToken::decode("Buy candy"), Err(DragError::Malformed(_))));
        assert!(matches!(
            DragToken::decode(r#"{"id":"1","sourceCategory":"someday"}"#),
            Err(DragError::Malformed(_))
        ));
        assert!(matches!(DragToken::decode(r#"{"id":"1"}"#), Err(DragError::Malformed(_))));
    }

    #[test]
    fn tracker_walks_idle_dragging_idle() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.active(), None);

        let token = tracker.begin_drag("x", Category::ImportantNotUrgent);
        assert!(tracker.is_dragging("x"));
        assert!(!tracker.is_dragging("y"));

        let action = tracker.complete_drag(token, Category::UrgentImportant);
        assert_eq!(tracker, DragTracker::Idle);
        assert_eq!(
            action,
            Some(BoardAction::MoveTask {
                source: Category::ImportantNotUrgent,
                target: Category::UrgentImportant,
                task_id: "x".into(),
            })
        );
    }

    #[test]
    fn drop_on_source_quadrant_yields_nothing() {
        let mut tracker = DragTracker::default();
        let token = tracker.begin_drag("x", Category::UrgentImportant);

        assert_eq!(tracker.complete_drag(token, Category::UrgentImportant), None);
        assert_eq!(tracker, DragTracker::Idle);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut tracker = DragTracker::default();
        tracker.begin_drag("x", Category::UrgentImportant);

        tracker.cancel();

        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn transferred_token_wins_over_tracker_slot() {
        let mut tracker = DragTracker::default();
        tracker.begin_drag("other", Category::UrgentImportant);
        let raw = r#"{"id":"t1","sourceCategory":"notUrgentNotImportant"}"#;
        let from_transfer = DragToken::decode(raw).unwrap();

        let action = tracker.complete_drag(from_transfer, Category::ImportantNotUrgent);

        assert_eq!(
            action,
            Some(BoardAction::MoveTask {
                source: Category::NotUrgentNotImportant,
                target: Category::ImportantNotUrgent,
                task_id: "t1".into(),
            })
        );
    }

    #[test]
    fn full_gesture_moves_task_on_board() {
        let mut state = MatrixState::new();
        state.apply(BoardAction::AddTask("Buy candy".into()));
        let id = state.board.tasks(Category::DEFAULT)[0].id.clone();
        let mut tracker = DragTracker::default();

        let raw = tracker.begin_drag(id.clone(), Category::DEFAULT).encode().unwrap();
        let token = DragToken::decode(&raw).unwrap();
        if let Some(action) = tracker.complete_drag(token, Category::UrgentImportant) {
            state.apply(action);
        }

        assert_eq!(state.board.locate(&id), Some(Category::UrgentImportant));
        assert_eq!(state.board.len(), 1);
    }

    #[test]
    fn stale_token_leaves_board_alone() {
        let mut state = MatrixState::new();
        state.apply(BoardAction::AddTask("kept".into()));
        let before = state.clone();
        let mut tracker = DragTracker::default();

        let token = tracker.begin_drag("deleted-meanwhile", Category::DEFAULT);
        if let Some(action) = tracker.complete_drag(token, Category::UrgentImportant) {
            assert!(!state.apply(action));
        }

        assert_eq!(state, before);
    }
}
