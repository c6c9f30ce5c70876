use leptos::prelude::*;

use crate::core::models::{BoardAction, Category, MatrixState};
use crate::core::services::{DragError, DragToken, DragTracker};

// Apply an action to the page state and log what happened. Subscribers are
// only notified when the action actually changed something.
pub fn dispatch(state_signal: RwSignal<MatrixState>, action: BoardAction) -> bool {
    let summary = log::log_enabled!(log::Level::Debug).then(|| format!("{:?}", action));
    let mut changed = false;
    state_signal.maybe_update(|state| {
        changed = state.apply(action);
        changed
    });

    if let Some(summary) = summary {
        if changed {
            log::debug!("applied {}", summary);
        } else {
            log::debug!("ignored {}", summary);
        }
    }
    changed
}

pub fn set_pending_input(state_signal: RwSignal<MatrixState>, text: String) {
    dispatch(state_signal, BoardAction::SetPendingInput(text));
}

// Add whatever is currently typed in the input bar
pub fn add_pending_task(state_signal: RwSignal<MatrixState>) {
    let text = state_signal.with_untracked(|state| state.pending_input.clone());
    dispatch(state_signal, BoardAction::AddTask(text));
}

pub fn delete_task(state_signal: RwSignal<MatrixState>, category: Category, task_id: String) {
    dispatch(state_signal, BoardAction::DeleteTask { category, task_id });
}

pub fn begin_drag(
    tracker_signal: RwSignal<DragTracker>,
    task_id: String,
    source: Category,
) -> DragToken {
    tracker_signal
        .try_update(|tracker| tracker.begin_drag(task_id.clone(), source))
        .unwrap_or(DragToken {
            id: task_id,
            source_category: source,
        })
}

// Finish a drop on `target`. A token that could not be read off the drag
// transfer is absorbed: the gesture ends and the board stays as it was.
pub fn complete_drag(
    state_signal: RwSignal<MatrixState>,
    tracker_signal: RwSignal<DragTracker>,
    token: Result<DragToken, DragError>,
    target: Category,
) {
    let token = match token {
        Ok(token) => token,
        Err(e) => {
            log::debug!("dropped unreadable payload on {}: {}", target, e);
            cancel_drag(tracker_signal);
            return;
        }
    };

    let action = tracker_signal
        .try_update(|tracker| tracker.complete_drag(token, target))
        .flatten();

    if let Some(action) = action {
        dispatch(state_signal, action);
    }
}

pub fn cancel_drag(tracker_signal: RwSignal<DragTracker>) {
    let dragging = tracker_signal.with_untracked(|tracker| tracker.active().is_some());
    if dragging {
        tracker_signal.update(DragTracker::cancel);
    }
}
