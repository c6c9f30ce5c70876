use leptos::prelude::*;

use crate::core::models::{Category, MatrixState, Task};
use crate::core::services::{DragError, DragToken, DragTracker};
use crate::features::matrix::services as ops;

/// Return type for the `use_board` hook
pub struct BoardHook {
    pub state: ReadSignal<MatrixState>,
    pub tracker: ReadSignal<DragTracker>,
    pub set_input: Callback<String>,
    pub add_task: Callback<()>,
    pub delete_task: Callback<(Category, String)>,
    pub begin_drag: Callback<(String, Category), DragToken>,
    pub complete_drag: Callback<(Result<DragToken, DragError>, Category)>,
    pub cancel_drag: Callback<()>,
}

impl BoardHook {
    /// Tasks of one quadrant. Only notifies when that quadrant's list changes,
    /// so typing in the input bar does not rebuild the cards.
    pub fn tasks(&self, category: Category) -> Memo<Vec<Task>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.board.tasks(category).to_vec()))
    }

    pub fn pending_input(&self) -> Memo<String> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.pending_input.clone()))
    }
}

/// Owns the page state and the drag tracker, and exposes every mutation as a
/// `Callback` so components never touch the signals directly.
pub fn use_board() -> BoardHook {
    let state = RwSignal::new(MatrixState::new());
    let tracker = RwSignal::new(DragTracker::default());

    let set_input = Callback::new(move |text: String| ops::set_pending_input(state, text));

    let add_task = Callback::new(move |_: ()| ops::add_pending_task(state));

    let delete_task = Callback::new(move |(category, task_id): (Category, String)| {
        ops::delete_task(state, category, task_id);
    });

    let begin_drag = Callback::new(move |(task_id, source): (String, Category)| {
        ops::begin_drag(tracker, task_id, source)
    });

    let complete_drag =
        Callback::new(move |(token, target): (Result<DragToken, DragError>, Category)| {
            ops::complete_drag(state, tracker, token, target);
        });

    let cancel_drag = Callback::new(move |_: ()| ops::cancel_drag(tracker));

    BoardHook {
        state: state.read_only(),
        tracker: tracker.read_only(),
        set_input,
        add_task,
        delete_task,
        begin_drag,
        complete_drag,
        cancel_drag,
    }
}
