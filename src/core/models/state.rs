use super::{Category, TaskBoard};

/// Everything the matrix page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixState {
    pub board: TaskBoard,
    pub pending_input: String,
}

/// A single mutation request coming out of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    SetPendingInput(String),
    AddTask(String),
    DeleteTask { category: Category, task_id: String },
    MoveTask { source: Category, target: Category, task_id: String },
}

impl MatrixState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` in place and reports whether anything changed.
    /// Invalid requests (blank text, unknown ids, same-quadrant moves) are
    /// absorbed as no-ops.
    pub fn apply(&mut self, action: BoardAction) -> bool {
        match action {
            BoardAction::SetPendingInput(text) => {
                if self.pending_input == text {
                    return false;
                }
                self.pending_input = text;
                true
            }
            BoardAction::AddTask(text) => {
                if self.board.add_task(&text).is_none() {
                    return false;
                }
                self.pending_input.clear();
                true
            }
            BoardAction::DeleteTask { category, task_id } => {
                self.board.delete_task(category, &task_id)
            }
            BoardAction::MoveTask { source, target, task_id } => {
                self.board.move_task(source, target, &task_id)
            }
        }
    }
}

/// Reducer form of [`MatrixState::apply`]: old state + action -> new state.
pub fn reduce(mut state: MatrixState, action: BoardAction) -> MatrixState {
    state.apply(action);
    state
}
