pub mod board;
pub mod category;
pub mod state;
pub mod task;

pub use board::TaskBoard;
pub use category::{Category, QuadrantInfo};
pub use state::{reduce, BoardAction, MatrixState};
pub use task::Task;
