pub mod header;
pub mod quadrant;
pub mod task_card;
pub mod task_input;

pub use header::MatrixHeader;
pub use quadrant::Quadrant;
pub use task_card::TaskCard;
pub use task_input::TaskInput;
