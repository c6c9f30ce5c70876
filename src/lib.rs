//! Eisenhower-matrix task board rendered with Leptos.
//!
//! `core` holds the board model, the drag protocol and startup config and
//! has no DOM dependency; `features` and `pages` are the Leptos UI on top.

pub mod app;
pub mod core;
pub mod features;
pub mod pages;

pub use crate::core::config::AppConfig;
pub use crate::core::models::{reduce, BoardAction, Category, MatrixState, Task, TaskBoard};
pub use crate::core::services::{DragToken, DragTracker};
