use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task with a fresh random id. Callers are expected to have
    /// trimmed and validated `content` already.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tasks_get_distinct_ids() {
        let a = Task::new("Carve pumpkin");
        let b = Task::new("Carve pumpkin");

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.content, "Carve pumpkin");
    }
}
