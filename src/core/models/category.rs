use serde::{Deserialize, Serialize};

/// One of the four fixed quadrants of the matrix.
///
/// Serialized with the camelCase identifiers used on the drag payload
/// (`urgentImportant`, `importantNotUrgent`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    UrgentImportant,
    ImportantNotUrgent,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

/// Static display metadata for a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantInfo {
    pub title: &'static str,
    pub action: &'static str,
    pub icon: &'static str,
}

impl Category {
    /// Quadrant new tasks land in.
    pub const DEFAULT: Category = Category::NotUrgentNotImportant;

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::UrgentImportant => "urgentImportant",
            Category::ImportantNotUrgent => "importantNotUrgent",
            Category::UrgentNotImportant => "urgentNotImportant",
            Category::NotUrgentNotImportant => "notUrgentNotImportant",
        }
    }

    /// All quadrants in display order (row-major over the 2x2 grid).
    pub fn all() -> [Category; 4] {
        [
            Category::UrgentImportant,
            Category::ImportantNotUrgent,
            Category::UrgentNotImportant,
            Category::NotUrgentNotImportant,
        ]
    }

    pub fn info(&self) -> QuadrantInfo {
        match self {
            Category::UrgentImportant => QuadrantInfo {
                title: "Urgent & Important",
                action: "Do it now",
                icon: "🎃",
            },
            Category::ImportantNotUrgent => QuadrantInfo {
                title: "Important, Not Urgent",
                action: "Schedule it",
                icon: "🕷️",
            },
            Category::UrgentNotImportant => QuadrantInfo {
                title: "Urgent, Not Important",
                action: "Delegate if possible",
                icon: "👻",
            },
            Category::NotUrgentNotImportant => QuadrantInfo {
                title: "Not Urgent, Not Important",
                action: "Eliminate or postpone",
                icon: "🦇",
            },
        }
    }

    // Index into the board's fixed-size storage.
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::UrgentImportant => 0,
            Category::ImportantNotUrgent => 1,
            Category::UrgentNotImportant => 2,
            Category::NotUrgentNotImportant => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
