use super::{Category, Task};

/// Every quadrant's ordered task list. All four quadrants always exist;
/// insertion order is display order.
///
/// A task id lives in at most one quadrant at a time: tasks only enter the
/// board through [`TaskBoard::add_task`] (fresh id) and only change quadrant
/// through [`TaskBoard::move_task`] (remove, then append).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    lists: [Vec<Task>; 4],
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, category: Category) -> &[Task] {
        &self.lists[category.index()]
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Quadrant currently holding `task_id`, if any.
    pub fn locate(&self, task_id: &str) -> Option<Category> {
        Category::all()
            .into_iter()
            .find(|category| self.tasks(*category).iter().any(|t| t.id == task_id))
    }

    /// Appends a new task to the default quadrant. Blank text is ignored.
    /// Returns the new task's id.
    pub fn add_task(&mut self, text: &str) -> Option<String> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }

        let task = Task::new(content);
        let id = task.id.clone();
        self.lists[Category::DEFAULT.index()].push(task);
        Some(id)
    }

    /// Removes `task_id` from `category`. Returns whether anything was removed.
    pub fn delete_task(&mut self, category: Category, task_id: &str) -> bool {
        let list = &mut self.lists[category.index()];
        let before = list.len();
        list.retain(|t| t.id != task_id);
        list.len() != before
    }

    /// Moves `task_id` from `source` to the end of `target`. Same-quadrant
    /// moves and ids missing from `source` leave the board untouched.
    pub fn move_task(&mut self, source: Category, target: Category, task_id: &str) -> bool {
        if source == target {
            return false;
        }

        let source_list = &mut self.lists[source.index()];
        let Some(index) = source_list.iter().position(|t| t.id == task_id) else {
            return false;
        };

        let task = source_list.remove(index);
        self.lists[target.index()].push(task);
        true
    }
}
