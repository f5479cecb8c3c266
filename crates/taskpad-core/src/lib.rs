//! Domain types and pure derivation logic for taskpad.

/// Identifier types.
pub mod id;
/// Pagination over derived views.
pub mod pager;
/// Status filtering.
pub mod status;
/// Case-insensitive text search.
pub mod text_matcher;
/// Visible-view derivation.
pub mod view;

pub use pager::Pager;
pub use status::StatusFilter;
pub use text_matcher::TextMatcher;
pub use view::visible;

use crate::id::TaskId;
use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, assigned at creation. Slots written by older
    /// versions carry bare `{text, completed}` records; those get a
    /// fresh id on load.
    #[serde(default = "TaskId::new")]
    pub id: TaskId,
    /// Human-readable text, trimmed and non-empty once stored.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
}

impl Task {
    /// Build a task from already-trimmed text.
    fn new(text: String) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
        }
    }
}

/// Ordered task list. Insertion order is display order before filtering.
///
/// All mutations address tasks by [`TaskId`] and leave every other task
/// untouched and in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskBook {
    tasks: Vec<Task>,
}

impl TaskBook {
    /// Empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Wrap an existing task list, e.g. one loaded from storage.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the book holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Append a task with the trimmed text and return its id.
    ///
    /// Blank input is silently rejected: the book is unchanged and no id
    /// is returned.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed.to_owned());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Remove the task with the given id, preserving the relative order
    /// of all survivors. Returns the removed task when it existed.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    /// Flip the completion flag of the given task. Returns `true` when a
    /// task with that id existed. Two consecutive toggles restore the
    /// original book.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Replace the text of the given task with the trimmed value.
    ///
    /// Blank replacement text is silently rejected, leaving the task as
    /// it was. Returns `true` only when the new text was applied.
    pub fn rename(&mut self, id: TaskId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                trimmed.clone_into(&mut task.text);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(texts: &[&str]) -> TaskBook {
        let mut book = TaskBook::new();
        for text in texts {
            assert!(book.add(text).is_some(), "fixture text must be non-blank");
        }
        book
    }

    #[test]
    fn add_appends_pending_task_with_trimmed_text() {
        let mut book = TaskBook::new();
        let id = book.add("  buy milk  ").unwrap_or_else(|| panic!("non-blank add must succeed"));

        assert_eq!(book.len(), 1);
        let task = book.get(id).unwrap_or_else(|| panic!("added task must exist"));
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut book = book_with(&["walk dog"]);
        let before = book.clone();

        assert!(book.add("").is_none());
        assert!(book.add("   ").is_none());
        assert!(book.add("\n\t").is_none());
        assert_eq!(book, before);
    }

    #[test]
    fn toggle_is_idempotent_under_double_application() {
        let mut book = book_with(&["buy milk", "walk dog"]);
        let original = book.clone();
        let id = book.tasks()[1].id;

        assert!(book.toggle(id));
        assert!(book.tasks()[1].completed);
        assert_eq!(book.tasks()[0], original.tasks()[0]);

        assert!(book.toggle(id));
        assert_eq!(book, original);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut book = book_with(&["buy milk"]);
        let before = book.clone();
        assert!(!book.toggle(TaskId::new()));
        assert_eq!(book, before);
    }

    #[test]
    fn remove_preserves_order_of_survivors() {
        let mut book = book_with(&["a", "b", "c", "d"]);
        let id = book.tasks()[1].id;

        let removed = book.remove(id).unwrap_or_else(|| panic!("task must be removed"));
        assert_eq!(removed.text, "b");
        assert_eq!(book.len(), 3);
        let texts: Vec<_> = book.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
    }

    #[test]
    fn rename_trims_and_rejects_blank() {
        let mut book = book_with(&["draft"]);
        let id = book.tasks()[0].id;

        assert!(book.rename(id, "  final  "));
        assert_eq!(book.tasks()[0].text, "final");

        assert!(!book.rename(id, "   "));
        assert_eq!(book.tasks()[0].text, "final");
    }

    #[test]
    fn rename_keeps_completion_flag() {
        let mut book = book_with(&["draft"]);
        let id = book.tasks()[0].id;
        book.toggle(id);

        assert!(book.rename(id, "final"));
        assert!(book.tasks()[0].completed);
    }

    #[test]
    fn serde_roundtrip_preserves_book() {
        let mut book = book_with(&["buy milk", "walk dog"]);
        book.toggle(book.tasks()[1].id);

        let json = serde_json::to_string(&book).unwrap_or_else(|err| panic!("serialize: {err}"));
        let restored: TaskBook =
            serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));
        assert_eq!(restored, book);
    }

    #[test]
    fn legacy_records_without_id_get_fresh_ids() {
        let json = r#"[{"text":"buy milk","completed":false},{"text":"walk dog","completed":true}]"#;
        let book: TaskBook =
            serde_json::from_str(json).unwrap_or_else(|err| panic!("deserialize legacy: {err}"));

        assert_eq!(book.len(), 2);
        assert_eq!(book.tasks()[0].text, "buy milk");
        assert!(book.tasks()[1].completed);
        assert_ne!(book.tasks()[0].id, book.tasks()[1].id);
    }
}
