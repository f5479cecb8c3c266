use std::collections::HashMap;

use taskpad_core::id::TaskId;
use taskpad_core::{Pager, StatusFilter, Task, TaskBook, TextMatcher, visible};
use tracing::warn;

use crate::store::SlotStore;

/// One page of the derived view, ready for rendering.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Tasks on the current page, in display order.
    pub items: Vec<&'a Task>,
    /// Current page, 1-based.
    pub page: usize,
    /// Total pages for the current derivation.
    pub total_pages: usize,
    /// Length of the full derived view across all pages.
    pub visible_len: usize,
}

/// Transient edit state for one task. Lives only while the session is
/// open; never persisted.
#[derive(Debug, Clone)]
struct EditSession {
    buffer: String,
}

/// The task-list state container.
///
/// Owns the task book, the draft-input buffer, the status filter, the
/// search text, per-task edit sessions and the pager. Every successful
/// mutation rewrites the storage slot in full; write failures are logged
/// and swallowed so the in-memory state always keeps the mutation.
pub struct Session<S: SlotStore> {
    store: S,
    book: TaskBook,
    draft: String,
    filter: StatusFilter,
    search: String,
    edits: HashMap<TaskId, EditSession>,
    pager: Pager,
}

impl<S: SlotStore> Session<S> {
    /// Open a session seeded from the store (empty when the slot is
    /// absent or invalid).
    pub fn open(store: S, page_size: usize) -> Self {
        let book = store.load();
        Self {
            store,
            book,
            draft: String::new(),
            filter: StatusFilter::default(),
            search: String::new(),
            edits: HashMap::new(),
            pager: Pager::new(page_size),
        }
    }

    /// All tasks in insertion order, before any filtering.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.book.tasks()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.book.get(id)
    }

    // --- draft input -----------------------------------------------------

    /// Current draft text for a new task.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Submit the draft as a new task. Blank drafts are ignored; on
    /// success the draft is cleared and the new id returned.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = std::mem::take(&mut self.draft);
        match self.add(&draft) {
            Some(id) => Some(id),
            None => {
                // Blank submit: nothing changed, keep what was typed.
                self.draft = draft;
                None
            }
        }
    }

    // --- mutations -------------------------------------------------------

    /// Append a task. Blank text is a silent no-op.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = self.book.add(text)?;
        self.after_mutation();
        Some(id)
    }

    /// Delete a task, dropping any edit session attached to it.
    pub fn delete(&mut self, id: TaskId) -> bool {
        if self.book.remove(id).is_none() {
            return false;
        }
        self.edits.remove(&id);
        self.after_mutation();
        true
    }

    /// Flip a task's completion flag.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        if !self.book.toggle(id) {
            return false;
        }
        self.after_mutation();
        true
    }

    // --- edit sessions ---------------------------------------------------

    /// Open an edit session for the task, seeded with its current text.
    /// No-op for unknown ids; reopening resets the buffer.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.book.get(id) else {
            return false;
        };
        self.edits.insert(
            id,
            EditSession {
                buffer: task.text.clone(),
            },
        );
        true
    }

    /// Whether the task currently has an open edit session.
    #[must_use]
    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edits.contains_key(&id)
    }

    /// Pending edit text, only meaningful while the session is open.
    #[must_use]
    pub fn edit_text(&self, id: TaskId) -> Option<&str> {
        self.edits.get(&id).map(|edit| edit.buffer.as_str())
    }

    /// Overwrite the pending edit text. No validation; the buffer can
    /// hold anything until save.
    pub fn update_edit_text(&mut self, id: TaskId, text: impl Into<String>) {
        if let Some(edit) = self.edits.get_mut(&id) {
            edit.buffer = text.into();
        }
    }

    /// Close the edit session without committing. The task is unchanged.
    pub fn cancel_edit(&mut self, id: TaskId) {
        self.edits.remove(&id);
    }

    /// Commit the pending edit text and close the session.
    ///
    /// A blank buffer is rejected: the task keeps its text and the
    /// session stays open so the user can fix the input. Returns `true`
    /// only when the edit was committed.
    pub fn save_edit(&mut self, id: TaskId) -> bool {
        let Some(edit) = self.edits.get(&id) else {
            return false;
        };
        let buffer = edit.buffer.clone();
        if !self.book.rename(id, &buffer) {
            return false;
        }
        self.edits.remove(&id);
        self.after_mutation();
        true
    }

    // --- filter and search -----------------------------------------------

    /// Active status filter.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Set the status filter. Changing it resets pagination to page 1.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        self.pager.reset();
    }

    /// Cycle the filter: All -> Completed -> Pending -> All.
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Active search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Set the search text. Changing it resets pagination to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search == search {
            return;
        }
        self.search = search;
        self.pager.reset();
    }

    // --- derived views ---------------------------------------------------

    /// Full derived view for the active filter and search, in source
    /// order. Recomputed on every call; never mutates the book.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        let matcher = TextMatcher::new(&self.search);
        visible(self.book.tasks(), self.filter, matcher.as_ref())
    }

    /// The current page of the derived view.
    #[must_use]
    pub fn page_view(&self) -> PageView<'_> {
        let all = self.visible();
        let visible_len = all.len();
        let total_pages = self.pager.total_pages(visible_len);
        let items = self.pager.slice(&all).to_vec();
        PageView {
            items,
            page: self.pager.page(),
            total_pages,
            visible_len,
        }
    }

    // --- pagination ------------------------------------------------------

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.pager.page()
    }

    /// Advance one page, clamped at the last page of the current view.
    pub fn next_page(&mut self) {
        let len = self.visible().len();
        self.pager.next(len);
    }

    /// Go back one page, clamped at page 1.
    pub const fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Jump to a page, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        let len = self.visible().len();
        self.pager.set_page(page, len);
    }

    // --- persistence -----------------------------------------------------

    fn after_mutation(&mut self) {
        let len = self.visible().len();
        self.pager.clamp(len);
        self.persist();
    }

    /// Fire-and-forget slot rewrite: failures are logged, never surfaced,
    /// and the in-memory mutation stands.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.book) {
            warn!(%err, "Failed to write task slot");
        }
    }
}
