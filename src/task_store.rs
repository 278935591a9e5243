//! Task Store
//!
//! The single owned task list. Mutations are computed against the committed
//! list and only become the new state after the host confirms the save, so
//! a failed write leaves the list as it was. Nothing is saved until the
//! initial load has been installed.

use crate::models::Task;
use crate::ordering::{renumber, sort_for_display};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// List handed to the host and not yet confirmed
    pending: Option<Vec<Task>>,
    /// Bumped whenever a save settles, successful or not
    revision: u32,
    /// Set once the persisted list has been installed
    loaded: bool,
}

pub fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            loaded: true,
            ..Default::default()
        }
    }

    /// Install the list read at startup. Refused while a save is in flight.
    pub fn finish_load(&mut self, tasks: Vec<Task>) -> bool {
        if self.is_saving() {
            return false;
        }
        self.tasks = tasks;
        self.loaded = true;
        self.refresh();
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Committed list in display order
    pub fn display(&self) -> Vec<Task> {
        sort_for_display(&self.tasks)
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    /// Last record with `id`; duplicates resolve to the later one
    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().rposition(|t| t.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = new_task_id();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    // ========================
    // Mutations (None = nothing to persist)
    // ========================

    pub fn add(&self, text: &str) -> Option<Vec<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let mut next = self.tasks.clone();
        next.push(Task {
            id: self.fresh_id(),
            text: text.to_string(),
            done: false,
            order: self.tasks.len() as i32,
        });
        Some(next)
    }

    pub fn remove(&self, id: &str) -> Option<Vec<Task>> {
        self.position(id)?;
        Some(self.tasks.iter().filter(|t| t.id != id).cloned().collect())
    }

    /// Empty or unchanged text cancels the edit
    pub fn set_text(&self, id: &str, text: &str) -> Option<Vec<Task>> {
        let idx = self.position(id)?;
        let text = text.trim();
        if text.is_empty() || text == self.tasks[idx].text {
            return None;
        }
        let mut next = self.tasks.clone();
        next[idx].text = text.to_string();
        Some(next)
    }

    /// Flip completion, move the task to the edge of its new group (bottom of
    /// the completed ones, top of the open ones) and renumber everything.
    pub fn set_done(&self, id: &str, done: bool) -> Option<Vec<Task>> {
        let idx = self.position(id)?;
        if self.tasks[idx].done == done {
            return None;
        }

        let mut others = self.tasks.clone();
        let mut toggled = others.remove(idx);
        toggled.done = done;
        let (open, completed): (Vec<Task>, Vec<Task>) =
            sort_for_display(&others).into_iter().partition(|t| !t.done);

        let mut next = Vec::with_capacity(self.tasks.len());
        if done {
            next.extend(open);
            next.extend(completed);
            next.push(toggled);
        } else {
            next.push(toggled);
            next.extend(open);
            next.extend(completed);
        }
        renumber(&mut next);
        Some(next)
    }

    // ========================
    // Save lifecycle
    // ========================

    /// Reserve the single save slot. Returns the list to send, or `None`
    /// before the initial load or while another save is still in flight.
    pub fn begin_save(&mut self, next: Vec<Task>) -> Option<Vec<Task>> {
        if !self.loaded || self.pending.is_some() {
            return None;
        }
        self.pending = Some(next.clone());
        Some(next)
    }

    /// Commit the pending list on success, drop it on failure.
    /// Returns whether a list was committed.
    pub fn finish_save(&mut self, saved: bool) -> bool {
        let committed = match self.pending.take() {
            Some(next) if saved => {
                self.tasks = next;
                true
            }
            _ => false,
        };
        self.refresh();
        committed
    }

    /// Force rows to redraw from the committed list
    pub fn refresh(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task;

    fn abc() -> TaskStore {
        TaskStore::new(vec![task("A", false, 0), task("B", false, 1), task("C", false, 2)])
    }

    fn summary(tasks: &[Task]) -> Vec<(&str, i32, bool)> {
        tasks.iter().map(|t| (t.id.as_str(), t.order, t.done)).collect()
    }

    fn commit(store: &mut TaskStore, next: Vec<Task>) {
        store.begin_save(next).expect("save slot should be free");
        store.finish_save(true);
    }

    #[test]
    fn test_add_appends_with_next_order() {
        let store = abc();
        let next = store.add("  Water plants ").unwrap();
        assert_eq!(next.len(), 4);
        let added = &next[3];
        assert_eq!(added.text, "Water plants");
        assert!(!added.done);
        assert_eq!(added.order, 3);
        assert!(store.tasks().iter().all(|t| t.id != added.id));
    }

    #[test]
    fn test_add_blank_is_noop() {
        let store = abc();
        assert!(store.add("").is_none());
        assert!(store.add("   ").is_none());
        assert_eq!(store.tasks().len(), 3);
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut store = TaskStore::new(Vec::new());
        for i in 0..20 {
            let next = store.add(&format!("task {}", i)).unwrap();
            commit(&mut store, next);
        }
        let mut ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_remove() {
        let store = abc();
        let next = store.remove("B").unwrap();
        assert_eq!(summary(&next), vec![("A", 0, false), ("C", 2, false)]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        assert!(abc().remove("nope").is_none());
    }

    #[test]
    fn test_set_text_rules() {
        let store = abc();
        let next = store.set_text("A", " Renamed ").unwrap();
        assert_eq!(next[0].text, "Renamed");

        assert!(store.set_text("A", "   ").is_none());
        assert!(store.set_text("A", "Task A").is_none());
        assert!(store.set_text("missing", "x").is_none());
    }

    #[test]
    fn test_complete_moves_to_bottom() {
        let store = abc();
        let next = store.set_done("B", true).unwrap();
        assert_eq!(summary(&next), vec![("A", 0, false), ("C", 1, false), ("B", 2, true)]);
    }

    #[test]
    fn test_uncomplete_moves_to_top() {
        let mut store = abc();
        let next = store.set_done("B", true).unwrap();
        commit(&mut store, next);

        let next = store.set_done("B", false).unwrap();
        assert_eq!(summary(&next), vec![("B", 0, false), ("A", 1, false), ("C", 2, false)]);
    }

    #[test]
    fn test_completed_task_lands_after_other_completed() {
        let store = TaskStore::new(vec![
            task("A", false, 0),
            task("B", true, 1),
            task("C", false, 2),
            task("D", true, 3),
        ]);
        let next = store.set_done("A", true).unwrap();
        assert_eq!(
            summary(&next),
            vec![("C", 0, false), ("B", 1, true), ("D", 2, true), ("A", 3, true)]
        );
    }

    #[test]
    fn test_complete_lands_last_with_extreme_orders() {
        let store = TaskStore::new(vec![task("X", false, 0), task("Y", true, i32::MAX)]);
        let next = store.set_done("X", true).unwrap();
        assert_eq!(summary(&next), vec![("Y", 0, true), ("X", 1, true)]);
    }

    #[test]
    fn test_uncomplete_lands_first_with_extreme_orders() {
        let store = TaskStore::new(vec![
            task("Y", false, i32::MIN),
            task("Z", false, 4),
            task("X", true, 0),
        ]);
        let next = store.set_done("X", false).unwrap();
        assert_eq!(summary(&next), vec![("X", 0, false), ("Y", 1, false), ("Z", 2, false)]);
    }

    #[test]
    fn test_set_done_same_value_is_noop() {
        assert!(abc().set_done("A", false).is_none());
        assert!(abc().set_done("missing", true).is_none());
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let mut first = task("dup", false, 0);
        first.text = "first".to_string();
        let mut second = task("dup", false, 1);
        second.text = "second".to_string();
        let store = TaskStore::new(vec![first, second]);

        let next = store.set_text("dup", "edited").unwrap();
        assert_eq!(next[0].text, "first");
        assert_eq!(next[1].text, "edited");
    }

    #[test]
    fn test_failed_save_keeps_committed_list() {
        let mut store = abc();
        let next = store.remove("A").unwrap();
        assert!(store.begin_save(next).is_some());
        assert!(store.is_saving());

        assert!(!store.finish_save(false));

        assert!(!store.is_saving());
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_refresh_keeps_pending_save() {
        let mut store = abc();
        let next = store.remove("A").unwrap();
        store.begin_save(next);

        store.refresh();
        assert!(store.is_saving());

        store.finish_save(true);
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_second_save_rejected_while_pending() {
        let mut store = abc();
        let first = store.remove("A").unwrap();
        let second = store.remove("B").unwrap();

        assert!(store.begin_save(first).is_some());
        assert!(store.begin_save(second).is_none());

        store.finish_save(true);
        assert_eq!(store.tasks().len(), 2);
        assert!(store.tasks().iter().all(|t| t.id != "A"));
    }

    #[test]
    fn test_successful_save_reports_commit() {
        let mut store = abc();
        let next = store.add("Call mom").unwrap();
        store.begin_save(next);
        assert!(store.finish_save(true));
        assert_eq!(store.tasks().len(), 4);
    }

    #[test]
    fn test_saves_rejected_until_loaded() {
        let mut store = TaskStore::default();
        assert!(!store.is_loaded());
        let next = store.add("too early").unwrap();
        assert!(store.begin_save(next).is_none());

        assert!(store.finish_load(vec![task("A", false, 0)]));
        assert!(store.is_loaded());
        let next = store.add("X").unwrap();
        assert!(store.begin_save(next).is_some());
    }

    #[test]
    fn test_load_does_not_replace_pending_save() {
        let mut store = TaskStore::new(Vec::new());
        let next = store.add("X").unwrap();
        store.begin_save(next);

        assert!(!store.finish_load(vec![task("A", false, 0)]));

        assert!(store.finish_save(true));
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "X");
    }

    #[test]
    fn test_display_uses_policy() {
        let store = TaskStore::new(vec![task("A", true, 0), task("B", false, 1)]);
        let shown: Vec<String> = store.display().into_iter().map(|t| t.id).collect();
        assert_eq!(shown, vec!["B", "A"]);
    }
}
