use uuid::Uuid;

use crate::model::{Snapshot, Summary, Task};

/// Session state: the task list plus the uncommitted input text.
///
/// The UI never touches the fields directly; every change goes through
/// `set_pending_input`, `add_task` or `toggle_task`, and rendering reads a
/// `snapshot`. None of the operations can fail: a blank submit and a toggle
/// on an unknown id are both defined as silent no-ops.
#[derive(Debug, Default)]
pub struct TaskStore {
    pending_input: String,
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replaces the pending input verbatim. Trimming only happens when the
    /// text is committed by `add_task`.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Commits the pending input as a new task at the front of the list and
    /// clears the input. If the input trims down to nothing, nothing happens
    /// and the input is left as it was.
    pub fn add_task(&mut self) {
        let text = self.pending_input.trim();
        if text.is_empty() {
            return;
        }
        self.tasks.insert(
            0,
            Task {
                id: Uuid::new_v4(),
                text: text.to_string(),
                done: false,
            },
        );
        self.pending_input.clear();
    }

    /// Flips the done flag of the task with the given id, in place. Tasks
    /// that don't match are not touched. Unknown ids do nothing.
    pub fn toggle_task(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.done = !task.done;
        }
    }

    /// Recomputed from the list on every call; lists stay small enough that
    /// caching the counts would buy nothing.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.done).count(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pending_input: self.pending_input.clone(),
            tasks: self.tasks.clone(),
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            store.set_pending_input(*text);
            store.add_task();
        }
        store
    }

    #[test]
    fn blank_input_is_rejected_and_kept() {
        for blank in ["", " ", "   ", "\t", " \n "] {
            let mut store = store_with(&["existing"]);
            store.set_pending_input(blank);
            store.add_task();
            assert_eq!(store.tasks().len(), 1, "input {:?} added a task", blank);
            assert_eq!(store.pending_input(), blank);
        }
    }

    #[test]
    fn add_prepends_trimmed_task_and_clears_input() {
        let mut store = store_with(&["first"]);
        store.set_pending_input("  second  ");
        store.add_task();

        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].text, "second");
        assert!(!store.tasks()[0].done);
        assert_eq!(store.tasks()[1].text, "first");
        assert_eq!(store.pending_input(), "");
    }

    #[test]
    fn successive_adds_get_distinct_ids() {
        let store = store_with(&["one", "two"]);
        assert_eq!(store.tasks()[0].text, "two");
        assert_eq!(store.tasks()[1].text, "one");
        assert_ne!(store.tasks()[0].id, store.tasks()[1].id);
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let mut store = store_with(&["a", "b", "c"]);
        let id = store.tasks()[1].id;
        store.toggle_task(id);

        assert_eq!(store.tasks().len(), 3);
        let texts: Vec<_> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["c", "b", "a"]);
        assert!(!store.tasks()[0].done);
        assert!(store.tasks()[1].done);
        assert!(!store.tasks()[2].done);
    }

    #[test]
    fn double_toggle_restores_the_flag() {
        let mut store = store_with(&["a"]);
        let id = store.tasks()[0].id;
        store.toggle_task(id);
        store.toggle_task(id);
        assert!(!store.tasks()[0].done);
    }

    #[test]
    fn toggle_with_unknown_id_changes_nothing() {
        let mut store = store_with(&["a", "b"]);
        let before = store.tasks().to_vec();
        store.toggle_task(Uuid::new_v4());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn summary_counts_match_the_list() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle_task(store.tasks()[0].id);
        store.toggle_task(store.tasks()[2].id);

        let summary = store.summary();
        assert_eq!(summary.total, store.tasks().len());
        assert_eq!(summary.completed, 2);
        assert!(summary.completed <= summary.total);
    }

    #[test]
    fn session_scenario() {
        let mut store = TaskStore::new();

        store.set_pending_input("Buy milk");
        store.add_task();
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "Buy milk");
        assert_eq!(store.summary(), Summary { total: 1, completed: 0 });

        store.set_pending_input("  ");
        store.add_task();
        assert_eq!(store.tasks().len(), 1);

        let id = store.tasks()[0].id;
        store.toggle_task(id);
        assert!(store.tasks()[0].done);
        assert_eq!(store.summary(), Summary { total: 1, completed: 1 });
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut store = store_with(&["a"]);
        store.set_pending_input("typing");
        let snapshot = store.snapshot();

        assert_eq!(snapshot.pending_input, "typing");
        assert_eq!(snapshot.tasks, store.tasks());
        assert_eq!(snapshot.summary, store.summary());
    }
}
