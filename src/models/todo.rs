//! To-do items and the in-memory task list.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Task category, drives the row icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoCategory {
    Assignment,
    #[default]
    Study,
    Reading,
}

/// Task priority, drives the row accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    High,
    #[default]
    Medium,
    Low,
}

/// Status filter for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    /// Empty-state message for this filter.
    pub fn empty_message(&self) -> &'static str {
        match self {
            TodoFilter::All => "No tasks in this category",
            TodoFilter::Active => "No active tasks",
            TodoFilter::Completed => "No completed tasks",
        }
    }
}

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Free-form due label ("Today", "Tomorrow", "No date").
    pub due_date: String,
    pub category: TodoCategory,
    pub priority: TodoPriority,
}

/// In-memory task list. New items are prepended; items are never deleted.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Build a list seeded with the sample tasks.
    pub fn with_samples() -> Self {
        Self { items: sample_todos() }
    }

    /// Add a task with the given title, prepending it to the list.
    ///
    /// Blank titles are refused. The id is derived from the current timestamp.
    pub fn add(&mut self, title: &str) -> Option<&TodoItem> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let item = TodoItem {
            id: format!("todo{}", Utc::now().timestamp_millis()),
            title: title.to_string(),
            completed: false,
            due_date: "No date".to_string(),
            category: TodoCategory::Study,
            priority: TodoPriority::Medium,
        };
        self.items.insert(0, item);
        self.items.first()
    }

    /// Flip the completed flag of the item with `id`, leaving others alone.
    pub fn toggle(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|t| t.id == id) {
            item.completed = !item.completed;
        }
    }

    /// Items matching `filter`, in list order.
    pub fn filtered(&self, filter: TodoFilter) -> Vec<&TodoItem> {
        self.items
            .iter()
            .filter(|t| match filter {
                TodoFilter::All => true,
                TodoFilter::Active => !t.completed,
                TodoFilter::Completed => t.completed,
            })
            .collect()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Count of not-yet-completed tasks.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }
}

fn sample_todo(
    id: &str,
    title: &str,
    completed: bool,
    due_date: &str,
    category: TodoCategory,
    priority: TodoPriority,
) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        title: title.to_string(),
        completed,
        due_date: due_date.to_string(),
        category,
        priority,
    }
}

/// Sample tasks shown on first launch.
pub fn sample_todos() -> Vec<TodoItem> {
    vec![
        sample_todo(
            "todo1",
            "Complete PHY202 Lab Report",
            false,
            "Tomorrow",
            TodoCategory::Assignment,
            TodoPriority::High,
        ),
        sample_todo(
            "todo2",
            "Review CSE101 Lecture Notes",
            false,
            "Today",
            TodoCategory::Study,
            TodoPriority::High,
        ),
        sample_todo(
            "todo3",
            "Prepare for MATH204 Quiz",
            false,
            "In 2 days",
            TodoCategory::Study,
            TodoPriority::Medium,
        ),
        sample_todo(
            "todo4",
            "Read ENG207 Chapter 3",
            true,
            "Yesterday",
            TodoCategory::Reading,
            TodoPriority::Medium,
        ),
        sample_todo(
            "todo5",
            "Submit ART101 Project Proposal",
            true,
            "3 days ago",
            TodoCategory::Assignment,
            TodoPriority::High,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_prepends_with_defaults() {
        let mut list = TodoList::with_samples();
        let before = list.items().len();

        let added = list.add("X").expect("task should be added");
        assert!(!added.completed);
        assert_eq!(added.due_date, "No date");
        assert_eq!(added.category, TodoCategory::Study);
        assert_eq!(added.priority, TodoPriority::Medium);

        assert_eq!(list.items().len(), before + 1);
        assert_eq!(list.items()[0].title, "X");
    }

    #[test]
    fn test_add_refuses_blank_title() {
        let mut list = TodoList::with_samples();
        let before = list.items().len();

        assert!(list.add("   ").is_none());
        assert_eq!(list.items().len(), before);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = TodoList::with_samples();
        list.add("X");
        let id = list.items()[0].id.clone();
        let others: Vec<bool> = list.items()[1..].iter().map(|t| t.completed).collect();

        list.toggle(&id);
        assert!(list.items()[0].completed);
        let after: Vec<bool> = list.items()[1..].iter().map(|t| t.completed).collect();
        assert_eq!(others, after);

        list.toggle(&id);
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn test_filter_completed_preserves_order() {
        let list = TodoList::with_samples();

        let completed = list.filtered(TodoFilter::Completed);
        assert!(completed.iter().all(|t| t.completed));
        let ids: Vec<&str> = completed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["todo4", "todo5"]);
    }

    #[test]
    fn test_filter_partitions_list() {
        let list = TodoList::with_samples();

        let all = list.filtered(TodoFilter::All).len();
        let active = list.filtered(TodoFilter::Active).len();
        let completed = list.filtered(TodoFilter::Completed).len();

        assert_eq!(all, list.items().len());
        assert_eq!(active + completed, all);
        assert_eq!(active, list.active_count());
    }
}
