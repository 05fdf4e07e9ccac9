use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::UserId;

/// Task priority. Defaults to [`Priority::Medium`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Returns the wire name of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A single to-do item owned by one user.
///
/// Identifiers are opaque, store-assigned values; `created_at` is set
/// once at creation and never changes afterwards. JSON field names are
/// camelCase to match the external API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub priority: Priority,
    /// Reference to a [`Category`], if any.
    pub category_id: Option<Uuid>,
    /// The authenticated owner. Every query and mutation is scoped to
    /// this identifier.
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh id, owned by `owner`.
    pub fn new(owner: UserId, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            due_date: None,
            completed: false,
            priority: Priority::default(),
            category_id: None,
            owner_id: owner,
            created_at: Utc::now(),
        }
    }

    /// Sets the description for this task.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date for this task.
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority for this task.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category reference for this task.
    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets a specific ID for this task (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A user-defined grouping for tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Display color as a hex color code.
    pub color: String,
    pub owner_id: UserId,
}

impl Category {
    /// Creates a new category with a fresh id, owned by `owner`.
    pub fn new(owner: UserId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            owner_id: owner,
        }
    }

    /// Sets a specific ID for this category (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A task joined with its category, if it references one.
///
/// Read-model only: produced by a secondary category lookup when
/// serving reads, never written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithCategory {
    #[serde(flatten)]
    pub task: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl TaskWithCategory {
    /// Joins a task with an already-resolved category.
    pub fn new(task: Task, category: Option<Category>) -> Self {
        Self { task, category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn owner() -> UserId {
        UserId::new("user-1")
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(owner(), "Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert!(task.category_id.is_none());
        assert_eq!(task.owner_id, owner());
    }

    #[test]
    fn test_task_builders() {
        let due = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let category_id = Uuid::new_v4();
        let task = Task::new(owner(), "Report")
            .with_description("Quarterly report")
            .with_due_date(due)
            .with_priority(Priority::High)
            .with_category(category_id);

        assert_eq!(task.description.as_deref(), Some("Quarterly report"));
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category_id, Some(category_id));
    }

    #[test]
    fn test_priority_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn test_task_json_uses_camel_case() {
        let task = Task::new(owner(), "Buy milk")
            .with_id(Uuid::nil())
            .with_created_at(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("dueDate").is_some());
        assert!(json.get("categoryId").is_some());
        assert_eq!(json["ownerId"], "user-1");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn test_task_with_category_flattens_task_fields() {
        let category = Category::new(owner(), "Work", "#2196F3");
        let task = Task::new(owner(), "Buy milk").with_category(category.id);
        let joined = TaskWithCategory::new(task.clone(), Some(category.clone()));

        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["category"]["name"], "Work");
    }

    #[test]
    fn test_task_with_category_omits_absent_category() {
        let joined = TaskWithCategory::new(Task::new(owner(), "Buy milk"), None);
        let json = serde_json::to_value(&joined).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_task_roundtrip() {
        let task = Task::new(owner(), "Buy milk")
            .with_due_date(Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap());
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
