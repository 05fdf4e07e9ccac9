//! API request payloads for task and category operations.
//!
//! These types are the validated boundary between untyped JSON bodies
//! and the domain model. Unknown fields are rejected outright rather
//! than silently passed through, and due dates are converted to
//! `DateTime<Utc>` during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::UserId;
use crate::serde::{
    deserialize_explicit_null, deserialize_explicit_null_datetime, deserialize_optional_datetime,
};

use super::error::{CategoryError, TaskError};
use super::types::{Category, Priority, Task};

/// Default color assigned to categories created without one.
const DEFAULT_CATEGORY_COLOR: &str = "#2196F3";

/// Checks if a color string is a valid hex color (#RGB, #RRGGBB, #RRGGBBAA).
fn is_valid_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    [3, 6, 8].contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Request payload for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    /// Accepted so clients may send it, but ignored: tasks are always
    /// created incomplete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl CreateTaskRequest {
    /// Creates a request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
            category_id: None,
            completed: None,
        }
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category reference.
    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Validates the payload before any store call.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.title.len() > 200 {
            return Err(TaskError::TitleTooLong);
        }
        Ok(())
    }

    /// Converts into a [`Task`] owned by `owner`.
    ///
    /// `completed` is forced to false regardless of the payload, and
    /// the creation timestamp is set here.
    pub fn into_task(self, owner: UserId) -> Task {
        let mut task = Task::new(owner, self.title);
        task.description = self.description;
        task.due_date = self.due_date;
        task.priority = self.priority.unwrap_or_default();
        task.category_id = self.category_id;
        task
    }
}

/// Request payload for partially updating a task.
///
/// `description`, `dueDate`, and `categoryId` distinguish an absent
/// field (leave unchanged) from an explicit `null` (clear the field).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_explicit_null_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(
        default,
        deserialize_with = "deserialize_explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<Uuid>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the category reference (`None` clears it).
    pub fn with_category(mut self, category_id: Option<Uuid>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Validates the payload before any store call.
    pub fn validate(&self) -> Result<(), TaskError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            if title.len() > 200 {
                return Err(TaskError::TitleTooLong);
            }
        }
        Ok(())
    }

    /// Applies the partial update to an existing task.
    ///
    /// Identity fields (`id`, `owner_id`, `created_at`) are never
    /// touched.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category_id) = self.category_id {
            task.category_id = category_id;
        }
    }
}

/// Request payload for creating a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateCategoryRequest {
    /// Creates a request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Sets the category color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Validates the payload before any store call.
    pub fn validate(&self) -> Result<(), CategoryError> {
        if self.name.trim().is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if let Some(color) = &self.color {
            if !is_valid_color(color) {
                return Err(CategoryError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Converts into a [`Category`] owned by `owner`, using a default
    /// color if none was given.
    pub fn into_category(self, owner: UserId) -> Category {
        let color = self.color.unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string());
        Category::new(owner, self.name, color)
    }
}

/// Request payload for partially updating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCategoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl UpdateCategoryRequest {
    /// Creates an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Validates the payload before any store call.
    pub fn validate(&self) -> Result<(), CategoryError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(CategoryError::EmptyName);
            }
        }
        if let Some(color) = &self.color {
            if !is_valid_color(color) {
                return Err(CategoryError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Applies the partial update to an existing category.
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
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
    fn test_create_task_minimal_payload() {
        let json = r#"{"title": "Buy milk"}"#;
        let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert!(req.validate().is_ok());

        let task = req.into_task(owner());
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_create_task_forces_completed_false() {
        let json = r#"{"title": "Buy milk", "completed": true}"#;
        let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
        let task = req.into_task(owner());
        assert!(!task.completed);
    }

    #[test]
    fn test_create_task_rejects_unknown_fields() {
        let json = r#"{"title": "Buy milk", "nextId": 42}"#;
        let result: Result<CreateTaskRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_task_converts_due_date_string() {
        let json = r#"{"title": "Buy milk", "dueDate": "2024-06-15"}"#;
        let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.due_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_create_task_empty_title_fails_validation() {
        let req = CreateTaskRequest::new("   ");
        assert_eq!(req.validate(), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn test_update_task_partial_merge() {
        let mut task = Task::new(owner(), "Old title").with_priority(Priority::Low);
        let created_at = task.created_at;

        let req = UpdateTaskRequest::new()
            .with_title("New title")
            .with_completed(true);
        req.apply_to(&mut task);

        assert_eq!(task.title, "New title");
        assert!(task.completed);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn test_update_task_explicit_null_clears_category() {
        let mut task = Task::new(owner(), "Buy milk").with_category(Uuid::new_v4());

        let json = r#"{"categoryId": null}"#;
        let req: UpdateTaskRequest = serde_json::from_str(json).unwrap();
        req.apply_to(&mut task);

        assert!(task.category_id.is_none());
    }

    #[test]
    fn test_update_task_absent_category_left_unchanged() {
        let category_id = Uuid::new_v4();
        let mut task = Task::new(owner(), "Buy milk").with_category(category_id);

        let json = r#"{"title": "New"}"#;
        let req: UpdateTaskRequest = serde_json::from_str(json).unwrap();
        req.apply_to(&mut task);

        assert_eq!(task.category_id, Some(category_id));
    }

    #[test]
    fn test_update_task_explicit_null_clears_due_date() {
        let mut task = Task::new(owner(), "Buy milk")
            .with_due_date(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());

        let json = r#"{"dueDate": null}"#;
        let req: UpdateTaskRequest = serde_json::from_str(json).unwrap();
        req.apply_to(&mut task);

        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_create_category_default_color() {
        let req = CreateCategoryRequest::new("Work");
        assert!(req.validate().is_ok());
        let category = req.into_category(owner());
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_create_category_invalid_color() {
        let req = CreateCategoryRequest::new("Work").with_color("red-ish");
        assert_eq!(
            req.validate(),
            Err(CategoryError::InvalidColor("red-ish".to_string()))
        );
    }

    #[test]
    fn test_update_category_apply() {
        let mut category = Category::new(owner(), "Work", "#2196F3");
        let req = UpdateCategoryRequest::new().with_color("#FF5722");
        req.apply_to(&mut category);
        assert_eq!(category.color, "#FF5722");
        assert_eq!(category.name, "Work");
    }

    #[test]
    fn test_update_category_empty_name_fails_validation() {
        let req = UpdateCategoryRequest::new().with_name("");
        assert_eq!(req.validate(), Err(CategoryError::EmptyName));
    }
}
