use uuid::Uuid;

use crate::storage::Timeframe;

/// Returns the cache key for the full task list.
pub fn task_list_key() -> String {
    "/api/tasks".to_string()
}

/// Returns the cache key for a single task.
pub fn task_key(task_id: Uuid) -> String {
    format!("/api/tasks/{task_id}")
}

/// Returns the cache key for a timeframe-scoped task list.
pub fn task_timeframe_key(timeframe: Timeframe) -> String {
    format!("/api/tasks/timeframe/{timeframe}")
}

/// Returns the pattern matching every task-derived cache key: the
/// list, every single-task entry, and every timeframe variant.
pub fn tasks_pattern() -> String {
    "/api/tasks*".to_string()
}

/// Returns the cache key for the full category list.
pub fn category_list_key() -> String {
    "/api/categories".to_string()
}

/// Returns the cache key for a single category.
pub fn category_key(category_id: Uuid) -> String {
    format!("/api/categories/{category_id}")
}

/// Returns the pattern matching every category-derived cache key.
pub fn categories_pattern() -> String {
    "/api/categories*".to_string()
}
