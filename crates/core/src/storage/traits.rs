use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::UserId;
use crate::task::{Category, Task};

use super::{Result, TimeWindow};

/// Repository for task operations.
///
/// List queries are scoped to an owner at the store (an equality
/// predicate on the owner index); point lookups are unscoped and the
/// caller is responsible for enforcing ownership on the result.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Gets a task by its ID.
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>>;

    /// Gets all tasks owned by `owner`.
    async fn list_tasks(&self, owner: &UserId) -> Result<Vec<Task>>;

    /// Gets all tasks owned by `owner` whose due date falls inside
    /// the half-open `window`. Tasks without a due date never match.
    async fn list_tasks_due_within(&self, owner: &UserId, window: TimeWindow)
        -> Result<Vec<Task>>;

    /// Creates a new task.
    async fn create_task(&self, task: &Task) -> Result<()>;

    /// Updates an existing task.
    async fn update_task(&self, task: &Task) -> Result<()>;

    /// Deletes a task by its ID.
    async fn delete_task(&self, id: Uuid) -> Result<()>;
}

/// Repository for category operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Gets a category by its ID.
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>>;

    /// Gets all categories owned by `owner`.
    async fn list_categories(&self, owner: &UserId) -> Result<Vec<Category>>;

    /// Creates a new category.
    async fn create_category(&self, category: &Category) -> Result<()>;

    /// Updates an existing category.
    async fn update_category(&self, category: &Category) -> Result<()>;

    /// Deletes a category by its ID.
    async fn delete_category(&self, id: Uuid) -> Result<()>;
}
