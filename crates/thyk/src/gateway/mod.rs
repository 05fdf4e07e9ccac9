//! Data-access gateway.
//!
//! Single entry point translating a (method, path, payload) triple
//! into store operations. The gateway owns payload validation,
//! ownership scoping, and the task/category join; it performs no
//! caching and no side effects beyond the store write (invalidation
//! belongs to [`CachedGateway`]).

mod cached;
mod error;
mod path;

pub use cached::CachedGateway;
pub use error::{GatewayError, Result};
pub use path::{Method, Resource, Route, Selector};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use thyk_core::auth::{IdentityProvider, UserId};
use thyk_core::storage::{CategoryRepository, TaskRepository, Timeframe};
use thyk_core::task::{
    Category, CreateCategoryRequest, CreateTaskRequest, Task, TaskWithCategory,
    UpdateCategoryRequest, UpdateTaskRequest,
};

/// The data-access gateway.
///
/// Generic over the store so tests can substitute mocks; the identity
/// provider supplies the caller used for ownership scoping on every
/// operation.
pub struct Gateway<R> {
    store: Arc<R>,
    identity: Arc<dyn IdentityProvider>,
}

impl<R> Clone for Gateway<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            identity: Arc::clone(&self.identity),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

impl<R> Gateway<R>
where
    R: TaskRepository + CategoryRepository,
{
    /// Creates a gateway over `store`, scoped by `identity`.
    pub fn new(store: Arc<R>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    /// Executes one logical request.
    ///
    /// Method and path together select the operation; combinations
    /// outside the API table fail with
    /// [`GatewayError::UnsupportedOperation`]. All results are plain
    /// JSON documents.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value> {
        let caller = self
            .identity
            .current_user()
            .ok_or_else(|| GatewayError::Unauthorized("no authenticated user".to_string()))?;
        let route = Route::parse(path)?;
        tracing::debug!(%method, path, caller = %caller, "Gateway request");

        match (method, route.resource, route.selector) {
            (Method::Get, Resource::Tasks, Selector::Collection) => self.list_tasks(&caller).await,
            (Method::Get, Resource::Tasks, Selector::Record(id)) => {
                self.get_task(&caller, id).await
            }
            (Method::Get, Resource::Tasks, Selector::Timeframe(tf)) => {
                self.list_tasks_in_timeframe(&caller, tf).await
            }
            (Method::Post, Resource::Tasks, Selector::Collection) => {
                self.create_task(&caller, payload).await
            }
            (Method::Patch, Resource::Tasks, Selector::Record(id)) => {
                self.update_task(&caller, id, payload).await
            }
            (Method::Delete, Resource::Tasks, Selector::Record(id)) => {
                self.delete_task(&caller, id).await
            }
            (Method::Get, Resource::Categories, Selector::Collection) => {
                self.list_categories(&caller).await
            }
            (Method::Get, Resource::Categories, Selector::Record(id)) => {
                self.get_category(&caller, id).await
            }
            (Method::Post, Resource::Categories, Selector::Collection) => {
                self.create_category(&caller, payload).await
            }
            (Method::Patch, Resource::Categories, Selector::Record(id)) => {
                self.update_category(&caller, id, payload).await
            }
            (Method::Delete, Resource::Categories, Selector::Record(id)) => {
                self.delete_category(&caller, id).await
            }
            _ => Err(GatewayError::UnsupportedOperation(format!(
                "{method} {path}"
            ))),
        }
    }

    fn parse_payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<T> {
        let body = payload
            .ok_or_else(|| GatewayError::Serialization("request body required".to_string()))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches a task, enforcing that it belongs to `caller`.
    ///
    /// A missing record is not-found; an existing record with a
    /// different owner is an authorization error, never silently
    /// filtered out.
    async fn fetch_owned_task(&self, caller: &UserId, id: Uuid) -> Result<Task> {
        let task = self
            .store
            .get_task(id)
            .await?
            .ok_or_else(|| GatewayError::NotFound {
                entity_type: "Task",
                id: id.to_string(),
            })?;
        if &task.owner_id != caller {
            return Err(GatewayError::Unauthorized(format!(
                "Task {id} belongs to another user"
            )));
        }
        Ok(task)
    }

    /// Fetches a category, enforcing that it belongs to `caller`.
    async fn fetch_owned_category(&self, caller: &UserId, id: Uuid) -> Result<Category> {
        let category =
            self.store
                .get_category(id)
                .await?
                .ok_or_else(|| GatewayError::NotFound {
                    entity_type: "Category",
                    id: id.to_string(),
                })?;
        if &category.owner_id != caller {
            return Err(GatewayError::Unauthorized(format!(
                "Category {id} belongs to another user"
            )));
        }
        Ok(category)
    }

    /// Joins a task with its category for reads.
    ///
    /// Lenient: a dangling or foreign reference yields no embedded
    /// category rather than an error.
    async fn join_one(&self, caller: &UserId, task: Task) -> Result<TaskWithCategory> {
        let category = match task.category_id {
            Some(id) => self
                .store
                .get_category(id)
                .await?
                .filter(|c| &c.owner_id == caller),
            None => None,
        };
        Ok(TaskWithCategory::new(task, category))
    }

    /// Joins a batch of tasks against one category lookup.
    async fn join_many(&self, caller: &UserId, tasks: Vec<Task>) -> Result<Vec<TaskWithCategory>> {
        let categories: HashMap<Uuid, Category> = self
            .store
            .list_categories(caller)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        Ok(tasks
            .into_iter()
            .map(|task| {
                let category = task.category_id.and_then(|id| categories.get(&id).cloned());
                TaskWithCategory::new(task, category)
            })
            .collect())
    }

    async fn list_tasks(&self, caller: &UserId) -> Result<Value> {
        let tasks = self.store.list_tasks(caller).await?;
        to_json(&self.join_many(caller, tasks).await?)
    }

    async fn get_task(&self, caller: &UserId, id: Uuid) -> Result<Value> {
        let task = self.fetch_owned_task(caller, id).await?;
        to_json(&self.join_one(caller, task).await?)
    }

    async fn list_tasks_in_timeframe(&self, caller: &UserId, timeframe: Timeframe) -> Result<Value> {
        let window = timeframe.window_from(Utc::now());
        let tasks = self.store.list_tasks_due_within(caller, window).await?;
        tracing::trace!(
            %timeframe,
            start = %window.start,
            end = %window.end,
            count = tasks.len(),
            "Timeframe query"
        );
        to_json(&self.join_many(caller, tasks).await?)
    }

    async fn create_task(&self, caller: &UserId, payload: Option<Value>) -> Result<Value> {
        let request: CreateTaskRequest = Self::parse_payload(payload)?;
        request.validate()?;

        // A referenced category must exist and belong to the caller.
        let category = match request.category_id {
            Some(id) => Some(self.fetch_owned_category(caller, id).await?),
            None => None,
        };

        let task = request.into_task(caller.clone());
        self.store.create_task(&task).await?;
        tracing::debug!(task_id = %task.id, "Task created");

        to_json(&TaskWithCategory::new(task, category))
    }

    async fn update_task(
        &self,
        caller: &UserId,
        id: Uuid,
        payload: Option<Value>,
    ) -> Result<Value> {
        let mut task = self.fetch_owned_task(caller, id).await?;
        let request: UpdateTaskRequest = Self::parse_payload(payload)?;
        request.validate()?;

        if let Some(Some(category_id)) = request.category_id {
            self.fetch_owned_category(caller, category_id).await?;
        }

        request.apply_to(&mut task);
        self.store.update_task(&task).await?;
        tracing::debug!(task_id = %id, "Task updated");

        to_json(&self.join_one(caller, task).await?)
    }

    async fn delete_task(&self, caller: &UserId, id: Uuid) -> Result<Value> {
        self.fetch_owned_task(caller, id).await?;
        self.store.delete_task(id).await?;
        tracing::debug!(task_id = %id, "Task deleted");
        Ok(json!({ "success": true }))
    }

    async fn list_categories(&self, caller: &UserId) -> Result<Value> {
        to_json(&self.store.list_categories(caller).await?)
    }

    async fn get_category(&self, caller: &UserId, id: Uuid) -> Result<Value> {
        to_json(&self.fetch_owned_category(caller, id).await?)
    }

    async fn create_category(&self, caller: &UserId, payload: Option<Value>) -> Result<Value> {
        let request: CreateCategoryRequest = Self::parse_payload(payload)?;
        request.validate()?;

        let category = request.into_category(caller.clone());
        self.store.create_category(&category).await?;
        tracing::debug!(category_id = %category.id, "Category created");

        to_json(&category)
    }

    async fn update_category(
        &self,
        caller: &UserId,
        id: Uuid,
        payload: Option<Value>,
    ) -> Result<Value> {
        let mut category = self.fetch_owned_category(caller, id).await?;
        let request: UpdateCategoryRequest = Self::parse_payload(payload)?;
        request.validate()?;

        request.apply_to(&mut category);
        self.store.update_category(&category).await?;
        tracing::debug!(category_id = %id, "Category updated");

        to_json(&category)
    }

    /// Deletes a category and detaches it from every task that
    /// referenced it. The tasks themselves survive.
    async fn delete_category(&self, caller: &UserId, id: Uuid) -> Result<Value> {
        self.fetch_owned_category(caller, id).await?;
        self.store.delete_category(id).await?;

        let mut detached = 0usize;
        for mut task in self.store.list_tasks(caller).await? {
            if task.category_id == Some(id) {
                task.category_id = None;
                self.store.update_task(&task).await?;
                detached += 1;
            }
        }
        tracing::debug!(category_id = %id, detached, "Category deleted");

        Ok(json!({ "success": true }))
    }
}
