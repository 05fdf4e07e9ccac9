//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use thyk_core::auth::UserId;
use thyk_core::storage::{
    CategoryRepository, RepositoryError, Result, TaskRepository, TimeWindow,
};
use thyk_core::task::{Category, Task};

/// In-memory store implementing both repository traits.
///
/// Cloning is cheap and all clones share the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    ///
    /// Useful for tests and demos together with
    /// `thyk_core::task::{seed_categories, seed_tasks}`.
    pub async fn with_seed(tasks: Vec<Task>, categories: Vec<Category>) -> Self {
        let store = Self::new();
        {
            let mut table = store.tasks.write().await;
            table.extend(tasks.into_iter().map(|t| (t.id, t)));
        }
        {
            let mut table = store.categories.write().await;
            table.extend(categories.into_iter().map(|c| (c.id, c)));
        }
        store
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_tasks(&self, owner: &UserId) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| &t.owner_id == owner)
            .cloned()
            .collect();
        // Stable output order for a HashMap-backed table.
        result.sort_by_key(|t| (t.created_at, t.id));
        Ok(result)
    }

    async fn list_tasks_due_within(
        &self,
        owner: &UserId,
        window: TimeWindow,
    ) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| &t.owner_id == owner)
            .filter(|t| t.due_date.is_some_and(|due| window.contains(due)))
            .cloned()
            .collect();
        result.sort_by_key(|t| (t.due_date, t.id));
        Ok(result)
    }

    async fn create_task(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        if tasks.contains_key(&task.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Task",
                id: task.id.to_string(),
            });
        }
        tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        if !tasks.contains_key(&task.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Task",
                id: task.id.to_string(),
            });
        }
        tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        if tasks.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Task",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn list_categories(&self, owner: &UserId) -> Result<Vec<Category>> {
        let categories = self.categories.read().await;
        let mut result: Vec<Category> = categories
            .values()
            .filter(|c| &c.owner_id == owner)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn create_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.categories.write().await;
        if categories.contains_key(&category.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Category",
                id: category.id.to_string(),
            });
        }
        categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn update_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.categories.write().await;
        if !categories.contains_key(&category.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Category",
                id: category.id.to_string(),
            });
        }
        categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        let mut categories = self.categories.write().await;
        if categories.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Category",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
