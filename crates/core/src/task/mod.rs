//! Task and category domain types.

mod error;
mod mock_data;
mod requests;
mod types;

pub use error::{CategoryError, TaskError};
pub use mock_data::{seed_categories, seed_tasks};
pub use requests::{
    CreateCategoryRequest, CreateTaskRequest, UpdateCategoryRequest, UpdateTaskRequest,
};
pub use types::{Category, Priority, Task, TaskWithCategory};
