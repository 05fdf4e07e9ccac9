//! Read-through cache boundary: trait, key helpers, and glob matching.
//!
//! Cache keys are the logical request paths of the gateway API
//! (`/api/tasks`, `/api/tasks/{id}`, ...), so invalidation can be
//! expressed as glob patterns over the same paths the views query.

mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    categories_pattern, category_key, category_list_key, task_key, task_list_key,
    task_timeframe_key, tasks_pattern,
};
pub use patterns::pattern_matches;
pub use serialization::{deserialize_value, serialize_value};
pub use traits::Cache;
