//! Storage boundary: repository traits, time windows, and errors.

mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result, TimeframeError};
pub use traits::{CategoryRepository, TaskRepository};
pub use types::{TimeWindow, Timeframe};
