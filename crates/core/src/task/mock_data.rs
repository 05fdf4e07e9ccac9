//! Seed data generation for testing and demos.
//!
//! Pure functions producing a small, deterministic set of categories
//! and tasks spread around a center date.

use chrono::{DateTime, Duration, Utc};

use crate::auth::UserId;

use super::types::{Category, Priority, Task};

/// Generates a fixed set of sample categories for `owner`.
pub fn seed_categories(owner: &UserId) -> Vec<Category> {
    vec![
        Category::new(owner.clone(), "Work", "#2196F3"),
        Category::new(owner.clone(), "Personal", "#4CAF50"),
        Category::new(owner.clone(), "Errands", "#FFC107"),
    ]
}

/// Generates sample tasks for `owner` spread around `center`.
///
/// The due dates land on today, tomorrow, next week, and next month
/// relative to `center`, plus one task with no due date and one
/// already completed, so every timeframe view has something to show.
pub fn seed_tasks(owner: &UserId, categories: &[Category], center: DateTime<Utc>) -> Vec<Task> {
    let category = |i: usize| categories.get(i).map(|c| c.id);

    let mut tasks = vec![
        Task::new(owner.clone(), "Finish project proposal")
            .with_description("Draft and circulate for review")
            .with_due_date(center)
            .with_priority(Priority::High),
        Task::new(owner.clone(), "Buy groceries").with_due_date(center + Duration::hours(6)),
        Task::new(owner.clone(), "Call the dentist")
            .with_due_date(center + Duration::days(1))
            .with_priority(Priority::Low),
        Task::new(owner.clone(), "Prepare team meeting").with_due_date(center + Duration::days(5)),
        Task::new(owner.clone(), "Renew passport").with_due_date(center + Duration::days(25)),
        Task::new(owner.clone(), "Read that book"),
    ];

    if let Some(id) = category(0) {
        tasks[0].category_id = Some(id);
        tasks[3].category_id = Some(id);
    }
    if let Some(id) = category(2) {
        tasks[1].category_id = Some(id);
    }
    tasks[5].completed = true;

    tasks
}
