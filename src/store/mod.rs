//! Project management domain model and store
//!
//! This module contains the entity types and the in-memory store that owns them.
//! It is split into submodules:
//! - `model`: Entities (projects, sections, tasks, ...) and creation inputs
//! - `project_store`: The store with all mutation operations
//! - `queries`: Derived views (status buckets, Gantt, calendar, workloads)

mod model;
mod project_store;
mod queries;

// Re-export all public types
pub use model::{
    Attachment, DEFAULT_STATUS_COLUMNS, Group, NewAttachment, NewProject, NewTask, NewTimeEntry,
    Note, Project, Section, StatusColumn, SubTask, Task, TimeEntry, User, default_status_columns,
    local_date_today,
};
pub use project_store::ProjectStore;
pub use queries::{
    COMPLETED_STATUS, StatusBucket, StatusBuckets, Summary, UPCOMING_DEADLINE_LIMIT, iso_date,
    timesheet_range, timesheet_window,
};
