//! Project Store Library
//!
//! This library provides an in-memory project management model: projects made of
//! sections and tasks, kanban status columns, project groups, team members and
//! time tracking. Views such as the kanban board, Gantt chart, calendar and
//! timesheet are derived from the current state on every call.
//!
//! # Architecture
//!
//! - **Domain Layer**: `store` module - entities, mutations and derived queries
//! - **Configuration**: `seed` module - built-in demo data or TOML seed files
//! - **Sharing**: `ProjectStoreHandle` - a mutex around the store for consumers on
//!   several threads
//!
//! # Example
//!
//! ```
//! use project_store::{NewProject, ProjectStore};
//!
//! let mut store = ProjectStore::new();
//! let project_id = store.create_project(NewProject {
//!     name: "Website".to_string(),
//!     due_date: None,
//! });
//! let buckets = store.tasks_by_status(&project_id);
//! assert_eq!(buckets.len(), 4);
//! ```

pub mod error;
pub mod formatting;
pub mod seed;
pub mod store;
pub mod validation;

use anyhow::Result;
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use error::StoreError;
pub use seed::{Seed, SeedFile};
pub use store::{
    Attachment, Group, NewAttachment, NewProject, NewTask, NewTimeEntry, Note, Project,
    ProjectStore, Section, StatusBucket, StatusBuckets, StatusColumn, SubTask, Summary, Task,
    TimeEntry, User,
};

/// Shared handle to a ProjectStore
///
/// The store itself is single-owner. When several threads need it, the handle
/// serializes every read and write through one mutex so each closure sees a
/// consistent snapshot and mutations never interleave.
pub struct ProjectStoreHandle {
    pub(crate) data: Mutex<ProjectStore>,
}

impl ProjectStoreHandle {
    /// Wrap an existing store
    pub fn new(store: ProjectStore) -> Self {
        Self {
            data: Mutex::new(store),
        }
    }

    /// Create a handle from a seed file, or from the demo seed when no path is given
    ///
    /// # Arguments
    /// * `seed_path` - Path to a TOML seed file (optional)
    ///
    /// # Returns
    /// Result containing the handle or an error
    ///
    /// # Example
    /// ```
    /// # use project_store::ProjectStoreHandle;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handle = ProjectStoreHandle::from_seed(None)?;
    /// assert_eq!(handle.read(|store| store.users().len()), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_seed(seed_path: Option<&str>) -> Result<Self> {
        let seed = match seed_path {
            Some(path) => SeedFile::new(path).load()?,
            None => Seed::demo(),
        };
        Ok(Self::new(seed.into_store()?))
    }

    fn lock(&self) -> MutexGuard<'_, ProjectStore> {
        // Poisoned locks are recovered; the store holds no cross-field invariants mid-call
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run a read-only closure against the store
    pub fn read<T>(&self, f: impl FnOnce(&ProjectStore) -> T) -> T {
        let data = self.lock();
        f(&data)
    }

    /// Run a mutating closure against the store
    pub fn write<T>(&self, f: impl FnOnce(&mut ProjectStore) -> T) -> T {
        let mut data = self.lock();
        f(&mut data)
    }

    /// Unwrap the handle and return the store
    pub fn into_inner(self) -> ProjectStore {
        self.data
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
