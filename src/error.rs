//! Error type for store mutations
//!
//! Every mutation that can miss its target returns one of these instead of
//! silently doing nothing. The store is left unchanged whenever an error is
//! returned.

/// Outcome of a mutation that had no effect
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    #[error("section '{0}' not found")]
    SectionNotFound(String),

    #[error("task '{0}' not found")]
    TaskNotFound(String),

    #[error("sub-task '{sub_task}' not found in task '{task}'")]
    SubTaskNotFound { task: String, sub_task: String },

    #[error("status column '{0}' not found")]
    StatusColumnNotFound(String),

    #[error("group '{0}' not found")]
    GroupNotFound(String),

    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// Task creation targets the selected project, and none is selected
    #[error("no project is currently selected")]
    NoCurrentProject,

    /// Logged hours must be finite and non-negative
    #[error("invalid hours value {0}")]
    InvalidHours(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::SectionNotFound("section9".to_string()).to_string(),
            "section 'section9' not found"
        );
        assert_eq!(
            StoreError::SubTaskNotFound {
                task: "task1".to_string(),
                sub_task: "st1".to_string()
            }
            .to_string(),
            "sub-task 'st1' not found in task 'task1'"
        );
        assert_eq!(
            StoreError::NoCurrentProject.to_string(),
            "no project is currently selected"
        );
    }
}
