use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A team member who can be assigned to tasks and log time
///
/// Users are fixed once the store is built. Tasks and time entries carry a
/// copy of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A named collection of project ids used for organizational filtering
///
/// Membership is a loose reference: a group may list ids of projects that
/// no longer exist until the project is deleted through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

/// A workflow stage used for kanban-style grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColumn {
    pub id: String,
    /// Status label matched against `Task::status` (e.g. "unstarted")
    pub name: String,
    /// Display color as a CSS hex string
    pub color: String,
    /// Display position; ties keep declaration order
    pub order: i32,
}

/// Label, color and order of the columns every new project starts with
pub const DEFAULT_STATUS_COLUMNS: [(&str, &str); 4] = [
    ("unstarted", "#94a3b8"),
    ("in-progress", "#6c5ce7"),
    ("completed", "#42d392"),
    ("blocked", "#ff5252"),
];

/// Build the default status columns with the given ids
///
/// `ids` must yield at least four values; missing ids fall back to
/// `status1`..`status4`.
pub fn default_status_columns(ids: impl IntoIterator<Item = String>) -> Vec<StatusColumn> {
    let mut ids = ids.into_iter();
    DEFAULT_STATUS_COLUMNS
        .iter()
        .enumerate()
        .map(|(order, (name, color))| StatusColumn {
            id: ids.next().unwrap_or_else(|| format!("status{}", order + 1)),
            name: name.to_string(),
            color: color.to_string(),
            order: order as i32,
        })
        .collect()
}

/// Top-level container of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub status_columns: Vec<StatusColumn>,
}

impl Project {
    /// Iterate over every task of the project, section by section
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.sections.iter().flat_map(|s| s.tasks.iter())
    }

    /// Find a section of this project by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Status columns sorted by `order`, keeping declaration order on ties
    pub fn ordered_status_columns(&self) -> Vec<&StatusColumn> {
        let mut columns: Vec<&StatusColumn> = self.status_columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }
}

/// Named, ordered grouping of tasks within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub order: i32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A unit of work
///
/// `status` is free-form and should match a status column name of the owning
/// project, but tasks with unknown statuses are kept and grouped on their own.
/// `dependencies` holds task ids without any integrity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub assignees: Vec<User>,
    /// Id of the section holding this task
    pub section: String,
    pub labels: Vec<String>,
    pub dependencies: Vec<String>,
    pub sub_tasks: Vec<SubTask>,
    pub notes: Vec<Note>,
    pub attachments: Vec<Attachment>,
    pub time_entries: Vec<TimeEntry>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            status: DEFAULT_STATUS_COLUMNS[0].0.to_string(),
            start_date: None,
            due_date: None,
            assignees: Vec::new(),
            section: String::new(),
            labels: Vec::new(),
            dependencies: Vec::new(),
            sub_tasks: Vec::new(),
            notes: Vec::new(),
            attachments: Vec::new(),
            time_entries: Vec::new(),
        }
    }
}

impl Task {
    /// Check if the given user is assigned to this task
    pub fn is_assigned(&self, user_id: &str) -> bool {
        self.assignees.iter().any(|u| u.id == user_id)
    }

    /// Total hours logged on this task
    pub fn logged_hours(&self) -> f64 {
        self.time_entries.iter().map(|e| e.hours).sum()
    }

    /// Number of completed sub-tasks
    pub fn completed_sub_tasks(&self) -> usize {
        self.sub_tasks.iter().filter(|s| s.completed).count()
    }

    /// Check if the task's [start, due] interval overlaps [start, end]
    ///
    /// Tasks missing either date never overlap. Both ends are inclusive.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let (Some(task_start), Some(task_due)) = (self.start_date, self.due_date) else {
            return false;
        };
        (task_start >= start && task_start <= end)
            || (task_due >= start && task_due <= end)
            || (task_start <= start && task_due >= end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub assignees: Vec<User>,
}

/// Hours worked by a user on a task on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user: User,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Id of the user who wrote the note
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub url: String,
    /// MIME type
    #[serde(rename = "type")]
    pub kind: String,
    /// Size in bytes
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    /// Id of the user who uploaded the file
    pub uploaded_by: String,
}

/// Fields supplied by the caller when creating a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub due_date: Option<NaiveDate>,
}

/// Fields supplied by the caller when creating a task
///
/// The sub-collections (sub-tasks, notes, attachments, time entries) always
/// start empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    /// Section of the currently selected project that receives the task
    pub section: String,
    pub assignees: Vec<User>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub labels: Vec<String>,
    pub dependencies: Vec<String>,
}

impl Default for NewTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            status: DEFAULT_STATUS_COLUMNS[0].0.to_string(),
            section: String::new(),
            assignees: Vec::new(),
            start_date: None,
            due_date: None,
            labels: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeEntry {
    pub user: User,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttachment {
    pub name: String,
    pub url: String,
    pub kind: String,
    pub size: u64,
    pub uploaded_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_task(start: Option<NaiveDate>, due: Option<NaiveDate>) -> Task {
        Task {
            id: "task-1".to_string(),
            title: "Dated".to_string(),
            start_date: start,
            due_date: due,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_status_columns_order_and_colors() {
        let columns = default_status_columns((1..=4).map(|i| format!("s{}", i)));
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["unstarted", "in-progress", "completed", "blocked"]);
        assert_eq!(columns[1].color, "#6c5ce7");
        assert_eq!(columns[3].order, 3);
        assert_eq!(columns[2].id, "s3");
    }

    #[test]
    fn test_default_status_columns_fallback_ids() {
        let columns = default_status_columns(Vec::new());
        assert_eq!(columns[0].id, "status1");
        assert_eq!(columns[3].id, "status4");
    }

    fn column(id: &str, name: &str, order: i32) -> StatusColumn {
        StatusColumn {
            id: id.to_string(),
            name: name.to_string(),
            color: "#000".to_string(),
            order,
        }
    }

    fn time_entry(id: &str, date: NaiveDate, hours: f64) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            user: User {
                id: "u".to_string(),
                name: "U".to_string(),
                avatar: None,
            },
            date,
            hours,
            description: None,
        }
    }

    fn sub_task(id: &str, completed: bool) -> SubTask {
        SubTask {
            id: id.to_string(),
            title: id.to_string(),
            completed,
            assignees: Vec::new(),
        }
    }

    #[test]
    fn test_ordered_status_columns_stable_on_ties() {
        let project = Project {
            id: "p".to_string(),
            name: "P".to_string(),
            due_date: None,
            sections: Vec::new(),
            status_columns: vec![
                column("a", "late", 2),
                column("b", "first", 1),
                column("c", "second", 1),
            ],
        };
        let ids: Vec<&str> = project
            .ordered_status_columns()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_overlap_requires_both_dates() {
        let task = dated_task(Some(date(2025, 3, 10)), None);
        assert!(!task.overlaps(date(2025, 3, 1), date(2025, 3, 31)));
    }

    #[test]
    fn test_overlap_inclusive_bounds() {
        let task = dated_task(Some(date(2025, 3, 10)), Some(date(2025, 3, 15)));
        assert!(task.overlaps(date(2025, 3, 15), date(2025, 3, 20)));
        assert!(task.overlaps(date(2025, 3, 1), date(2025, 3, 10)));
        assert!(!task.overlaps(date(2025, 3, 16), date(2025, 3, 20)));
    }

    #[test]
    fn test_logged_hours_and_sub_task_counts() {
        let mut task = dated_task(None, None);
        task.time_entries = vec![
            time_entry("t1", date(2025, 1, 1), 1.5),
            time_entry("t2", date(2025, 1, 2), 2.0),
        ];
        task.sub_tasks = vec![sub_task("s1", true), sub_task("s2", false)];
        assert_eq!(task.logged_hours(), 3.5);
        assert_eq!(task.completed_sub_tasks(), 1);
    }

    #[test]
    fn test_new_task_default_status_matches_task() {
        assert_eq!(NewTask::default().status, "unstarted");
        assert_eq!(NewTask::default().status, Task::default().status);
    }

    #[test]
    fn test_task_toml_defaults() {
        let toml_str = r#"
    id = "task-1"
    title = "Minimal"
    section = "section1"
    "#;
        let task: Task = toml::from_str(toml_str).unwrap();
        assert_eq!(task.status, "unstarted");
        assert!(task.assignees.is_empty());
        assert!(task.time_entries.is_empty());
    }

    #[test]
    fn test_attachment_kind_serialized_as_type() {
        let attachment = Attachment {
            id: "a1".into(),
            name: "brief.pdf".into(),
            url: "/files/brief.pdf".into(),
            kind: "application/pdf".into(),
            size: 1024,
            uploaded_at: Utc::now(),
            uploaded_by: "user1".into(),
        };
        let serialized = toml::to_string(&attachment).unwrap();
        assert!(serialized.contains("type = \"application/pdf\""));
    }
}
