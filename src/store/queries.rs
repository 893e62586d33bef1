//! Derived views over a ProjectStore
//!
//! Every query is recomputed from the current state on each call; nothing is
//! cached between calls.

use super::model::{Project, StatusColumn, Task};
use super::project_store::ProjectStore;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

/// Tasks sharing one status label
#[derive(Debug, Clone)]
pub struct StatusBucket<'a> {
    pub status: String,
    /// Declared column for this status; `None` for statuses no column declares
    pub column: Option<&'a StatusColumn>,
    pub tasks: Vec<&'a Task>,
}

/// Ordered mapping from status label to the tasks bearing it
///
/// Declared columns come first in display order, each present even when
/// empty. Statuses without a column follow in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct StatusBuckets<'a> {
    buckets: Vec<StatusBucket<'a>>,
}

impl<'a> StatusBuckets<'a> {
    /// Tasks with the given status, if the status has a bucket
    pub fn get(&self, status: &str) -> Option<&[&'a Task]> {
        self.buckets
            .iter()
            .find(|b| b.status == status)
            .map(|b| b.tasks.as_slice())
    }

    /// Status labels in bucket order
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.status.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusBucket<'a>> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn push_task(&mut self, task: &'a Task) {
        match self.buckets.iter_mut().find(|b| b.status == task.status) {
            Some(bucket) => bucket.tasks.push(task),
            None => self.buckets.push(StatusBucket {
                status: task.status.clone(),
                column: None,
                tasks: vec![task],
            }),
        }
    }
}

const TIMESHEET_DAYS: u64 = 28;

/// Status label counted as done in the summary
pub const COMPLETED_STATUS: &str = "completed";

/// Number of deadlines the summary lists
pub const UPCOMING_DEADLINE_LIMIT: usize = 3;

/// Totals across every project, as shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub project_count: usize,
    pub group_count: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Completed share of all tasks, rounded to the nearest whole percent
    pub completion_percent: u32,
    /// Projects due after today, soonest first
    pub upcoming_deadlines: Vec<&'a Project>,
}

fn rounded_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Halves round up
    let percent = (part * 200 + total) / (total * 2);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Format a date as an ISO `YYYY-MM-DD` key
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The 28-day timesheet window starting on `start`
///
/// Returns `None` when the window would run past the last representable date.
pub fn timesheet_range(start: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let end = start.checked_add_days(Days::new(TIMESHEET_DAYS - 1))?;
    Some((start, end))
}

/// The 28-day timesheet window containing `anchor`
///
/// # Returns
/// `(start, end)` where `start` is the Sunday on or before `anchor` and `end`
/// is 27 days later, or `None` if either end is out of chrono's date range
pub fn timesheet_window(anchor: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let days_from_sunday = u64::from(anchor.weekday().num_days_from_sunday());
    let start = anchor.checked_sub_days(Days::new(days_from_sunday))?;
    timesheet_range(start)
}

impl ProjectStore {
    /// Group a project's tasks by status
    ///
    /// Returns no buckets when the project does not exist.
    pub fn tasks_by_status(&self, project_id: &str) -> StatusBuckets<'_> {
        let Some(project) = self.project(project_id) else {
            return StatusBuckets::default();
        };

        let mut buckets = StatusBuckets::default();
        for column in project.ordered_status_columns() {
            // Two columns with the same label share one bucket
            if buckets.buckets.iter().any(|b| b.status == column.name) {
                continue;
            }
            buckets.buckets.push(StatusBucket {
                status: column.name.clone(),
                column: Some(column),
                tasks: Vec::new(),
            });
        }
        for task in project.tasks() {
            buckets.push_task(task);
        }
        buckets
    }

    /// All tasks of a project in section order, then position within the section
    pub fn tasks_for_gantt(&self, project_id: &str) -> Vec<&Task> {
        self.project(project_id)
            .map(|p| p.tasks().collect())
            .unwrap_or_default()
    }

    /// Tasks of a project whose [start, due] interval overlaps [start, end]
    ///
    /// Tasks without both a start and a due date are never included.
    pub fn tasks_for_calendar(
        &self,
        project_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&Task> {
        self.project(project_id)
            .map(|p| p.tasks().filter(|t| t.overlaps(start, end)).collect())
            .unwrap_or_default()
    }

    /// Calendar tasks keyed by their start date
    pub fn calendar_days(
        &self,
        project_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BTreeMap<NaiveDate, Vec<&Task>> {
        let mut days: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
        for task in self.tasks_for_calendar(project_id, start, end) {
            if let Some(task_start) = task.start_date {
                days.entry(task_start).or_default().push(task);
            }
        }
        days
    }

    /// Task counts, completion rate and the next project deadlines
    ///
    /// # Arguments
    /// * `today` - Deadlines on or before this day are not upcoming
    pub fn summary(&self, today: NaiveDate) -> Summary<'_> {
        let all_tasks = || self.projects.iter().flat_map(|p| p.tasks());
        let total_tasks = all_tasks().count();
        let completed_tasks = all_tasks()
            .filter(|t| t.status == COMPLETED_STATUS)
            .count();

        let mut upcoming_deadlines: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.due_date.is_some_and(|due| due > today))
            .collect();
        upcoming_deadlines.sort_by_key(|p| p.due_date);
        upcoming_deadlines.truncate(UPCOMING_DEADLINE_LIMIT);

        Summary {
            project_count: self.projects.len(),
            group_count: self.groups.len(),
            total_tasks,
            completed_tasks,
            completion_percent: rounded_percent(completed_tasks, total_tasks),
            upcoming_deadlines,
        }
    }

    /// Hours logged per user per day over an inclusive date range
    ///
    /// Every user gets an entry for every day in the range, defaulting to 0.
    /// Time entries by users that are not part of the store are ignored.
    ///
    /// # Returns
    /// User id → ISO date → total hours
    pub fn user_workloads(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BTreeMap<String, BTreeMap<String, f64>> {
        let mut workloads: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

        for user in &self.users {
            let days = workloads.entry(user.id.clone()).or_default();
            for day in start.iter_days().take_while(|d| *d <= end) {
                days.insert(iso_date(day), 0.0);
            }
        }

        let entries = self
            .projects
            .iter()
            .flat_map(|p| p.tasks())
            .flat_map(|t| t.time_entries.iter())
            .filter(|e| e.date >= start && e.date <= end);
        for entry in entries {
            if let Some(days) = workloads.get_mut(&entry.user.id) {
                *days.entry(iso_date(entry.date)).or_insert(0.0) += entry.hours;
            }
        }

        workloads
    }
}
