//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use project_store::{NewProject, NewTask, NewTimeEntry, ProjectStore, Seed, User};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Store built from the demo seed (project1 selected)
pub fn demo_store() -> ProjectStore {
    Seed::demo().into_store().unwrap()
}

pub fn user(store: &ProjectStore, id: &str) -> User {
    store.user(id).cloned().unwrap()
}

/// Create a task in the given section of the current project
pub fn add_task(store: &mut ProjectStore, title: &str, section: &str, status: &str) -> String {
    store
        .create_task(NewTask {
            title: title.to_string(),
            section: section.to_string(),
            status: status.to_string(),
            ..Default::default()
        })
        .unwrap()
}

/// Create a task with start and due dates in the given section of the current project
pub fn add_dated_task(
    store: &mut ProjectStore,
    title: &str,
    section: &str,
    start: NaiveDate,
    due: NaiveDate,
) -> String {
    store
        .create_task(NewTask {
            title: title.to_string(),
            section: section.to_string(),
            status: "unstarted".to_string(),
            start_date: Some(start),
            due_date: Some(due),
            ..Default::default()
        })
        .unwrap()
}

/// Fresh selected project with one section, returning (store, project id, section id)
pub fn store_with_section(users: Vec<User>) -> (ProjectStore, String, String) {
    let mut store = ProjectStore::from_parts(users, Vec::new(), Vec::new(), None);
    let project_id = store.create_project(NewProject {
        name: "Test".to_string(),
        due_date: None,
    });
    let section_id = store.create_section(&project_id, "Main").unwrap();
    store.select_project(&project_id);
    (store, project_id, section_id)
}

pub fn log_hours(store: &mut ProjectStore, task_id: &str, user: &User, day: NaiveDate, hours: f64) {
    store
        .create_time_entry(
            task_id,
            NewTimeEntry {
                user: user.clone(),
                date: day,
                hours,
                description: None,
            },
        )
        .unwrap();
}
