//! Initial dataset for a ProjectStore
//!
//! A seed is either the built-in demo data or a TOML file with the same shape:
//!
//! ```toml
//! current_project = "project1"
//!
//! [[users]]
//! id = "user1"
//! name = "Barb Demo"
//!
//! [[projects]]
//! id = "project1"
//! name = "Launch"
//!
//! [[projects.sections]]
//! id = "section1"
//! name = "Marketing"
//! order = 0
//! ```

use crate::store::{
    Group, Project, ProjectStore, Section, StatusColumn, Task, User, default_status_columns,
};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_project: Option<String>,

    #[serde(default)]
    pub users: Vec<User>,

    /// Columns given to every project that declares none
    #[serde(default = "seed_status_columns")]
    pub status_columns: Vec<StatusColumn>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub groups: Vec<Group>,
}

fn seed_status_columns() -> Vec<StatusColumn> {
    default_status_columns((1..=4).map(|i| format!("status{}", i)))
}

/// An empty seed: no users, projects or groups, and the default status columns
impl Default for Seed {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            status_columns: seed_status_columns(),
            projects: Vec::new(),
            groups: Vec::new(),
            current_project: None,
        }
    }
}

fn demo_date(month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, month, day)
}

impl Seed {
    /// Built-in demo data: three users, one project with two sections of
    /// tasks, one empty project and a group holding both
    pub fn demo() -> Self {
        let users = vec![
            User {
                id: "user1".to_string(),
                name: "Barb Demo".to_string(),
                avatar: Some("/avatars/barb.png".to_string()),
            },
            User {
                id: "user2".to_string(),
                name: "Jessica Demo".to_string(),
                avatar: Some("/avatars/jessica.png".to_string()),
            },
            User {
                id: "user3".to_string(),
                name: "Landon Demo".to_string(),
                avatar: Some("/avatars/landon.png".to_string()),
            },
        ];

        let task = |id: &str, title: &str, section: &str, user: &User, start, due| Task {
            id: id.to_string(),
            title: title.to_string(),
            status: "in-progress".to_string(),
            section: section.to_string(),
            assignees: vec![user.clone()],
            start_date: start,
            due_date: due,
            ..Default::default()
        };

        let mut action_2 = task(
            "task2",
            "Action 2",
            "section1",
            &users[1],
            demo_date(3, 28),
            demo_date(4, 3),
        );
        action_2.dependencies = vec!["task1".to_string()];

        let sections = vec![
            Section {
                id: "section1".to_string(),
                name: "Marketing".to_string(),
                order: 0,
                tasks: vec![
                    task(
                        "task1",
                        "Action 1",
                        "section1",
                        &users[0],
                        demo_date(3, 21),
                        demo_date(3, 26),
                    ),
                    action_2,
                ],
            },
            Section {
                id: "section2".to_string(),
                name: "Okey v2".to_string(),
                order: 1,
                tasks: vec![task(
                    "task3",
                    "Action 2.1",
                    "section2",
                    &users[2],
                    demo_date(3, 21),
                    demo_date(3, 28),
                )],
            },
        ];

        let status_columns = seed_status_columns();
        let projects = vec![
            Project {
                id: "project1".to_string(),
                name: "Test Project".to_string(),
                due_date: demo_date(3, 21),
                sections,
                status_columns: status_columns.clone(),
            },
            Project {
                id: "project2".to_string(),
                name: "Simple Project".to_string(),
                due_date: demo_date(4, 15),
                sections: Vec::new(),
                status_columns: status_columns.clone(),
            },
        ];

        Self {
            users,
            status_columns,
            projects,
            groups: vec![Group {
                id: "group1".to_string(),
                name: "Everyone".to_string(),
                projects: vec!["project1".to_string(), "project2".to_string()],
            }],
            current_project: Some("project1".to_string()),
        }
    }

    /// Check the structural invariants the store relies on
    ///
    /// Project ids must be unique, section and task ids must be unique across
    /// the whole seed, and every task's `section` must name the section that
    /// holds it.
    pub fn validate(&self) -> Result<()> {
        let mut project_ids = HashSet::new();
        let mut section_ids = HashSet::new();
        let mut task_ids = HashSet::new();

        for project in &self.projects {
            if !project_ids.insert(project.id.as_str()) {
                bail!("Duplicate project id '{}'", project.id);
            }
            for section in &project.sections {
                if !section_ids.insert(section.id.as_str()) {
                    bail!("Duplicate section id '{}'", section.id);
                }
                for task in &section.tasks {
                    if !task_ids.insert(task.id.as_str()) {
                        bail!("Duplicate task id '{}'", task.id);
                    }
                    if task.section != section.id {
                        bail!(
                            "Task '{}' is held by section '{}' but names section '{}'",
                            task.id,
                            section.id,
                            task.section
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate the seed and build a store from it
    ///
    /// Projects without status columns receive the seed's columns.
    pub fn into_store(self) -> Result<ProjectStore> {
        self.validate()?;
        let Seed {
            users,
            status_columns,
            mut projects,
            groups,
            current_project,
        } = self;
        for project in projects.iter_mut() {
            if project.status_columns.is_empty() {
                project.status_columns = status_columns.clone();
            }
        }
        Ok(ProjectStore::from_parts(
            users,
            projects,
            groups,
            current_project,
        ))
    }
}

/// Loads seeds from TOML files
pub struct SeedFile {
    file_path: PathBuf,
}

impl SeedFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Read the seed file, falling back to the demo seed if it does not exist
    pub fn load(&self) -> Result<Seed> {
        if !self.file_path.exists() {
            warn!(
                "Seed file {} not found, using demo data",
                self.file_path.display()
            );
            return Ok(Seed::demo());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let seed: Seed = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        info!(
            "Loaded {} project(s) and {} user(s) from {}",
            seed.projects.len(),
            seed.users.len(),
            self.file_path.display()
        );
        Ok(seed)
    }

    /// Write a seed as pretty TOML, e.g. to produce a starting file to edit
    pub fn save(&self, seed: &Seed) -> Result<()> {
        let content = toml::to_string_pretty(seed)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}
