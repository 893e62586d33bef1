use crate::error::StoreError;
use crate::store::model::{
    Attachment, Group, NewAttachment, NewProject, NewTask, NewTimeEntry, Note, Project, Section,
    StatusColumn, SubTask, Task, TimeEntry, User, default_status_columns,
};
use chrono::Utc;
use log::debug;

pub struct ProjectStore {
    /// Projects in display order, each owning its sections and tasks
    ///
    /// Vec keeps insertion order, which is the order every view shows.
    /// Lookups are linear scans; a store holds a handful of projects with at
    /// most a few hundred tasks, so no secondary index is kept.
    pub(crate) projects: Vec<Project>,

    pub(crate) groups: Vec<Group>,

    /// Team members, fixed after construction
    pub(crate) users: Vec<User>,

    /// Project the views and `create_task` operate on
    ///
    /// Not validated: it may name a project that does not exist, in which
    /// case `current_project` returns `None`.
    pub(crate) current_project_id: Option<String>,

    /// Counter for generating unique ids
    id_counter: u64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            groups: Vec::new(),
            users: Vec::new(),
            current_project_id: None,
            id_counter: 0,
        }
    }
}

impl ProjectStore {
    /// Create an empty store with no users
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already-built collections
    ///
    /// # Arguments
    /// * `users` - Team members; read-only afterwards
    /// * `projects` - Projects with their sections and tasks
    /// * `groups` - Project groups
    /// * `current_project_id` - Initially selected project
    pub fn from_parts(
        users: Vec<User>,
        projects: Vec<Project>,
        groups: Vec<Group>,
        current_project_id: Option<String>,
    ) -> Self {
        Self {
            projects,
            groups,
            users,
            current_project_id,
            id_counter: 0,
        }
    }

    /// Generate a new id with the given prefix that is not used anywhere in the store
    pub fn generate_id(&mut self, prefix: &str) -> String {
        loop {
            self.id_counter += 1;
            let candidate = format!("{}{}", prefix, self.id_counter);
            if !self.contains_id(&candidate) {
                return candidate;
            }
        }
    }

    /// Check whether any entity in the store already uses this id
    fn contains_id(&self, id: &str) -> bool {
        self.groups.iter().any(|g| g.id == id)
            || self.users.iter().any(|u| u.id == id)
            || self.projects.iter().any(|p| {
                p.id == id
                    || p.status_columns.iter().any(|c| c.id == id)
                    || p.sections.iter().any(|s| {
                        s.id == id
                            || s.tasks.iter().any(|t| {
                                t.id == id
                                    || t.sub_tasks.iter().any(|x| x.id == id)
                                    || t.notes.iter().any(|x| x.id == id)
                                    || t.attachments.iter().any(|x| x.id == id)
                                    || t.time_entries.iter().any(|x| x.id == id)
                            })
                    })
            })
    }

    // Read accessors

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn current_project_id(&self) -> Option<&str> {
        self.current_project_id.as_deref()
    }

    /// The selected project, if one is selected and it still exists
    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id
            .as_deref()
            .and_then(|id| self.project(id))
    }

    /// Find a task by id across all projects
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.projects
            .iter()
            .flat_map(|p| p.sections.iter())
            .flat_map(|s| s.tasks.iter())
            .find(|t| t.id == id)
    }

    /// Find a section by id across all projects
    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.projects
            .iter()
            .flat_map(|p| p.sections.iter())
            .find(|s| s.id == id)
    }

    /// Projects listed by a group, in membership order
    ///
    /// Ids that no longer resolve to a project are skipped.
    pub fn projects_in_group(&self, group_id: &str) -> Vec<&Project> {
        match self.group(group_id) {
            Some(group) => group
                .projects
                .iter()
                .filter_map(|id| self.project(id))
                .collect(),
            None => Vec::new(),
        }
    }

    fn find_project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    fn find_section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.projects
            .iter_mut()
            .flat_map(|p| p.sections.iter_mut())
            .find(|s| s.id == id)
    }

    fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.projects
            .iter_mut()
            .flat_map(|p| p.sections.iter_mut())
            .flat_map(|s| s.tasks.iter_mut())
            .find(|t| t.id == id)
    }

    fn find_group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Find a task for mutation, logging and reporting a miss
    fn task_mut_or_err(&mut self, op: &str, id: &str) -> Result<&mut Task, StoreError> {
        match self.find_task_mut(id) {
            Some(task) => Ok(task),
            None => {
                debug!("{}: task '{}' not found", op, id);
                Err(StoreError::TaskNotFound(id.to_string()))
            }
        }
    }

    // Projects

    /// Select the project the views operate on
    ///
    /// The id is not validated.
    pub fn select_project(&mut self, id: &str) {
        self.current_project_id = Some(id.to_string());
    }

    /// Create a project with no sections and the default status columns
    ///
    /// # Returns
    /// The id of the new project
    pub fn create_project(&mut self, new_project: NewProject) -> String {
        let id = self.generate_id("project");
        let column_ids: Vec<String> = (0..4).map(|_| self.generate_id("status")).collect();
        self.projects.push(Project {
            id: id.clone(),
            name: new_project.name,
            due_date: new_project.due_date,
            sections: Vec::new(),
            status_columns: default_status_columns(column_ids),
        });
        id
    }

    /// Replace the project with the same id
    pub fn update_project(&mut self, project: Project) -> Result<(), StoreError> {
        match self.find_project_mut(&project.id) {
            Some(existing) => {
                *existing = project;
                Ok(())
            }
            None => {
                debug!("update_project: project '{}' not found", project.id);
                Err(StoreError::ProjectNotFound(project.id))
            }
        }
    }

    /// Remove a project and drop its id from every group
    ///
    /// # Returns
    /// The removed project
    pub fn delete_project(&mut self, id: &str) -> Result<Project, StoreError> {
        let pos = self.projects.iter().position(|p| p.id == id).ok_or_else(|| {
            debug!("delete_project: project '{}' not found", id);
            StoreError::ProjectNotFound(id.to_string())
        })?;
        let project = self.projects.remove(pos);
        for group in self.groups.iter_mut() {
            group.projects.retain(|p| p != id);
        }
        Ok(project)
    }

    // Tasks

    /// Append a new task to a section of the currently selected project
    ///
    /// Only sections of the selected project are considered, even if another
    /// project has a section with the given id.
    ///
    /// # Returns
    /// The id of the new task
    pub fn create_task(&mut self, new_task: NewTask) -> Result<String, StoreError> {
        let project_id = self
            .current_project()
            .map(|p| p.id.clone())
            .ok_or_else(|| {
                debug!("create_task: no current project");
                StoreError::NoCurrentProject
            })?;
        let has_section = self
            .project(&project_id)
            .is_some_and(|p| p.section(&new_task.section).is_some());
        if !has_section {
            debug!(
                "create_task: section '{}' not in current project '{}'",
                new_task.section, project_id
            );
            return Err(StoreError::SectionNotFound(new_task.section));
        }

        let id = self.generate_id("task");
        let task = Task {
            id: id.clone(),
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            start_date: new_task.start_date,
            due_date: new_task.due_date,
            assignees: new_task.assignees,
            section: new_task.section,
            labels: new_task.labels,
            dependencies: new_task.dependencies,
            sub_tasks: Vec::new(),
            notes: Vec::new(),
            attachments: Vec::new(),
            time_entries: Vec::new(),
        };

        let section = self
            .find_project_mut(&project_id)
            .and_then(|p| p.sections.iter_mut().find(|s| s.id == task.section))
            .ok_or_else(|| StoreError::SectionNotFound(task.section.clone()))?;
        section.tasks.push(task);
        Ok(id)
    }

    /// Replace the task with the same id, wherever it is held
    ///
    /// The task stays in the section that holds it; use `move_task` to change
    /// sections.
    pub fn update_task(&mut self, task: Task) -> Result<(), StoreError> {
        let existing = self.task_mut_or_err("update_task", &task.id)?;
        *existing = task;
        Ok(())
    }

    /// Remove a task from whichever section holds it
    ///
    /// # Returns
    /// The removed task
    pub fn delete_task(&mut self, id: &str) -> Result<Task, StoreError> {
        for section in self.projects.iter_mut().flat_map(|p| p.sections.iter_mut()) {
            if let Some(pos) = section.tasks.iter().position(|t| t.id == id) {
                return Ok(section.tasks.remove(pos));
            }
        }
        debug!("delete_task: task '{}' not found", id);
        Err(StoreError::TaskNotFound(id.to_string()))
    }

    /// Move a task to another section and set its status
    ///
    /// Both the task and the destination section are looked up across all
    /// projects before anything changes, so a failed move leaves the task
    /// where it was. The task is appended to the end of the destination,
    /// including when the destination is its current section.
    ///
    /// # Arguments
    /// * `task_id` - Task to move
    /// * `new_section_id` - Destination section
    /// * `new_status` - Status the task gets after the move
    pub fn move_task(
        &mut self,
        task_id: &str,
        new_section_id: &str,
        new_status: &str,
    ) -> Result<(), StoreError> {
        if self.find_task(task_id).is_none() {
            debug!("move_task: task '{}' not found", task_id);
            return Err(StoreError::TaskNotFound(task_id.to_string()));
        }
        if self.find_section(new_section_id).is_none() {
            debug!(
                "move_task: destination section '{}' not found, task '{}' left in place",
                new_section_id, task_id
            );
            return Err(StoreError::SectionNotFound(new_section_id.to_string()));
        }

        let mut task = self.delete_task(task_id)?;
        task.section = new_section_id.to_string();
        task.status = new_status.to_string();
        match self.find_section_mut(new_section_id) {
            Some(section) => {
                section.tasks.push(task);
                Ok(())
            }
            None => Err(StoreError::SectionNotFound(new_section_id.to_string())),
        }
    }

    // Sections

    /// Append a section to a project; its order is the current section count
    ///
    /// # Returns
    /// The id of the new section
    pub fn create_section(&mut self, project_id: &str, name: &str) -> Result<String, StoreError> {
        if self.project(project_id).is_none() {
            debug!("create_section: project '{}' not found", project_id);
            return Err(StoreError::ProjectNotFound(project_id.to_string()));
        }
        let id = self.generate_id("section");
        let project = self
            .find_project_mut(project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;
        project.sections.push(Section {
            id: id.clone(),
            name: name.to_string(),
            order: project.sections.len() as i32,
            tasks: Vec::new(),
        });
        Ok(id)
    }

    /// Rename a section, searched across all projects
    pub fn update_section(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
        match self.find_section_mut(id) {
            Some(section) => {
                section.name = name.to_string();
                Ok(())
            }
            None => {
                debug!("update_section: section '{}' not found", id);
                Err(StoreError::SectionNotFound(id.to_string()))
            }
        }
    }

    /// Remove a section, searched across all projects
    ///
    /// Tasks are not moved elsewhere: they leave the store together with the
    /// returned section. The remaining sections keep their `order` values.
    pub fn delete_section(&mut self, id: &str) -> Result<Section, StoreError> {
        for project in self.projects.iter_mut() {
            if let Some(pos) = project.sections.iter().position(|s| s.id == id) {
                return Ok(project.sections.remove(pos));
            }
        }
        debug!("delete_section: section '{}' not found", id);
        Err(StoreError::SectionNotFound(id.to_string()))
    }

    // Status columns

    /// Append a status column to a project; its order is the current column count
    ///
    /// # Returns
    /// The id of the new column
    pub fn create_status_column(
        &mut self,
        project_id: &str,
        name: &str,
        color: &str,
    ) -> Result<String, StoreError> {
        if self.project(project_id).is_none() {
            debug!("create_status_column: project '{}' not found", project_id);
            return Err(StoreError::ProjectNotFound(project_id.to_string()));
        }
        let id = self.generate_id("status");
        let project = self
            .find_project_mut(project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;
        project.status_columns.push(StatusColumn {
            id: id.clone(),
            name: name.to_string(),
            color: color.to_string(),
            order: project.status_columns.len() as i32,
        });
        Ok(id)
    }

    /// Rename and recolor every status column with this id, in any project
    ///
    /// Seeded projects may share column ids, so more than one column can match.
    /// Tasks keep their status strings.
    pub fn update_status_column(
        &mut self,
        id: &str,
        name: &str,
        color: &str,
    ) -> Result<(), StoreError> {
        let mut found = false;
        for column in self
            .projects
            .iter_mut()
            .flat_map(|p| p.status_columns.iter_mut())
            .filter(|c| c.id == id)
        {
            column.name = name.to_string();
            column.color = color.to_string();
            found = true;
        }
        if found {
            Ok(())
        } else {
            debug!("update_status_column: column '{}' not found", id);
            Err(StoreError::StatusColumnNotFound(id.to_string()))
        }
    }

    /// Remove every status column with this id, in any project
    ///
    /// Remaining columns keep their `order` values.
    pub fn delete_status_column(&mut self, id: &str) -> Result<(), StoreError> {
        let mut found = false;
        for project in self.projects.iter_mut() {
            let before = project.status_columns.len();
            project.status_columns.retain(|c| c.id != id);
            found |= project.status_columns.len() != before;
        }
        if found {
            Ok(())
        } else {
            debug!("delete_status_column: column '{}' not found", id);
            Err(StoreError::StatusColumnNotFound(id.to_string()))
        }
    }

    // Groups

    /// Create an empty group
    ///
    /// # Returns
    /// The id of the new group
    pub fn create_group(&mut self, name: &str) -> String {
        let id = self.generate_id("group");
        self.groups.push(Group {
            id: id.clone(),
            name: name.to_string(),
            projects: Vec::new(),
        });
        id
    }

    pub fn update_group(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
        match self.find_group_mut(id) {
            Some(group) => {
                group.name = name.to_string();
                Ok(())
            }
            None => {
                debug!("update_group: group '{}' not found", id);
                Err(StoreError::GroupNotFound(id.to_string()))
            }
        }
    }

    pub fn delete_group(&mut self, id: &str) -> Result<Group, StoreError> {
        let pos = self.groups.iter().position(|g| g.id == id).ok_or_else(|| {
            debug!("delete_group: group '{}' not found", id);
            StoreError::GroupNotFound(id.to_string())
        })?;
        Ok(self.groups.remove(pos))
    }

    /// Add a project id to a group's membership list
    ///
    /// Adding a project that is already a member changes nothing. The project
    /// id itself is not validated.
    pub fn add_project_to_group(
        &mut self,
        project_id: &str,
        group_id: &str,
    ) -> Result<(), StoreError> {
        let group = self.find_group_mut(group_id).ok_or_else(|| {
            debug!("add_project_to_group: group '{}' not found", group_id);
            StoreError::GroupNotFound(group_id.to_string())
        })?;
        if !group.projects.iter().any(|p| p == project_id) {
            group.projects.push(project_id.to_string());
        }
        Ok(())
    }

    pub fn remove_project_from_group(
        &mut self,
        project_id: &str,
        group_id: &str,
    ) -> Result<(), StoreError> {
        let group = self.find_group_mut(group_id).ok_or_else(|| {
            debug!("remove_project_from_group: group '{}' not found", group_id);
            StoreError::GroupNotFound(group_id.to_string())
        })?;
        group.projects.retain(|p| p != project_id);
        Ok(())
    }

    // Task sub-records

    /// Log hours on a task
    ///
    /// # Returns
    /// The id of the new time entry
    pub fn create_time_entry(
        &mut self,
        task_id: &str,
        entry: NewTimeEntry,
    ) -> Result<String, StoreError> {
        if !entry.hours.is_finite() || entry.hours < 0.0 {
            debug!("create_time_entry: rejecting {} hours", entry.hours);
            return Err(StoreError::InvalidHours(entry.hours));
        }
        self.task_mut_or_err("create_time_entry", task_id)?;
        let id = self.generate_id("time");
        let task = self.task_mut_or_err("create_time_entry", task_id)?;
        task.time_entries.push(TimeEntry {
            id: id.clone(),
            user: entry.user,
            date: entry.date,
            hours: entry.hours,
            description: entry.description,
        });
        Ok(id)
    }

    /// Assign a user to a task, or unassign them if already assigned
    ///
    /// # Returns
    /// Whether the user is assigned after the call
    pub fn toggle_assignee(&mut self, task_id: &str, user_id: &str) -> Result<bool, StoreError> {
        let user = self.user(user_id).cloned().ok_or_else(|| {
            debug!("toggle_assignee: user '{}' not found", user_id);
            StoreError::UserNotFound(user_id.to_string())
        })?;
        let task = self.task_mut_or_err("toggle_assignee", task_id)?;
        if task.is_assigned(user_id) {
            task.assignees.retain(|u| u.id != user_id);
            Ok(false)
        } else {
            task.assignees.push(user);
            Ok(true)
        }
    }

    /// Append an incomplete sub-task
    ///
    /// # Returns
    /// The id of the new sub-task
    pub fn create_sub_task(&mut self, task_id: &str, title: &str) -> Result<String, StoreError> {
        self.task_mut_or_err("create_sub_task", task_id)?;
        let id = self.generate_id("subtask");
        let task = self.task_mut_or_err("create_sub_task", task_id)?;
        task.sub_tasks.push(SubTask {
            id: id.clone(),
            title: title.to_string(),
            completed: false,
            assignees: Vec::new(),
        });
        Ok(id)
    }

    /// Flip the completed flag of a sub-task
    ///
    /// # Returns
    /// The new completed value
    pub fn toggle_sub_task(
        &mut self,
        task_id: &str,
        sub_task_id: &str,
    ) -> Result<bool, StoreError> {
        let task = self.task_mut_or_err("toggle_sub_task", task_id)?;
        match task.sub_tasks.iter_mut().find(|s| s.id == sub_task_id) {
            Some(sub_task) => {
                sub_task.completed = !sub_task.completed;
                Ok(sub_task.completed)
            }
            None => {
                debug!(
                    "toggle_sub_task: sub-task '{}' not found in '{}'",
                    sub_task_id, task_id
                );
                Err(StoreError::SubTaskNotFound {
                    task: task_id.to_string(),
                    sub_task: sub_task_id.to_string(),
                })
            }
        }
    }

    /// Attach a note to a task, stamped with the current time
    pub fn create_note(
        &mut self,
        task_id: &str,
        title: &str,
        content: &str,
        created_by: &str,
    ) -> Result<String, StoreError> {
        self.task_mut_or_err("create_note", task_id)?;
        let id = self.generate_id("note");
        let task = self.task_mut_or_err("create_note", task_id)?;
        task.notes.push(Note {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
            created_by: created_by.to_string(),
        });
        Ok(id)
    }

    /// Record an attachment on a task, stamped with the current time
    pub fn create_attachment(
        &mut self,
        task_id: &str,
        attachment: NewAttachment,
    ) -> Result<String, StoreError> {
        self.task_mut_or_err("create_attachment", task_id)?;
        let id = self.generate_id("attachment");
        let task = self.task_mut_or_err("create_attachment", task_id)?;
        task.attachments.push(Attachment {
            id: id.clone(),
            name: attachment.name,
            url: attachment.url,
            kind: attachment.kind,
            size: attachment.size,
            uploaded_at: Utc::now(),
            uploaded_by: attachment.uploaded_by,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_section() -> (ProjectStore, String, String) {
        let mut store = ProjectStore::new();
        let project_id = store.create_project(NewProject {
            name: "Website".to_string(),
            due_date: None,
        });
        let section_id = store.create_section(&project_id, "Backlog").unwrap();
        store.select_project(&project_id);
        (store, project_id, section_id)
    }

    #[test]
    fn test_generate_id_skips_used_ids() {
        let mut store = ProjectStore::from_parts(
            Vec::new(),
            Vec::new(),
            vec![Group {
                id: "group1".to_string(),
                name: "Taken".to_string(),
                projects: Vec::new(),
            }],
            None,
        );
        assert_eq!(store.generate_id("group"), "group2");
        assert_eq!(store.generate_id("group"), "group3");
    }

    #[test]
    fn test_create_project_column_ids_unique() {
        let mut store = ProjectStore::new();
        let a = store.create_project(NewProject::default());
        let b = store.create_project(NewProject::default());
        let column_ids = |id: &str| -> Vec<String> {
            store
                .project(id)
                .unwrap()
                .status_columns
                .iter()
                .map(|c| c.id.clone())
                .collect()
        };
        let ids_a = column_ids(&a);
        let ids_b = column_ids(&b);
        assert!(ids_a.iter().all(|id| !ids_b.contains(id)));
    }

    #[test]
    fn test_create_task_uses_current_project_only() {
        let (mut store, _, _) = store_with_section();
        let other = store.create_project(NewProject::default());
        let other_section = store.create_section(&other, "Elsewhere").unwrap();

        let result = store.create_task(NewTask {
            title: "Misplaced".to_string(),
            section: other_section.clone(),
            ..Default::default()
        });
        assert_eq!(result, Err(StoreError::SectionNotFound(other_section)));
        assert!(store.project(&other).unwrap().tasks().next().is_none());
    }

    #[test]
    fn test_create_task_without_selection() {
        let mut store = ProjectStore::new();
        let result = store.create_task(NewTask::default());
        assert_eq!(result, Err(StoreError::NoCurrentProject));
    }

    #[test]
    fn test_create_task_with_dangling_selection() {
        let (mut store, _, section_id) = store_with_section();
        store.select_project("missing");
        assert!(store.current_project().is_none());
        let result = store.create_task(NewTask {
            section: section_id,
            ..Default::default()
        });
        assert_eq!(result, Err(StoreError::NoCurrentProject));
    }

    #[test]
    fn test_move_within_same_section_keeps_task() {
        let (mut store, _, section_id) = store_with_section();
        let first = store
            .create_task(NewTask {
                title: "First".into(),
                section: section_id.clone(),
                ..Default::default()
            })
            .unwrap();
        let second = store
            .create_task(NewTask {
                title: "Second".into(),
                section: section_id.clone(),
                ..Default::default()
            })
            .unwrap();

        store.move_task(&first, &section_id, "blocked").unwrap();

        let section = store.find_section(&section_id).unwrap();
        let ids: Vec<&str> = section.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
        assert_eq!(store.find_task(&first).unwrap().status, "blocked");
    }

    #[test]
    fn test_create_time_entry_rejects_bad_hours() {
        let (mut store, _, section_id) = store_with_section();
        let task_id = store
            .create_task(NewTask {
                section: section_id,
                ..Default::default()
            })
            .unwrap();
        let user = User {
            id: "u1".into(),
            name: "U".into(),
            avatar: None,
        };
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        for hours in [-1.0, f64::NAN, f64::INFINITY] {
            let result = store.create_time_entry(
                &task_id,
                NewTimeEntry {
                    user: user.clone(),
                    date,
                    hours,
                    description: None,
                },
            );
            assert!(matches!(result, Err(StoreError::InvalidHours(_))));
        }
        assert!(store.find_task(&task_id).unwrap().time_entries.is_empty());
    }

    #[test]
    fn test_failed_lookup_does_not_consume_visible_state() {
        let (mut store, project_id, _) = store_with_section();
        let before = store.project(&project_id).cloned();
        assert!(store.create_sub_task("missing", "x").is_err());
        assert!(store.create_note("missing", "t", "c", "u").is_err());
        assert_eq!(store.project(&project_id).cloned(), before);
    }
}
