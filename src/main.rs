//! Project Store - Command Line Entry Point
//!
//! Loads a seed into a store and prints one of its views.
//! The actual implementation is in the `project_store` library.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use project_store::store::{local_date_today, timesheet_range, timesheet_window};
use project_store::validation::{normalize_id, parse_date, parse_date_range};
use project_store::{Project, ProjectStore, ProjectStoreHandle, formatting};

/// Project Store - projects, kanban board, timeline, calendar and timesheet views
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML seed file (defaults to built-in demo data)
    #[arg(long)]
    seed: Option<String>,

    /// Project to show (defaults to the seed's current project)
    #[arg(long)]
    project: Option<String>,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand, Debug)]
enum View {
    /// List projects
    Projects,
    /// Task totals, completion rate and upcoming deadlines
    Dashboard,
    /// Tasks grouped by status column
    Kanban,
    /// Tasks in timeline order with their date spans
    Gantt,
    /// Tasks overlapping a date range, by start day
    Calendar {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        to: String,
    },
    /// Hours logged per user per day
    Timesheet {
        /// First day, YYYY-MM-DD (defaults to the 4-week window around today)
        #[arg(long)]
        from: Option<String>,
        /// Last day, YYYY-MM-DD (defaults to 27 days after --from)
        #[arg(long)]
        to: Option<String>,
    },
}

fn selected_project(store: &ProjectStore) -> Result<&Project> {
    match store.current_project() {
        Some(project) => Ok(project),
        None => bail!(
            "No project selected. Use --project with one of the ids from the projects view."
        ),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let handle = ProjectStoreHandle::from_seed(args.seed.as_deref())?;
    if let Some(project) = &args.project {
        let id = normalize_id(project);
        info!("Selecting project {}", id);
        handle.write(|store| store.select_project(&id));
    }

    let output = handle.read(|store| -> Result<String> {
        match &args.view {
            View::Projects => Ok(formatting::format_projects(store)),
            View::Dashboard => {
                let summary = store.summary(local_date_today());
                Ok(formatting::format_summary(&summary))
            }
            View::Kanban => {
                let project = selected_project(store)?;
                let buckets = store.tasks_by_status(&project.id);
                Ok(formatting::format_kanban(project, &buckets))
            }
            View::Gantt => {
                let project = selected_project(store)?;
                let tasks = store.tasks_for_gantt(&project.id);
                Ok(formatting::format_gantt(project, &tasks))
            }
            View::Calendar { from, to } => {
                let project = selected_project(store)?;
                let (start, end) = parse_date_range(from, to)?;
                let days = store.calendar_days(&project.id, start, end);
                Ok(formatting::format_calendar(project, start, end, &days))
            }
            View::Timesheet { from, to } => {
                let (start, end) = match (from, to) {
                    (Some(from), Some(to)) => parse_date_range(from, to)?,
                    (Some(from), None) => {
                        let start = parse_date(from)?;
                        timesheet_range(start)
                            .with_context(|| format!("No 4-week window fits after {}", start))?
                    }
                    (None, Some(_)) => bail!("--to requires --from"),
                    (None, None) => timesheet_window(local_date_today())
                        .context("Today's date has no 4-week window")?,
                };
                let workloads = store.user_workloads(start, end);
                Ok(formatting::format_timesheet(store.users(), &workloads))
            }
        }
    })?;

    println!("{}", output);
    Ok(())
}
