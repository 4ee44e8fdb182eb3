//! Human-readable rendering of tool results.

use tabled::{Table, Tabled, builder::Builder, settings::Style};

use crate::vikunja::{Project, Task};

const DESCRIPTION_WIDTH: usize = 60;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Project")]
    project_id: i64,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            done: yes_no(task.done),
            project_id: task.project_id,
            description: truncate_with_ellipsis(
                &display_description(task.description.as_deref()),
                DESCRIPTION_WIDTH,
            ),
        }
    }
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            description: truncate_with_ellipsis(
                &display_description(project.description.as_deref()),
                DESCRIPTION_WIDTH,
            ),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn display_description(description: Option<&str>) -> String {
    match description {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        _ => "-".to_string(),
    }
}

/// Truncate a string with ellipsis if it exceeds max length
fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

fn styled(mut table: Table) -> String {
    table.with(Style::rounded());
    table.to_string()
}

pub fn tasks(heading: &str, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{}\nNo tasks found.", heading);
    }
    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    format!("{} ({})\n{}", heading, tasks.len(), styled(Table::new(rows)))
}

pub fn projects(heading: &str, projects: &[Project]) -> String {
    if projects.is_empty() {
        return format!("{}\nNo projects found.", heading);
    }
    let rows: Vec<ProjectRow> = projects.iter().map(ProjectRow::from).collect();
    format!(
        "{} ({})\n{}",
        heading,
        projects.len(),
        styled(Table::new(rows))
    )
}

/// Single task as a field/value table. Descriptions are shown in full.
pub fn task(heading: &str, task: &Task) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["ID".to_string(), task.id.to_string()]);
    builder.push_record(["Title", &task.title]);
    builder.push_record([
        "Description".to_string(),
        display_description(task.description.as_deref()),
    ]);
    builder.push_record(["Done", yes_no(task.done)]);
    builder.push_record(["Project ID".to_string(), task.project_id.to_string()]);
    format!("{}\n{}", heading, styled(builder.build()))
}

pub fn project(heading: &str, project: &Project) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["ID".to_string(), project.id.to_string()]);
    builder.push_record(["Title", &project.title]);
    builder.push_record([
        "Description".to_string(),
        display_description(project.description.as_deref()),
    ]);
    format!("{}\n{}", heading, styled(builder.build()))
}
