// handlers/protected/projects/project_get.rs - GET /api/project handler

use std::collections::HashMap;

use axum::extract::Extension;
use serde::Serialize;
use uuid::Uuid;

use crate::database::projects;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
pub struct ProjectOverview {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tasks: Vec<TaskSummary>,
    pub assigned_employees: Vec<EmployeeName>,
}

#[derive(Debug, Serialize)]
pub struct TaskSummary {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub assigned_to_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct EmployeeName {
    pub id: Uuid,
    pub full_name: String,
}

/// GET /api/project - projects the authenticated user belongs to, with
/// their tasks and member roster
pub async fn project_get(
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Vec<ProjectOverview>> {
    let project_list = projects::list_for_user(auth_user.user_id).await?;
    let project_ids: Vec<Uuid> = project_list.iter().map(|project| project.id).collect();

    // Two batched loads instead of a query per project
    let mut tasks_by_project: HashMap<Uuid, Vec<TaskSummary>> = HashMap::new();
    for task in projects::tasks_for_projects(&project_ids).await? {
        tasks_by_project
            .entry(task.project_id)
            .or_default()
            .push(TaskSummary {
                id: task.id,
                title: task.title,
                is_completed: task.is_completed,
                assigned_to_id: task.assigned_to_id,
            });
    }

    let mut members_by_project: HashMap<Uuid, Vec<EmployeeName>> = HashMap::new();
    for member in projects::members_for_projects(&project_ids).await? {
        members_by_project
            .entry(member.project_id)
            .or_default()
            .push(EmployeeName {
                id: member.user_id,
                full_name: member.full_name,
            });
    }

    let overviews = project_list
        .into_iter()
        .map(|project| ProjectOverview {
            id: project.id,
            name: project.name,
            description: project.description,
            tasks: tasks_by_project.remove(&project.id).unwrap_or_default(),
            assigned_employees: members_by_project.remove(&project.id).unwrap_or_default(),
        })
        .collect();

    Ok(ApiResponse::success(overviews))
}
