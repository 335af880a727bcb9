// handlers/protected/projects/project_post.rs - POST /api/project handler

use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::projects;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub employee_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub assigned_employees: Vec<Uuid>,
}

/// POST /api/project - create a project with its initial members
/// (administrators only)
pub async fn project_post(
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<CreateProjectResponse> {
    auth_user.require_administrator()?;

    let project = projects::insert(
        &request.name,
        request.description.as_deref(),
        &request.employee_ids,
    )
    .await?;

    Ok(ApiResponse::success(CreateProjectResponse {
        id: project.id,
        name: project.name,
        assigned_employees: request.employee_ids,
    }))
}
