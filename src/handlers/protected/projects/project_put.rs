// handlers/protected/projects/project_put.rs - PUT /api/project/:id handler

use axum::extract::{Extension, Path};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Project;
use crate::database::projects;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// PUT /api/project/:id - rename a project or replace its description
/// (administrators only)
pub async fn project_put(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> ApiResult<Project> {
    auth_user.require_administrator()?;

    let project = projects::update(id, &request.name, request.description.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(ApiResponse::success(project))
}
