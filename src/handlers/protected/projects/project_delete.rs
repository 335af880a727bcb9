// handlers/protected/projects/project_delete.rs - DELETE /api/project/:id handler

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::projects;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// DELETE /api/project/:id - delete a project (administrators only)
///
/// Refused while any of its tasks remain open.
pub async fn project_delete(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    auth_user.require_administrator()?;

    let project = projects::find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    if projects::has_open_tasks(project.id).await? {
        return Err(ApiError::bad_request("Cannot delete a project with open tasks"));
    }

    projects::delete(project.id).await?;

    Ok(ApiResponse::no_content())
}
