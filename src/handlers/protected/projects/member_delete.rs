// handlers/protected/projects/member_delete.rs - DELETE /api/project/:project_id/remove-member/:user_id handler

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::projects;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// DELETE /api/project/:project_id/remove-member/:user_id - remove a user
/// from a project (administrators only)
pub async fn member_delete(
    Extension(auth_user): Extension<AuthUser>,
    Path((project_id, user_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<()> {
    auth_user.require_administrator()?;

    let removed = projects::remove_member(user_id, project_id).await?;
    if !removed {
        return Err(ApiError::not_found("Membership not found"));
    }

    Ok(ApiResponse::no_content())
}
