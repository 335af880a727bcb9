// handlers/protected/projects/member_post.rs - POST /api/project/:project_id/add-member/:user_id handler

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::projects;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/project/:project_id/add-member/:user_id - add a user to a
/// project (administrators only)
pub async fn member_post(
    Extension(auth_user): Extension<AuthUser>,
    Path((project_id, user_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<()> {
    auth_user.require_administrator()?;

    if projects::membership_exists(user_id, project_id).await? {
        return Err(ApiError::bad_request("User already in project."));
    }

    projects::add_member(user_id, project_id).await?;

    Ok(ApiResponse::empty())
}
