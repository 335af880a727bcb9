// handlers/protected/tasks/task_delete.rs - DELETE /api/task/:id handler

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::tasks;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// DELETE /api/task/:id - delete a task (administrators only)
pub async fn task_delete(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    auth_user.require_administrator()?;

    if !tasks::delete(id).await? {
        return Err(ApiError::not_found("Task not found"));
    }

    Ok(ApiResponse::no_content())
}
