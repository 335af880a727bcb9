// handlers/protected/tasks/task_complete_put.rs - PUT /api/task/:task_id/complete handler

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::tasks;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// PUT /api/task/:task_id/complete - mark a task completed
///
/// Employees may only complete tasks assigned to them; administrators may
/// complete any task.
pub async fn task_complete_put(
    Extension(auth_user): Extension<AuthUser>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<()> {
    let task = tasks::find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    if !auth_user.is_administrator() && task.assigned_to_id != auth_user.user_id {
        return Err(ApiError::forbidden("Task is not assigned to you"));
    }

    tasks::mark_complete(task.id).await?;

    Ok(ApiResponse::empty())
}
