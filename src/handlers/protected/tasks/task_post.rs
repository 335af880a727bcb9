// handlers/protected/tasks/task_post.rs - POST /api/task handler

use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Task;
use crate::database::{projects, tasks};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub project_id: Uuid,
    pub assigned_to_id: Uuid,
}

/// POST /api/task - create a task inside a project
///
/// The requester and the assignee must both be members of the target
/// project. The requester becomes the task's creator.
pub async fn task_post(
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    let requester_is_member =
        projects::membership_exists(auth_user.user_id, request.project_id).await?;
    let assignee_is_member =
        projects::membership_exists(request.assigned_to_id, request.project_id).await?;

    if !requester_is_member || !assignee_is_member {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let task = tasks::insert(
        &request.title,
        request.description.as_deref(),
        request.project_id,
        request.assigned_to_id,
        auth_user.user_id,
    )
    .await?;

    Ok(ApiResponse::success(task))
}
