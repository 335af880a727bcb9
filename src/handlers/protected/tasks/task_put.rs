// handlers/protected/tasks/task_put.rs - PUT /api/task/:id handler

use axum::extract::{Extension, Path};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Task;
use crate::database::tasks;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub assigned_to_id: Uuid,
}

/// PUT /api/task/:id - update title, description and assignee
///
/// Allowed for administrators and for the currently assigned user.
pub async fn task_put(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Task> {
    let task = tasks::find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    let is_assigned_user = task.assigned_to_id == auth_user.user_id;
    if !auth_user.is_administrator() && !is_assigned_user {
        return Err(ApiError::forbidden("Task is not assigned to you"));
    }

    let updated = tasks::update(
        task.id,
        &request.title,
        request.description.as_deref(),
        request.assigned_to_id,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Task not found"))?;

    Ok(ApiResponse::success(updated))
}
