// handlers/protected/tasks/project_tasks_get.rs - GET /api/task/project/:project_id handler

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::projects;
use crate::database::tasks::{self, TaskWithNames};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/task/project/:project_id - tasks of a project the authenticated
/// user belongs to, with assignee and creator names resolved
pub async fn project_tasks_get(
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Vec<TaskWithNames>> {
    if !projects::membership_exists(auth_user.user_id, project_id).await? {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let tasks = tasks::list_for_project(project_id).await?;

    Ok(ApiResponse::success(tasks))
}
