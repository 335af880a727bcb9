// handlers/protected/users/employee_delete.rs - DELETE /api/user/employees/:id handler

use axum::extract::{Extension, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// DELETE /api/user/employees/:id - soft-delete a user (administrators only)
///
/// Refused while the user still has tasks assigned. The lookup ignores the
/// soft-delete filter so repeat deletes stay a no-op instead of a 404.
pub async fn employee_delete(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    auth_user.require_administrator()?;

    let user = users::find_by_id_including_deleted(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if users::has_assigned_tasks(user.id).await? {
        return Err(ApiError::bad_request(
            "This user is assigned to one or more tasks and cannot be deleted.",
        ));
    }

    users::soft_delete(user.id).await?;

    Ok(ApiResponse::success(json!({ "message": "User soft-deleted successfully" })))
}
