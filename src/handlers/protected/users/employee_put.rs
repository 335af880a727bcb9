// handlers/protected/users/employee_put.rs - PUT /api/user/employees/:id handler

use axum::extract::{Extension, Path};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub password: Option<String>,
}

/// PUT /api/user/employees/:id - update a user account (administrators only)
///
/// A blank or missing password keeps the stored hash.
pub async fn employee_put(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Value> {
    auth_user.require_administrator()?;

    let password_hash = match &request.password {
        Some(password) if !password.trim().is_empty() => Some(auth::hash_password(password)?),
        _ => None,
    };

    users::update(
        id,
        &request.username,
        &request.full_name,
        &request.role,
        password_hash.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(json!({ "message": "User updated successfully" })))
}
