// handlers/protected/users/user_post.rs - POST /api/user/create handler

use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// POST /api/user/create - create a user account (administrators only)
pub async fn user_post(
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Value> {
    auth_user.require_administrator()?;

    if users::find_by_username(&request.username).await?.is_some() {
        return Err(ApiError::bad_request("Username already exists"));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let user = users::insert(
        &request.username,
        &password_hash,
        &request.full_name,
        &request.role,
    )
    .await?;

    Ok(ApiResponse::success(json!({
        "message": "User created successfully",
        "user": user,
    })))
}
