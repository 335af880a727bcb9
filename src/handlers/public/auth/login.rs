// handlers/public/auth/login.rs - POST /api/auth/login handler

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{self, Claims};
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub full_name: String,
}

/// POST /api/auth/login - exchange credentials for a JWT
///
/// Unknown usernames and wrong passwords get the same 401 so the response
/// does not reveal which half failed.
pub async fn login(Json(request): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    let user = users::find_by_username(&request.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !auth::verify_password(&request.password, &user.password_hash)? {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(user.id, user.username.clone(), user.role.clone());
    let token = auth::generate_jwt(claims)?;

    Ok(ApiResponse::success(LoginResponse {
        token,
        role: user.role,
        full_name: user.full_name,
    }))
}
