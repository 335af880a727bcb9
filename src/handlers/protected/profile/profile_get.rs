// handlers/protected/profile/profile_get.rs - GET /api/user/profile handler

use axum::extract::{Extension, Host};
use serde::Serialize;
use uuid::Uuid;

use crate::config;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub profile_picture_url: Option<String>,
}

/// GET /api/user/profile - profile of the authenticated user
pub async fn profile_get(
    Extension(auth_user): Extension<AuthUser>,
    Host(host): Host,
) -> ApiResult<ProfileResponse> {
    let user = users::find_by_id(auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    // Picture paths are stored relative to the server root; hand out absolute URLs
    let profile_picture_url = user.profile_picture_url.map(|path| {
        if path.starts_with("http") {
            path
        } else {
            let scheme = if config::config().security.require_https {
                "https"
            } else {
                "http"
            };
            format!("{}://{}{}", scheme, host, path)
        }
    });

    Ok(ApiResponse::success(ProfileResponse {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        role: user.role,
        profile_picture_url,
    }))
}
