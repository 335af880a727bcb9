// handlers/protected/users/employees_get.rs - GET /api/user/employees handler

use axum::extract::Extension;
use serde::Serialize;
use uuid::Uuid;

use crate::database::users;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
pub struct EmployeeSummary {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub role: String,
}

/// GET /api/user/employees - list active users (administrators only)
pub async fn employees_get(
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Vec<EmployeeSummary>> {
    auth_user.require_administrator()?;

    let employees = users::list_active()
        .await?
        .into_iter()
        .map(|user| EmployeeSummary {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            role: user.role,
        })
        .collect();

    Ok(ApiResponse::success(employees))
}
