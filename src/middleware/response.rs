use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

/// Wrapper for API responses that automatically adds the success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    data: Option<T>,
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with a data payload
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status: StatusCode::OK,
        }
    }

    /// 200 OK with a bare `{"success": true}` body
    pub fn empty() -> Self {
        Self {
            data: None,
            status: StatusCode::OK,
        }
    }

    /// 204 No Content
    pub fn no_content() -> Self {
        Self {
            data: None,
            status: StatusCode::NO_CONTENT,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // For 204 No Content, return empty response
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }

        let envelope = match self.data {
            None => json!({"success": true}),
            Some(data) => {
                // Convert data to JSON Value for consistent envelope format
                let data_value = match serde_json::to_value(&data) {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::error!("Failed to serialize response data: {}", e);
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({
                                "success": false,
                                "error": "Failed to serialize response data"
                            })),
                        )
                            .into_response();
                    }
                };
                json!({"success": true, "data": data_value})
            }
        };

        (self.status, Json(envelope)).into_response()
    }
}

/// Handler return type carrying either an enveloped success or an ApiError
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
