// handlers/protected/profile/profile_put.rs - PUT /api/user/profile handler

use axum::body::Bytes;
use axum::extract::{Extension, Multipart};
use uuid::Uuid;

use crate::auth;
use crate::config;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// PUT /api/user/profile - update display name, password and picture
///
/// Multipart form: `full_name` (text), `new_password` (optional text),
/// `profile_picture` (optional file). A blank password leaves the current
/// hash untouched.
pub async fn profile_put(
    Extension(auth_user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> ApiResult<()> {
    let mut full_name: Option<String> = None;
    let mut new_password: Option<String> = None;
    let mut picture: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("full_name") => full_name = Some(field.text().await?),
            Some("new_password") => new_password = Some(field.text().await?),
            Some("profile_picture") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await?;
                if !content.is_empty() {
                    picture = Some((file_name, content));
                }
            }
            _ => {}
        }
    }

    let full_name = full_name.ok_or_else(|| ApiError::bad_request("full_name is required"))?;

    let password_hash = match new_password {
        Some(password) if !password.trim().is_empty() => Some(auth::hash_password(&password)?),
        _ => None,
    };

    let profile_picture_url = match picture {
        Some((file_name, content)) => {
            Some(store_profile_picture(auth_user.user_id, &file_name, &content).await?)
        }
        None => None,
    };

    users::update_profile(
        auth_user.user_id,
        &full_name,
        password_hash.as_deref(),
        profile_picture_url.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::empty())
}

/// Validate the upload against the configured extension whitelist and size
/// cap, write it under the uploads directory, and return the relative URL
/// that gets persisted on the user row.
async fn store_profile_picture(
    user_id: Uuid,
    original_name: &str,
    content: &[u8],
) -> Result<String, ApiError> {
    let uploads = &config::config().uploads;

    let extension =
        file_extension(original_name).ok_or_else(|| ApiError::bad_request("Invalid file type."))?;
    if !uploads.allowed_extensions.iter().any(|allowed| allowed == &extension) {
        return Err(ApiError::bad_request("Invalid file type."));
    }

    if content.len() > uploads.max_file_size_bytes {
        let limit_mb = uploads.max_file_size_bytes / (1024 * 1024);
        return Err(ApiError::bad_request(format!("File size exceeds {} MB.", limit_mb)));
    }

    let file_name = format!("profile_{}_{}{}", user_id, Uuid::new_v4(), extension);
    let directory = std::path::Path::new(&uploads.directory);

    tokio::fs::create_dir_all(directory).await.map_err(|e| {
        tracing::error!("Failed to create uploads directory: {}", e);
        ApiError::internal_server_error("Failed to store profile picture")
    })?;
    tokio::fs::write(directory.join(&file_name), content).await.map_err(|e| {
        tracing::error!("Failed to write profile picture: {}", e);
        ApiError::internal_server_error("Failed to store profile picture")
    })?;

    Ok(format!("/uploads/{}", file_name))
}

/// Lowercased extension including the leading dot, or None when the name
/// has no dot at all.
fn file_extension(name: &str) -> Option<String> {
    let index = name.rfind('.')?;
    Some(name[index..].to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension_lowercases() {
        assert_eq!(file_extension("Photo.JPG"), Some(".jpg".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some(".gz".to_string()));
        assert_eq!(file_extension("noextension"), None);
    }

    // Both rejections fire before anything touches the filesystem, so these
    // run without a database or an uploads directory.

    #[tokio::test]
    async fn test_store_rejects_unlisted_extension() {
        let err = store_profile_picture(Uuid::new_v4(), "resume.pdf", b"%PDF-")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid file type.");
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_picture() {
        let too_big = vec![0u8; config::config().uploads.max_file_size_bytes + 1];

        let err = store_profile_picture(Uuid::new_v4(), "huge.png", &too_big)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "File size exceeds 5 MB.");
    }
}
