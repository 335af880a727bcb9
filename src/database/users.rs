use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::User;

const USER_COLUMNS: &str = "id, username, password_hash, role, full_name, profile_picture_url,
         created_at, updated_at, deleted_at";

/// Find an active user by username (login lookup)
pub async fn find_by_username(username: &str) -> Result<Option<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS}
         FROM users
         WHERE username = $1 AND deleted_at IS NULL"
    ))
    .bind(username)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// Find an active user by id
pub async fn find_by_id(id: Uuid) -> Result<Option<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS}
         FROM users
         WHERE id = $1 AND deleted_at IS NULL"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// Find a user by id, including soft-deleted rows (admin delete path)
pub async fn find_by_id_including_deleted(id: Uuid) -> Result<Option<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS}
         FROM users
         WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// List all active users
pub async fn list_active() -> Result<Vec<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS}
         FROM users
         WHERE deleted_at IS NULL
         ORDER BY created_at"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(users)
}

/// Number of user rows, soft-deleted included (seed guard)
pub async fn count_all() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await?;

    Ok(count)
}

pub async fn insert(
    username: &str,
    password_hash: &str,
    full_name: &str,
    role: &str,
) -> Result<User, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (id, username, password_hash, role, full_name)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {USER_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .bind(full_name)
    .fetch_one(&pool)
    .await?;

    Ok(user)
}

/// Admin update of username/name/role; password only when a new hash is given
pub async fn update(
    id: Uuid,
    username: &str,
    full_name: &str,
    role: &str,
    password_hash: Option<&str>,
) -> Result<Option<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users
         SET username = $2,
             full_name = $3,
             role = $4,
             password_hash = COALESCE($5, password_hash),
             updated_at = now()
         WHERE id = $1 AND deleted_at IS NULL
         RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(username)
    .bind(full_name)
    .bind(role)
    .bind(password_hash)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// Self-service profile update; unset fields keep their stored value
pub async fn update_profile(
    id: Uuid,
    full_name: &str,
    password_hash: Option<&str>,
    profile_picture_url: Option<&str>,
) -> Result<Option<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users
         SET full_name = $2,
             password_hash = COALESCE($3, password_hash),
             profile_picture_url = COALESCE($4, profile_picture_url),
             updated_at = now()
         WHERE id = $1 AND deleted_at IS NULL
         RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(full_name)
    .bind(password_hash)
    .bind(profile_picture_url)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// Mark a user deleted without removing the row
pub async fn soft_delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query(
        "UPDATE users
         SET deleted_at = now(), updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .execute(&pool)
    .await?;

    Ok(())
}

/// True when any task references the user as assignee
pub async fn has_assigned_tasks(user_id: Uuid) -> Result<bool, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let assigned = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM tasks WHERE assigned_to_id = $1)",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    Ok(assigned)
}
