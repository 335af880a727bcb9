use sqlx::FromRow;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Task;

const TASK_COLUMNS: &str = "id, title, description, is_completed, project_id, assigned_to_id,
         created_by_id, created_at, updated_at";

/// Task row with assignee/creator resolved to display names
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct TaskWithNames {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub assigned_to: String,
    pub created_by: String,
}

pub async fn find_by_id(id: Uuid) -> Result<Option<Task>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "SELECT {TASK_COLUMNS}
         FROM tasks
         WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    Ok(task)
}

/// Tasks of one project with names resolved
pub async fn list_for_project(project_id: Uuid) -> Result<Vec<TaskWithNames>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let tasks = sqlx::query_as::<_, TaskWithNames>(
        "SELECT t.id, t.title, t.description, t.is_completed,
                au.full_name AS assigned_to, cu.full_name AS created_by
         FROM tasks t
         JOIN users au ON au.id = t.assigned_to_id
         JOIN users cu ON cu.id = t.created_by_id
         WHERE t.project_id = $1
         ORDER BY t.created_at",
    )
    .bind(project_id)
    .fetch_all(&pool)
    .await?;

    Ok(tasks)
}

pub async fn insert(
    title: &str,
    description: Option<&str>,
    project_id: Uuid,
    assigned_to_id: Uuid,
    created_by_id: Uuid,
) -> Result<Task, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (id, title, description, project_id, assigned_to_id, created_by_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(description)
    .bind(project_id)
    .bind(assigned_to_id)
    .bind(created_by_id)
    .fetch_one(&pool)
    .await?;

    Ok(task)
}

pub async fn mark_complete(id: Uuid) -> Result<Option<Task>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks
         SET is_completed = TRUE, updated_at = now()
         WHERE id = $1
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    Ok(task)
}

pub async fn update(
    id: Uuid,
    title: &str,
    description: Option<&str>,
    assigned_to_id: Uuid,
) -> Result<Option<Task>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks
         SET title = $2, description = $3, assigned_to_id = $4, updated_at = now()
         WHERE id = $1
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(assigned_to_id)
    .fetch_optional(&pool)
    .await?;

    Ok(task)
}

/// Returns false when the task did not exist
pub async fn delete(id: Uuid) -> Result<bool, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
