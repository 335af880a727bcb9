use sqlx::FromRow;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Project, Task};

const PROJECT_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Membership row joined with the member's display name
#[derive(Debug, Clone, FromRow)]
pub struct MemberName {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
}

pub async fn find_by_id(id: Uuid) -> Result<Option<Project>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let project = sqlx::query_as::<_, Project>(&format!(
        "SELECT {PROJECT_COLUMNS}
         FROM projects
         WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    Ok(project)
}

/// Projects the user is a member of
pub async fn list_for_user(user_id: Uuid) -> Result<Vec<Project>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let projects = sqlx::query_as::<_, Project>(
        "SELECT p.id, p.name, p.description, p.created_at, p.updated_at
         FROM projects p
         JOIN project_members pm ON pm.project_id = p.id
         WHERE pm.user_id = $1
         ORDER BY p.created_at",
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    Ok(projects)
}

/// All tasks belonging to any of the given projects (batch load)
pub async fn tasks_for_projects(project_ids: &[Uuid]) -> Result<Vec<Task>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, is_completed, project_id, assigned_to_id, created_by_id,
         created_at, updated_at
         FROM tasks
         WHERE project_id = ANY($1)
         ORDER BY created_at",
    )
    .bind(project_ids)
    .fetch_all(&pool)
    .await?;

    Ok(tasks)
}

/// All members of any of the given projects, with display names (batch load)
pub async fn members_for_projects(project_ids: &[Uuid]) -> Result<Vec<MemberName>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let members = sqlx::query_as::<_, MemberName>(
        "SELECT pm.project_id, pm.user_id, u.full_name
         FROM project_members pm
         JOIN users u ON u.id = pm.user_id
         WHERE pm.project_id = ANY($1) AND u.deleted_at IS NULL
         ORDER BY u.full_name",
    )
    .bind(project_ids)
    .fetch_all(&pool)
    .await?;

    Ok(members)
}

/// Create a project and its membership rows in one transaction
pub async fn insert(
    name: &str,
    description: Option<&str>,
    employee_ids: &[Uuid],
) -> Result<Project, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let project = sqlx::query_as::<_, Project>(&format!(
        "INSERT INTO projects (id, name, description)
         VALUES ($1, $2, $3)
         RETURNING {PROJECT_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(description)
    .fetch_one(&mut *tx)
    .await?;

    for user_id in employee_ids {
        sqlx::query("INSERT INTO project_members (user_id, project_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(project.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(project)
}

pub async fn update(
    id: Uuid,
    name: &str,
    description: Option<&str>,
) -> Result<Option<Project>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let project = sqlx::query_as::<_, Project>(&format!(
        "UPDATE projects
         SET name = $2, description = $3, updated_at = now()
         WHERE id = $1
         RETURNING {PROJECT_COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(description)
    .fetch_optional(&pool)
    .await?;

    Ok(project)
}

/// Hard delete; membership and task rows cascade
pub async fn delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    Ok(())
}

/// True when the project has at least one incomplete task
pub async fn has_open_tasks(project_id: Uuid) -> Result<bool, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let open = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM tasks WHERE project_id = $1 AND NOT is_completed)",
    )
    .bind(project_id)
    .fetch_one(&pool)
    .await?;

    Ok(open)
}

pub async fn membership_exists(user_id: Uuid, project_id: Uuid) -> Result<bool, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM project_members WHERE user_id = $1 AND project_id = $2)",
    )
    .bind(user_id)
    .bind(project_id)
    .fetch_one(&pool)
    .await?;

    Ok(exists)
}

pub async fn add_member(user_id: Uuid, project_id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query("INSERT INTO project_members (user_id, project_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(project_id)
        .execute(&pool)
        .await?;

    Ok(())
}

/// Remove a membership row; returns false when it did not exist
pub async fn remove_member(user_id: Uuid, project_id: Uuid) -> Result<bool, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM project_members WHERE user_id = $1 AND project_id = $2")
        .bind(user_id)
        .bind(project_id)
        .execute(&pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
