use thiserror::Error;
use tracing::info;

use crate::auth::{self, role};
use crate::config;
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::{projects, tasks, users};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        username TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'Employee',
        full_name TEXT NOT NULL DEFAULT '',
        profile_picture_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        deleted_at TIMESTAMPTZ
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS project_members (
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, project_id)
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        is_completed BOOLEAN NOT NULL DEFAULT FALSE,
        project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
        assigned_to_id UUID NOT NULL REFERENCES users(id),
        created_by_id UUID NOT NULL REFERENCES users(id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    // Soft-deleted rows release their username for reuse
    "CREATE UNIQUE INDEX IF NOT EXISTS users_username_active_idx
        ON users (username) WHERE deleted_at IS NULL",
    "CREATE INDEX IF NOT EXISTS tasks_project_id_idx ON tasks (project_id)",
    "CREATE INDEX IF NOT EXISTS tasks_assigned_to_id_idx ON tasks (assigned_to_id)",
];

/// Create tables if absent, then seed demo data when enabled and the
/// database is empty
pub async fn initialize() -> Result<(), SeedError> {
    bootstrap_schema().await?;

    if config::config().database.seed_demo_data {
        seed_demo_data().await?;
    }

    Ok(())
}

async fn bootstrap_schema() -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(&pool).await?;
    }

    info!("Database schema ready");
    Ok(())
}

async fn seed_demo_data() -> Result<(), SeedError> {
    // Skip if already seeded
    if users::count_all().await? > 0 {
        return Ok(());
    }

    let admin = users::insert(
        "admin",
        &auth::hash_password("admin123")?,
        "Admin User",
        role::ADMINISTRATOR,
    )
    .await?;

    let employee = users::insert(
        "employee",
        &auth::hash_password("emp123")?,
        "John Employee",
        role::EMPLOYEE,
    )
    .await?;

    let project = projects::insert(
        "Initial Project",
        Some("Demo project"),
        &[admin.id, employee.id],
    )
    .await?;

    tasks::insert(
        "Initial Task",
        Some("Demo task"),
        project.id,
        employee.id,
        admin.id,
    )
    .await?;

    info!("Seeded demo users, project and task");
    Ok(())
}
