pub mod manager;
pub mod models;
pub mod projects;
pub mod seed;
pub mod tasks;
pub mod users;

pub use manager::{DatabaseManager, DatabaseError};
