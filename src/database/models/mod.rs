pub mod project;
pub mod task;
pub mod user;

pub use project::Project;
pub use task::Task;
pub use user::User;
