// handlers/protected/tasks/mod.rs - Task endpoints

pub mod project_tasks_get; // GET /api/task/project/:project_id
pub mod task_complete_put; // PUT /api/task/:task_id/complete
pub mod task_delete; // DELETE /api/task/:id
pub mod task_post; // POST /api/task
pub mod task_put; // PUT /api/task/:id

pub use project_tasks_get::project_tasks_get;
pub use task_complete_put::task_complete_put;
pub use task_delete::task_delete;
pub use task_post::task_post;
pub use task_put::task_put;
