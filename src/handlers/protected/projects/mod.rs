// handlers/protected/projects/mod.rs - Project endpoints

pub mod member_delete; // DELETE /api/project/:project_id/remove-member/:user_id
pub mod member_post; // POST /api/project/:project_id/add-member/:user_id
pub mod project_delete; // DELETE /api/project/:id
pub mod project_get; // GET /api/project
pub mod project_post; // POST /api/project
pub mod project_put; // PUT /api/project/:id

pub use member_delete::member_delete;
pub use member_post::member_post;
pub use project_delete::project_delete;
pub use project_get::project_get;
pub use project_post::project_post;
pub use project_put::project_put;
