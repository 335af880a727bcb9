// handlers/protected/users/mod.rs - User administration endpoints

pub mod employee_delete; // DELETE /api/user/employees/:id
pub mod employee_put; // PUT /api/user/employees/:id
pub mod employees_get; // GET /api/user/employees
pub mod user_post; // POST /api/user/create

pub use employee_delete::employee_delete;
pub use employee_put::employee_put;
pub use employees_get::employees_get;
pub use user_post::user_post;
