// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Route prefix /api/*; every route here sits behind jwt_auth_middleware and
// reads the authenticated user from request extensions.

pub mod profile;  // Own-profile read/update
pub mod projects; // Project CRUD and membership management
pub mod tasks;    // Task CRUD inside projects
pub mod users;    // User administration (admin only)
