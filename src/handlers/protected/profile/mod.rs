// handlers/protected/profile/mod.rs - Own-profile endpoints

pub mod profile_get; // GET /api/user/profile
pub mod profile_put; // PUT /api/user/profile (multipart)

pub use profile_get::profile_get;
pub use profile_put::profile_put;
