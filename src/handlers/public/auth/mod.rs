// handlers/public/auth/mod.rs - Token acquisition endpoints

pub mod login; // POST /api/auth/login - authenticate and get JWT

pub use login::login;
