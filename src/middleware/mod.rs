pub mod auth;
pub mod catch_panic;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use catch_panic::{catch_panic_middleware, FaultBody, FAULT_MESSAGE};
pub use response::{ApiResponse, ApiResult};
