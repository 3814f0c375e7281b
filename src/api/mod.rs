// src/api/mod.rs
// REST API: handlers, request/response bodies, error mapping

pub mod error;
pub mod http;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use http::create_router;
pub use types::*;
