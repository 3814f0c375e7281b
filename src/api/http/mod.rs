// src/api/http/mod.rs

pub mod chat;
pub mod handlers;
pub mod history;
pub mod router;

pub use router::{api_router, cors_layer, create_router};
