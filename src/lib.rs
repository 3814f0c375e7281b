// src/lib.rs

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod history;
pub mod sentiment;
pub mod server;
pub mod state;

pub use state::AppState;
