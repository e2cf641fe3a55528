//! Discord Profile API
//!
//! Serves normalized Discord user profiles over HTTP.

pub mod config;
pub mod error;
pub mod server;
pub mod types;

pub use config::Config;
pub use error::{ApiError, Result};
pub use server::{create_router, start_server, ServerState, SharedState};
