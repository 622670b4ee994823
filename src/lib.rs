#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
pub mod mcp;
pub mod registry;
pub mod services;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
