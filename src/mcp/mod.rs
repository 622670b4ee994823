//! Model Context Protocol server layer.

pub mod handler;
pub mod http;
pub mod resources;
pub mod session;
pub mod transport;
