pub mod config;
pub mod error;
pub mod routing;
pub mod tracing;
pub mod types;
