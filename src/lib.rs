// ABOUTME: Library root for muster - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod probe;
pub mod ssh;
pub mod status;
pub mod types;
pub mod urls;
