// ABOUTME: Minimal SSH client used to run status commands on cluster masters.
// ABOUTME: Connect, authenticate, exec, disconnect; no tunneling.

mod client;
mod error;

pub use client::{CommandOutput, Session, SessionConfig};
pub use error::{Error, Result};
