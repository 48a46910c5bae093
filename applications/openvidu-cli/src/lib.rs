//! OpenVidu CLI Library
//!
//! Configuration and payload helpers behind the `openvidu` binary, exposed
//! for testing.

pub mod config;
pub mod error;
pub mod payload;

pub use config::{CliConfig, ConfigOverrides};
pub use error::{CliError, Result};
