//! OpenVidu Client
//!
//! HTTP client library for the OpenVidu server REST API.
//!
//! # Features
//!
//! - **Sessions**: create, inspect, list and close sessions
//! - **Connections**: generate tokens, evict connections, unpublish streams
//! - **Recordings**: start, stop, fetch, list and delete recordings
//! - **Server**: fetch the server configuration
//!
//! Every failure is reported as a [`RestApiError`] tagged with the verb that
//! failed and carrying the request path/body and the raw server response.
//!
//! # Example
//!
//! ```ignore
//! use openvidu_client::{OpenViduClient, SessionProperties};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenViduClient::new("https://localhost:4443", "MY_SECRET");
//!
//!     match client.create_session(&SessionProperties::with_custom_id("s1")).await {
//!         Ok(session) => println!("Created {}", session["id"]),
//!         Err(e) if e.status() == Some(409) => println!("Session s1 already exists"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     let status = client.close_session("s1").await?;
//!     println!("close returned {}", status);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::OpenViduClient;
pub use error::{Cause, ErrorCode, ErrorData, RawResponse, RequestInfo, RestApiError, Result};
pub use types::{
    ClientConfig, KurentoOptions, MediaMode, OutputMode, RecordingLayout, RecordingMode,
    RecordingProperties, Role, SessionProperties, TokenOptions,
};
