//! Error types for the OpenVidu client.

use reqwest::header::HeaderMap;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which verb helper produced a [`RestApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A POST request failed or returned something other than 200.
    PostDataFailed,
    /// A GET request failed or returned something other than 200.
    GetDataFailed,
    /// A DELETE request never received a response.
    DeleteDataFailed,
}

impl ErrorCode {
    /// Wire-style name of the code, e.g. `POST_DATA_FAILED`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::PostDataFailed => "POST_DATA_FAILED",
            ErrorCode::GetDataFailed => "GET_DATA_FAILED",
            ErrorCode::DeleteDataFailed => "DELETE_DATA_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
    /// Path relative to the base URL, e.g. `/api/sessions/abc`.
    pub path: String,
    /// JSON body that was sent, if any.
    pub body: Option<Value>,
}

impl RequestInfo {
    pub(crate) fn new(path: &str, body: Option<Value>) -> Self {
        Self {
            path: path.to_string(),
            body,
        }
    }
}

/// Snapshot of the response the server sent back.
///
/// The body is kept as received; nothing is interpreted on failure paths.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Try to parse the preserved body as JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Underlying failure behind a [`RestApiError`].
#[derive(Error, Debug)]
pub enum Cause {
    /// The HTTP exchange failed or the response body could not be read
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Request and response context attached to a [`RestApiError`].
#[derive(Debug, Clone)]
pub struct ErrorData {
    pub request: RequestInfo,
    /// `None` when no response was received at all.
    pub resp: Option<RawResponse>,
}

/// The single error shape returned by every client operation.
///
/// Check [`RestApiError::code`] to know which verb failed and
/// [`RestApiError::status`] to tell domain failures (400/404/409) apart from
/// transport failures.
#[derive(Error, Debug)]
#[error("{message} ({code})")]
pub struct RestApiError {
    pub code: ErrorCode,
    pub message: String,
    pub data: Box<ErrorData>,
    #[source]
    pub cause: Option<Cause>,
}

impl RestApiError {
    /// No response was received.
    pub(crate) fn transport(code: ErrorCode, request: RequestInfo, cause: reqwest::Error) -> Self {
        Self {
            code,
            message: default_message(code).to_string(),
            data: Box::new(ErrorData {
                request,
                resp: None,
            }),
            cause: Some(Cause::Transport(cause)),
        }
    }

    /// The request body could not be encoded, so nothing was sent.
    pub(crate) fn serialize(code: ErrorCode, request: RequestInfo, cause: serde_json::Error) -> Self {
        Self {
            code,
            message: "request body could not be serialized".to_string(),
            data: Box::new(ErrorData {
                request,
                resp: None,
            }),
            cause: Some(Cause::Serialize(cause)),
        }
    }

    /// A response was received but could not be accepted.
    pub(crate) fn response(
        code: ErrorCode,
        request: RequestInfo,
        resp: RawResponse,
        cause: Option<reqwest::Error>,
    ) -> Self {
        Self {
            code,
            message: default_message(code).to_string(),
            data: Box::new(ErrorData {
                request,
                resp: Some(resp),
            }),
            cause: cause.map(Cause::Transport),
        }
    }

    /// Status of the embedded response, if one was received.
    pub fn status(&self) -> Option<u16> {
        self.data.resp.as_ref().map(|r| r.status)
    }

    /// True if the request was attempted but never got a response.
    pub fn is_transport(&self) -> bool {
        self.data.resp.is_none() && matches!(self.cause, Some(Cause::Transport(_)))
    }
}

fn default_message(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::PostDataFailed => "post data failed",
        ErrorCode::GetDataFailed => "get data failed",
        ErrorCode::DeleteDataFailed => "delete data failed",
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, RestApiError>;
