//! Main OpenVidu REST client.

use crate::error::{ErrorCode, RawResponse, RequestInfo, RestApiError, Result};
use crate::types::{ClientConfig, RecordingProperties, SessionProperties, TokenOptions};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Fixed Basic-auth user name of the OpenVidu REST API.
const AUTH_USER: &str = "OPENVIDUAPP";

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

/// Client for the OpenVidu server REST API.
///
/// The base URL and the Basic-auth credential are fixed at construction;
/// every method issues exactly one request. The client is cheap to clone
/// and can be shared across tasks.
///
/// # Example
///
/// ```ignore
/// use openvidu_client::{OpenViduClient, SessionProperties, TokenOptions};
///
/// let client = OpenViduClient::new("https://localhost:4443", "MY_SECRET");
///
/// let session = client.create_session(&SessionProperties::default()).await?;
/// let token = client.generate_token(&TokenOptions::new(session["id"].as_str().unwrap())).await?;
/// println!("token: {}", token["token"]);
/// ```
#[derive(Debug, Clone)]
pub struct OpenViduClient {
    http: Client,
    base_url: String,
    basic_auth: String,
}

impl OpenViduClient {
    /// Create a new client. No network activity happens here.
    pub fn new(base_url: impl Into<String>, secret: &str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: Client::new(),
            base_url,
            basic_auth: basic_auth(secret),
        }
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.url.clone(), &config.secret)
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS settings).
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Get the server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(AUTHORIZATION, &self.basic_auth)
    }

    // =========================================================================
    // Verb helpers
    // =========================================================================

    async fn get(&self, path: &str) -> Result<Value> {
        let code = ErrorCode::GetDataFailed;
        let request_info = RequestInfo::new(path, None);
        debug!(path = %path, "GET");

        let response = self
            .authorized(self.http.get(self.url(path)))
            .header(CONTENT_TYPE, FORM_URLENCODED)
            .send()
            .await
            .map_err(|e| transport_failure(code, request_info.clone(), e))?;

        read_json(code, request_info, response).await
    }

    async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let code = ErrorCode::PostDataFailed;
        let body_value = match body.map(serde_json::to_value).transpose() {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path, error = %e, "Request body could not be serialized");
                return Err(RestApiError::serialize(code, RequestInfo::new(path, None), e));
            }
        };
        debug!(path = %path, body = ?body_value, "POST");

        let mut request = self
            .authorized(self.http.post(self.url(path)))
            .header(CONTENT_TYPE, JSON);
        if let Some(value) = &body_value {
            request = request.json(value);
        }
        let request_info = RequestInfo::new(path, body_value);

        let response = request
            .send()
            .await
            .map_err(|e| transport_failure(code, request_info.clone(), e))?;

        read_json(code, request_info, response).await
    }

    /// POST with no body at all.
    async fn post_empty(&self, path: &str) -> Result<Value> {
        self.post::<Value>(path, None).await
    }

    /// Any received response counts as a result; only transport failures
    /// become errors.
    async fn delete(&self, path: &str) -> Result<u16> {
        debug!(path = %path, "DELETE");

        let response = self
            .authorized(self.http.delete(self.url(path)))
            .header(CONTENT_TYPE, FORM_URLENCODED)
            .send()
            .await
            .map_err(|e| {
                transport_failure(ErrorCode::DeleteDataFailed, RequestInfo::new(path, None), e)
            })?;

        let status = response.status().as_u16();
        debug!(path = %path, status, "DELETE completed");
        Ok(status)
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Create a session. Returns `{id, createdAt}`.
    ///
    /// Fails with status 409 if `custom_session_id` is already in use.
    pub async fn create_session(&self, properties: &SessionProperties) -> Result<Value> {
        self.post("/api/sessions", Some(properties)).await
    }

    /// Generate a token for a session. Returns
    /// `{token, session, role, data, id, kurentoOptions}`.
    pub async fn generate_token(&self, options: &TokenOptions) -> Result<Value> {
        self.post("/api/tokens", Some(options)).await
    }

    /// Get information about one session.
    pub async fn get_session_by_id(&self, session_id: &str) -> Result<Value> {
        self.get(&format!("/api/sessions/{}", session_id)).await
    }

    /// List active sessions. Returns `{numberOfElements, content}`.
    pub async fn get_active_sessions(&self) -> Result<Value> {
        self.get("/api/sessions").await
    }

    /// Close a session, evicting every participant.
    ///
    /// Returns the response status: 204 closed, 404 no such session.
    pub async fn close_session(&self, session_id: &str) -> Result<u16> {
        self.delete(&format!("/api/sessions/{}", session_id)).await
    }

    /// Force a connection out of a session.
    ///
    /// Returns the response status: 204 evicted, 400 no such session,
    /// 404 no such connection.
    pub async fn close_connection(&self, session_id: &str, connection_id: &str) -> Result<u16> {
        self.delete(&format!(
            "/api/sessions/{}/connection/{}",
            session_id, connection_id
        ))
        .await
    }

    /// Force a stream to be unpublished.
    ///
    /// Returns the response status: 204 unpublished, 400 no such session,
    /// 404 no such stream.
    pub async fn unpublish_stream(&self, session_id: &str, stream_id: &str) -> Result<u16> {
        self.delete(&format!("/api/sessions/{}/stream/{}", session_id, stream_id))
            .await
    }

    // =========================================================================
    // Recordings
    // =========================================================================

    pub async fn start_recording(&self, properties: &RecordingProperties) -> Result<Value> {
        self.post("/api/recordings/start", Some(properties)).await
    }

    pub async fn stop_recording(&self, recording_id: &str) -> Result<Value> {
        self.post_empty(&format!("/api/recordings/stop/{}", recording_id))
            .await
    }

    /// Get one recording. Sent as POST.
    pub async fn get_recording(&self, recording_id: &str) -> Result<Value> {
        self.post_empty(&format!("/api/recordings/{}", recording_id))
            .await
    }

    /// List all recordings. Returns `{count, items}`. Sent as POST.
    pub async fn get_all_recordings(&self) -> Result<Value> {
        self.post_empty("/api/recordings").await
    }

    /// Delete a recording and its files.
    ///
    /// Returns the response status: 204 deleted, 404 no such recording,
    /// 409 the recording is still in progress.
    pub async fn delete_recording(&self, recording_id: &str) -> Result<u16> {
        self.delete(&format!("/api/recordings/{}", recording_id))
            .await
    }

    // =========================================================================
    // Server
    // =========================================================================

    /// Get the server configuration.
    pub async fn get_config(&self) -> Result<Value> {
        self.get("/config").await
    }
}

/// `Authorization` header value for the given secret.
fn basic_auth(secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", AUTH_USER, secret))
    )
}

fn transport_failure(code: ErrorCode, request: RequestInfo, e: reqwest::Error) -> RestApiError {
    warn!(path = %request.path, code = %code, error = %e, "Request failed without a response");
    RestApiError::transport(code, request, e)
}

/// Accept a 200 with a JSON body; everything else becomes `code`.
async fn read_json(code: ErrorCode, request: RequestInfo, response: Response) -> Result<Value> {
    let status = response.status();
    let headers = response.headers().clone();

    let (body, read_error) = match response.text().await {
        Ok(body) => (body, None),
        Err(e) => (String::new(), Some(e)),
    };
    debug!(path = %request.path, status = %status, "Response received");

    if status == StatusCode::OK && read_error.is_none() {
        if let Ok(value) = serde_json::from_str(&body) {
            return Ok(value);
        }
    }

    warn!(path = %request.path, status = %status, code = %code, "Request rejected");
    Err(RestApiError::response(
        code,
        request,
        RawResponse {
            status: status.as_u16(),
            headers,
            body,
        },
        read_error,
    ))
}
