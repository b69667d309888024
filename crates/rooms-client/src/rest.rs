//! REST transport for the rooms API
//!
//! This module implements the HTTP layer shared by every endpoint:
//! request/response types, the error taxonomy, and the core client.
//! Errors are surfaced exactly once; there is no retry or backoff
//! anywhere in the stack, and all recovery is user-initiated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// =============================================================================
// Error Types
// =============================================================================

/// API error with HTTP status and message
///
/// This represents errors returned from the rooms API, including both
/// transport failures (status 0) and application-level errors.
///
/// # Examples
/// ```
/// use rooms_client::rest::ApiError;
///
/// let error = ApiError::new(401, "Unauthorized", "Invalid token");
/// assert_eq!(error.status(), 401);
/// assert!(error.is_unauthorized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code (0 for transport/parse failures)
    status: u16,
    /// Error code (e.g., "Unauthorized", "ServiceUnavailable")
    error: String,
    /// Human-readable error message
    message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the error code
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is an authentication rejection
    ///
    /// A 401-class response means the current token is expired or invalid
    /// and must trigger de-authentication in the session layer.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if the service reported itself unavailable
    ///
    /// A 503-class response is transient and is surfaced to the user as a
    /// distinct message, without automatic retry.
    pub fn is_unavailable(&self) -> bool {
        self.status == 503
    }

    /// Check if this is a transport-level failure (no HTTP status)
    pub fn is_network_error(&self) -> bool {
        self.status == 0
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API error {}: {} - {}",
            self.status, self.error, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Standard error response body from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error message string (e.g., "Username already taken")
    pub error: String,
}

// =============================================================================
// Request Types
// =============================================================================

/// HTTP method for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request (reads)
    Get,
    /// POST request (auth procedures)
    Post,
    /// PUT request (profile updates)
    Put,
}

impl HttpMethod {
    /// Method name as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// A multipart file payload (used by the picture upload endpoint)
#[derive(Debug, Clone)]
pub struct MultipartFile {
    /// Form field name (the API expects "photo")
    pub field: String,
    /// File name sent with the part
    pub file_name: String,
    /// MIME type (e.g., "image/jpeg")
    pub mime_type: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// API request parameters
///
/// Represents a request to an API endpoint with method, path, headers,
/// query parameters, and an optional JSON or multipart body.
#[derive(Debug, Clone)]
pub struct RestRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL (e.g., "/rooms")
    pub path: String,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// JSON request body (for POST/PUT)
    pub body: Option<Vec<u8>>,
    /// Multipart file body (mutually exclusive with `body`)
    pub multipart: Option<MultipartFile>,
}

impl RestRequest {
    /// Create a new GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            params: HashMap::new(),
            headers: HashMap::new(),
            body: None,
            multipart: None,
        }
    }

    /// Create a new POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            params: HashMap::new(),
            headers: HashMap::new(),
            body: None,
            multipart: None,
        }
    }

    /// Create a new PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            params: HashMap::new(),
            headers: HashMap::new(),
            body: None,
            multipart: None,
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Attach the session token as a bearer credential
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// Set the request body from JSON
    pub fn json_body<T: Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        self.body = Some(body);
        Ok(self)
    }

    /// Set a multipart file body
    pub fn multipart_file(mut self, file: MultipartFile) -> Self {
        self.multipart = Some(file);
        self
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the REST client
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Base API URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

/// Fixed production host the application talks to
pub const DEFAULT_BASE_URL: &str = "https://lereacteur-bootcamp-api.herokuapp.com/api/airbnb";

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("StayFinder/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl RestClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// REST Client Implementation
// =============================================================================

use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};

/// HTTP client for the rooms API
///
/// # Examples
/// ```
/// use rooms_client::rest::{RestClient, RestClientConfig, RestRequest};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let config = RestClientConfig::default();
///     let client = RestClient::new(config)?;
///
///     let request = RestRequest::get("/rooms").bearer("token");
///     let rooms: Vec<serde_json::Value> = client.execute(request).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    /// HTTP client
    client: ReqwestClient,
    /// Configuration
    config: RestClientConfig,
}

impl RestClient {
    /// Create a new REST client
    pub fn new(config: RestClientConfig) -> Result<Self, ApiError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ApiError::new(0, "ClientError", format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Execute a request and decode the JSON response
    pub async fn execute<T>(&self, request: RestRequest) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.config.base_url, request.path);

        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let mut req = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        // Add query parameters
        for (key, value) in &request.params {
            req = req.query(&[(key, value)]);
        }

        // Add default headers
        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        // Add request headers
        for (key, value) in &request.headers {
            req = req.header(key, value);
        }

        // Add body if present
        if let Some(file) = request.multipart {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime_type)
                .map_err(|e| {
                    ApiError::new(0, "InvalidInput", format!("Invalid MIME type: {}", e))
                })?;
            let form = reqwest::multipart::Form::new().part(file.field, part);
            req = req.multipart(form);
        } else if let Some(body) = request.body {
            req = req.header("Content-Type", "application/json").body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::new(0, "NetworkError", format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse a reqwest response into the expected type
    async fn parse_response<T>(&self, response: ReqwestResponse) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();

            // The API reports application errors as {"error": "..."}
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_body) {
                return Err(ApiError::new(status, "ApiError", body.error));
            }

            return Err(ApiError::new(
                status,
                "Unknown",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let body = response.text().await.map_err(|e| {
            ApiError::new(0, "ParseError", format!("Failed to read response: {}", e))
        })?;

        let data: T = serde_json::from_str(&body).map_err(|e| {
            ApiError::new(0, "ParseError", format!("Failed to parse JSON: {}", e))
        })?;

        Ok(data)
    }

    /// Get the client configuration
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized() {
        let error = ApiError::new(401, "Unauthorized", "Invalid token");
        assert_eq!(error.status(), 401);
        assert!(error.is_unauthorized());
        assert!(!error.is_unavailable());
        assert!(!error.is_network_error());
    }

    #[test]
    fn test_api_error_unavailable() {
        let error = ApiError::new(503, "ServiceUnavailable", "Service is down");
        assert!(error.is_unavailable());
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_api_error_network() {
        let error = ApiError::new(0, "NetworkError", "Connection refused");
        assert!(error.is_network_error());
        assert!(!error.is_unauthorized());
        assert!(!error.is_unavailable());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(503, "ServiceUnavailable", "Try later");
        let display = format!("{}", error);
        assert!(display.contains("503"));
        assert!(display.contains("ServiceUnavailable"));
        assert!(display.contains("Try later"));
    }

    #[test]
    fn test_rest_request_get() {
        let req = RestRequest::get("/rooms/around")
            .param("latitude", "48.85")
            .param("longitude", "2.35");

        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/rooms/around");
        assert_eq!(req.params.get("latitude"), Some(&"48.85".to_string()));
    }

    #[test]
    fn test_rest_request_bearer() {
        let req = RestRequest::get("/rooms").bearer("abc123");

        assert_eq!(
            req.headers.get("Authorization"),
            Some(&"Bearer abc123".to_string())
        );
    }

    #[test]
    fn test_rest_request_json_body() {
        #[derive(Serialize)]
        struct Credentials {
            email: String,
            password: String,
        }

        let creds = Credentials {
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        let req = RestRequest::post("/user/log_in").json_body(&creds).unwrap();

        assert!(req.body.is_some());
        let body_str = String::from_utf8(req.body.unwrap()).unwrap();
        assert!(body_str.contains("alice@example.com"));
    }

    #[test]
    fn test_rest_request_multipart() {
        let req = RestRequest::put("/user/upload_picture").multipart_file(MultipartFile {
            field: "photo".to_string(),
            file_name: "userPicture.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8],
        });

        let file = req.multipart.unwrap();
        assert_eq!(file.field, "photo");
        assert_eq!(file.mime_type, "image/jpeg");
    }

    #[test]
    fn test_client_config_default() {
        let config = RestClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("StayFinder/"));
    }

    #[test]
    fn test_client_config_builder() {
        let config = RestClientConfig::new("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("TestAgent/1.0")
            .with_header("X-Custom", "value");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "TestAgent/1.0");
        assert_eq!(
            config.default_headers.get("X-Custom"),
            Some(&"value".to_string())
        );
    }

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
    }
}
