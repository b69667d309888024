//! Authentication flows
//!
//! This module provides the sign-in, sign-up, and logout flows. Success
//! on either credential flow installs the session through the single
//! [`SessionStore::set_session`] writer; logout and 401-triggered
//! de-authentication clear it through the same call, which is what
//! guarantees the all-or-nothing session invariant.

use app_state::{Credentials, SessionStore};
use rooms_client::rest::ApiError;
use rooms_client::{ApiClient, SignUpParams};
use thiserror::Error;

/// Authentication error types
///
/// Display strings double as the user-facing messages; known field-level
/// rejections from the sign-up endpoint map to dedicated variants with
/// an unknown-error fallback.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required form field was left empty (local validation)
    #[error("Please fill all fields")]
    MissingFields,

    /// The API rejected the email/password pair
    #[error("Incorrect credentials")]
    IncorrectCredentials,

    /// Sign-up rejection: username taken
    #[error("This username is already taken")]
    UsernameTaken,

    /// Sign-up rejection: email already registered
    #[error("This email already has an account")]
    EmailTaken,

    /// Sign-up rejection: missing parameters
    #[error("Missing parameter(s)")]
    MissingParameters,

    /// The service reported itself temporarily unavailable
    #[error("Service unavailable, please try again later")]
    ServiceUnavailable,

    /// Anything else: generic failure with the cause attached
    #[error("An error occurred")]
    Other(#[source] ApiError),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Known field-level error strings the sign-up endpoint returns
const ERR_USERNAME_TAKEN: &str = "Username already taken";
const ERR_EMAIL_TAKEN: &str = "This email already has an account.";
const ERR_MISSING_PARAMETERS: &str = "Missing parameter(s)";

/// Authentication service
///
/// # Example
///
/// ```rust,no_run
/// use app_core::auth::AuthService;
/// use app_state::SessionStore;
/// use rooms_client::{ApiClient, RestClientConfig};
/// use storage::KvStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let session = SessionStore::new(KvStore::in_memory()?);
///     session.bootstrap();
///
///     let client = ApiClient::new(RestClientConfig::default())?;
///     let auth = AuthService::new(client, session);
///
///     auth.sign_in("alice@example.com", "password").await?;
///     Ok(())
/// }
/// ```
pub struct AuthService {
    client: ApiClient,
    session: SessionStore,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Sign in with email and password
    ///
    /// On success the returned credentials are already installed in the
    /// session store, which flips the navigation gate to authenticated.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Credentials> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        match self.client.sign_in(email, password).await {
            Ok(auth) => {
                self.session.set_session(Some(&auth.token), Some(&auth.id));
                tracing::info!(user_id = %auth.id, "signed in");
                Ok(Credentials { token: auth.token, user_id: auth.id })
            }
            Err(e) if e.is_unauthorized() => Err(AuthError::IncorrectCredentials),
            Err(e) if e.is_unavailable() => Err(AuthError::ServiceUnavailable),
            Err(e) => Err(AuthError::Other(e)),
        }
    }

    /// Create a new account
    ///
    /// Field-level rejections map to specific messages; success behaves
    /// exactly like a sign-in.
    pub async fn sign_up(&self, params: SignUpParams) -> Result<Credentials> {
        if params.email.is_empty() || params.username.is_empty() || params.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        match self.client.sign_up(&params).await {
            Ok(auth) => {
                self.session.set_session(Some(&auth.token), Some(&auth.id));
                tracing::info!(user_id = %auth.id, "account created");
                Ok(Credentials { token: auth.token, user_id: auth.id })
            }
            Err(e) => Err(Self::map_sign_up_error(e)),
        }
    }

    /// Log out the current user
    ///
    /// Clears persisted and in-memory state regardless of prior contents.
    pub fn log_out(&self) {
        self.session.clear();
    }

    /// De-authenticate after an authentication rejection
    ///
    /// The shared 401 funnel: every service that observes a rejected
    /// token ends up here, on the same path as explicit logout.
    pub fn deauthorize(&self) {
        tracing::warn!("token rejected, clearing session");
        self.session.clear();
    }

    fn map_sign_up_error(error: ApiError) -> AuthError {
        if error.is_unavailable() {
            return AuthError::ServiceUnavailable;
        }

        match error.message() {
            ERR_USERNAME_TAKEN => AuthError::UsernameTaken,
            ERR_EMAIL_TAKEN => AuthError::EmailTaken,
            ERR_MISSING_PARAMETERS => AuthError::MissingParameters,
            _ => AuthError::Other(error),
        }
    }
}
