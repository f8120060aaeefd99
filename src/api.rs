//! HTTP client for the AliceTant backend. The backend owns accounts and
//! appointment data; this crate only renders what it returns.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::appointments::{AppointmentRecord, FETCH_ERROR_FALLBACK};
use crate::forms::login::LoginPayload;
use crate::forms::signup::SignupPayload;
use crate::forms::Role;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api";

// Mounted under the backend's `auth/` prefix; appointment endpoints are not.
const SIGNUP_PATH: &str = "/auth/signup/";
const LOGIN_PATH: &str = "/auth/login/";
const CUSTOMER_APPOINTMENTS_PATH: &str = "/appointments/";
const PROVIDER_APPOINTMENTS_PATH: &str = "/appointments/provider/";

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, malformed body.
    Transport(reqwest::Error),
    /// The backend answered with a non-success status and a JSON body.
    Backend { status: u16, body: Value },
}

impl ApiError {
    /// Renderable page-level message: the failure payload's `message`
    /// field when present (the backend also uses `error`), else the
    /// generic fetch fallback.
    pub fn message(&self) -> String {
        self.message_or(FETCH_ERROR_FALLBACK)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        if let ApiError::Backend { body, .. } = self {
            for key in ["message", "error"] {
                if let Some(text) = body.get(key).and_then(Value::as_str) {
                    return text.to_string();
                }
            }
        }
        fallback.to_string()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "backend unreachable: {err}"),
            ApiError::Backend { status, .. } => {
                write!(f, "backend error {status}: {}", self.message())
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

#[allow(dead_code)]
#[derive(Clone, Debug, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub full_name: String,
}

/// Returned by both signup and login on success.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: ApiUser,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiClient {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> ApiClient {
        let base_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        ApiClient::new(base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn signup(&self, payload: &SignupPayload) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint(SIGNUP_PATH))
            .json(payload)
            .send()
            .await?;
        Self::settle(response).await
    }

    pub async fn login(&self, payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint(LOGIN_PATH))
            .json(payload)
            .send()
            .await?;
        Self::settle(response).await
    }

    /// `GET /appointments/`: the viewer's own appointments.
    pub async fn customer_appointments(
        &self,
        token: &str,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        self.get_appointments(CUSTOMER_APPOINTMENTS_PATH, token).await
    }

    /// `GET /appointments/provider/`: appointments across all of the
    /// provider's businesses.
    pub async fn provider_appointments(
        &self,
        token: &str,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        self.get_appointments(PROVIDER_APPOINTMENTS_PATH, token).await
    }

    async fn get_appointments(
        &self,
        path: &str,
        token: &str,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::settle(response).await
    }

    async fn settle<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.json().await.unwrap_or(Value::Null);
            Err(ApiError::Backend {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backend_message_is_rendered_verbatim() {
        let err = ApiError::Backend {
            status: 500,
            body: json!({ "message": "X" }),
        };
        assert_eq!(err.message(), "X");
    }

    #[test]
    fn error_key_is_accepted_as_fallback() {
        let err = ApiError::Backend {
            status: 400,
            body: json!({ "error": "Failed to retrieve appointments" }),
        };
        assert_eq!(err.message(), "Failed to retrieve appointments");
    }

    #[test]
    fn missing_message_falls_back_to_the_generic_string() {
        let err = ApiError::Backend {
            status: 502,
            body: Value::Null,
        };
        assert_eq!(err.message(), FETCH_ERROR_FALLBACK);

        let err = ApiError::Backend {
            status: 500,
            body: json!({ "message": 42 }),
        };
        assert_eq!(err.message(), FETCH_ERROR_FALLBACK);
    }

    #[test]
    fn auth_endpoints_live_under_the_auth_prefix() {
        let client = ApiClient::new("http://backend:8000/api");
        assert_eq!(
            client.endpoint(SIGNUP_PATH),
            "http://backend:8000/api/auth/signup/"
        );
        assert_eq!(
            client.endpoint(LOGIN_PATH),
            "http://backend:8000/api/auth/login/"
        );
        assert_eq!(
            client.endpoint(CUSTOMER_APPOINTMENTS_PATH),
            "http://backend:8000/api/appointments/"
        );
        assert_eq!(
            client.endpoint(PROVIDER_APPOINTMENTS_PATH),
            "http://backend:8000/api/appointments/provider/"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://backend:8000/api/");
        assert_eq!(client.base_url, "http://backend:8000/api");
    }

    #[test]
    fn auth_response_deserializes() {
        let json = r#"{
            "token": "jwt-token",
            "user": { "id": 1, "email": "a@b.co", "role": "CUSTOMER", "full_name": "A B" }
        }"#;
        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "jwt-token");
        assert_eq!(parsed.user.role, Role::Customer);
    }
}
