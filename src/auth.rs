//! Client-credentials authentication against the Spotify accounts service.
//!
//! One token exchange per session, no refresh: the bearer token obtained
//! here lives in process memory until the app exits.

use crate::model::dto::TokenResponse;

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Application credentials, read once at startup and immutable afterwards.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// The secret must never reach logs or test failure output
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required environment variable is unset or empty. Fatal at startup.
    #[error("variable d'environnement manquante: {0}")]
    MissingVar(&'static str),

    /// The accounts service answered with an error payload.
    #[error("échange de jeton refusé: {0}")]
    Rejected(String),

    /// The accounts service could not be reached or answered garbage.
    #[error("erreur réseau: {0}")]
    Network(String),
}

impl Credentials {
    /// Read both secrets from the environment.
    ///
    /// Empty values count as missing, matching the deployment checks this
    /// replaces. There is no retry; a failure here puts the whole app into
    /// the configuration-error state.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_values(
            std::env::var(CLIENT_ID_VAR).ok(),
            std::env::var(CLIENT_SECRET_VAR).ok(),
        )
    }

    fn from_values(
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<Self, AuthError> {
        let client_id = client_id
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingVar(CLIENT_ID_VAR))?;
        let client_secret = client_secret
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingVar(CLIENT_SECRET_VAR))?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

/// Perform the one-shot client-credentials exchange.
///
/// Sends `grant_type=client_credentials&client_id=…&client_secret=…` as an
/// URL-encoded form body and returns the bearer token string.
pub async fn acquire_token(
    http: &reqwest::Client,
    credentials: &Credentials,
) -> Result<String, AuthError> {
    acquire_token_at(http, credentials, TOKEN_URL).await
}

async fn acquire_token_at(
    http: &reqwest::Client,
    credentials: &Credentials,
    token_url: &str,
) -> Result<String, AuthError> {
    tracing::debug!("Requesting access token");

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
    ];

    let response = http
        .post(token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;

    let body: TokenResponse = response
        .json()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;

    token_from_response(body)
}

/// Split a token response into a usable token or a rejection.
///
/// An `error` field wins over anything else in the payload; a success
/// response without `access_token` is treated as a rejection too.
fn token_from_response(body: TokenResponse) -> Result<String, AuthError> {
    if let Some(error) = body.error {
        let detail = body.error_description.unwrap_or(error);
        tracing::warn!(detail = %detail, "Token exchange rejected");
        return Err(AuthError::Rejected(detail));
    }

    body.access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::Rejected("réponse sans access_token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_values() {
        let err = Credentials::from_values(Some("id".to_string()), None).unwrap_err();
        assert!(matches!(err, AuthError::MissingVar(CLIENT_SECRET_VAR)));

        let err = Credentials::from_values(None, Some("secret".to_string())).unwrap_err();
        assert!(matches!(err, AuthError::MissingVar(CLIENT_ID_VAR)));
    }

    #[test]
    fn credentials_reject_empty_values() {
        let err =
            Credentials::from_values(Some(String::new()), Some("secret".to_string())).unwrap_err();
        assert!(matches!(err, AuthError::MissingVar(CLIENT_ID_VAR)));
    }

    #[test]
    fn credentials_accept_both_values() {
        let creds =
            Credentials::from_values(Some("id".to_string()), Some("secret".to_string())).unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let creds = Credentials::from_values(
            Some("id".to_string()),
            Some("hunter2".to_string()),
        )
        .unwrap();
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("client_id"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn token_response_with_token_is_accepted() {
        let body: TokenResponse =
            serde_json::from_str(r#"{"access_token": "abc", "token_type": "Bearer"}"#).unwrap();
        assert_eq!(token_from_response(body).unwrap(), "abc");
    }

    #[test]
    fn token_response_with_error_is_rejected() {
        let body: TokenResponse = serde_json::from_str(
            r#"{"error": "invalid_client", "error_description": "Invalid client secret"}"#,
        )
        .unwrap();
        let err = token_from_response(body).unwrap_err();
        assert!(matches!(err, AuthError::Rejected(ref d) if d == "Invalid client secret"));
    }

    #[test]
    fn token_response_without_token_is_rejected() {
        let body: TokenResponse = serde_json::from_str(r#"{"token_type": "Bearer"}"#).unwrap();
        assert!(matches!(
            token_from_response(body),
            Err(AuthError::Rejected(_))
        ));
    }
}
