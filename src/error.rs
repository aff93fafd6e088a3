//! Error types for the catalog API layer.
//!
//! Every failure reaching the user is flattened to a single message string
//! at the orchestration boundary; these variants keep the distinction
//! (HTTP status, transport, malformed body) available for logging.

/// Error produced by the Spotify Web API client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Non-2xx HTTP status from a catalog endpoint
    #[error("Erreur API: {0}")]
    Status(u16),

    /// Transport-level failure (DNS, TLS, connection reset)
    #[error("Erreur de connexion à Spotify")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Erreur lors de la recherche")]
    Parse(String),
}

impl CatalogError {
    /// The message shown in the UI error panel.
    ///
    /// Status errors carry the numeric code; transport and decode errors
    /// map to generic copy, with the detail kept for the log file only.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Detail string for structured logging.
    pub fn detail(&self) -> &str {
        match self {
            CatalogError::Status(_) => "",
            CatalogError::Network(detail) | CatalogError::Parse(detail) => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code() {
        let err = CatalogError::Status(502);
        assert_eq!(err.user_message(), "Erreur API: 502");
    }

    #[test]
    fn network_message_is_generic() {
        let err = CatalogError::Network("dns failure".to_string());
        assert_eq!(err.user_message(), "Erreur de connexion à Spotify");
        assert_eq!(err.detail(), "dns failure");
    }

    #[test]
    fn parse_message_is_generic() {
        let err = CatalogError::Parse("missing field `items`".to_string());
        assert_eq!(err.user_message(), "Erreur lors de la recherche");
        assert!(err.detail().contains("items"));
    }
}
