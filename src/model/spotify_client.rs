//! Spotify Web API client
//!
//! Two bearer-authenticated GETs: artist search and album listing. The
//! session token is captured at construction and never refreshed.

use async_trait::async_trait;

use super::catalog::{Album, ArtistRef, CatalogClient};
use super::dto::{AlbumsResponse, ArtistSearchResponse};
use crate::error::CatalogError;

pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Fixed page size for the album listing; there is no pagination beyond it.
const ALBUM_PAGE_LIMIT: &str = "50";
/// Albums are filtered to album-type release groups in a fixed market.
const ALBUM_MARKET: &str = "US";

/// HTTP client for the Spotify Web API, valid for one session.
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(http: reqwest::Client, access_token: String) -> Self {
        Self {
            http,
            access_token,
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.into(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn find_artist(&self, query: &str) -> Result<Option<ArtistRef>, CatalogError> {
        tracing::debug!(query, "API: search artist");

        let url = format!("{}/search", self.base_url);
        let response: ArtistSearchResponse =
            self.get_json(url, &[("q", query), ("type", "artist")]).await?;

        let artist = response.artists.items.into_iter().next().map(ArtistRef::from);
        match &artist {
            Some(a) => tracing::info!(query, artist_id = %a.id, artist = %a.name, "Artist resolved"),
            None => tracing::info!(query, "No artist match"),
        }
        Ok(artist)
    }

    async fn artist_albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError> {
        tracing::debug!(artist_id, "API: list artist albums");

        let url = format!("{}/artists/{}/albums", self.base_url, artist_id);
        let response: AlbumsResponse = self
            .get_json(
                url,
                &[
                    ("include_groups", "album"),
                    ("market", ALBUM_MARKET),
                    ("limit", ALBUM_PAGE_LIMIT),
                ],
            )
            .await?;

        // Server order is kept as-is; no client-side re-sorting
        let albums: Vec<Album> = response.items.into_iter().map(Album::from).collect();
        tracing::info!(artist_id, count = albums.len(), "Albums listed");
        Ok(albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_points_at_public_api() {
        let client = SpotifyClient::new(reqwest::Client::new(), "token".to_string());
        assert_eq!(client.base_url, API_BASE_URL);
        assert_eq!(client.access_token, "token");
    }

    #[test]
    fn client_base_url_is_overridable() {
        let client = SpotifyClient::with_base_url("token", "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
