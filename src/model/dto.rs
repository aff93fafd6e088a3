//! Spotify Web API Data Transfer Objects
//!
//! These types match what the API actually returns. They stay inside the
//! model layer: everything else works with the domain types in `catalog`.
//!
//! Endpoints covered:
//! - `POST https://accounts.spotify.com/api/token` (client credentials)
//! - `GET /v1/search?q=…&type=artist`
//! - `GET /v1/artists/{id}/albums?include_groups=album&market=US&limit=50`

use serde::Deserialize;

use super::catalog::{Album, ArtistRef};

/// Token endpoint response: either `access_token` or an `error` pair.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Top-level `/search?type=artist` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub artists: ArtistPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistPage {
    #[serde(default)]
    pub items: Vec<ArtistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistItem {
    pub id: String,
    pub name: String,
}

/// Top-level `/artists/{id}/albums` response.
///
/// A missing `items` field deserializes to an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumsResponse {
    #[serde(default)]
    pub items: Vec<AlbumItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub images: Vec<ImageItem>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageItem {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

impl From<ArtistItem> for ArtistRef {
    fn from(item: ArtistItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

impl From<AlbumItem> for Album {
    fn from(item: AlbumItem) -> Self {
        // images[] is ordered largest-first by the API
        let cover_url = item.images.into_iter().next().map(|img| img.url);
        Self {
            id: item.id,
            name: item.name,
            release_date: item.release_date,
            cover_url,
            external_url: item.external_urls.spotify.unwrap_or_default(),
        }
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
