//! Domain types for the music catalog and the client trait in front of it.

use async_trait::async_trait;

use crate::error::CatalogError;

/// An album as presented in the results list.
///
/// Albums arrive in server order and are replaced wholesale on every
/// search; the client never merges or deduplicates them.
#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub id: String,
    pub name: String,
    /// Release date as returned by the catalog: `YYYY-MM-DD`, or a
    /// truncated `YYYY`/`YYYY-MM` for imprecise releases.
    pub release_date: String,
    /// Largest cover image, when the catalog supplies one.
    pub cover_url: Option<String>,
    /// Outbound link to listen on Spotify.
    pub external_url: String,
}

/// The artist a free-text query resolved to.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

/// Read-only access to the music catalog.
///
/// The search orchestrator only talks to this trait, so tests substitute
/// a fake without any network involved.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Resolve free text to the best-matching artist, or `None` when the
    /// catalog has no match at all.
    async fn find_artist(&self, query: &str) -> Result<Option<ArtistRef>, CatalogError>;

    /// List an artist's albums (album-type release groups only, one page).
    async fn artist_albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError>;
}
