//! Search orchestration: artist resolution followed by album listing

use crate::error::CatalogError;
use crate::model::{Album, CatalogClient};

use super::{AppController, MSG_ARTIST_NOT_FOUND, MSG_NOT_CONFIGURED, MSG_NOT_READY};

impl AppController {
    /// Run one search for `query`.
    ///
    /// An empty (or whitespace-only) query is the clear path: result state
    /// is reset and no request is made. The two precondition failures
    /// (missing configuration, token not yet acquired) set an error without
    /// ever raising the loading flag. Past that point `loading` is true
    /// until the single settle point at the end, whatever the outcome.
    pub async fn perform_search(&self, query: &str) {
        let model = self.model.lock().await;

        let trimmed = query.trim();
        if trimmed.is_empty() {
            model.reset_results().await;
            return;
        }

        if model.has_config_error().await {
            model.set_error(MSG_NOT_CONFIGURED.to_string()).await;
            return;
        }

        let Some(catalog) = model.catalog() else {
            tracing::debug!(query = trimmed, "Search attempted before token acquisition");
            model.set_error(MSG_NOT_READY.to_string()).await;
            return;
        };

        tracing::debug!(query = trimmed, "Performing search");
        model.begin_search().await;

        // Release the model while the requests are in flight so the event
        // loop keeps drawing the loading screen.
        drop(model);
        let outcome = run_search(catalog.as_ref(), trimmed).await;

        let model = self.model.lock().await;
        match outcome {
            Ok(albums) => {
                tracing::info!(query = trimmed, count = albums.len(), "Search completed");
                model.set_albums(albums).await;
            }
            Err(message) => {
                tracing::warn!(query = trimmed, error = %message, "Search failed");
                model.set_error(message).await;
            }
        }
        model.set_loading(false).await;
    }

    /// The explicit reset action: back to the initial state.
    pub async fn clear_search(&self) {
        let model = self.model.lock().await;
        model.clear_search().await;
    }
}

/// The two sequential catalog calls, already mapped to user-facing text.
async fn run_search(catalog: &dyn CatalogClient, query: &str) -> Result<Vec<Album>, String> {
    let artist = catalog
        .find_artist(query)
        .await
        .map_err(|e| fail(e, "artist search"))?;

    let Some(artist) = artist else {
        return Err(MSG_ARTIST_NOT_FOUND.to_string());
    };

    catalog
        .artist_albums(&artist.id)
        .await
        .map_err(|e| fail(e, "album listing"))
}

fn fail(error: CatalogError, step: &str) -> String {
    tracing::error!(step, detail = error.detail(), "Catalog request failed");
    error.user_message()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Notify;

    use crate::error::CatalogError;

    use super::super::testing::{albums, controller_with, daft_punk, FakeCatalog};
    use super::super::{MSG_ARTIST_NOT_FOUND, MSG_NOT_CONFIGURED, MSG_NOT_READY};

    #[tokio::test]
    async fn empty_query_clears_and_skips_network() {
        let fake = Arc::new(FakeCatalog::new(Ok(daft_punk()), Ok(albums(2))));
        let controller = controller_with(Some(fake.clone()));

        // Seed some prior result state
        {
            let model = controller.model.lock().await;
            model.begin_search().await;
            model.set_albums(albums(2)).await;
            model.set_loading(false).await;
        }

        controller.perform_search("   ").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert!(state.albums.is_empty());
        assert!(state.error.is_none());
        assert!(!state.has_searched);
        assert!(!state.loading);
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn not_configured_short_circuits_without_loading() {
        let fake = Arc::new(FakeCatalog::new(Ok(daft_punk()), Ok(albums(2))));
        let controller = controller_with(Some(fake.clone()));
        controller
            .model
            .lock()
            .await
            .set_config_error("Configuration manquante".to_string())
            .await;

        controller.perform_search("Daft Punk").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(state.error.as_deref(), Some(MSG_NOT_CONFIGURED));
        assert!(!state.loading);
        assert!(!state.has_searched);
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn missing_token_reports_readiness_error() {
        let controller = controller_with(None);

        controller.perform_search("Daft Punk").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(state.error.as_deref(), Some(MSG_NOT_READY));
        assert!(!state.loading);
        assert!(!state.has_searched);
    }

    #[tokio::test]
    async fn successful_search_yields_all_albums() {
        let fake = Arc::new(FakeCatalog::new(Ok(daft_punk()), Ok(albums(4))));
        let controller = controller_with(Some(fake.clone()));

        controller.perform_search("Daft Punk").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(state.albums.len(), 4);
        assert!(state.has_searched);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(fake.calls(), 2);
    }

    #[tokio::test]
    async fn unknown_artist_reports_not_found() {
        let fake = Arc::new(FakeCatalog::new(Ok(None), Ok(albums(4))));
        let controller = controller_with(Some(fake.clone()));

        controller.perform_search("zzzzzz").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(state.error.as_deref(), Some(MSG_ARTIST_NOT_FOUND));
        assert!(state.albums.is_empty());
        assert!(!state.loading);
        // Album listing never ran
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn album_listing_failure_carries_status_code() {
        let fake = Arc::new(FakeCatalog::new(
            Ok(daft_punk()),
            Err(CatalogError::Status(503)),
        ));
        let controller = controller_with(Some(fake));

        controller.perform_search("Daft Punk").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(state.error.as_deref(), Some("Erreur API: 503"));
        assert!(state.albums.is_empty());
        assert!(!state.loading);
        assert!(state.has_searched);
    }

    #[tokio::test]
    async fn artist_search_failure_carries_status_code() {
        let fake = Arc::new(FakeCatalog::new(
            Err(CatalogError::Status(429)),
            Ok(albums(1)),
        ));
        let controller = controller_with(Some(fake));

        controller.perform_search("Daft Punk").await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(state.error.as_deref(), Some("Erreur API: 429"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn loading_is_true_while_search_is_in_flight() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let mut fake = FakeCatalog::new(Ok(daft_punk()), Ok(albums(1)));
        fake.gate = Some((entered.clone(), release.clone()));
        let controller = controller_with(Some(Arc::new(fake)));

        let background = controller.clone();
        let task = tokio::spawn(async move { background.perform_search("Daft Punk").await });

        entered.notified().await;
        let state = controller.model.lock().await.get_ui_state().await;
        assert!(state.loading);
        assert!(state.has_searched);
        assert!(state.error.is_none());

        release.notify_one();
        task.await.unwrap();

        let state = controller.model.lock().await.get_ui_state().await;
        assert!(!state.loading);
        assert_eq!(state.albums.len(), 1);
    }

    #[tokio::test]
    async fn clear_search_restores_initial_state() {
        let fake = Arc::new(FakeCatalog::new(Ok(daft_punk()), Ok(albums(3))));
        let controller = controller_with(Some(fake));

        {
            let model = controller.model.lock().await;
            model.set_search_input("Daft Punk".to_string()).await;
        }
        controller.perform_search("Daft Punk").await;
        controller.clear_search().await;

        let state = controller.model.lock().await.get_ui_state().await;
        assert!(state.search_input.is_empty());
        assert!(state.albums.is_empty());
        assert!(state.error.is_none());
        assert!(!state.has_searched);
    }
}
