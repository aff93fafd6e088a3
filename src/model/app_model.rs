//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::catalog::{Album, CatalogClient};
use super::types::{Screen, UiState, SUGGESTED_ARTISTS};

/// Main application model containing all state
///
/// The catalog client is absent until the background token exchange
/// succeeds; searches attempted before that are refused with a readiness
/// message by the controller.
pub struct AppModel {
    pub catalog: Option<Arc<dyn CatalogClient>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            catalog: None,
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_catalog(&mut self, catalog: Arc<dyn CatalogClient>) {
        self.catalog = Some(catalog);
    }

    pub fn catalog(&self) -> Option<Arc<dyn CatalogClient>> {
        self.catalog.clone()
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Configuration & errors
    // ========================================================================

    /// Enter the terminal configuration-error state. Nothing recovers from
    /// this short of restarting with the variables set.
    pub async fn set_config_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.config_error = Some(message);
    }

    pub async fn has_config_error(&self) -> bool {
        self.ui_state.lock().await.config_error.is_some()
    }

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error = Some(message);
    }

    // ========================================================================
    // Search lifecycle
    // ========================================================================

    /// Mark a search as started: loading on, previous error cleared.
    pub async fn begin_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.loading = true;
        state.error = None;
        state.has_searched = true;
    }

    pub async fn set_loading(&self, loading: bool) {
        let mut state = self.ui_state.lock().await;
        state.loading = loading;
    }

    /// Replace the album list wholesale, in server order.
    pub async fn set_albums(&self, albums: Vec<Album>) {
        let mut state = self.ui_state.lock().await;
        state.albums = albums;
        state.album_selected = 0;
    }

    pub async fn reset_results(&self) {
        self.ui_state.lock().await.reset_results();
    }

    /// The explicit clear action: back to the initial state.
    pub async fn clear_search(&self) {
        self.ui_state.lock().await.reset_all();
    }

    // ========================================================================
    // Input editing & selection
    // ========================================================================

    pub async fn set_search_input(&self, text: String) {
        let mut state = self.ui_state.lock().await;
        state.search_input = text;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
    }

    /// Move the active selection up: suggestion chips on the welcome
    /// screen, the album list on the results screen.
    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        match state.screen() {
            Screen::Welcome => {
                state.suggestion_selected = state.suggestion_selected.saturating_sub(1);
            }
            Screen::Results => {
                state.album_selected = state.album_selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        match state.screen() {
            Screen::Welcome => {
                if state.suggestion_selected < SUGGESTED_ARTISTS.len() - 1 {
                    state.suggestion_selected += 1;
                }
            }
            Screen::Results => {
                if state.album_selected < state.albums.len().saturating_sub(1) {
                    state.album_selected += 1;
                }
            }
            _ => {}
        }
    }

    /// Currently highlighted suggestion chip, if the welcome screen is up.
    pub async fn selected_suggestion(&self) -> Option<&'static str> {
        let state = self.ui_state.lock().await;
        if state.screen() == Screen::Welcome {
            SUGGESTED_ARTISTS.get(state.suggestion_selected).copied()
        } else {
            None
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
