//! Core type definitions for the application

use super::catalog::Album;

/// Artists offered as one-key searches on the welcome screen.
pub const SUGGESTED_ARTISTS: [&str; 5] = [
    "Kendrick Lamar",
    "Beyoncé",
    "The Weeknd",
    "Ariana Grande",
    "Drake",
];

/// What the view should draw, derived from [`UiState`] on every render.
///
/// The underlying state is a tuple of independent flags (matching what each
/// operation mutates); collapsing the render decision into one tagged value
/// keeps the precedence in a single exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Missing credentials: remediation text only, no search UI
    ConfigError,
    /// Error panel with a reset hint
    Error,
    /// A search is in flight
    Loading,
    /// Nothing searched yet: feature blurb plus suggested artists
    Welcome,
    /// A completed search left no albums and no error
    ReadyPrompt,
    /// Album grid with count summary
    Results,
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub search_input: String,
    pub albums: Vec<Album>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    pub config_error: Option<String>,
    pub suggestion_selected: usize,
    pub album_selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            albums: vec![],
            loading: false,
            error: None,
            has_searched: false,
            config_error: None,
            suggestion_selected: 0,
            album_selected: 0,
        }
    }
}

impl UiState {
    /// Derive the screen to render. First match wins:
    /// config error, then error, then loading, then content.
    pub fn screen(&self) -> Screen {
        if self.config_error.is_some() {
            Screen::ConfigError
        } else if self.error.is_some() {
            Screen::Error
        } else if self.loading {
            Screen::Loading
        } else if !self.albums.is_empty() {
            Screen::Results
        } else if self.has_searched {
            Screen::ReadyPrompt
        } else {
            Screen::Welcome
        }
    }

    /// Clear the outcome of the previous search, keeping the input text.
    ///
    /// This is the empty-query path of the search operation: a valid
    /// "clear", not an error.
    pub fn reset_results(&mut self) {
        self.albums.clear();
        self.error = None;
        self.has_searched = false;
        self.album_selected = 0;
    }

    /// Return to the initial state: empty input, no albums, no error.
    pub fn reset_all(&mut self) {
        self.search_input.clear();
        self.reset_results();
        self.suggestion_selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(name: &str) -> Album {
        Album {
            id: format!("id-{name}"),
            name: name.to_string(),
            release_date: "2013-05-17".to_string(),
            cover_url: None,
            external_url: String::new(),
        }
    }

    #[test]
    fn initial_state_shows_welcome() {
        assert_eq!(UiState::default().screen(), Screen::Welcome);
    }

    #[test]
    fn config_error_wins_over_everything() {
        let mut state = UiState::default();
        state.config_error = Some("Configuration manquante".to_string());
        state.error = Some("Erreur API: 500".to_string());
        state.loading = true;
        state.albums.push(album("Discovery"));
        assert_eq!(state.screen(), Screen::ConfigError);
    }

    #[test]
    fn error_wins_over_loading_and_results() {
        let mut state = UiState::default();
        state.error = Some("Artiste non trouvé".to_string());
        state.loading = true;
        state.albums.push(album("Discovery"));
        assert_eq!(state.screen(), Screen::Error);
    }

    #[test]
    fn loading_wins_over_results() {
        let mut state = UiState::default();
        state.loading = true;
        state.albums.push(album("Discovery"));
        assert_eq!(state.screen(), Screen::Loading);
    }

    #[test]
    fn searched_with_no_albums_shows_ready_prompt() {
        let mut state = UiState::default();
        state.has_searched = true;
        assert_eq!(state.screen(), Screen::ReadyPrompt);
    }

    #[test]
    fn albums_show_results() {
        let mut state = UiState::default();
        state.has_searched = true;
        state.albums.push(album("Homework"));
        assert_eq!(state.screen(), Screen::Results);
    }

    #[test]
    fn reset_results_keeps_input() {
        let mut state = UiState::default();
        state.search_input = "Daft Punk".to_string();
        state.albums.push(album("Homework"));
        state.error = Some("Erreur API: 500".to_string());
        state.has_searched = true;
        state.album_selected = 1;

        state.reset_results();

        assert_eq!(state.search_input, "Daft Punk");
        assert!(state.albums.is_empty());
        assert!(state.error.is_none());
        assert!(!state.has_searched);
        assert_eq!(state.album_selected, 0);
    }

    #[test]
    fn reset_all_returns_to_initial_state() {
        let mut state = UiState::default();
        state.search_input = "Daft Punk".to_string();
        state.albums.push(album("Homework"));
        state.error = Some("Erreur API: 500".to_string());
        state.has_searched = true;

        state.reset_all();

        assert!(state.search_input.is_empty());
        assert!(state.albums.is_empty());
        assert!(state.error.is_none());
        assert!(!state.has_searched);
        assert_eq!(state.screen(), Screen::Welcome);
    }
}
