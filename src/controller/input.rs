//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Quit works everywhere, including the configuration-error screen
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('q') = key.code {
                model.set_should_quit(true).await;
                return Ok(());
            }
        }

        // Missing configuration disables everything but quitting
        if model.has_config_error().await {
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        match key.code {
            KeyCode::Enter => {
                // Disabled trigger: a search already in flight wins
                if ui_state.loading {
                    return Ok(());
                }

                let query = ui_state.search_input.trim().to_string();
                if !query.is_empty() {
                    drop(model);
                    self.spawn_search(query);
                } else if let Some(artist) = model.selected_suggestion().await {
                    // Suggestion chip: pre-fill the query and run the same
                    // search path directly, no delay involved
                    model.set_search_input(artist.to_string()).await;
                    drop(model);
                    self.spawn_search(artist.to_string());
                } else {
                    // Empty submission is the clear path of the search
                    // operation: result state resets, no request goes out
                    drop(model);
                    self.spawn_search(String::new());
                }
            }
            KeyCode::Esc => {
                // Clear is disabled while a search is in flight, like the
                // submit trigger above
                if !ui_state.loading {
                    model.clear_search().await;
                }
            }
            KeyCode::Backspace => {
                model.backspace_search().await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                model.move_selection_down().await;
            }
            KeyCode::Char(c) => {
                model.append_to_search(c).await;
            }
            _ => {}
        }

        Ok(())
    }

    /// Run a search in the background so the event loop keeps drawing.
    fn spawn_search(&self, query: String) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.perform_search(&query).await;
        });
    }
}
