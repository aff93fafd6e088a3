//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (hero banner, search bar, footer)
//! - `content`: The per-screen content area rendering

mod utils;
mod layout;
mod content;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Screen, UiState};

pub struct AppView;

impl AppView {
    /// Render the whole UI from a state snapshot.
    ///
    /// The configuration-error screen replaces everything, including the
    /// search bar. Every other screen shares the banner / search / content /
    /// footer structure and differs only in the content area.
    pub fn render(frame: &mut Frame, ui_state: &UiState) {
        if ui_state.screen() == Screen::ConfigError {
            content::render_config_error(frame, frame.area(), ui_state);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Hero banner
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Footer hints
            ])
            .split(frame.area());

        layout::render_hero(frame, chunks[0]);
        layout::render_search_bar(frame, chunks[1], ui_state);
        content::render_content(frame, chunks[2], ui_state);
        layout::render_footer(frame, chunks[3], ui_state);
    }
}
