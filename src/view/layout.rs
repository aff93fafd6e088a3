//! Layout rendering (hero banner, search bar, footer hints)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Screen, UiState};

const SEARCH_PLACEHOLDER: &str = "Entrez le nom d'un artiste (ex: Daft Punk, Taylor Swift...)";

pub fn render_hero(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "♪ Spotify ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Album Explorer",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Découvrez la discographie complète de vos artistes préférés",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let (text, text_style) = if ui_state.search_input.is_empty() {
        (SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (
            ui_state.search_input.as_str(),
            Style::default().fg(Color::White),
        )
    };

    // Input is disabled while a search is in flight
    let border_style = if ui_state.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };

    let search = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recherche ")
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(search, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hints = match ui_state.screen() {
        Screen::Welcome => "Entrée : rechercher  •  ↑/↓ : suggestions  •  Ctrl+C : quitter",
        Screen::Results => "↑/↓ : parcourir  •  Échap : nouvelle recherche  •  Ctrl+C : quitter",
        _ => "Entrée : rechercher  •  Échap : nouvelle recherche  •  Ctrl+C : quitter",
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
