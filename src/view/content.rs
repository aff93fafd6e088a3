//! Per-screen content area rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::auth::{CLIENT_ID_VAR, CLIENT_SECRET_VAR};
use crate::model::{Screen, UiState, SUGGESTED_ARTISTS};

use super::utils::{format_release_date, render_scrollable_list};

pub fn render_content(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    match ui_state.screen() {
        Screen::ConfigError => render_config_error(frame, area, ui_state),
        Screen::Error => render_error(frame, area, ui_state),
        Screen::Loading => render_loading(frame, area, ui_state),
        Screen::Welcome => render_welcome(frame, area, ui_state),
        Screen::ReadyPrompt => render_ready_prompt(frame, area),
        Screen::Results => render_results(frame, area, ui_state),
    }
}

/// Terminal configuration failure. Replaces the entire UI; the only way
/// out is restarting with the credentials set.
pub fn render_config_error(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let message = ui_state.config_error.as_deref().unwrap_or_default();

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "⚠ Configuration requise",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::default(),
        Line::from(Span::styled(
            "Pour corriger :",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!("  1. Définissez la variable d'environnement {CLIENT_ID_VAR}")),
        Line::from(format!("  2. Définissez la variable d'environnement {CLIENT_SECRET_VAR}")),
        Line::from("  3. Redéployez l'application"),
        Line::default(),
        Line::from(Span::styled(
            "Ctrl+C : quitter",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(panel, area);
}

fn render_error(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let message = ui_state.error.as_deref().unwrap_or_default();

    // Configuration-flavored errors get a different explanation than
    // search misses
    let explanation = if message.contains("configur") {
        "L'application nécessite une configuration valide pour fonctionner"
    } else {
        "Vérifiez l'orthographe ou essayez un autre artiste"
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            explanation,
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Échap : nouvelle recherche",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Erreur ")
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(panel, area);
}

fn render_loading(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Exploration en cours...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Recherche des albums de {}", ui_state.search_input.trim()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(panel, area);
}

fn render_welcome(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Intro blurb
            Constraint::Min(0),    // Suggestion chips
        ])
        .split(area);

    let blurb = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "Bienvenue sur Spotify Album Explorer",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Recherchez un artiste pour parcourir tous ses albums : pochettes, dates de sortie et liens d'écoute",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(blurb, chunks[0]);

    let items: Vec<ListItem> = SUGGESTED_ARTISTS
        .iter()
        .enumerate()
        .map(|(i, artist)| {
            let style = if i == ui_state.suggestion_selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {artist}")).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Essayez par exemple ")
        .padding(Padding::horizontal(1));
    render_scrollable_list(frame, chunks[1], items, ui_state.suggestion_selected, block);
}

fn render_ready_prompt(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Prêt à explorer ?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Commencez par rechercher un artiste ci-dessus",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(panel, area);
}

fn render_results(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let count = ui_state.albums.len();
    let noun = if count > 1 { "albums" } else { "album" };
    let title = format!(
        " Albums de {} ({} {}) ",
        ui_state.search_input.trim(),
        count,
        noun
    );

    let items: Vec<ListItem> = ui_state
        .albums
        .iter()
        .enumerate()
        .map(|(i, album)| {
            let selected = i == ui_state.album_selected;
            let name_style = if selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut detail = format!("  Sorti le {}", format_release_date(&album.release_date));
            if !album.external_url.is_empty() {
                detail.push_str("  •  ▶ ");
                detail.push_str(&album.external_url);
            }

            let mut lines = vec![
                Line::from(Span::styled(album.name.clone(), name_style)),
                Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
            ];
            // Cover art cannot render in a terminal; surface the URL for
            // the highlighted album only
            if selected {
                if let Some(cover) = &album.cover_url {
                    lines.push(Line::from(Span::styled(
                        format!("  ◉ {cover}"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }

            ListItem::new(Text::from(lines))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::horizontal(1));
    render_scrollable_list(frame, area, items, ui_state.album_selected, block);
}
