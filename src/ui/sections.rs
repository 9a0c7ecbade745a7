//! Static page sections: header, contact block, footer bar, empty state

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::{
    ACCENT_PRIMARY, BORDER_SUBTLE, GREEN_SUCCESS, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

pub const HEADER_TITLE: &str = "Talleres Seminario Práctica en Aula";
pub const HEADER_SUBTITLE: &str = "Accede a todos los PDFs solicitados para los talleres";

pub const CONTACT_TITLE: &str = "¿Quieres contactarme?";
pub const CONTACT_LABEL: &str = "Mi portafolio";
pub const CONTACT_LINK: &str = "https://portafoliosmendo.netlify.app";

pub const EMPTY_MESSAGE: &str = "No hay talleres disponibles";

/// Render the page header: title and subtitle over a bottom rule
pub fn render_header(area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let content = vec![
        Line::from(Span::styled(
            HEADER_TITLE,
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HEADER_SUBTITLE,
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the contact section with the portfolio link
pub fn render_contact(area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let content = vec![Line::from(vec![
        Span::styled(CONTACT_TITLE, Style::default().fg(TEXT_PRIMARY)),
        Span::raw("  "),
        Span::styled(
            format!("{} → {}", CONTACT_LABEL, CONTACT_LINK),
            Style::default().fg(ACCENT_PRIMARY),
        ),
    ])];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the explicit "no items" state for an empty registry
pub fn render_empty_state(area: Rect, frame: &mut Frame) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        EMPTY_MESSAGE,
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the status line with the latest action feedback.
/// `status` carries the message text and whether the action failed.
pub fn render_status_line(area: Rect, status: Option<(&str, bool)>, frame: &mut Frame) {
    let Some((text, failed)) = status else {
        return;
    };
    let color = if failed { RED_ERROR } else { GREEN_SUCCESS };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(color),
    )));
    frame.render_widget(paragraph, area);
}

/// Render the footer bar with keybinding hints and the current group mode
pub fn render_key_hints(area: Rect, mode_label: &str, frame: &mut Frame) {
    let hints = Paragraph::new(format!(
        " ↑/↓: Navegar | Enter/Espacio: Abrir PDF | d: Descargar | g: Vista ({mode_label}) | q: Salir ",
    ))
    .style(Style::default().fg(Color::Black).bg(ACCENT_PRIMARY));
    frame.render_widget(hints, area);
}
