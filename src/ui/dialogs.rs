//! Modal dialog rendering (validation warnings, order confirmation).

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::checkout::{ValidationError, CONFIRMATION_MESSAGE, CONFIRMATION_TITLE};
use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws the warning dialog for a rejected submission.
pub fn draw_warning_dialog(frame: &mut Frame, error: &ValidationError) {
    let area = centered_rect(dialog::WARNING_WIDTH, dialog::WARNING_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::WARNING))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(error.title(), Style::default().fg(colors::WARNING).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            error.message(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(colors::MUTED)),
            Span::styled("any key", Style::default().fg(colors::KEY).bold()),
            Span::styled(" to go back to the form", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let warning_widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(warning_widget, area);
}

/// Draws the order confirmation dialog.
pub fn draw_confirmation_dialog(frame: &mut Frame) {
    let area = centered_rect(
        dialog::CONFIRMATION_WIDTH,
        dialog::CONFIRMATION_HEIGHT,
        frame.area(),
    );

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SUCCESS))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                CONFIRMATION_TITLE,
                Style::default().fg(colors::SUCCESS).bold(),
            ),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            CONFIRMATION_MESSAGE,
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(colors::MUTED)),
            Span::styled("any key", Style::default().fg(colors::KEY).bold()),
            Span::styled(" to continue", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let confirmation_widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(confirmation_widget, area);
}
