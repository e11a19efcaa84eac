//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the commands bar showing available actions for current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available right now.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.dialog.is_some() || app.show_help {
        return vec![("any key", "close")];
    }

    match app.current_view {
        View::Menu => vec![
            ("j/k", "navigate"),
            ("Enter", "add to cart"),
            ("Tab", "next tab"),
            ("1/2/3", "jump to tab"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Cart => vec![
            ("Enter", "checkout"),
            ("Tab", "next tab"),
            ("1/2/3", "jump to tab"),
            ("q", "quit"),
        ],
        View::Checkout => vec![
            ("type", "fill field"),
            ("Tab", "next field"),
            ("Enter", "place order"),
            ("Esc", "back to menu"),
            ("←/→", "switch tab"),
        ],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (
            " Welcome to Drone Dogs".to_string(),
            Style::default().fg(colors::MUTED),
        )
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
