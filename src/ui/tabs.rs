//! Tabs row rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the Menu / Cart / Checkout tabs row.
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::all()
        .iter()
        .map(|view| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", view.index() + 1),
                    Style::default().fg(colors::KEY).bold(),
                ),
                Span::styled(view.title(), Style::default().fg(colors::MUTED)),
                Span::raw(" "),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view.index())
        .highlight_style(
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .bold(),
        )
        .divider(Span::styled("│", Style::default().fg(colors::BORDER)));

    frame.render_widget(tabs, area);
}
