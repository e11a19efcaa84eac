//! Checkout view rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::checkout::FormField;

use super::colors;

/// Block cursor character for the focused field.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Hint shown in the expiration field while it is empty.
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Draws the payment form and the running total.
pub fn draw_checkout(frame: &mut Frame, area: Rect, app: &App) {
    // Split into hint, total, and the form card
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Section hint
            Constraint::Length(1),  // Total
            Constraint::Length(11), // Form card
            Constraint::Min(0),     // Spacer
        ])
        .split(area);

    // Draw section hint
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Checkout", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(" - ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" places the order", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(hint, chunks[0]);

    // Draw the running total
    let total = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            app.cart.total_line(),
            Style::default().fg(colors::SECONDARY).bold(),
        ),
    ]));
    frame.render_widget(total, chunks[1]);

    // Draw the credit card form
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("Payment Details ", Style::default().fg(Color::White).bold()),
        ]))
        .padding(Padding::horizontal(1));

    let mut content = vec![Line::from("")];
    for field in FormField::all() {
        content.push(field_line(app, field));
        content.push(Line::from(""));
    }

    let form = Paragraph::new(content).block(block);
    frame.render_widget(form, chunks[2]);
}

/// Renders one labelled form field, with a cursor when focused.
fn field_line(app: &App, field: FormField) -> Line<'_> {
    let is_focused = app.focused_field == field;
    let value = app.form.value(field);

    let marker_style = if is_focused {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::MUTED)
    };
    let label_style = if is_focused {
        Style::default().fg(colors::PRIMARY).bold()
    } else {
        Style::default().fg(colors::MUTED)
    };

    let mut spans = vec![
        Span::styled(if is_focused { " ▸ " } else { "   " }, marker_style),
        Span::styled(format!("{:<16}", field.label()), label_style),
        Span::styled(value, Style::default().fg(Color::White)),
    ];

    if value.is_empty() && field == FormField::ExpirationDate && !is_focused {
        spans.push(Span::styled(
            DATE_PLACEHOLDER,
            Style::default().fg(colors::MUTED).italic(),
        ));
    }

    if is_focused {
        spans.push(Span::styled(
            BLOCK_CURSOR,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_visible() {
        assert_eq!(BLOCK_CURSOR, "█");
    }

    #[test]
    fn test_placeholder_matches_expected_format() {
        assert_eq!(DATE_PLACEHOLDER.len(), crate::checkout::EXPIRATION_LEN);
    }
}
