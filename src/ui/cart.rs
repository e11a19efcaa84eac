//! Cart view rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;
use super::empty::draw_empty_state;

/// Draws the cart contents and the running total.
pub fn draw_cart(frame: &mut Frame, area: Rect, app: &App) {
    // Split into header hint, list, and total line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Section hint
            Constraint::Min(0),    // List
            Constraint::Length(1), // Total
        ])
        .split(area);

    // Draw section hint
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Cart Items", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(" - ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" goes to checkout", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(hint, chunks[0]);

    // Handle empty state
    if app.cart.is_empty() {
        draw_empty_state(
            frame,
            chunks[1],
            "Your cart is empty",
            "Press '1' to browse the menu and add something",
        );
    } else {
        // One line per entry, in the order they were added
        let items: Vec<ListItem> = app
            .cart
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let number = format!("{:>3}", idx + 1);
                let content = Line::from(vec![
                    Span::styled(number, Style::default().fg(colors::ACCENT)),
                    Span::styled("  ", Style::default()),
                    Span::styled(entry.display_line(), Style::default().fg(Color::White)),
                ]);
                ListItem::new(content)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(
                        format!("{}", app.cart.len()),
                        Style::default().fg(colors::SECONDARY).bold(),
                    ),
                    Span::styled(" items ", Style::default().fg(Color::White)),
                ]))
                .padding(Padding::horizontal(1)),
        );

        frame.render_widget(list, chunks[1]);
    }

    // Draw the running total
    let total = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            app.cart.total_line(),
            Style::default().fg(colors::SECONDARY).bold(),
        ),
    ]));
    frame.render_widget(total, chunks[2]);
}
