//! Menu view rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;
use super::empty::draw_empty_state;

/// Draws the menu list.
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    // Split into header hint and list
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Section hint
            Constraint::Min(0),    // List
        ])
        .split(area);

    // Draw section hint
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Drone Dogs Menu", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(" - ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" adds the highlighted dog to your cart", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(hint, chunks[0]);

    // The standard menu is never empty, but guard anyway
    if app.catalog.is_empty() {
        draw_empty_state(frame, chunks[1], "Nothing on the menu", "Come back later");
        return;
    }

    // Create list items from the catalog
    let items: Vec<ListItem> = app
        .catalog
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = app.menu_state.selected() == Some(idx);

            let number = format!("{:>3}", idx + 1);
            let price = format!("${:>5.2}", item.price);

            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(number, Style::default().fg(colors::ACCENT)),
                Span::styled("  ", style),
                Span::styled(
                    if is_selected { "▸" } else { " " },
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(" ", style),
                Span::styled(
                    price,
                    style.fg(if is_selected {
                        colors::SELECTION_TEXT
                    } else {
                        colors::SECONDARY
                    }),
                ),
                Span::styled("  ", style),
                Span::styled(item.name.clone(), style.add_modifier(Modifier::BOLD)),
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    // Create the list widget
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(
                        format!("{}", app.catalog.len()),
                        Style::default().fg(colors::SECONDARY).bold(),
                    ),
                    Span::styled(" dogs on the menu ", Style::default().fg(Color::White)),
                ]))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default()) // We handle highlighting in items
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[1], &mut app.menu_state.clone());
}
