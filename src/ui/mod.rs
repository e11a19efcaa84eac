//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each view is rendered by a separate submodule for clarity.

mod cart;
mod checkout;
mod colors;
mod dialogs;
mod empty;
mod header;
mod help;
mod menu;
mod status;
mod tabs;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Dialog, View};
use crate::constants::layout;

// Re-export submodule draw functions for internal use
use cart::draw_cart;
use checkout::draw_checkout;
use dialogs::{draw_confirmation_dialog, draw_warning_dialog};
use header::draw_header;
use help::draw_help_overlay;
use menu::draw_menu;
use status::{draw_commands_bar, draw_status_bar};
use tabs::draw_tabs;

/// Main draw function - dispatches to specific view renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, tabs, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Length(layout::TABS_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Draw the tabs row
    draw_tabs(frame, chunks[1], app);

    // Draw the main content based on current view
    match app.current_view {
        View::Menu => draw_menu(frame, chunks[2], app),
        View::Cart => draw_cart(frame, chunks[2], app),
        View::Checkout => draw_checkout(frame, chunks[2], app),
    }

    // Draw the modal dialog on top of the active view
    match &app.dialog {
        Some(Dialog::Warning(error)) => draw_warning_dialog(frame, error),
        Some(Dialog::OrderConfirmed) => draw_confirmation_dialog(frame),
        None => {}
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[3], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[4], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}
