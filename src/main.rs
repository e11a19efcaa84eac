//! Drone Dogs ordering kiosk
//!
//! A terminal user interface for browsing the menu, filling a cart,
//! and entering payment details. No real payment is processed and no
//! order is stored anywhere.

mod app;
mod cart;
mod checkout;
mod constants;
mod event;
mod menu;
mod ui;

use anyhow::{Context, Result};

use crate::app::App;
use crate::event::EventHandler;

/// Entry point for the application.
fn main() -> Result<()> {
    // Initialize the terminal
    let terminal = ratatui::init();

    // Create the application
    let app = App::new();

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Handle user input events
/// 3. Update application state
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Use different event handling while the checkout form has focus
        let event = if app.in_form_mode() {
            event_handler.next_input()?
        } else {
            event_handler.next()?
        };

        // Handle events (keyboard input, etc.)
        if let Some(action) = event {
            // Process the action and check if we should quit
            if app.handle_event(action) {
                break;
            }
        }
    }

    Ok(())
}
