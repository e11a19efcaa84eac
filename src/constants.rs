//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Tabs row height.
    pub const TABS_HEIGHT: u16 = 1;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 70;
    /// Warning dialog width percentage.
    pub const WARNING_WIDTH: u16 = 50;
    /// Warning dialog height percentage.
    pub const WARNING_HEIGHT: u16 = 30;
    /// Confirmation dialog width percentage.
    pub const CONFIRMATION_WIDTH: u16 = 55;
    /// Confirmation dialog height percentage.
    pub const CONFIRMATION_HEIGHT: u16 = 35;
}
