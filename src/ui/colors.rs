//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme
//! changes. The palette keeps the stand's mustard-and-relish branding.

use ratatui::style::Color;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(255, 215, 0); // Mustard yellow
/// Secondary accent color (used for active elements)
pub const SECONDARY: Color = Color::Rgb(76, 187, 23); // Kelly green
/// Background for selected items
pub const SELECTION: Color = Color::Rgb(76, 187, 23); // Kelly green
/// Text on selection
pub const SELECTION_TEXT: Color = Color::Rgb(255, 248, 220); // Warm white
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Warning color
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(180, 160, 60); // Dim mustard
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(255, 99, 71); // Ketchup red
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(255, 165, 0); // Bright orange
