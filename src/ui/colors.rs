//! Color theme definitions for the UI.

use ratatui::style::Color;

/// Titles and the overall progress gauge
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Phase gauge and running indicator
pub const SECONDARY: Color = Color::Rgb(52, 211, 153); // Bright emerald
/// Background of the active phase row
pub const SELECTION: Color = Color::Rgb(99, 102, 241); // Indigo
/// Text on the active phase row
pub const SELECTION_TEXT: Color = Color::White;
/// Secondary text, finished phases
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Slate
/// Rejected actions
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Paused indicator, pending prompt
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Status messages, completed session
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Panel borders
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Keyboard shortcuts
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Catch-all phase marker and decorations
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple
