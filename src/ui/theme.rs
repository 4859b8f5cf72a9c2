//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the terminal UI, supporting
//! both built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI 24-bit escape sequences.
//!
//! # Built-in Themes
//!
//! - `deep-sea`: Dark blue theme matching the project's color language (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#caf0f8"
//! heading_fg = "#00b4d8"
//! text_normal = "#e0e0e0"
//! text_dim = "#8a8f98"
//! border = "#1b3a4b"
//! banner_fg = "#e63946"
//! banner_bg = "#2b0f12"
//! rating_fg = "#f9c74f"
//! badge_fg = "#03045e"
//! badge_bg = "#f9c74f"
//! panel_fg = "#8ecae6"
//! loading_fg = "#00b4d8"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{CinescoutError, Result};

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#00b4d8"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header bar text color.
    pub header_fg: String,
    /// Optional header bar background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Section heading color (result headings, panel title).
    pub heading_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer hints, poster URLs).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Error banner foreground.
    pub banner_fg: String,
    /// Error banner background.
    pub banner_bg: String,

    /// Rating star color.
    pub rating_fg: String,

    /// Ranking badge foreground.
    pub badge_fg: String,
    /// Ranking badge background.
    pub badge_bg: String,

    /// Top-movies panel accent color.
    pub panel_fg: String,

    /// Loading indicator color.
    pub loading_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `deep-sea`, `catppuccin-mocha`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "deep-sea" => include_str!("../../themes/deep-sea.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CinescoutError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed (invalid syntax, missing fields, type
    /// mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CinescoutError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CinescoutError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (deep-sea).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("deep-sea").expect("Built-in deep-sea theme should always parse")
    }
}
