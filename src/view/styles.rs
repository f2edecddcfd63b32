//! Styling configuration for the table widget.
//!
//! Provides distinct styles for the collapsed strip, the expanded detail
//! block, labels, and the selection highlight.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Style set for the table widget.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Column labels in the collapsed strip.
    pub strip_label: Style,
    /// Cell values in the collapsed strip.
    pub strip_value: Style,
    /// Highlight for the selected row's strip.
    pub selected: Style,
    /// Field labels in the expanded detail block.
    pub detail_label: Style,
    /// Field values in the expanded detail block.
    pub detail_value: Style,
    /// Fields with no matching column spec (raw key/value fallback).
    pub raw_field: Style,
}

impl TableStyles {
    /// Default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Style set honoring the given color configuration.
    ///
    /// With colors disabled everything renders unstyled except the selection
    /// highlight, which falls back to REVERSED so it stays distinguishable.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                strip_label: Style::default().fg(Color::DarkGray),
                strip_value: Style::default(),
                selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                detail_label: Style::default().fg(Color::Cyan),
                detail_value: Style::default(),
                raw_field: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                strip_label: Style::default(),
                strip_value: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                detail_label: Style::default(),
                detail_value: Style::default(),
                raw_field: Style::default(),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::new()
    }
}
