//! Output formatting utilities for the CLI
//!
//! Text output uses tables and colors when the terminal supports them; the
//! JSON formats serialize the library reports directly.

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::OutputFormat;

/// Style configuration for text output
pub struct OutputStyle {
    /// Whether to use colors in output
    pub use_color: bool,
    /// Whether to use Unicode characters for borders
    pub use_unicode: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            use_unicode: true,
        }
    }
}

impl OutputStyle {
    /// Create a new output style
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable colors in output
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Use ASCII characters instead of Unicode
    #[must_use]
    pub fn ascii(mut self) -> Self {
        self.use_unicode = false;
        self
    }
}

/// Format a key-value pair
pub fn format_key_value(key: &str, value: &str, style: &OutputStyle) -> String {
    if style.use_color {
        format!(
            "{}: {value}",
            key.if_supports_color(Stream::Stdout, |k| k.cyan())
        )
    } else {
        format!("{key}: {value}")
    }
}

/// Format a warning message
pub fn format_warning(text: &str, style: &OutputStyle) -> String {
    if style.use_color {
        text.if_supports_color(Stream::Stderr, |t| t.yellow())
            .to_string()
    } else {
        text.to_string()
    }
}

/// Print a section header
pub fn print_section_header(title: &str, style: &OutputStyle) {
    if style.use_color {
        println!(
            "\n{}",
            title.if_supports_color(Stream::Stdout, |t| t.bold().bright_blue().to_string())
        );
    } else {
        println!("\n{title}");
    }
    let rule = if style.use_unicode { "═" } else { "=" };
    println!("{}", rule.repeat(title.len()));
}

/// Create a styled table
pub fn create_table(style: &OutputStyle) -> Table {
    let mut table = Table::new();

    if style.use_unicode {
        table
            .load_preset(presets::UTF8_FULL)
            .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(presets::ASCII_FULL);
    }

    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Style a table header cell
pub fn header_cell(text: &str, style: &OutputStyle) -> Cell {
    let cell = Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Left);
    if style.use_color { cell.fg(Color::Cyan) } else { cell }
}

/// Style a numeric cell (right-aligned)
pub fn numeric_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Highlight the selected row's cell
pub fn selected_cell(text: &str, selected: bool, style: &OutputStyle) -> Cell {
    let cell = numeric_cell(text);
    match (selected, style.use_color) {
        (true, true) => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        (true, false) => cell.add_attribute(Attribute::Bold),
        (false, _) => cell,
    }
}

/// Print a report as JSON. Returns `false` for [`OutputFormat::Text`], which
/// callers render themselves.
pub fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Text => Ok(false),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value)?);
            Ok(true)
        }
        OutputFormat::JsonPretty => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_value() {
        let style = OutputStyle::new().no_color();
        assert_eq!(format_key_value("Key", "LEMON", &style), "Key: LEMON");
    }

    #[test]
    fn test_plain_warning() {
        let style = OutputStyle::new().no_color().ascii();
        assert_eq!(format_warning("careful", &style), "careful");
        assert!(!style.use_unicode);
    }

    #[test]
    fn test_text_format_is_not_json() {
        assert!(!print_json(&"ignored", OutputFormat::Text).unwrap_or(true));
    }
}
