//! Themed message printing shared by every command.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` when color output is enabled.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(&format!("{}{}", prefix, msg), entry, theme_map, supports_color))
}

pub fn print_info_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme_map, supports_color)
}
