//! Unified diff rendering for `apply --diff`.

use diffy::{Line as DiffLine, create_patch};
use std::io::{self, Write};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a line-oriented diff of `original` against `patched`.
pub fn print_diff<W: Write>(
    original: &str,
    patched: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, patched);
    writeln!(
        writer,
        "{}",
        styled("--- Diff View ---", ThemeEntry::DiffHeader, theme_map, supports_color)
    )?;

    if patch.hunks().is_empty() {
        writeln!(writer, "No changes.")?;
    }

    for hunk in patch.hunks() {
        let header = format!(
            "@@ -{},{} +{},{} @@",
            hunk.old_range().start(),
            hunk.old_range().len(),
            hunk.new_range().start(),
            hunk.new_range().len()
        );
        writeln!(writer, "{}", styled(&header, ThemeEntry::DiffHeader, theme_map, supports_color))?;

        for line in hunk.lines() {
            let (prefix, text, entry) = match line {
                DiffLine::Delete(s) => ("-", *s, Some(ThemeEntry::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(ThemeEntry::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            let body = format!("{}{}", prefix, text.trim_end_matches('\n'));
            match entry {
                Some(entry) => writeln!(writer, "{}", styled(&body, entry, theme_map, supports_color))?,
                None => writeln!(writer, "{}", body)?,
            }
        }
    }

    writeln!(
        writer,
        "{}",
        styled("--- End Diff ---", ThemeEntry::DiffHeader, theme_map, supports_color)
    )
}
