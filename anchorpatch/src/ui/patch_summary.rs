//! Per-rule summary printed by `apply --summary`.

use std::io::{self, Write};

use anchorpatch_core::RuleOutcome;

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn print_summary<W: Write>(
    outcomes: &[RuleOutcome],
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}",
        styled("--- Patch Summary ---", ThemeEntry::Header, theme_map, supports_color)
    )?;

    for outcome in outcomes {
        let name = styled(&outcome.rule_name, ThemeEntry::SummaryRuleName, theme_map, supports_color);
        if outcome.is_noop() {
            let note = styled("(no match)", ThemeEntry::Warn, theme_map, supports_color);
            writeln!(writer, "  {} {}", name, note)?;
        } else {
            let count = styled(
                &format!("({} occurrences)", outcome.occurrences),
                ThemeEntry::SummaryOccurrences,
                theme_map,
                supports_color,
            );
            writeln!(writer, "  {} {}", name, count)?;
        }
    }

    let applied = outcomes.iter().filter(|o| !o.is_noop()).count();
    let footer_entry = if applied == outcomes.len() {
        ThemeEntry::Success
    } else {
        ThemeEntry::Warn
    };
    let footer = format!("{} of {} rules applied.", applied, outcomes.len());
    writeln!(writer, "{}", styled(&footer, footer_entry, theme_map, supports_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn summary_lists_matches_and_noops() {
        let outcomes = vec![
            RuleOutcome { rule_name: "one".into(), occurrences: 2 },
            RuleOutcome { rule_name: "two".into(), occurrences: 0 },
        ];
        let mut buf = Vec::new();
        print_summary(&outcomes, &mut buf, &ThemeStyle::default_theme_map(), false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("  one (2 occurrences)\n"));
        assert!(out.contains("  two (no match)\n"));
        assert!(out.ends_with("1 of 2 rules applied.\n"));
    }

    #[test]
    fn footer_uses_success_style_only_when_every_rule_matched() {
        let theme = ThemeStyle::default_theme_map();
        let all = vec![RuleOutcome { rule_name: "one".into(), occurrences: 1 }];
        let mut buf = Vec::new();
        print_summary(&all, &mut buf, &theme, true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let green = styled("1 of 1 rules applied.", ThemeEntry::Success, &theme, true);
        assert!(out.ends_with(&format!("{}\n", green)));

        let partial = vec![RuleOutcome { rule_name: "two".into(), occurrences: 0 }];
        let mut buf = Vec::new();
        print_summary(&partial, &mut buf, &theme, true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let yellow = styled("0 of 1 rules applied.", ThemeEntry::Warn, &theme, true);
        assert!(out.ends_with(&format!("{}\n", yellow)));
    }
}
