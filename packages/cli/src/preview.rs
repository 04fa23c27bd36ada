//! Plain-text preview of extracted rows.

use std::fmt::Write as _;

use dossier_profile_models::Row;

const KEY_WIDTH: usize = 42;
const VALUE_WIDTH: usize = 30;
const COMMENT_WIDTH: usize = 50;

/// Renders up to `limit` rows as a fixed-width table, followed by a count
/// of the rows left out.
#[must_use]
pub fn render(rows: &[Row], limit: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<4} {:<KEY_WIDTH$} {:<VALUE_WIDTH$} COMMENTS",
        "#", "KEY", "VALUE"
    );
    let _ = writeln!(out, "{}", "-".repeat(4 + KEY_WIDTH + VALUE_WIDTH + COMMENT_WIDTH + 3));

    for row in rows.iter().take(limit) {
        let value = row.value.as_ref().map(ToString::to_string).unwrap_or_default();
        let comment = row.comment.as_deref().unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<4} {:<KEY_WIDTH$} {:<VALUE_WIDTH$} {}",
            row.index,
            truncate(&row.key, KEY_WIDTH),
            truncate(&value, VALUE_WIDTH),
            truncate(comment.trim_end(), COMMENT_WIDTH),
        );
    }

    if rows.len() > limit {
        let _ = writeln!(out, "\n... and {} more rows", rows.len() - limit);
    }

    out
}

/// Shortens `s` to at most `max` characters, marking the cut with `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use dossier_profile_models::{Field, RowAccumulator};

    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        let mut acc = RowAccumulator::new();
        acc.extend((0..n).map(|i| Field::new("Graduation year", i64::try_from(2000 + i).unwrap())));
        acc.into_rows()
    }

    #[test]
    fn limits_rows_and_counts_the_rest() {
        let out = render(&rows(12), 10);
        assert_eq!(out.lines().filter(|l| l.contains("Graduation year")).count(), 10);
        assert!(out.ends_with("... and 2 more rows\n"));
    }

    #[test]
    fn short_tables_have_no_remainder_line() {
        let out = render(&rows(3), 10);
        assert!(!out.contains("more rows"));
    }

    #[test]
    fn truncate_is_character_aware() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Continued academic excellence", 12), "Continued...");
        assert_eq!(truncate("Ünïcödé text here", 8), "Ünïcö...");
    }
}
