//! Text normalization and capture post-processing.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

/// Regex matching any run of whitespace, including page-break newlines.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses every whitespace run into a single space.
///
/// Nothing else changes: no trimming, no case folding, no punctuation
/// stripping. Rules can therefore match phrases that were split across
/// lines or pages in the source document.
#[must_use]
pub fn normalize(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw, " ").into_owned()
}

/// Returns capture group `i`, or `""` when the group did not participate.
#[must_use]
pub fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Parses a `Month DD, YYYY` date such as `March 14, 1990`.
///
/// The month must be spelled out in full (in any case). chrono's `%B`
/// also accepts `Mar`, so abbreviated names are rejected separately.
#[must_use]
pub fn parse_long_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, "%B %d, %Y")
        .map_err(|e| log::debug!("Unparseable date '{s}': {e}"))
        .ok()?;

    let month = s.split(' ').next().unwrap_or_default();
    if !month.eq_ignore_ascii_case(&date.format("%B").to_string()) {
        log::debug!("Abbreviated month in date '{s}'");
        return None;
    }

    Some(date)
}

/// Parses an integer that may contain thousands separators (`2,800,000`).
#[must_use]
pub fn parse_grouped_int(s: &str) -> Option<i64> {
    s.replace(',', "").parse().ok()
}

/// Converts a percentage string (`95.5`) to a fraction (`0.955`).
#[must_use]
pub fn percent_to_fraction(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().map(|pct| pct / 100.0)
}

/// Rewrites `B.Tech in Computer Science` as `B.Tech (Computer Science)`.
#[must_use]
pub fn parenthesize_degree(degree: &str) -> String {
    format!("{})", degree.replace(" in ", " ("))
}
