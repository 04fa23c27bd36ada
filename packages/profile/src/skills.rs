//! Technical proficiency paragraph.

use dossier_profile_models::Field;
use regex::Captures;

use crate::text::group;
use crate::{Rule, apply_rules, rule};

static RULES: [Rule; 1] = [rule!(
    "technical proficiency",
    r"(?s)In terms of technical proficiency,.*?establishing him as an expert in the field\.",
    technical_proficiency,
)];

/// Runs the technical-skills rule against normalized text.
#[must_use]
pub fn extract(text: &str) -> Vec<Field> {
    apply_rules(&RULES, text)
}

/// Stores the whole paragraph verbatim as the comment of a value-less row.
/// The trailing tab is part of the expected output.
fn technical_proficiency(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let paragraph = group(caps, 0).trim();
    Some(vec![Field::narrative(
        "Technical Proficiency",
        format!("{paragraph}\t"),
    )])
}
