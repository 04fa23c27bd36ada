#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pattern-based field extraction from narrative profile text.
//!
//! The extractor is a fixed registry of rules, each pairing one regular
//! expression with a function that turns its captures into [`Field`]s.
//! Rules are grouped by [`Section`] and run in a fixed order against one
//! shared, whitespace-normalized string:
//!
//! 1. [`personal`]
//! 2. [`professional`]
//! 3. [`education`]
//! 4. [`certifications`]
//! 5. [`skills`]
//!
//! Every rule fails softly. A pattern that does not match, or that
//! matches but captures something that will not parse, contributes no
//! rows and raises no error. The rules are tied to the phrasing of a
//! single document template and make no attempt to generalize.

pub mod certifications;
pub mod education;
pub mod personal;
pub mod professional;
pub mod skills;
pub mod text;

use std::sync::LazyLock;

use dossier_profile_models::{Field, Row, RowAccumulator, Section};
use regex::{Captures, Regex};

pub use text::normalize;

/// A single pattern and the function that builds fields from its match.
///
/// `build` returns `None` when a captured value cannot be converted (for
/// example an impossible date); the rule then yields nothing.
pub struct Rule {
    /// Short name used in diagnostics.
    pub name: &'static str,
    pattern: LazyLock<Regex>,
    build: fn(&Captures<'_>) -> Option<Vec<Field>>,
}

impl Rule {
    /// Applies the rule to normalized text.
    #[must_use]
    pub fn apply(&self, text: &str) -> Vec<Field> {
        let Some(caps) = self.pattern.captures(text) else {
            log::debug!("Rule '{}' did not match", self.name);
            return Vec::new();
        };

        (self.build)(&caps).unwrap_or_else(|| {
            log::debug!(
                "Rule '{}' matched but its captures did not convert",
                self.name
            );
            Vec::new()
        })
    }
}

/// Declares a [`Rule`] with a lazily compiled pattern.
macro_rules! rule {
    ($name:literal, $pattern:literal, $build:expr $(,)?) => {
        $crate::Rule {
            name: $name,
            pattern: ::std::sync::LazyLock::new(|| {
                ::regex::Regex::new($pattern).expect("valid regex")
            }),
            build: $build,
        }
    };
}
pub(crate) use rule;

/// Applies each rule in order and concatenates their fields.
#[must_use]
pub fn apply_rules(rules: &[Rule], text: &str) -> Vec<Field> {
    rules.iter().flat_map(|rule| rule.apply(text)).collect()
}

/// An extractor: the rules of one [`Section`].
pub struct Extractor {
    /// Which section the extractor covers.
    pub section: Section,
    /// Runs the section's rules against normalized text.
    pub extract: fn(&str) -> Vec<Field>,
}

/// All extractors in execution order.
pub const EXTRACTORS: &[Extractor] = &[
    Extractor {
        section: Section::Personal,
        extract: personal::extract,
    },
    Extractor {
        section: Section::Professional,
        extract: professional::extract,
    },
    Extractor {
        section: Section::Education,
        extract: education::extract,
    },
    Extractor {
        section: Section::Certifications,
        extract: certifications::extract,
    },
    Extractor {
        section: Section::TechnicalSkills,
        extract: skills::extract,
    },
];

/// Runs every extractor against already-normalized text and returns the
/// unnumbered fields in extractor order.
#[must_use]
pub fn extract_fields(normalized: &str) -> Vec<Field> {
    EXTRACTORS
        .iter()
        .flat_map(|extractor| {
            let fields = (extractor.extract)(normalized);
            log::debug!(
                "{} extractor produced {} field(s)",
                extractor.section,
                fields.len()
            );
            fields
        })
        .collect()
}

/// Normalizes `raw_text` and extracts every field into numbered rows.
///
/// Pure function of its input: a fresh accumulator is used for each call
/// and text that matches no rule yields an empty list.
#[must_use]
pub fn extract_all(raw_text: &str) -> Vec<Row> {
    let normalized = normalize(raw_text);

    let mut rows = RowAccumulator::new();
    rows.extend(extract_fields(&normalized));

    log::debug!("Extracted {} row(s)", rows.len());

    rows.into_rows()
}
