#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Row and cell value types for extracted profile tables.
//!
//! Extraction rules produce unnumbered [`Field`]s. The [`RowAccumulator`]
//! numbers them into [`Row`]s in the order they arrive, which is the
//! order the spreadsheet is written in.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

/// The group of rules a field was extracted by.
///
/// Declaration order is execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    /// Name, birth details, age, blood group, nationality
    Personal,
    /// First, current and previous roles
    Professional,
    /// School, undergraduate and graduate studies
    Education,
    /// Fixed certification slots
    Certifications,
    /// Free-text technical proficiency paragraph
    TechnicalSkills,
}

impl Section {
    /// All sections in extraction order.
    pub const ALL: &[Self] = &[
        Self::Personal,
        Self::Professional,
        Self::Education,
        Self::Certifications,
        Self::TechnicalSkills,
    ];
}

/// A typed value in the `Value` column.
///
/// Serialized untagged so JSON consumers see plain strings and numbers.
/// Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Whole number (salaries, years).
    Integer(i64),
    /// Fractional number (scores, CGPA).
    Float(f64),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Free text.
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// An extracted field that has not been numbered yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Literal label, e.g. `"Date of Birth"`.
    pub key: String,
    /// Extracted value, absent for narrative-only fields.
    pub value: Option<CellValue>,
    /// Annotation written to the `Comments` column.
    pub comment: Option<String>,
}

impl Field {
    /// Creates a field with a value and no comment.
    #[must_use]
    pub fn new(key: &str, value: impl Into<CellValue>) -> Self {
        Self {
            key: key.to_string(),
            value: Some(value.into()),
            comment: None,
        }
    }

    /// Creates a value-less field carrying only a comment.
    #[must_use]
    pub fn narrative(key: &str, comment: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: None,
            comment: Some(comment.into()),
        }
    }

    /// Attaches a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// One numbered line of the output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based position in the table.
    pub index: usize,
    /// Literal label.
    pub key: String,
    /// Extracted value.
    pub value: Option<CellValue>,
    /// Annotation.
    pub comment: Option<String>,
}

/// Append-only, auto-numbered list of [`Row`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowAccumulator {
    rows: Vec<Row>,
}

impl RowAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a row, assigning it the next index, and returns it.
    pub fn append(
        &mut self,
        key: impl Into<String>,
        value: Option<CellValue>,
        comment: Option<String>,
    ) -> &Row {
        let index = self.rows.len() + 1;
        self.rows.push(Row {
            index,
            key: key.into(),
            value,
            comment,
        });
        &self.rows[index - 1]
    }

    /// Appends an extracted field.
    pub fn push_field(&mut self, field: Field) -> &Row {
        self.append(field.key, field.value, field.comment)
    }

    /// Appends every field in order.
    pub fn extend(&mut self, fields: impl IntoIterator<Item = Field>) {
        for field in fields {
            self.push_field(field);
        }
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the accumulator, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_numbers_rows_from_one() {
        let mut acc = RowAccumulator::new();
        assert_eq!(acc.append("First Name", Some("Raj".into()), None).index, 1);
        assert_eq!(acc.append("Last Name", Some("Kumar".into()), None).index, 2);
        acc.extend([
            Field::new("Age", "34 years").with_comment("As on year 2024. "),
            Field::narrative("Technical Proficiency", "Rust\t"),
        ]);

        let indices: Vec<usize> = acc.all().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(acc.all()[3].value, None);
        assert_eq!(acc.all()[3].comment.as_deref(), Some("Rust\t"));
    }

    #[test]
    fn new_accumulator_is_empty() {
        let acc = RowAccumulator::new();
        assert!(acc.is_empty());
        assert!(acc.into_rows().is_empty());
    }

    #[test]
    fn cell_values_display_naturally() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 14).unwrap();
        assert_eq!(CellValue::from(date).to_string(), "1990-03-14");
        assert_eq!(CellValue::from(2_800_000_i64).to_string(), "2800000");
        assert_eq!(CellValue::from(0.955).to_string(), "0.955");
        assert_eq!(CellValue::from("INR").to_string(), "INR");
    }

    #[test]
    fn cell_values_serialize_untagged() {
        let date = NaiveDate::from_ymd_opt(2012, 7, 1).unwrap();
        let json = serde_json::to_string(&vec![
            CellValue::from(date),
            CellValue::from(350_000_i64),
            CellValue::from(8.7),
            CellValue::from("Data Scientist"),
        ])
        .unwrap();
        assert_eq!(json, r#"["2012-07-01",350000,8.7,"Data Scientist"]"#);
    }

    #[test]
    fn section_display_matches_serde_names() {
        assert_eq!(Section::TechnicalSkills.to_string(), "TECHNICAL_SKILLS");
        assert_eq!(Section::ALL.first(), Some(&Section::Personal));
    }
}
