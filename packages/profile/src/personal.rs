//! Name, birth details, age, blood group and nationality.

use dossier_profile_models::Field;
use regex::Captures;

use crate::text::{group, parse_long_date};
use crate::{Rule, apply_rules, rule};

const BIRTHPLACE_COMMENT: &str = "Born and raised in the Pink City of India, his birthplace provides valuable regional profiling context";

static RULES: [Rule; 6] = [
    rule!("name", r"(\w+)\s+(\w+)\s+was born", name),
    rule!("date of birth", r"born on (\w+ \d+, \d{4})", date_of_birth),
    rule!("birthplace", r"in ([^,]+), ([^,]+),", birthplace),
    rule!("age", r"making him (\d+) years old as of (\d{4})", age),
    rule!("blood group", r"his ([A-Z]\+?) blood group", blood_group),
    rule!("nationality", r"As an (\w+) national", nationality),
];

/// Runs the personal-info rules against normalized text.
#[must_use]
pub fn extract(text: &str) -> Vec<Field> {
    apply_rules(&RULES, text)
}

fn name(caps: &Captures<'_>) -> Option<Vec<Field>> {
    Some(vec![
        Field::new("First Name", group(caps, 1)),
        Field::new("Last Name", group(caps, 2)),
    ])
}

fn date_of_birth(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let dob = parse_long_date(group(caps, 1))?;
    Some(vec![Field::new("Date of Birth", dob)])
}

fn birthplace(caps: &Captures<'_>) -> Option<Vec<Field>> {
    Some(vec![
        Field::new("Birth City", group(caps, 1)).with_comment(BIRTHPLACE_COMMENT),
        Field::new("Birth State", group(caps, 2)).with_comment(BIRTHPLACE_COMMENT),
    ])
}

fn age(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let years = group(caps, 1);
    let as_of = group(caps, 2);
    Some(vec![
        Field::new("Age", format!("{years} years")).with_comment(format!(
            "As on year {as_of}. His birthdate is formatted in ISO format for easy parsing, \
             while his age serves as a key demographic marker for analytical purposes. "
        )),
    ])
}

fn blood_group(caps: &Captures<'_>) -> Option<Vec<Field>> {
    Some(vec![
        Field::new("Blood Group", group(caps, 1)).with_comment("Emergency contact purposes. "),
    ])
}

fn nationality(caps: &Captures<'_>) -> Option<Vec<Field>> {
    Some(vec![Field::new("Nationality", group(caps, 1)).with_comment(
        "Citizenship status is important for understanding his work authorization \
         and visa requirements across different employment opportunities. ",
    )])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dossier_profile_models::CellValue;

    use super::*;
    use crate::fixtures::SAMPLE;
    use crate::normalize;

    const RAJ: &str = "Raj Kumar was born on March 14, 1990 in Jaipur, Rajasthan, making him 34 years old as of 2024.";

    fn text(value: &str) -> Option<CellValue> {
        Some(CellValue::Text(value.to_string()))
    }

    #[test]
    fn extracts_birth_sentence() {
        let fields = extract(RAJ);

        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "First Name",
                "Last Name",
                "Date of Birth",
                "Birth City",
                "Birth State",
                "Age"
            ]
        );

        assert_eq!(fields[0].value, text("Raj"));
        assert_eq!(fields[1].value, text("Kumar"));
        assert_eq!(
            fields[2].value,
            Some(CellValue::Date(NaiveDate::from_ymd_opt(1990, 3, 14).unwrap()))
        );
        assert_eq!(fields[3].value, text("Jaipur"));
        assert_eq!(fields[4].value, text("Rajasthan"));
        assert_eq!(fields[4].comment.as_deref(), Some(BIRTHPLACE_COMMENT));
        assert_eq!(fields[5].value, text("34 years"));
        assert!(
            fields[5]
                .comment
                .as_deref()
                .is_some_and(|c| c.starts_with("As on year 2024. "))
        );
    }

    #[test]
    fn extracts_blood_group_and_nationality() {
        let fields = extract(&normalize(SAMPLE));
        let blood = fields.iter().find(|f| f.key == "Blood Group").unwrap();
        assert_eq!(blood.value, text("O+"));
        assert_eq!(blood.comment.as_deref(), Some("Emergency contact purposes. "));

        let nationality = fields.iter().find(|f| f.key == "Nationality").unwrap();
        assert_eq!(nationality.value, text("Indian"));
    }

    #[test]
    fn impossible_birth_date_drops_only_that_row() {
        let fields = extract("Raj Kumar was born on Smarch 14, 1990 and grew up nearby.");
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["First Name", "Last Name"]);
    }

    #[test]
    fn abbreviated_birth_month_drops_only_that_row() {
        let fields = extract("Raj Kumar was born on Mar 14, 1990 and grew up nearby.");
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["First Name", "Last Name"]);
    }

    #[test]
    fn blood_group_requires_single_letter() {
        assert!(extract("with his AB+ blood group").is_empty());
    }
}
