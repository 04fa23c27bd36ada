//! First, current and previous professional roles.
//!
//! The role sentences are long and routinely wrap across lines, so every
//! pattern here lets `.` span the whole normalized string.

use dossier_profile_models::Field;
use regex::Captures;

use crate::text::{group, parse_grouped_int, parse_long_date};
use crate::{Rule, apply_rules, rule};

const SALARY_PROGRESSION_COMMENT: &str = "This salary progression from his starting compensation to his current peak salary of 2,800,000 INR represents a substantial eight- fold increase over his twelve-year career span. ";

static RULES: [Rule; 3] = [
    rule!(
        "first role",
        r"(?s)professional journey began on (\w+ \d+, \d{4}).*?as a ([\w\s]+) with an annual salary of ([\d,]+) (\w+)",
        first_role,
    ),
    rule!(
        "current role",
        r"(?s)current role at ([\w\s]+) beginning on (\w+ \d+, \d{4}).*?serves as a ([\w\s]+) earning ([\d,]+) (\w+)",
        current_role,
    ),
    rule!(
        "previous role",
        r"(?s)worked at ([\w\s]+) from (\w+ \d+, \d{4}), to (\d{4}).*?starting as a ([\w\s]+) and earning a promotion in (\d{4})",
        previous_role,
    ),
];

/// Runs the professional-info rules against normalized text.
#[must_use]
pub fn extract(text: &str) -> Vec<Field> {
    apply_rules(&RULES, text)
}

fn first_role(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let joined = parse_long_date(group(caps, 1))?;
    let salary = parse_grouped_int(group(caps, 3))?;

    Some(vec![
        Field::new("Joining Date of first professional role", joined),
        Field::new(
            "Designation of first professional role",
            group(caps, 2).trim(),
        ),
        Field::new("Salary of first professional role", salary),
        Field::new("Salary currency of first professional role", group(caps, 4)),
    ])
}

fn current_role(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let joined = parse_long_date(group(caps, 2))?;
    let salary = parse_grouped_int(group(caps, 4))?;

    Some(vec![
        Field::new("Current Organization", group(caps, 1).trim()),
        Field::new("Current Joining Date", joined),
        Field::new("Current Designation", group(caps, 3).trim()),
        Field::new("Current Salary", salary).with_comment(SALARY_PROGRESSION_COMMENT),
        Field::new("Current Salary Currency", group(caps, 5)),
    ])
}

fn previous_role(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let joined = parse_long_date(group(caps, 2))?;
    let end_year: i64 = group(caps, 3).parse().ok()?;

    let organization = strip_solutions(group(caps, 1).trim());
    let designation = group(caps, 4).trim();
    let promoted = group(caps, 5);

    Some(vec![
        Field::new("Previous Organization", organization),
        Field::new("Previous Joining Date", joined),
        Field::new("Previous end year", end_year),
        Field::new("Previous Starting Designation", format!("{designation} "))
            .with_comment(format!("Promoted in {promoted}")),
    ])
}

/// Drops the " Solutions" suffix the previous employer's name is reported
/// without.
fn strip_solutions(organization: &str) -> String {
    if organization.contains("Solutions") {
        organization.replace(" Solutions", "")
    } else {
        organization.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dossier_profile_models::CellValue;

    use super::*;
    use crate::fixtures::SAMPLE;
    use crate::normalize;

    fn value<'a>(fields: &'a [Field], key: &str) -> Option<&'a CellValue> {
        fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.value.as_ref())
    }

    fn date(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn extracts_all_three_roles_in_rule_order() {
        let fields = extract(&normalize(SAMPLE));
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0].key, "Joining Date of first professional role");
        assert_eq!(fields[4].key, "Current Organization");
        assert_eq!(fields[9].key, "Previous Organization");
    }

    #[test]
    fn first_role_salary_is_comma_stripped() {
        let fields = extract(&normalize(SAMPLE));
        assert_eq!(
            value(&fields, "Joining Date of first professional role"),
            Some(&date(2012, 7, 1))
        );
        assert_eq!(
            value(&fields, "Designation of first professional role"),
            Some(&CellValue::from("Junior Developer"))
        );
        assert_eq!(
            value(&fields, "Salary of first professional role"),
            Some(&CellValue::Integer(350_000))
        );
        assert_eq!(
            value(&fields, "Salary currency of first professional role"),
            Some(&CellValue::from("INR"))
        );
    }

    #[test]
    fn current_role_carries_progression_comment() {
        let fields = extract(&normalize(SAMPLE));
        assert_eq!(
            value(&fields, "Current Organization"),
            Some(&CellValue::from("Tech Mahindra"))
        );
        assert_eq!(
            value(&fields, "Current Joining Date"),
            Some(&date(2020, 6, 1))
        );
        assert_eq!(
            value(&fields, "Current Designation"),
            Some(&CellValue::from("Data Scientist"))
        );

        let salary = fields.iter().find(|f| f.key == "Current Salary").unwrap();
        assert_eq!(salary.value, Some(CellValue::Integer(2_800_000)));
        assert_eq!(salary.comment.as_deref(), Some(SALARY_PROGRESSION_COMMENT));
    }

    #[test]
    fn previous_role_strips_solutions_suffix() {
        let fields = extract(
            "He worked at Acme Solutions from January 5, 2014, to 2019, starting as a \
             Analyst and earning a promotion in 2016.",
        );
        assert_eq!(
            value(&fields, "Previous Organization"),
            Some(&CellValue::from("Acme"))
        );
        assert_eq!(
            value(&fields, "Previous Joining Date"),
            Some(&date(2014, 1, 5))
        );
        assert_eq!(
            value(&fields, "Previous end year"),
            Some(&CellValue::Integer(2019))
        );

        let designation = fields
            .iter()
            .find(|f| f.key == "Previous Starting Designation")
            .unwrap();
        assert_eq!(designation.value, Some(CellValue::from("Analyst ")));
        assert_eq!(designation.comment.as_deref(), Some("Promoted in 2016"));
    }

    #[test]
    fn organizations_without_suffix_are_untouched() {
        assert_eq!(strip_solutions("Infosys"), "Infosys");
        assert_eq!(strip_solutions("Wipro Solutions"), "Wipro");
    }

    #[test]
    fn salary_beyond_i64_drops_the_whole_first_role() {
        let fields = extract(
            "professional journey began on July 1, 2012, as a Dev with an annual salary of \
             99,999,999,999,999,999,999 INR",
        );
        assert!(fields.is_empty());
    }

    #[test]
    fn missing_roles_yield_nothing() {
        assert!(extract("He has never held a job.").is_empty());
    }
}
