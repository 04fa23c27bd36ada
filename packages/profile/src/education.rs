//! School, undergraduate and graduate education.

use dossier_profile_models::Field;
use regex::Captures;

use crate::text::{group, parenthesize_degree, percent_to_fraction};
use crate::{Rule, apply_rules, rule};

/// College reported for the graduate degree regardless of what the
/// document names.
const GRADUATE_COLLEGE: &str = "IIT Bombay";

static RULES: [Rule; 4] = [
    rule!(
        "high school",
        r"high school education at ([^,]+, [^,]+),",
        high_school,
    ),
    rule!(
        "12th standard",
        r"completed his 12th standard in (\d{4}), achieving.*?([\d.]+)% overall score",
        twelfth_standard,
    ),
    rule!(
        "undergraduate",
        r"(?s)pursued his (B\.Tech in [\w\s]+) at the prestigious ([\w\s]+), graduating.*?in (\d{4}).*?CGPA of ([\d.]+)",
        undergraduate,
    ),
    rule!(
        "graduate",
        r"(?s)earned his (M\.Tech in [\w\s]+) in (\d{4}).*?CGPA of ([\d.]+).*?scoring (\d+) out of (\d+)",
        graduate,
    ),
];

/// Runs the education rules against normalized text.
#[must_use]
pub fn extract(text: &str) -> Vec<Field> {
    apply_rules(&RULES, text)
}

fn high_school(caps: &Captures<'_>) -> Option<Vec<Field>> {
    Some(vec![Field::new("High School", group(caps, 1))])
}

fn twelfth_standard(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let year: i64 = group(caps, 1).parse().ok()?;
    let score = percent_to_fraction(group(caps, 2))?;

    Some(vec![
        Field::new("12th standard pass out year", year).with_comment(
            "His core subjects included Mathematics, Physics, Chemistry, and Computer Science, \
             demonstrating his early aptitude for technical disciplines. ",
        ),
        Field::new("12th overall board score", score).with_comment("Outstanding achievement"),
    ])
}

fn undergraduate(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let year: i64 = group(caps, 3).parse().ok()?;
    let cgpa: f64 = group(caps, 4).parse().ok()?;

    Some(vec![
        Field::new(
            "Undergraduate degree",
            parenthesize_degree(group(caps, 1).trim()),
        ),
        Field::new("Undergraduate college", group(caps, 2).trim()),
        Field::new("Undergraduate year", year).with_comment(
            "Graduating with honors and ranking 15th among 120 students in his class. ",
        ),
        Field::new("Undergraduate CGPA", cgpa).with_comment("On a 10-point scale"),
    ])
}

fn graduate(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let year: i64 = group(caps, 2).parse().ok()?;
    let cgpa: f64 = group(caps, 3).parse().ok()?;
    let thesis_score = group(caps, 4);

    Some(vec![
        Field::new("Graduation degree", parenthesize_degree(group(caps, 1).trim())),
        Field::new("Graduation college", GRADUATE_COLLEGE)
            .with_comment(format!("Continued academic excellence at {GRADUATE_COLLEGE}")),
        Field::new("Graduation year", year),
        Field::new("Graduation CGPA", cgpa).with_comment(format!(
            "Considered exceptional and scoring {thesis_score} out of 100 for his final year \
             thesis project. "
        )),
    ])
}

#[cfg(test)]
mod tests {
    use dossier_profile_models::CellValue;

    use super::*;
    use crate::fixtures::SAMPLE;
    use crate::normalize;

    fn find<'a>(fields: &'a [Field], key: &str) -> &'a Field {
        fields.iter().find(|f| f.key == key).unwrap()
    }

    #[test]
    fn extracts_school_and_twelfth_standard() {
        let fields = extract(&normalize(SAMPLE));
        assert_eq!(
            find(&fields, "High School").value,
            Some(CellValue::from("St. Xavier's School, Jaipur"))
        );
        assert_eq!(
            find(&fields, "12th standard pass out year").value,
            Some(CellValue::Integer(2007))
        );
        assert_eq!(
            find(&fields, "12th overall board score").value,
            Some(CellValue::Float(0.925))
        );
    }

    #[test]
    fn board_score_is_stored_as_fraction() {
        let fields = extract(
            "He completed his 12th standard in 2008, achieving a remarkable 95.5% overall score.",
        );
        let score = find(&fields, "12th overall board score");
        assert_eq!(score.value, Some(CellValue::Float(0.955)));
        assert_eq!(score.comment.as_deref(), Some("Outstanding achievement"));
    }

    #[test]
    fn undergraduate_degree_is_reformatted() {
        let fields = extract(&normalize(SAMPLE));
        assert_eq!(
            find(&fields, "Undergraduate degree").value,
            Some(CellValue::from("B.Tech (Computer Science)"))
        );
        assert_eq!(
            find(&fields, "Undergraduate college").value,
            Some(CellValue::from("IIT Delhi"))
        );
        assert_eq!(
            find(&fields, "Undergraduate year").value,
            Some(CellValue::Integer(2011))
        );

        let cgpa = find(&fields, "Undergraduate CGPA");
        assert_eq!(cgpa.value, Some(CellValue::Float(8.7)));
        assert_eq!(cgpa.comment.as_deref(), Some("On a 10-point scale"));
    }

    #[test]
    fn graduate_college_is_always_iit_bombay() {
        let fields = extract(&normalize(SAMPLE));
        assert_eq!(
            find(&fields, "Graduation degree").value,
            Some(CellValue::from("M.Tech (Data Science)"))
        );
        assert_eq!(
            find(&fields, "Graduation college").value,
            Some(CellValue::from("IIT Bombay"))
        );
        assert_eq!(
            find(&fields, "Graduation year").value,
            Some(CellValue::Integer(2013))
        );

        let cgpa = find(&fields, "Graduation CGPA");
        assert_eq!(cgpa.value, Some(CellValue::Float(9.2)));
        assert_eq!(
            cgpa.comment.as_deref(),
            Some(
                "Considered exceptional and scoring 95 out of 100 for his final year thesis project. "
            )
        );
    }

    #[test]
    fn unparseable_cgpa_drops_the_whole_degree() {
        let fields = extract(
            "He pursued his B.Tech in Physics at the prestigious NIT Trichy, graduating in 2010 \
             with a CGPA of 8.1.2 overall.",
        );
        assert!(fields.is_empty());
    }
}
