//! The four fixed certification slots.
//!
//! Each slot is matched independently; a missing certification leaves a
//! gap in the numbering of the `Certifications N` labels but not in the
//! row indices.

use dossier_profile_models::Field;
use regex::Captures;

use crate::text::group;
use crate::{Rule, apply_rules, rule};

const PORTFOLIO_TAIL: &str = "Certifications complement his practical experience and demonstrate his expertise across multiple technology platforms. ";

static RULES: [Rule; 4] = [
    rule!(
        "aws",
        r"AWS Solutions Architect exam in (\d{4}) with a score of (\d+) out of (\d+)",
        aws,
    ),
    rule!(
        "azure",
        r"Azure Data Engineer certification in (\d{4}) with (\d+) points",
        azure,
    ),
    rule!(
        "pmp",
        r"Project Management Professional certification, obtained in (\d{4})",
        pmp,
    ),
    rule!(
        "safe",
        r"SAFe Agilist certification earned him an outstanding (\d+)% score",
        safe,
    ),
];

/// Runs the certification rules against normalized text.
#[must_use]
pub fn extract(text: &str) -> Vec<Field> {
    apply_rules(&RULES, text)
}

fn aws(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let (year, score, total) = (group(caps, 1), group(caps, 2), group(caps, 3));
    Some(vec![
        Field::new("Certifications 1", "AWS Solutions Architect ").with_comment(format!(
            "Vijay's commitment to continuous learning is evident through his impressive \
             certification scores. He passed the AWS Solutions Architect exam in {year} with a \
             score of {score} out of {total}"
        )),
    ])
}

fn azure(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let (year, points) = (group(caps, 1), group(caps, 2));
    Some(vec![
        Field::new("Certifications 2", "Azure Data Engineer")
            .with_comment(format!("Pursued in the year {year} with {points} points. ")),
    ])
}

fn pmp(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let year = group(caps, 1);
    Some(vec![
        Field::new(
            "Certifications 3",
            "Project Management Professional certification",
        )
        .with_comment(format!(
            "Obtained in {year}, was achieved with an \"Above Target\" rating from PMI, These \
             certifications complement his practical experience and demonstrate his expertise \
             across multiple technology platforms. "
        )),
    ])
}

fn safe(caps: &Captures<'_>) -> Option<Vec<Field>> {
    let score = group(caps, 1);
    Some(vec![
        Field::new("Certifications 4", "SAFe Agilist certification").with_comment(format!(
            "Earned him an outstanding {score}% score. {PORTFOLIO_TAIL}"
        )),
    ])
}

#[cfg(test)]
mod tests {
    use dossier_profile_models::CellValue;

    use super::*;
    use crate::fixtures::SAMPLE;
    use crate::normalize;

    #[test]
    fn extracts_all_four_slots() {
        let fields = extract(&normalize(SAMPLE));

        let pairs: Vec<(&str, String)> = fields
            .iter()
            .map(|f| {
                (
                    f.key.as_str(),
                    f.value.as_ref().map(ToString::to_string).unwrap_or_default(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Certifications 1", "AWS Solutions Architect ".to_string()),
                ("Certifications 2", "Azure Data Engineer".to_string()),
                (
                    "Certifications 3",
                    "Project Management Professional certification".to_string()
                ),
                ("Certifications 4", "SAFe Agilist certification".to_string()),
            ]
        );
    }

    #[test]
    fn comments_embed_captured_numbers() {
        let fields = extract(&normalize(SAMPLE));
        assert!(
            fields[0]
                .comment
                .as_deref()
                .is_some_and(|c| c.ends_with("exam in 2019 with a score of 920 out of 1000"))
        );
        assert_eq!(
            fields[1].comment.as_deref(),
            Some("Pursued in the year 2021 with 875 points. ")
        );
        assert!(
            fields[2]
                .comment
                .as_deref()
                .is_some_and(|c| c.starts_with("Obtained in 2022, was achieved"))
        );
        assert!(
            fields[3]
                .comment
                .as_deref()
                .is_some_and(|c| c.starts_with("Earned him an outstanding 98% score. "))
        );
    }

    #[test]
    fn slots_match_independently() {
        let fields = extract("She holds the Azure Data Engineer certification in 2020 with 900 points.");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "Certifications 2");
        assert_eq!(fields[0].value, Some(CellValue::from("Azure Data Engineer")));
    }

    #[test]
    fn no_certification_phrases_yield_no_rows() {
        assert!(extract("He has no formal certifications.").is_empty());
    }
}
