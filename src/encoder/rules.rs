//! The fixed label vocabulary of the heart-health survey.
//!
//! Each [`ColumnRule`] scopes one label → code table to one named column.
//! [`heart_rules`] returns them in the order they are applied.

use serde::Serialize;

/// Integer code written in place of a label.
pub type Code = i32;

/// Whether a rule's column must exist in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Absence is a `MissingColumn` error.
    Required,
    /// Absence skips the rule.
    Optional,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnRule {
    pub column: &'static str,
    pub presence: Presence,
    pub labels: &'static [(&'static str, Code)],
}

impl ColumnRule {
    pub fn code_for(&self, label: &str) -> Option<Code> {
        self.labels
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, code)| *code)
    }

    /// `(label for 1, label for 0)` when the rule is a plain two-label flag.
    pub fn binary_labels(&self) -> Option<(&'static str, &'static str)> {
        match *self.labels {
            [(one, 1), (zero, 0)] | [(zero, 0), (one, 1)] => Some((one, zero)),
            _ => None,
        }
    }

    /// Distinct codes this rule can produce, ascending.
    pub fn codes(&self) -> Vec<Code> {
        let mut codes: Vec<Code> = self.labels.iter().map(|(_, code)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

pub const SEX: &str = "Sex";
pub const SMOKER_STATUS: &str = "SmokerStatus";
pub const HAD_DIABETES: &str = "HadDiabetes";
pub const E_CIGARETTE_USAGE: &str = "ECigaretteUsage";
pub const RACE_ETHNICITY_CATEGORY: &str = "RaceEthnicityCategory";
pub const AGE_CATEGORY: &str = "AgeCategory";
pub const COVID_POS: &str = "CovidPos";

/// Yes/No clinical indicators that older exports of the survey may omit.
pub const YES_NO_COLUMNS: [&str; 6] = [
    "HadDepressiveDisorder",
    "HadHeartAttack",
    "HadAngina",
    "HadStroke",
    "HadCOPD",
    "AlcoholDrinkers",
];

pub const SEX_LABELS: &[(&str, Code)] = &[("Female", 0), ("Male", 1)];

pub const YES_NO_LABELS: &[(&str, Code)] = &[("Yes", 1), ("No", 0)];

pub const SMOKER_STATUS_LABELS: &[(&str, Code)] = &[
    ("Never smoked", 0),
    ("Former smoker", 1),
    ("Current smoker - now smokes some days", 2),
    ("Current smoker - now smokes every day", 3),
];

pub const HAD_DIABETES_LABELS: &[(&str, Code)] = &[
    ("No", 0),
    ("Yes", 1),
    ("No, pre-diabetes or borderline diabetes", 2),
    ("Yes, but only during pregnancy (female)", 3),
];

pub const E_CIGARETTE_USAGE_LABELS: &[(&str, Code)] = &[
    ("Never used e-cigarettes in my entire life", 0),
    ("Not at all (right now)", 1),
    ("Use them every day", 2),
    ("Use them some days", 3),
];

pub const RACE_ETHNICITY_CATEGORY_LABELS: &[(&str, Code)] = &[
    ("White only, Non-Hispanic", 0),
    ("Black only, Non-Hispanic", 1),
    ("Other race only, Non-Hispanic", 2),
    ("Multiracial, Non-Hispanic", 3),
    ("Hispanic", 4),
];

// 5-year bands, youngest first.
pub const AGE_CATEGORY_LABELS: &[(&str, Code)] = &[
    ("Age 18 to 24", 0),
    ("Age 25 to 29", 1),
    ("Age 30 to 34", 2),
    ("Age 35 to 39", 3),
    ("Age 40 to 44", 4),
    ("Age 45 to 49", 5),
    ("Age 50 to 54", 6),
    ("Age 55 to 59", 7),
    ("Age 60 to 64", 8),
    ("Age 65 to 69", 9),
    ("Age 70 to 74", 10),
    ("Age 75 to 79", 11),
    ("Age 80 or older", 12),
];

// Both positive results collapse to 1.
pub const COVID_POS_LABELS: &[(&str, Code)] = &[
    ("Yes", 1),
    (
        "Tested positive using home test without a health professional",
        1,
    ),
    ("No", 0),
];

const fn required(column: &'static str, labels: &'static [(&'static str, Code)]) -> ColumnRule {
    ColumnRule {
        column,
        presence: Presence::Required,
        labels,
    }
}

/// The full rule list in processing order: sex, the yes/no batch, smoker
/// status, diabetes, e-cigarette usage, race, age, covid.
pub fn heart_rules() -> Vec<ColumnRule> {
    let mut rules = vec![required(SEX, SEX_LABELS)];
    rules.extend(YES_NO_COLUMNS.into_iter().map(|column| ColumnRule {
        column,
        presence: Presence::Optional,
        labels: YES_NO_LABELS,
    }));
    rules.extend([
        required(SMOKER_STATUS, SMOKER_STATUS_LABELS),
        required(HAD_DIABETES, HAD_DIABETES_LABELS),
        required(E_CIGARETTE_USAGE, E_CIGARETTE_USAGE_LABELS),
        required(RACE_ETHNICITY_CATEGORY, RACE_ETHNICITY_CATEGORY_LABELS),
        required(AGE_CATEGORY, AGE_CATEGORY_LABELS),
        required(COVID_POS, COVID_POS_LABELS),
    ]);
    rules
}

/// Looks up the rule for `column`, if any.
pub fn rule_for(column: &str) -> Option<ColumnRule> {
    heart_rules().into_iter().find(|rule| rule.column == column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let columns: Vec<&str> = heart_rules().iter().map(|r| r.column).collect();
        assert_eq!(
            columns,
            vec![
                "Sex",
                "HadDepressiveDisorder",
                "HadHeartAttack",
                "HadAngina",
                "HadStroke",
                "HadCOPD",
                "AlcoholDrinkers",
                "SmokerStatus",
                "HadDiabetes",
                "ECigaretteUsage",
                "RaceEthnicityCategory",
                "AgeCategory",
                "CovidPos",
            ]
        );
    }

    #[test]
    fn test_only_yes_no_batch_is_optional() {
        for rule in heart_rules() {
            let expected = if YES_NO_COLUMNS.contains(&rule.column) {
                Presence::Optional
            } else {
                Presence::Required
            };
            assert_eq!(rule.presence, expected, "presence of {}", rule.column);
        }
    }

    #[test]
    fn test_age_bands_are_contiguous() {
        let codes: Vec<Code> = AGE_CATEGORY_LABELS.iter().map(|(_, c)| *c).collect();
        assert_eq!(codes, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_covid_codes_collapse() {
        let rule = rule_for(COVID_POS).expect("covid rule");
        assert_eq!(rule.codes(), vec![0, 1]);
        assert_eq!(
            rule.code_for("Tested positive using home test without a health professional"),
            Some(1)
        );
        assert_eq!(rule.code_for("Unknown"), None);
    }

    #[test]
    fn test_binary_labels() {
        let stroke = rule_for("HadStroke").expect("stroke rule");
        assert_eq!(stroke.binary_labels(), Some(("Yes", "No")));
        let sex = rule_for(SEX).expect("sex rule");
        assert_eq!(sex.binary_labels(), Some(("Male", "Female")));
        let covid = rule_for(COVID_POS).expect("covid rule");
        assert_eq!(covid.binary_labels(), None);
    }

    #[test]
    fn test_labels_are_unique_per_rule() {
        for rule in heart_rules() {
            let mut labels: Vec<&str> = rule.labels.iter().map(|(l, _)| *l).collect();
            let before = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), before, "duplicate label in {}", rule.column);
        }
    }
}
