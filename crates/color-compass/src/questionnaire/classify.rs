use serde::Serialize;

use super::domain::{Language, ScoreVector};
use super::locale::locale;
use super::scoring::{rank, PercentageResult};

/// Below this top percentage no colour dominates.
pub const BALANCED_CEILING: f64 = 30.0;
pub const PRIMARY_DOMINANT_THRESHOLD: f64 = 38.0;
pub const SECONDARY_DOMINANT_THRESHOLD: f64 = 30.0;
/// Maximum gap for the runner-up to share dominance.
pub const CLOSE_PAIR_THRESHOLD: f64 = 10.0;

pub const NOT_DETERMINED_CODE: &str = "not_determined";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Nothing was scored.
    Undetermined,
    Balanced,
    Profiled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeResult {
    pub kind: ProfileKind,
    pub type_code: String,
    pub is_balanced: bool,
}

impl TypeResult {
    fn undetermined() -> Self {
        Self {
            kind: ProfileKind::Undetermined,
            type_code: NOT_DETERMINED_CODE.to_string(),
            is_balanced: false,
        }
    }

    /// Display label such as `Type: Balanced (dfbl)` or `Typ: D-f-b-l`.
    pub fn label(&self, language: Language) -> String {
        let text = locale(language);
        match self.kind {
            ProfileKind::Undetermined => {
                format!("{} {}", text.type_prefix, text.type_not_determined)
            }
            ProfileKind::Balanced => format!(
                "{} {} {}",
                text.type_prefix, text.balanced_type_label, self.type_code
            ),
            ProfileKind::Profiled => format!("{} {}", text.type_prefix, self.type_code),
        }
    }
}

pub fn classify(scores: &ScoreVector) -> TypeResult {
    classify_ranked(&rank(scores), scores.total())
}

/// Classify percentages already ranked highest first.
pub fn classify_ranked(ranked: &[PercentageResult], total: u64) -> TypeResult {
    let Some(first) = ranked.first() else {
        return TypeResult::undetermined();
    };
    if total == 0 {
        return TypeResult::undetermined();
    }

    if first.percentage < BALANCED_CEILING {
        let initials: String = ranked
            .iter()
            .map(|entry| entry.category.initial().to_ascii_lowercase())
            .collect();
        return TypeResult {
            kind: ProfileKind::Balanced,
            type_code: format!("({initials})"),
            is_balanced: true,
        };
    }

    let code = ranked
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let initial = entry.category.initial();
            let upper = match position {
                0 if entry.percentage >= PRIMARY_DOMINANT_THRESHOLD => true,
                0 if entry.percentage >= SECONDARY_DOMINANT_THRESHOLD => true,
                1 => {
                    entry.percentage >= SECONDARY_DOMINANT_THRESHOLD
                        && first.percentage - entry.percentage < CLOSE_PAIR_THRESHOLD
                }
                _ => false,
            };
            if upper {
                initial.to_string()
            } else {
                initial.to_ascii_lowercase().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-");

    TypeResult {
        kind: ProfileKind::Profiled,
        type_code: code,
        is_balanced: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::domain::Category;

    fn scores(red: u32, yellow: u32, green: u32, blue: u32) -> ScoreVector {
        ScoreVector::from_entries([
            (Category::DynamicRed, red),
            (Category::FreeSpiritYellow, yellow),
            (Category::BalanceGreen, green),
            (Category::LogicBlue, blue),
        ])
    }

    #[test]
    fn zero_scores_are_undetermined() {
        let result = classify(&ScoreVector::default());
        assert_eq!(result.kind, ProfileKind::Undetermined);
        assert_eq!(result.type_code, "not_determined");
        assert!(!result.is_balanced);
        assert_eq!(result.label(Language::English), "Type: Not determined");
        assert_eq!(result.label(Language::German), "Typ: Nicht ermittelt");
    }

    #[test]
    fn flat_profile_is_balanced_in_ranked_order() {
        let result = classify(&scores(28, 27, 23, 22));
        assert_eq!(result.kind, ProfileKind::Balanced);
        assert_eq!(result.type_code, "(dfbl)");
        assert!(result.is_balanced);
        assert_eq!(result.label(Language::English), "Type: Balanced (dfbl)");

        let reordered = classify(&scores(22, 23, 28, 27));
        assert_eq!(reordered.type_code, "(blfd)");
    }

    #[test]
    fn runner_up_ten_points_behind_stays_lowercase() {
        let result = classify(&scores(40, 30, 20, 10));
        assert_eq!(result.type_code, "D-f-b-l");
        assert_eq!(result.label(Language::English), "Type: D-f-b-l");
    }

    #[test]
    fn close_runner_up_shares_dominance() {
        let result = classify(&scores(35, 30, 20, 15));
        assert_eq!(result.type_code, "D-F-b-l");
        assert_eq!(result.kind, ProfileKind::Profiled);
    }

    #[test]
    fn exactly_thirty_percent_is_not_balanced() {
        let result = classify(&scores(30, 25, 25, 20));
        assert_eq!(result.kind, ProfileKind::Profiled);
        assert_eq!(result.type_code, "D-f-b-l");
    }

    #[test]
    fn top_between_thresholds_still_uppercase() {
        let result = classify(&scores(27, 20, 20, 33));
        assert_eq!(result.type_code, "L-d-f-b");
    }
}
