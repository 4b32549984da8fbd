//! Localized copy for the questionnaire.
//!
//! Everything a respondent reads lives here. Scoring and classification only
//! ever see [`Category`] and [`Rating`] values, so switching languages never
//! changes a result.

mod de;
mod en;

use super::domain::{Category, Language, Rating};

pub struct LocaleText {
    pub app_name: &'static str,
    pub app_description: &'static str,
    pub instructions: &'static str,
    pub important_instruction: &'static str,
    pub important_notice: &'static str,
    pub results_title: &'static str,
    pub type_prefix: &'static str,
    pub balanced_type_label: &'static str,
    pub type_not_determined: &'static str,
    /// Contains a `{label}` placeholder.
    pub error_unique_rating: &'static str,
    pub error_complete_question: &'static str,
    /// Contains `{current}` and `{total}` placeholders.
    pub question_label: &'static str,
    pub progress_label: &'static str,
    pub statement_header: &'static str,
    pub rating_header: &'static str,
    pub ratings: [RatingText; 4],
    pub categories: [CategoryText; 4],
    pub assessment: AssessmentText,
    pub questions: [QuestionText; 25],
}

pub struct RatingText {
    pub rating: Rating,
    pub label: &'static str,
    pub short: &'static str,
    pub explanation: &'static str,
}

/// Display name plus the comma-separated descriptor lists the narrative draws from.
pub struct CategoryText {
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static str,
    pub challenges: &'static str,
    pub motivation: &'static str,
    pub communication: &'static str,
}

impl CategoryText {
    pub fn strength(&self, position: usize) -> &'static str {
        nth_descriptor(self.strengths, position)
    }

    pub fn motivation_descriptor(&self, position: usize) -> &'static str {
        nth_descriptor(self.motivation, position)
    }
}

fn nth_descriptor(list: &'static str, position: usize) -> &'static str {
    list.split(',').nth(position).map(str::trim).unwrap_or_default()
}

/// Narrative templates. `**` marks emphasis; `{name}` marks a bound parameter.
pub struct AssessmentText {
    pub no_scores: &'static str,
    pub balanced_intro: &'static str,
    pub balanced_distribution: &'static str,
    pub balanced_strongest_emphasis: &'static str,
    pub balanced_general_emphasis: &'static str,
    pub balanced_advice: &'static str,
    pub dominant_intro: &'static str,
    pub dominant_preference: &'static str,
    pub secondary_preference: &'static str,
    pub combo_red_yellow: &'static str,
    pub combo_green_blue: &'static str,
    pub combo_red_blue: &'static str,
    pub combo_yellow_green: &'static str,
    pub less_in_focus: &'static str,
    pub conclusion: &'static str,
}

pub struct QuestionText {
    pub text: &'static str,
    pub options: [&'static str; 4],
}

pub fn locale(language: Language) -> &'static LocaleText {
    match language {
        Language::English => &en::TEXT,
        Language::German => &de::TEXT,
    }
}

impl LocaleText {
    pub fn category(&self, category: Category) -> &CategoryText {
        &self.categories[category.index()]
    }

    pub fn rating(&self, rating: Rating) -> &RatingText {
        self.ratings
            .iter()
            .find(|entry| entry.rating == rating)
            .unwrap_or(&self.ratings[0])
    }

    pub fn unique_rating_message(&self, rating: Rating) -> String {
        fill(
            self.error_unique_rating,
            &[("label", self.rating(rating).label.to_string())],
        )
    }

    pub fn question_heading(&self, current: usize, total: usize) -> String {
        fill(
            self.question_label,
            &[
                ("current", current.to_string()),
                ("total", total.to_string()),
            ],
        )
    }
}

impl Rating {
    pub fn label(self, language: Language) -> &'static str {
        locale(language).rating(self).label
    }
}

impl Category {
    pub fn display_name(self, language: Language) -> &'static str {
        locale(language).category(self).name
    }
}

/// Substitute `{key}` placeholders in a template.
pub fn fill(template: &str, params: &[(&str, String)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}", key = key), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_labels_every_rating() {
        for language in Language::ordered() {
            let text = locale(language);
            for rating in Rating::ordered() {
                assert_eq!(text.rating(rating).rating, rating);
                assert!(!text.rating(rating).label.is_empty());
            }
        }
    }

    #[test]
    fn descriptors_are_trimmed() {
        let red = locale(Language::English).category(Category::DynamicRed);
        assert_eq!(red.strength(0), "decisive");
        assert_eq!(red.strength(1), "strong-willed");
        assert_eq!(red.motivation_descriptor(0), "results");
        assert_eq!(red.strength(99), "");
    }

    #[test]
    fn unique_rating_message_names_the_label() {
        let message = locale(Language::German).unique_rating_message(Rating::VeryMuch);
        assert!(message.contains("\"Trifft sehr zu\""));
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        let text = fill("{a} and {a} or {b}", &[("a", "x".into()), ("b", "y".into())]);
        assert_eq!(text, "x and x or y");
    }
}
