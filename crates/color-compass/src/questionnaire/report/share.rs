use super::super::domain::Language;
use super::super::scoring::PercentageResult;
use super::render::format_percentage;

/// Share of the total at which a colour's initial is written in uppercase.
pub const SHARE_UPPERCASE_THRESHOLD: f64 = 30.0;

/// Emoji and initial per colour, e.g. `🔴D 🟡f 🟢b 🔵l`.
pub fn share_badges(ranked: &[PercentageResult]) -> String {
    ranked
        .iter()
        .map(|entry| {
            let initial = entry.category.initial();
            let initial = if entry.percentage >= SHARE_UPPERCASE_THRESHOLD {
                initial
            } else {
                initial.to_ascii_lowercase()
            };
            format!("{}{}", entry.category.emoji(), initial)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Copyable plain-text summary of a result.
pub fn share_text(
    app_name: &str,
    results_title: &str,
    ranked: &[PercentageResult],
    type_label: &str,
    language: Language,
) -> String {
    let mut out = format!("{app_name} - {results_title}\n");
    out.push_str(&share_badges(ranked));
    out.push('\n');
    out.push_str(type_label);
    out.push('\n');
    for entry in ranked {
        out.push_str(&format!(
            "{}: {}%\n",
            entry.category.display_name(language),
            format_percentage(entry.percentage)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::domain::{Category, ScoreVector};
    use crate::questionnaire::scoring::rank;

    #[test]
    fn summary_lists_badges_label_and_percentages() {
        let ranked = rank(&ScoreVector::from_entries([
            (Category::DynamicRed, 35),
            (Category::FreeSpiritYellow, 30),
            (Category::BalanceGreen, 20),
            (Category::LogicBlue, 15),
        ]));
        let text = share_text(
            "ColorCompass",
            "Your Results",
            &ranked,
            "Type: D-F-b-l",
            Language::English,
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ColorCompass - Your Results");
        assert_eq!(lines[1], "🔴D 🟡F 🟢b 🔵l");
        assert_eq!(lines[2], "Type: D-F-b-l");
        assert_eq!(lines[3], "Dynamic Red: 35.0%");
        assert_eq!(lines[6], "Logic Blue: 15.0%");
        assert_eq!(lines.len(), 7);
    }
}
