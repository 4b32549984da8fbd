use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::super::domain::{Category, Language};
use super::super::locale::{fill, locale, AssessmentText, LocaleText};
use super::narrative::{Narrative, NarrativeBlock, Pairing};

/// Output flavour for rendered narratives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// Emphasis markers stripped.
    #[default]
    Plain,
    /// `**bold**` kept, suitable for terminals and chat.
    Markdown,
    Html,
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown text format '{other}'")),
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Html => "html",
        })
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}")
}

/// Bind every block to localized text and join them as paragraphs.
pub fn render(narrative: &Narrative, language: Language, format: TextFormat) -> String {
    let paragraphs: Vec<String> = narrative
        .iter()
        .map(|block| render_block(block, language))
        .map(|markdown| apply_format(&markdown, format))
        .collect();
    match format {
        TextFormat::Html => paragraphs.join("\n"),
        TextFormat::Plain | TextFormat::Markdown => paragraphs.join("\n\n"),
    }
}

/// A single block in the markdown-ish source form.
pub fn render_block(block: &NarrativeBlock, language: Language) -> String {
    let text = locale(language);
    let parts = &text.assessment;
    let name = |category: Category| text.category(category).name.to_string();

    match block {
        NarrativeBlock::NoScores => parts.no_scores.to_string(),
        NarrativeBlock::BalancedIntro => parts.balanced_intro.to_string(),
        NarrativeBlock::BalancedDistribution { entries } => {
            let mut out = parts.balanced_distribution.to_string();
            for entry in entries {
                out.push_str(&format!(
                    "\n- **{}:** {}%",
                    name(entry.category),
                    format_percentage(entry.percentage)
                ));
            }
            out
        }
        NarrativeBlock::BalancedStrongestEmphasis {
            first,
            second,
            second_percentage,
        } => {
            let details = text.category(*first);
            fill(
                parts.balanced_strongest_emphasis,
                &[
                    ("first", name(*first)),
                    ("first_strength_1", details.strength(0).to_string()),
                    ("first_strength_2", details.strength(1).to_string()),
                    ("first_motivation", details.motivation_descriptor(0).to_string()),
                    ("second", name(*second)),
                    ("second_percentage", format_percentage(*second_percentage)),
                ],
            )
        }
        NarrativeBlock::BalancedGeneralEmphasis {
            first,
            first_percentage,
            second,
            second_percentage,
        } => fill(
            parts.balanced_general_emphasis,
            &pair_params(text, *first, *first_percentage, *second, *second_percentage),
        ),
        NarrativeBlock::Combination { pairing } => combination_text(parts, *pairing).to_string(),
        NarrativeBlock::BalancedAdvice => parts.balanced_advice.to_string(),
        NarrativeBlock::DominantIntro {
            first,
            first_percentage,
            second,
            second_percentage,
        } => fill(
            parts.dominant_intro,
            &pair_params(text, *first, *first_percentage, *second, *second_percentage),
        ),
        NarrativeBlock::DominantPreference { category } => {
            preference(parts.dominant_preference, text, *category)
        }
        NarrativeBlock::SecondaryPreference { category } => {
            preference(parts.secondary_preference, text, *category)
        }
        NarrativeBlock::LessInFocus {
            third,
            third_percentage,
            fourth,
            fourth_percentage,
        } => fill(
            parts.less_in_focus,
            &[
                ("third", name(*third)),
                ("third_percentage", format_percentage(*third_percentage)),
                ("fourth", name(*fourth)),
                ("fourth_percentage", format_percentage(*fourth_percentage)),
            ],
        ),
        NarrativeBlock::Conclusion => parts.conclusion.to_string(),
    }
}

fn pair_params(
    text: &LocaleText,
    first: Category,
    first_percentage: f64,
    second: Category,
    second_percentage: f64,
) -> [(&'static str, String); 4] {
    [
        ("first", text.category(first).name.to_string()),
        ("first_percentage", format_percentage(first_percentage)),
        ("second", text.category(second).name.to_string()),
        ("second_percentage", format_percentage(second_percentage)),
    ]
}

fn preference(template: &str, text: &LocaleText, category: Category) -> String {
    let details = text.category(category);
    fill(
        template,
        &[
            ("name", details.name.to_string()),
            ("strengths", details.strengths.to_string()),
            ("motivation", details.motivation.to_string()),
            ("communication", details.communication.to_string()),
            ("challenges", details.challenges.to_string()),
        ],
    )
}

fn combination_text(parts: &AssessmentText, pairing: Pairing) -> &'static str {
    match pairing {
        Pairing::RedYellow => parts.combo_red_yellow,
        Pairing::GreenBlue => parts.combo_green_blue,
        Pairing::RedBlue => parts.combo_red_blue,
        Pairing::YellowGreen => parts.combo_yellow_green,
    }
}

fn apply_format(markdown: &str, format: TextFormat) -> String {
    match format {
        TextFormat::Markdown => markdown.to_string(),
        TextFormat::Plain => markdown.replace("**", ""),
        TextFormat::Html => format!("<p>{}</p>", to_html(markdown)),
    }
}

fn to_html(markdown: &str) -> String {
    let escaped = markdown
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let mut out = String::with_capacity(escaped.len());
    let mut open = false;
    for (position, segment) in escaped.split("**").enumerate() {
        if position > 0 {
            out.push_str(if open { "</strong>" } else { "<strong>" });
            open = !open;
        }
        out.push_str(segment);
    }
    if open {
        out.push_str("</strong>");
    }
    out.replace('\n', "<br />")
}
