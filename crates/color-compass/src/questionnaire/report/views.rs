use serde::Serialize;

use super::super::catalog::{Question, QuestionCatalog, QuestionOption};
use super::super::classify::TypeResult;
use super::super::domain::{
    Category, CategoryWeights, Language, OptionId, QuestionId, Rating, ScoreVector,
};
use super::super::locale::locale;
use super::super::scoring::PercentageResult;
use super::narrative::Narrative;
use super::render::TextFormat;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShareView {
    pub category: Category,
    pub name: &'static str,
    pub hex: &'static str,
    pub score: u32,
    pub percentage: f64,
}

impl CategoryShareView {
    pub fn new(entry: &PercentageResult, language: Language) -> Self {
        Self {
            category: entry.category,
            name: entry.category.display_name(language),
            hex: entry.category.hex(),
            score: entry.score,
            percentage: entry.percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub language: Language,
    pub title: &'static str,
    pub total_score: u64,
    pub scores: ScoreVector,
    pub percentages: Vec<CategoryShareView>,
    pub type_result: TypeResult,
    pub type_label: String,
    pub narrative: Narrative,
    pub narrative_text: String,
    pub narrative_format: TextFormat,
    pub share_text: String,
    pub notice: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: OptionId,
    pub text: &'static str,
    pub weights: CategoryWeights,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub heading: String,
    pub text: &'static str,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    /// `options` is the order the respondent sees them in.
    pub fn new<'a, I>(
        question: &Question,
        position: usize,
        total: usize,
        language: Language,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = &'a QuestionOption>,
    {
        Self {
            id: question.id,
            heading: locale(language).question_heading(position + 1, total),
            text: question.text,
            options: options
                .into_iter()
                .map(|option| OptionView {
                    id: option.id.clone(),
                    text: option.text,
                    weights: option.weights,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingScaleEntry {
    pub rating: Rating,
    pub value: u8,
    pub label: &'static str,
    pub short: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub language: Language,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub important_instruction: &'static str,
    pub ratings: Vec<RatingScaleEntry>,
    pub questions: Vec<QuestionView>,
}

impl CatalogView {
    pub fn new(catalog: &QuestionCatalog) -> Self {
        let text = locale(catalog.language);
        let total = catalog.len();
        Self {
            language: catalog.language,
            title: text.app_name,
            description: text.app_description,
            instructions: text.instructions,
            important_instruction: text.important_instruction,
            ratings: Rating::ordered()
                .into_iter()
                .map(|rating| {
                    let entry = text.rating(rating);
                    RatingScaleEntry {
                        rating,
                        value: rating.value(),
                        label: entry.label,
                        short: entry.short,
                        explanation: entry.explanation,
                    }
                })
                .collect(),
            questions: catalog
                .questions
                .iter()
                .enumerate()
                .map(|(position, question)| {
                    QuestionView::new(question, position, total, catalog.language, &question.options)
                })
                .collect(),
        }
    }
}
