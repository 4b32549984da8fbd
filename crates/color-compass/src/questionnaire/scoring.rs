use serde::Serialize;
use tracing::warn;

use super::answers::{Answer, AnswerSet};
use super::catalog::QuestionCatalog;
use super::domain::{Category, ScoreVector};

/// Sum `weight × rating` into every category over all rated options.
pub fn aggregate(answers: &AnswerSet, catalog: &QuestionCatalog) -> ScoreVector {
    aggregate_answers(answers.answers(), catalog)
}

/// Aggregate answers in any order; questions are looked up by id.
///
/// Answers whose question or option is not in the catalog contribute nothing.
pub fn aggregate_answers<'a, I>(answers: I, catalog: &QuestionCatalog) -> ScoreVector
where
    I: IntoIterator<Item = &'a Answer>,
{
    let mut scores = ScoreVector::default();
    for answer in answers {
        let Some(question) = catalog.question_by_id(answer.question_id) else {
            warn!(question_id = %answer.question_id, "skipping answer for unknown question");
            continue;
        };
        for (option_id, rating) in &answer.ratings {
            let Some(option) = question.option(option_id) else {
                warn!(
                    question_id = %answer.question_id,
                    option_id = %option_id,
                    "skipping rating for unknown option"
                );
                continue;
            };
            let value = u32::from(rating.value());
            for category in Category::ordered() {
                scores.add(category, u32::from(option.weights.weight(category)) * value);
            }
        }
    }
    scores
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentageResult {
    pub category: Category,
    pub score: u32,
    pub percentage: f64,
}

/// Percentages per category, highest first.
///
/// Equal percentages keep canonical category order. A zero total yields 0 for
/// every category.
pub fn rank(scores: &ScoreVector) -> Vec<PercentageResult> {
    let total = scores.total();
    let mut ranked: Vec<PercentageResult> = scores
        .iter()
        .map(|(category, score)| PercentageResult {
            category,
            score,
            percentage: percentage_of(score, total),
        })
        .collect();
    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    ranked
}

fn percentage_of(score: u32, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) * 100.0 / total as f64
}
