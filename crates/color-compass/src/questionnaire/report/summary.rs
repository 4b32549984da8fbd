use tracing::debug;

use super::super::answers::AnswerSet;
use super::super::catalog::QuestionCatalog;
use super::super::classify::{classify_ranked, TypeResult};
use super::super::domain::{Language, ScoreVector};
use super::super::locale::locale;
use super::super::scoring::{aggregate, rank, PercentageResult};
use super::narrative::{compose, Narrative};
use super::render::{render, TextFormat};
use super::share::share_text;
use super::views::{CategoryShareView, ResultsView};

/// Everything derived from one answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireResults {
    pub language: Language,
    pub scores: ScoreVector,
    pub percentages: Vec<PercentageResult>,
    pub type_result: TypeResult,
    pub narrative: Narrative,
}

impl QuestionnaireResults {
    pub fn from_scores(scores: ScoreVector, language: Language) -> Self {
        let percentages = rank(&scores);
        let type_result = classify_ranked(&percentages, scores.total());
        let narrative = compose(&percentages, &type_result);
        Self {
            language,
            scores,
            percentages,
            type_result,
            narrative,
        }
    }

    pub fn type_label(&self) -> String {
        self.type_result.label(self.language)
    }

    pub fn render(&self, format: TextFormat) -> String {
        render(&self.narrative, self.language, format)
    }

    pub fn share_text(&self) -> String {
        let text = locale(self.language);
        share_text(
            text.app_name,
            text.results_title,
            &self.percentages,
            &self.type_label(),
            self.language,
        )
    }

    /// The same results in another language. Scores are unaffected.
    pub fn translated(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    pub fn view(&self, format: TextFormat) -> ResultsView {
        let text = locale(self.language);
        ResultsView {
            language: self.language,
            title: text.results_title,
            total_score: self.scores.total(),
            scores: self.scores,
            percentages: self
                .percentages
                .iter()
                .map(|entry| CategoryShareView::new(entry, self.language))
                .collect(),
            type_result: self.type_result.clone(),
            type_label: self.type_label(),
            narrative: self.narrative.clone(),
            narrative_text: self.render(format),
            narrative_format: format,
            share_text: self.share_text(),
            notice: text.important_notice,
        }
    }
}

pub fn compute_results(
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
    language: Language,
) -> QuestionnaireResults {
    let scores = aggregate(answers, catalog);
    let results = QuestionnaireResults::from_scores(scores, language);
    debug!(
        total = scores.total(),
        type_code = %results.type_result.type_code,
        "computed questionnaire results"
    );
    results
}

#[derive(Debug, Clone, PartialEq)]
struct CachedResults {
    version: u64,
    language: Language,
    results: QuestionnaireResults,
}

/// Memoizes results against the answer set version and language.
#[derive(Debug, Clone, Default)]
pub struct ResultsCache {
    entry: Option<CachedResults>,
}

impl ResultsCache {
    pub fn get_or_compute(
        &mut self,
        answers: &AnswerSet,
        catalog: &QuestionCatalog,
        language: Language,
    ) -> &QuestionnaireResults {
        let fresh = matches!(
            &self.entry,
            Some(cached) if cached.version == answers.version() && cached.language == language
        );
        if !fresh {
            self.entry = None;
        }
        let cached = self.entry.get_or_insert_with(|| CachedResults {
            version: answers.version(),
            language,
            results: compute_results(answers, catalog, language),
        });
        &cached.results
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_warm(&self) -> bool {
        self.entry.is_some()
    }
}
