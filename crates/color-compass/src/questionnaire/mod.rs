//! The ColorCompass questionnaire: catalog, rating capture, scoring,
//! classification, and the narrative report.
//!
//! Data flows one way. Answers are captured against the catalog, aggregated
//! into a [`ScoreVector`], ranked and classified, and finally composed into a
//! language-neutral [`Narrative`] that a renderer binds to localized text.

pub mod answers;
pub mod catalog;
pub mod classify;
pub mod domain;
pub mod import;
pub mod locale;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod shuffle;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerSet, RatingError};
pub use catalog::{Question, QuestionCatalog, QuestionOption, QUESTION_COUNT};
pub use classify::{classify, classify_ranked, ProfileKind, TypeResult};
pub use domain::{
    Category, CategoryError, CategoryWeights, InvalidRating, Language, OptionId, QuestionId,
    Rating, ScoreVector, UnsupportedLanguage,
};
pub use import::{AnswerImporter, ImportError};
pub use report::{
    compose, compute_results, render, Narrative, NarrativeBlock, Pairing, QuestionnaireResults,
    ResultsCache, TextFormat,
};
pub use repository::{RepositoryError, SessionId, SessionRecord, SessionRepository, SessionView};
pub use router::questionnaire_router;
pub use scoring::{aggregate, rank, PercentageResult};
pub use service::{QuestionnaireService, ScoreRequest, SessionServiceError, SubmittedAnswer};
pub use session::{Advance, QuizSession, SessionError};
