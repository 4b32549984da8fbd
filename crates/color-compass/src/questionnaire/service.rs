use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{CategoryError, Language, OptionId, QuestionId, Rating, ScoreVector};
use super::report::{compute_results, QuestionnaireResults};
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::session::{Advance, QuizSession, SessionError};

/// Full answer payload for stateless scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub language: Option<Language>,
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    pub ratings: BTreeMap<OptionId, Rating>,
}

/// Service owning respondent sessions through a repository.
pub struct QuestionnaireService<R> {
    repository: Arc<R>,
    default_language: Language,
    shuffle_seed: Option<u64>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<R> QuestionnaireService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, default_language: Language, shuffle_seed: Option<u64>) -> Self {
        Self {
            repository,
            default_language,
            shuffle_seed,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn catalog(&self, language: Option<Language>) -> QuestionCatalog {
        QuestionCatalog::standard(language.unwrap_or(self.default_language))
    }

    /// Create and start a session.
    pub fn create(
        &self,
        language: Option<Language>,
    ) -> Result<SessionRecord, SessionServiceError> {
        let language = language.unwrap_or(self.default_language);
        let mut session = QuizSession::new(language, self.shuffle_seed);
        session.start();
        let record = SessionRecord::new(next_session_id(), session);
        let stored = self.repository.insert(record)?;
        info!(session_id = %stored.id, %language, "session created");
        Ok(stored)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Rate an option; a rejected rating is still persisted as the session's last error.
    pub fn rate(
        &self,
        id: &SessionId,
        index: usize,
        option: &OptionId,
        rating: Rating,
    ) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(id, |session| session.rate(index, option, rating))
            .map(|(record, ())| record)
    }

    pub fn reset_question(
        &self,
        id: &SessionId,
        index: usize,
    ) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(id, |session| session.reset_question_at(index))
            .map(|(record, ())| record)
    }

    pub fn advance(&self, id: &SessionId) -> Result<(SessionRecord, Advance), SessionServiceError> {
        self.mutate(id, QuizSession::advance)
    }

    pub fn back(&self, id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(id, |session| {
            session.back();
            Ok(())
        })
        .map(|(record, ())| record)
    }

    /// Discard all answers and begin again from the first question.
    pub fn restart(&self, id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(id, |session| {
            session.restart();
            session.start();
            Ok(())
        })
        .map(|(record, ())| record)
    }

    pub fn set_language(
        &self,
        id: &SessionId,
        language: Language,
    ) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(id, |session| {
            session.set_language(language);
            Ok(())
        })
        .map(|(record, ())| record)
    }

    /// Results for the stored answers. Read-only: the fetched copy is dropped.
    pub fn results(&self, id: &SessionId) -> Result<QuestionnaireResults, SessionServiceError> {
        let mut record = self.get(id)?;
        Ok(record.session.compute_results().clone())
    }

    pub fn remove(&self, id: &SessionId) -> Result<(), SessionServiceError> {
        self.repository.remove(id)?;
        Ok(())
    }

    /// Score a complete payload without creating a session.
    pub fn score(&self, request: &ScoreRequest) -> Result<QuestionnaireResults, SessionServiceError> {
        let language = request.language.unwrap_or(self.default_language);
        let catalog = QuestionCatalog::standard(language);
        let mut answers = AnswerSet::for_catalog(&catalog);
        for submitted in &request.answers {
            let index = catalog
                .questions
                .iter()
                .position(|question| question.id == submitted.question_id)
                .ok_or(SessionServiceError::UnknownQuestion(submitted.question_id))?;
            for (option, rating) in &submitted.ratings {
                answers
                    .set_rating(&catalog, index, option, *rating)
                    .map_err(SessionError::from)?;
            }
        }
        Ok(compute_results(&answers, &catalog, language))
    }

    /// Classify raw category totals supplied by a caller.
    pub fn classify(
        &self,
        raw: &BTreeMap<String, u32>,
        language: Option<Language>,
    ) -> Result<QuestionnaireResults, SessionServiceError> {
        let scores = ScoreVector::try_from_keys(raw)?;
        Ok(QuestionnaireResults::from_scores(
            scores,
            language.unwrap_or(self.default_language),
        ))
    }

    fn mutate<T, F>(&self, id: &SessionId, apply: F) -> Result<(SessionRecord, T), SessionServiceError>
    where
        F: FnOnce(&mut QuizSession) -> Result<T, SessionError>,
    {
        let (record, outcome) = self.repository.modify(id, |record| {
            let outcome = apply(&mut record.session);
            record.touch();
            (record.clone(), outcome)
        })?;
        let value = outcome?;
        Ok((record, value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error("question {0} does not exist")]
    UnknownQuestion(QuestionId),
}
