use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Language, OptionId, Rating};
use super::locale::locale;
use super::report::views::QuestionView;
use super::session::QuizSession;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored respondent session plus bookkeeping timestamps.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub session: QuizSession,
}

impl SessionRecord {
    pub fn new(id: SessionId, session: QuizSession) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            session,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn view(&self) -> SessionView {
        let session = &self.session;
        let catalog = session.catalog();
        let total_questions = catalog.len();
        let completed_questions = session.answers().completed_count(catalog);
        let current_question = session.current_question().map(|question| {
            QuestionView::new(
                question,
                session.current_index(),
                total_questions,
                session.language(),
                session.presented_options(),
            )
        });
        let current_ratings = session
            .answers()
            .answer(session.current_index())
            .map(|answer| answer.ratings.clone())
            .unwrap_or_default();

        SessionView {
            session_id: self.id.clone(),
            language: session.language(),
            started: session.is_started(),
            finished: session.is_finished(),
            current_index: session.current_index(),
            total_questions,
            completed_questions,
            progress_label: locale(session.language()).progress_label,
            progress_percentage: progress(completed_questions, total_questions),
            current_question,
            current_ratings,
            question_complete: session.is_question_complete(),
            last_error: session.last_error().map(str::to_string),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn progress(completed: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    completed as f32 * 100.0 / total as f32
}

/// Storage abstraction so the service can be exercised without a backing store.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    /// Apply `change` to the stored record while holding it exclusively, so
    /// concurrent writers never overwrite each other's snapshot.
    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Respondent-facing snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub language: Language,
    pub started: bool,
    pub finished: bool,
    pub current_index: usize,
    pub total_questions: usize,
    pub completed_questions: usize,
    pub progress_label: &'static str,
    pub progress_percentage: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionView>,
    pub current_ratings: BTreeMap<OptionId, Rating>,
    pub question_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
