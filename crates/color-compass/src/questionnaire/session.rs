use serde::Serialize;
use tracing::{debug, info};

use super::answers::{AnswerSet, RatingError};
use super::catalog::{Question, QuestionCatalog, QuestionOption};
use super::domain::{Language, OptionId, Rating};
use super::locale::locale;
use super::report::{QuestionnaireResults, ResultsCache};
use super::shuffle::{presentation_rng, shuffle};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error("every statement of the current question needs a distinct rating before continuing")]
    IncompleteQuestion,
    #[error("the questionnaire has not been started")]
    NotStarted,
}

impl SessionError {
    pub fn localized(&self, language: Language) -> String {
        match self {
            Self::Rating(err) => err.localized(language),
            Self::IncompleteQuestion => locale(language).error_complete_question.to_string(),
            Self::NotStarted => self.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Advance {
    Advanced { index: usize },
    Finished,
}

/// State of one respondent working through the questionnaire.
#[derive(Debug, Clone)]
pub struct QuizSession {
    language: Language,
    catalog: QuestionCatalog,
    answers: AnswerSet,
    current: usize,
    started: bool,
    finished: bool,
    last_error: Option<String>,
    presentation: Vec<OptionId>,
    shuffle_seed: Option<u64>,
    cache: ResultsCache,
}

impl QuizSession {
    pub fn new(language: Language, shuffle_seed: Option<u64>) -> Self {
        let catalog = QuestionCatalog::standard(language);
        let answers = AnswerSet::for_catalog(&catalog);
        Self {
            language,
            catalog,
            answers,
            current: 0,
            started: false,
            finished: false,
            last_error: None,
            presentation: Vec::new(),
            shuffle_seed,
            cache: ResultsCache::default(),
        }
    }

    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.current = 0;
        self.present_current();
        info!(language = %self.language, "questionnaire started");
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if !self.started {
            return None;
        }
        self.catalog.question(self.current)
    }

    /// Options of the current question in the order they are shown.
    pub fn presented_options(&self) -> Vec<&QuestionOption> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        self.presentation
            .iter()
            .filter_map(|id| question.option(id))
            .collect()
    }

    /// Rate an option of the current question.
    pub fn submit_rating(&mut self, option: &OptionId, rating: Rating) -> Result<(), SessionError> {
        self.rate(self.current, option, rating)
    }

    /// Rate an option of any question by position.
    pub fn rate(
        &mut self,
        index: usize,
        option: &OptionId,
        rating: Rating,
    ) -> Result<(), SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        match self.answers.set_rating(&self.catalog, index, option, rating) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                debug!(index, option = %option, error = %err, "rating rejected");
                self.last_error = Some(err.localized(self.language));
                Err(err.into())
            }
        }
    }

    pub fn reset_question(&mut self) -> Result<(), SessionError> {
        self.reset_question_at(self.current)
    }

    pub fn reset_question_at(&mut self, index: usize) -> Result<(), SessionError> {
        self.answers.reset(index)?;
        self.last_error = None;
        Ok(())
    }

    pub fn is_question_complete(&self) -> bool {
        self.answers.is_complete(&self.catalog, self.current)
    }

    /// Move forward once the current question is fully rated.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        if !self.is_question_complete() {
            let err = SessionError::IncompleteQuestion;
            self.last_error = Some(err.localized(self.language));
            return Err(err);
        }
        self.last_error = None;
        if self.current + 1 < self.catalog.len() {
            self.current += 1;
            self.present_current();
            Ok(Advance::Advanced {
                index: self.current,
            })
        } else {
            self.finished = true;
            info!(
                completed = self.answers.completed_count(&self.catalog),
                "questionnaire finished"
            );
            Ok(Advance::Finished)
        }
    }

    /// Step back one question. Returns whether the position changed.
    pub fn back(&mut self) -> bool {
        self.last_error = None;
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.finished = false;
        self.present_current();
        true
    }

    /// Return to the state of a freshly created session, keeping the language.
    pub fn restart(&mut self) {
        self.started = false;
        self.finished = false;
        self.current = 0;
        self.answers = AnswerSet::for_catalog(&self.catalog);
        self.last_error = None;
        self.presentation.clear();
        self.cache.invalidate();
        info!("questionnaire restarted");
    }

    /// Switch texts to `language`.
    ///
    /// Before the questionnaire starts this also discards any answers; once it
    /// is running the answers are kept and only the wording changes.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.catalog = QuestionCatalog::standard(language);
        if !self.started {
            self.answers = AnswerSet::for_catalog(&self.catalog);
        } else {
            self.present_current();
        }
        self.last_error = None;
    }

    pub fn compute_results(&mut self) -> &QuestionnaireResults {
        self.cache
            .get_or_compute(&self.answers, &self.catalog, self.language)
    }

    fn present_current(&mut self) {
        self.presentation = self
            .catalog
            .question(self.current)
            .map(|question| question.options.iter().map(|option| option.id.clone()).collect())
            .unwrap_or_default();
        let mut rng = presentation_rng(self.shuffle_seed, self.current);
        shuffle(&mut self.presentation, &mut rng);
    }
}
