use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::questionnaire::catalog::{QuestionCatalog, OPTION_LETTERS};
use crate::questionnaire::domain::{Category, Language, OptionId, Rating, ScoreVector};
use crate::questionnaire::repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use crate::questionnaire::{questionnaire_router, AnswerSet, QuestionnaireService, QuizSession};

pub(super) const SEED: u64 = 2024;

pub(super) fn scores(red: u32, yellow: u32, green: u32, blue: u32) -> ScoreVector {
    ScoreVector::from_entries([
        (Category::DynamicRed, red),
        (Category::FreeSpiritYellow, yellow),
        (Category::BalanceGreen, green),
        (Category::LogicBlue, blue),
    ])
}

/// Ratings for options `a`..`d` when every question is answered the same way.
pub(super) fn red_leaning() -> [Rating; 4] {
    [Rating::VeryMuch, Rating::Applies, Rating::Less, Rating::Least]
}

pub(super) fn blue_leaning() -> [Rating; 4] {
    [Rating::Least, Rating::Less, Rating::Applies, Rating::VeryMuch]
}

/// Ratings shifted one option per question so no colour pulls ahead.
pub(super) fn rotating(index: usize) -> [Rating; 4] {
    let ordered = Rating::ordered();
    [0, 1, 2, 3].map(|option| ordered[(option + index) % 4])
}

pub(super) fn option(index: usize, letter_position: usize) -> OptionId {
    OptionId(format!("{}{}", index + 1, OPTION_LETTERS[letter_position]))
}

pub(super) fn fill_answers<F>(catalog: &QuestionCatalog, pattern: F) -> AnswerSet
where
    F: Fn(usize) -> [Rating; 4],
{
    let mut answers = AnswerSet::for_catalog(catalog);
    for index in 0..catalog.len() {
        for (position, rating) in pattern(index).into_iter().enumerate() {
            answers
                .set_rating(catalog, index, &option(index, position), rating)
                .expect("pattern ratings are distinct");
        }
    }
    answers
}

/// Rate the current question of a session and step forward, for every question.
pub(super) fn complete_session<F>(session: &mut QuizSession, pattern: F)
where
    F: Fn(usize) -> [Rating; 4],
{
    session.start();
    for _ in 0..session.catalog().len() {
        let index = session.current_index();
        for (position, rating) in pattern(index).into_iter().enumerate() {
            session
                .submit_rating(&option(index, position), rating)
                .expect("pattern ratings are distinct");
        }
        session.advance().expect("question complete");
    }
}

pub(super) fn build_service() -> (QuestionnaireService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuestionnaireService::new(repository.clone(), Language::English, Some(SEED));
    (service, repository)
}

pub(super) fn router_with_service(service: QuestionnaireService<MemoryRepository>) -> Router {
    questionnaire_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(change(record))
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn modify<T, F>(&self, _id: &SessionId, _change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
