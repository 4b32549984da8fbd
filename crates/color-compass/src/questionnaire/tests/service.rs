use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::common::*;
use crate::questionnaire::domain::{Language, OptionId, QuestionId, Rating};
use crate::questionnaire::repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use crate::questionnaire::service::{ScoreRequest, SubmittedAnswer};
use crate::questionnaire::{
    Advance, ProfileKind, QuestionnaireService, SessionError, SessionServiceError,
};

fn full_request(language: Option<Language>) -> ScoreRequest {
    let answers = (0..25)
        .map(|index| SubmittedAnswer {
            question_id: QuestionId(index as u32 + 1),
            ratings: red_leaning()
                .into_iter()
                .enumerate()
                .map(|(position, rating)| (option(index, position), rating))
                .collect(),
        })
        .collect();
    ScoreRequest { language, answers }
}

#[test]
fn create_persists_a_started_session() {
    let (service, repository) = build_service();
    let record = service.create(Some(Language::German)).expect("created");

    assert!(record.id.0.starts_with("session-"));
    assert!(record.session.is_started());
    assert_eq!(record.session.language(), Language::German);
    assert_eq!(repository.len(), 1);
}

#[test]
fn rejected_rating_is_stored_as_last_error() {
    let (service, _repository) = build_service();
    let record = service.create(None).expect("created");
    service
        .rate(&record.id, 0, &OptionId::from("1a"), Rating::VeryMuch)
        .expect("rated");

    let err = service
        .rate(&record.id, 0, &OptionId::from("1c"), Rating::VeryMuch)
        .expect_err("duplicate");
    assert!(matches!(err, SessionServiceError::Session(SessionError::Rating(_))));

    let stored = service.get(&record.id).expect("stored");
    assert!(stored.session.last_error().is_some());
    let answer = stored.session.answers().answer(0).expect("answer");
    assert_eq!(answer.ratings.len(), 1);
}

#[test]
fn advance_and_back_update_the_stored_position() {
    let (service, _repository) = build_service();
    let record = service.create(None).expect("created");
    for (position, rating) in red_leaning().into_iter().enumerate() {
        service
            .rate(&record.id, 0, &option(0, position), rating)
            .expect("rated");
    }

    let (record, outcome) = service.advance(&record.id).expect("advance");
    assert_eq!(outcome, Advance::Advanced { index: 1 });
    assert_eq!(record.session.current_index(), 1);

    let record = service.back(&record.id).expect("back");
    assert_eq!(record.session.current_index(), 0);
}

#[test]
fn restart_keeps_the_session_started_and_empty() {
    let (service, _repository) = build_service();
    let record = service.create(None).expect("created");
    service
        .rate(&record.id, 0, &OptionId::from("1a"), Rating::VeryMuch)
        .expect("rated");

    let record = service.restart(&record.id).expect("restart");
    assert!(record.session.is_started());
    assert!(record.session.answers().is_untouched());
    assert_eq!(record.session.current_index(), 0);
}

#[test]
fn missing_sessions_are_not_found() {
    let (service, _repository) = build_service();
    let err = service
        .get(&SessionId("session-missing".to_string()))
        .expect_err("unknown id");
    assert!(matches!(
        err,
        SessionServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn remove_deletes_the_record() {
    let (service, repository) = build_service();
    let record = service.create(None).expect("created");
    service.remove(&record.id).expect("removed");
    assert_eq!(repository.len(), 0);
    assert!(service.remove(&record.id).is_err());
}

#[test]
fn score_matches_session_results() {
    let (service, _repository) = build_service();
    let results = service
        .score(&full_request(Some(Language::English)))
        .expect("scored");
    assert_eq!(results.type_result.type_code, "D-F-b-l");
    assert_eq!(results.scores.total(), 2475);
}

#[test]
fn score_rejects_unknown_questions() {
    let (service, _repository) = build_service();
    let mut request = full_request(None);
    request.answers[0].question_id = QuestionId(99);
    assert!(matches!(
        service.score(&request),
        Err(SessionServiceError::UnknownQuestion(QuestionId(99)))
    ));
}

#[test]
fn classify_accepts_raw_totals_and_rejects_unknown_keys() {
    let (service, _repository) = build_service();
    let mut raw = BTreeMap::new();
    raw.insert("dynamic_red".to_string(), 28);
    raw.insert("free_spirit_yellow".to_string(), 27);
    raw.insert("balance_green".to_string(), 23);
    raw.insert("logic_blue".to_string(), 22);
    let results = service.classify(&raw, None).expect("classified");
    assert_eq!(results.type_result.kind, ProfileKind::Balanced);
    assert_eq!(results.type_result.type_code, "(dfbl)");

    raw.insert("violet".to_string(), 1);
    assert!(matches!(
        service.classify(&raw, None),
        Err(SessionServiceError::Category(_))
    ));
}

#[test]
fn unavailable_store_surfaces_repository_errors() {
    let service = QuestionnaireService::new(
        Arc::new(UnavailableRepository),
        Language::English,
        None,
    );
    assert!(matches!(
        service.create(None),
        Err(SessionServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

/// Commits a rating from another writer right after the first fetch, so the
/// caller works on a stale snapshot.
struct InterleavingRepository {
    inner: MemoryRepository,
    interleaved: AtomicBool,
}

impl SessionRepository for InterleavingRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        self.inner.modify(id, change)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let snapshot = self.inner.fetch(id)?;
        if !self.interleaved.swap(true, Ordering::SeqCst) {
            self.inner
                .modify(id, |record| {
                    record
                        .session
                        .rate(0, &OptionId::from("1a"), Rating::VeryMuch)
                })?
                .expect("concurrent rating accepted");
        }
        Ok(snapshot)
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        self.inner.remove(id)
    }
}

fn stored_rating(repository: &MemoryRepository, id: &SessionId, option: &str) -> Option<Rating> {
    repository
        .fetch(id)
        .expect("fetch")
        .expect("present")
        .session
        .answers()
        .answer(0)
        .and_then(|answer| answer.rating_of(&OptionId::from(option)))
}

#[test]
fn results_do_not_overwrite_a_concurrent_rating() {
    let inner = MemoryRepository::default();
    let repository = Arc::new(InterleavingRepository {
        inner: inner.clone(),
        interleaved: AtomicBool::new(true),
    });
    let service = QuestionnaireService::new(repository.clone(), Language::English, Some(SEED));
    let record = service.create(None).expect("created");
    repository.interleaved.store(false, Ordering::SeqCst);

    let results = service.results(&record.id).expect("results");

    assert_eq!(results.type_result.kind, ProfileKind::Undetermined);
    assert_eq!(stored_rating(&inner, &record.id, "1a"), Some(Rating::VeryMuch));
}

#[test]
fn ratings_from_parallel_writers_all_land() {
    let (service, repository) = build_service();
    let record = service.create(None).expect("created");

    std::thread::scope(|scope| {
        for (position, rating) in red_leaning().into_iter().enumerate() {
            let service = &service;
            let id = &record.id;
            scope.spawn(move || {
                service
                    .rate(id, 0, &option(0, position), rating)
                    .expect("rated");
            });
        }
    });

    let stored = repository.fetch(&record.id).expect("fetch").expect("present");
    let answer = stored.session.answers().answer(0).expect("answer");
    assert_eq!(answer.ratings.len(), 4);
    assert_eq!(stored_rating(&repository, &record.id, "1d"), Some(Rating::Least));
}

#[test]
fn classify_handles_totals_beyond_u32() {
    let (service, _repository) = build_service();
    let mut raw = BTreeMap::new();
    raw.insert("dynamic_red".to_string(), u32::MAX);
    raw.insert("logic_blue".to_string(), 1);

    let results = service.classify(&raw, None).expect("classified");

    assert_eq!(results.scores.total(), u64::from(u32::MAX) + 1);
    assert_eq!(results.type_result.kind, ProfileKind::Profiled);
    assert!(results.type_result.type_code.starts_with("D-"));
}
