use color_compass::questionnaire::{
    Language, RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
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

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_compass::questionnaire::QuizSession;

    #[test]
    fn modify_requires_an_existing_record() {
        let repository = InMemorySessionRepository::default();
        let record = SessionRecord::new(
            SessionId("session-test".to_string()),
            QuizSession::new(Language::English, None),
        );
        assert!(matches!(
            repository.modify(&record.id, |stored| stored.touch()),
            Err(RepositoryError::NotFound)
        ));

        repository.insert(record.clone()).expect("inserted");
        assert!(matches!(
            repository.insert(record.clone()),
            Err(RepositoryError::Conflict)
        ));
        let started = repository
            .modify(&record.id, |stored| {
                stored.session.start();
                stored.session.is_started()
            })
            .expect("modified");
        assert!(started);
        let stored = repository.fetch(&record.id).expect("fetch").expect("present");
        assert!(stored.session.is_started());
        repository.remove(&record.id).expect("removed");
        assert!(repository.fetch(&record.id).expect("fetch").is_none());
    }

    #[test]
    fn parse_language_reports_the_raw_value() {
        assert_eq!(parse_language("de"), Ok(Language::German));
        let err = parse_language("klingon").expect_err("unsupported");
        assert!(err.contains("klingon"));
    }
}
