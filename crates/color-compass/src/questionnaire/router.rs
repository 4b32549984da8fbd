use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::answers::RatingError;
use super::domain::{Language, OptionId, Rating};
use super::locale::locale;
use super::report::views::CatalogView;
use super::report::TextFormat;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{QuestionnaireService, ScoreRequest, SessionServiceError};
use super::session::SessionError;

type SharedService<R> = Arc<QuestionnaireService<R>>;

/// Routes for the catalog, respondent sessions, and stateless scoring.
pub fn questionnaire_router<R>(service: SharedService<R>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(catalog_handler::<R>))
        .route("/api/v1/sessions", post(create_handler::<R>))
        .route(
            "/api/v1/sessions/:session_id",
            get(session_handler::<R>).delete(remove_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/questions/:index/ratings",
            put(rate_handler::<R>).delete(reset_handler::<R>),
        )
        .route("/api/v1/sessions/:session_id/advance", post(advance_handler::<R>))
        .route("/api/v1/sessions/:session_id/back", post(back_handler::<R>))
        .route("/api/v1/sessions/:session_id/language", put(language_handler::<R>))
        .route("/api/v1/sessions/:session_id/restart", post(restart_handler::<R>))
        .route("/api/v1/sessions/:session_id/results", get(results_handler::<R>))
        .route("/api/v1/score", post(score_handler::<R>))
        .route("/api/v1/classify", post(classify_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguageQuery {
    #[serde(default)]
    lang: Option<Language>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FormatQuery {
    #[serde(default)]
    format: Option<TextFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateSessionRequest {
    #[serde(default)]
    language: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatingRequest {
    option_id: OptionId,
    rating: Rating,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageRequest {
    language: Language,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    #[serde(default)]
    language: Option<Language>,
    scores: BTreeMap<String, u32>,
}

pub(crate) async fn catalog_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<LanguageQuery>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let catalog = service.catalog(query.lang);
    (StatusCode::OK, Json(CatalogView::new(&catalog))).into_response()
}

pub(crate) async fn create_handler<R>(
    State(service): State<SharedService<R>>,
    body: Option<Json<CreateSessionRequest>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let request = body.map(|Json(request)| request).unwrap_or_default();
    match service.create(request.language) {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(error) => error_response(error, service.default_language()),
    }
}

pub(crate) async fn session_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error, service.default_language()),
    }
}

pub(crate) async fn remove_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.remove(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error, service.default_language()),
    }
}

pub(crate) async fn rate_handler<R>(
    State(service): State<SharedService<R>>,
    Path((session_id, index)): Path<(String, usize)>,
    Json(request): Json<RatingRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.rate(&id, index, &request.option_id, request.rating) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error, session_language(&service, &id)),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<SharedService<R>>,
    Path((session_id, index)): Path<(String, usize)>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.reset_question(&id, index) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error, session_language(&service, &id)),
    }
}

pub(crate) async fn advance_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.advance(&id) {
        Ok((record, outcome)) => {
            let payload = json!({
                "advance": outcome,
                "session": record.view(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error, session_language(&service, &id)),
    }
}

pub(crate) async fn back_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.back(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error, service.default_language()),
    }
}

pub(crate) async fn language_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
    Json(request): Json<LanguageRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.set_language(&SessionId(session_id), request.language) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error, request.language),
    }
}

pub(crate) async fn restart_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.restart(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error, service.default_language()),
    }
}

pub(crate) async fn results_handler<R>(
    State(service): State<SharedService<R>>,
    Path(session_id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.results(&SessionId(session_id)) {
        Ok(results) => {
            let view = results.view(query.format.unwrap_or_default());
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => error_response(error, service.default_language()),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<FormatQuery>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let language = request.language.unwrap_or(service.default_language());
    match service.score(&request) {
        Ok(results) => {
            let view = results.view(query.format.unwrap_or_default());
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => error_response(error, language),
    }
}

pub(crate) async fn classify_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<FormatQuery>,
    Json(request): Json<ClassifyRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let language = request.language.unwrap_or(service.default_language());
    match service.classify(&request.scores, request.language) {
        Ok(results) => {
            let view = results.view(query.format.unwrap_or_default());
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => error_response(error, language),
    }
}

fn session_language<R>(service: &QuestionnaireService<R>, id: &SessionId) -> Language
where
    R: SessionRepository + 'static,
{
    service
        .get(id)
        .map(|record| record.session.language())
        .unwrap_or(service.default_language())
}

fn error_response(error: SessionServiceError, language: Language) -> Response {
    let text = locale(language);
    let (status, message) = match &error {
        SessionServiceError::Session(SessionError::Rating(RatingError::DuplicateRating {
            rating,
            assigned_to,
        })) => {
            let payload = json!({
                "error": text.unique_rating_message(*rating),
                "rating": rating,
                "assigned_to": assigned_to,
            });
            return (StatusCode::CONFLICT, Json(payload)).into_response();
        }
        SessionServiceError::Session(SessionError::Rating(
            RatingError::UnknownOption { .. } | RatingError::QuestionOutOfRange { .. },
        ))
        | SessionServiceError::UnknownQuestion(_) => (StatusCode::NOT_FOUND, error.to_string()),
        SessionServiceError::Session(SessionError::IncompleteQuestion) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            text.error_complete_question.to_string(),
        ),
        SessionServiceError::Session(SessionError::NotStarted)
        | SessionServiceError::Repository(RepositoryError::Conflict) => {
            (StatusCode::CONFLICT, error.to_string())
        }
        SessionServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "session not found".to_string())
        }
        SessionServiceError::Category(_) => (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()),
        SessionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };
    (status, Json(json!({ "error": message }))).into_response()
}
