use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use color_compass::error::AppError;
use color_compass::questionnaire::report::views::ResultsView;
use color_compass::questionnaire::{
    compute_results, questionnaire_router, AnswerImporter, Language, QuestionCatalog,
    QuestionnaireService, SessionRepository, TextFormat,
};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

/// CSV answer export submitted for one-off scoring.
#[derive(Debug, Deserialize)]
pub(crate) struct ImportRequest {
    #[serde(default)]
    pub(crate) language: Option<Language>,
    pub(crate) answers_csv: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImportQuery {
    #[serde(default)]
    pub(crate) format: Option<TextFormat>,
}

pub(crate) fn with_service_routes<R>(service: Arc<QuestionnaireService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    questionnaire_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/import", axum::routing::post(import_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn import_endpoint(
    Query(query): Query<ImportQuery>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ResultsView>, AppError> {
    let ImportRequest {
        language,
        answers_csv,
    } = payload;
    let language = language.unwrap_or_default();
    let catalog = QuestionCatalog::standard(language);

    let reader = Cursor::new(answers_csv.into_bytes());
    let answers = AnswerImporter::from_reader(reader, &catalog)?;
    let results = compute_results(&answers, &catalog, language);

    Ok(Json(results.view(query.format.unwrap_or_default())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemorySessionRepository;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn request(answers_csv: &str, language: Option<Language>) -> ImportRequest {
        ImportRequest {
            language,
            answers_csv: answers_csv.to_string(),
        }
    }

    #[tokio::test]
    async fn import_endpoint_scores_partial_exports() {
        let csv = "question_id,option_id,rating\n1,a,6\n1,b,3\n1,c,2\n1,d,0\n";

        let Json(body) = import_endpoint(
            Query(ImportQuery::default()),
            Json(request(csv, Some(Language::German))),
        )
        .await
        .expect("import scores");

        assert_eq!(body.language, Language::German);
        assert_eq!(body.total_score, 99);
        assert_eq!(body.type_result.type_code, "D-F-b-l");
    }

    #[tokio::test]
    async fn import_endpoint_rejects_unknown_questions() {
        let csv = "question_id,option_id,rating\n40,a,6\n";

        let response = import_endpoint(Query(ImportQuery::default()), Json(request(csv, None)))
            .await
            .expect_err("unknown question")
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        };
        let service = Arc::new(QuestionnaireService::new(
            Arc::new(InMemorySessionRepository::default()),
            Language::English,
            None,
        ));
        let router = with_service_routes(service).layer(Extension(state.clone()));

        let response = router
            .clone()
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("ready request");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let response = router
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("ready request");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
