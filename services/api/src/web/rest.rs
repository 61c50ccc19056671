//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.
//!
//! Every happy path answers HTTP 200 with a JSON envelope carrying a
//! `success` flag; the only `success:false` body is a study-plan request
//! with missing inputs. Malformed JSON bodies are rejected by the `Json`
//! extractor before a handler runs (framework default, 4xx).

use crate::web::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use study_ai_core::{AssistantError, ChatContext, Quiz, ReplyKind, StudyMetrics};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        chat_handler,
        study_plan_handler,
        quiz_handler,
        analyze_handler,
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            StudyPlanRequest,
            StudyPlanResponse,
            QuizRequest,
            QuizResponse,
            AnalyzeRequest,
            AnalyzeResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Study AI API", description = "Chat, study-plan, quiz and pattern-analysis endpoints with rule-based fallback.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Request and Response Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    service: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
    #[schema(value_type = Option<Object>)]
    #[serde(default)]
    context: Option<ChatContext>,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    success: bool,
    message: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    kind: ReplyKind,
    source: String,
}

#[derive(Deserialize, ToSchema)]
pub struct StudyPlanRequest {
    /// Comma-separated subject list, e.g. "Math, Physics".
    #[serde(default)]
    subjects: String,
    #[serde(rename = "timeAvailable", default = "default_time_available")]
    time_available: f64,
    #[serde(default = "default_goals")]
    goals: String,
}

fn default_time_available() -> f64 {
    10.0
}

fn default_goals() -> String {
    "General learning".to_string()
}

#[derive(Serialize, ToSchema)]
pub struct StudyPlanResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weekly_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct QuizRequest {
    #[serde(default = "default_topic")]
    topic: String,
    #[serde(default = "default_difficulty")]
    difficulty: String,
    #[serde(rename = "questionCount", default = "default_question_count")]
    question_count: usize,
}

fn default_topic() -> String {
    "General Knowledge".to_string()
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_question_count() -> usize {
    5
}

#[derive(Serialize, ToSchema)]
pub struct QuizResponse {
    success: bool,
    #[schema(value_type = Object)]
    quiz: Quiz,
    source: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[schema(value_type = Option<Object>)]
    #[serde(rename = "studyData", default)]
    study_data: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
pub struct AnalyzeResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations_count: Option<u32>,
    source: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Service liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Study AI".to_string(),
    })
}

/// Answer a study-related chat message.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses((status = 200, description = "Chat reply", body = ChatResponse))
)]
pub async fn chat_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let context = request.context.unwrap_or_default();
    let reply = app_state.assistant.chat(&request.message, &context).await;
    Json(ChatResponse {
        success: true,
        message: reply.message,
        kind: reply.kind,
        source: reply.source,
    })
}

/// Generate a personalized weekly study plan.
#[utoipa::path(
    post,
    path = "/study-plan",
    request_body = StudyPlanRequest,
    responses((status = 200, description = "Study plan, or success:false when subjects/time are missing", body = StudyPlanResponse))
)]
pub async fn study_plan_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<StudyPlanRequest>,
) -> Json<StudyPlanResponse> {
    let result = app_state
        .assistant
        .study_plan(&request.subjects, request.time_available, &request.goals)
        .await;

    let response = match result {
        Ok(reply) => StudyPlanResponse {
            success: true,
            message: reply.message,
            subjects: Some(reply.subjects),
            weekly_hours: Some(reply.weekly_hours),
            source: Some(reply.source),
        },
        Err(AssistantError::MissingInput(message)) => StudyPlanResponse {
            success: false,
            message,
            subjects: None,
            weekly_hours: None,
            source: None,
        },
    };
    Json(response)
}

/// Generate a multiple-choice quiz for a topic.
#[utoipa::path(
    post,
    path = "/quiz",
    request_body = QuizRequest,
    responses((status = 200, description = "Generated quiz", body = QuizResponse))
)]
pub async fn quiz_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<QuizRequest>,
) -> Json<QuizResponse> {
    let reply = app_state
        .assistant
        .quiz(&request.topic, &request.difficulty, request.question_count)
        .await;
    Json(QuizResponse {
        success: true,
        quiz: reply.quiz,
        source: reply.source,
    })
}

/// Analyze aggregate study metrics.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses((status = 200, description = "Pattern-analysis report", body = AnalyzeResponse))
)]
pub async fn analyze_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let metrics = parse_metrics(request.study_data);
    let reply = app_state.assistant.analyze(metrics).await;
    Json(AnalyzeResponse {
        success: true,
        message: reply.message,
        confidence: reply.confidence,
        recommendations_count: reply.recommendations_count,
        source: reply.source,
    })
}

/// An absent or empty `studyData` object means "no data". Anything else is
/// read with safe per-field defaults, so partial or oddly-typed payloads
/// still analyze instead of erroring.
fn parse_metrics(study_data: Option<serde_json::Value>) -> Option<StudyMetrics> {
    let value = study_data?;
    let non_empty = value.as_object().is_some_and(|map| !map.is_empty());
    if !non_empty {
        return None;
    }
    Some(serde_json::from_value(value).unwrap_or_default())
}
