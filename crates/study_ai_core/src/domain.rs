//! crates/study_ai_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These are the payloads that flow between the HTTP layer, the provider
//! chain and the rule-based fallback generator. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional conversational context sent along with a chat message.
/// Only used to enrich the prompt handed to a provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub user_name: Option<String>,
    pub total_sessions: Option<u32>,
    pub recent_subjects: Option<Vec<String>>,
}

/// The broad category a chat reply falls into. Echoed to the client as the
/// `type` field so the frontend can style motivation differently from tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    AiGenerated,
    Motivation,
    Focus,
    General,
}

/// A finished chat reply, ready to be serialized into the response envelope.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: String,
    pub kind: ReplyKind,
    /// Provider name (e.g. "openai") or "fallback".
    pub source: String,
}

/// A finished study plan: the formatted markdown text plus the echoed inputs.
#[derive(Debug, Clone)]
pub struct StudyPlanReply {
    pub message: String,
    pub subjects: Vec<String>,
    pub weekly_hours: f64,
    pub source: String,
}

/// A single multiple-choice question.
///
/// Invariant: `options` always has exactly four entries and `correct`
/// indexes one of them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// A generated quiz, either parsed from a provider or assembled from the
/// question bank.
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub topic: String,
    pub difficulty: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone)]
pub struct QuizReply {
    pub quiz: Quiz,
    pub source: String,
}

/// Aggregate study metrics submitted for pattern analysis.
///
/// Every field defaults so a partial (or empty) payload never fails to
/// deserialize; absent numbers read as zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyMetrics {
    pub total_sessions: u32,
    pub completion_rate: f64,
    pub total_study_time: f64,
    pub avg_session_length: f64,
    pub subject_stats: BTreeMap<String, serde_json::Value>,
    pub streak: u32,
    pub recent_sessions: Vec<serde_json::Value>,
}

/// A finished pattern-analysis report. The confidence and recommendation
/// count are absent on the fixed "no data" reply.
#[derive(Debug, Clone)]
pub struct AnalysisReply {
    pub message: String,
    pub confidence: Option<f64>,
    pub recommendations_count: Option<u32>,
    pub source: String,
}
