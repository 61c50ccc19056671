//! crates/study_ai_core/src/assistant.rs
//!
//! The `StudyAssistant` orchestrates every operation: build a prompt, offer
//! it to the configured providers in order, and degrade to the rule-based
//! fallback when none of them produces usable text. Which providers exist
//! is decided once at construction; there is no global availability state.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{
    AnalysisReply, ChatContext, ChatReply, Quiz, QuizQuestion, QuizReply, ReplyKind,
    StudyMetrics, StudyPlanReply,
};
use crate::fallback::{
    analyze_patterns, chat_fallback, compose_plan, generate_questions, FALLBACK_SOURCE,
};
use crate::fallback::plan::split_subjects;
use crate::ports::TextGenerationService;
use crate::prompts;

/// Token budgets per operation. Chat replies are short; the composed
/// artifacts get more room.
const CHAT_MAX_TOKENS: u32 = 200;
const PLAN_MAX_TOKENS: u32 = 800;
const QUIZ_MAX_TOKENS: u32 = 1000;
const ANALYSIS_MAX_TOKENS: u32 = 800;

/// The only error an operation surfaces to the caller. Everything
/// provider-related degrades silently to the fallback generator.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("{0}")]
    MissingInput(String),
}

/// The study assistant: an ordered provider chain plus the built-in
/// rule-based generator as the terminal strategy.
pub struct StudyAssistant {
    providers: Vec<Arc<dyn TextGenerationService>>,
}

impl StudyAssistant {
    pub fn new(providers: Vec<Arc<dyn TextGenerationService>>) -> Self {
        Self { providers }
    }

    /// Offers the prompt to each provider in order. The first non-empty
    /// success wins; failures are logged and swallowed.
    async fn delegate(&self, prompt: &str, max_tokens: u32) -> Option<(String, String)> {
        for provider in &self.providers {
            match provider.generate_text(prompt, max_tokens).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(provider = provider.name(), "delegated generation succeeded");
                    return Some((text, provider.name().to_string()));
                }
                Ok(_) => {
                    warn!(provider = provider.name(), "provider returned empty text");
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "provider call failed");
                }
            }
        }
        None
    }

    /// Answers a free-text chat message.
    pub async fn chat(&self, message: &str, context: &ChatContext) -> ChatReply {
        let prompt = prompts::chat_prompt(message, context);
        match self.delegate(&prompt, CHAT_MAX_TOKENS).await {
            Some((text, source)) => ChatReply {
                message: text,
                kind: ReplyKind::AiGenerated,
                source,
            },
            None => chat_fallback(message),
        }
    }

    /// Generates a weekly study plan. Blank subjects or a non-positive time
    /// budget is the one visible failure in the whole service.
    pub async fn study_plan(
        &self,
        subjects: &str,
        time_available: f64,
        goals: &str,
    ) -> Result<StudyPlanReply, AssistantError> {
        if subjects.trim().is_empty() || time_available <= 0.0 {
            return Err(AssistantError::MissingInput(
                "Please provide subjects and available time.".to_string(),
            ));
        }

        let subjects_list = split_subjects(subjects);
        let prompt = prompts::study_plan_prompt(&subjects_list, time_available, goals);
        let (message, source) = match self.delegate(&prompt, PLAN_MAX_TOKENS).await {
            Some((text, source)) => (text, source),
            None => (
                compose_plan(&subjects_list, time_available, goals),
                FALLBACK_SOURCE.to_string(),
            ),
        };

        Ok(StudyPlanReply {
            message,
            subjects: subjects_list,
            weekly_hours: time_available,
            source,
        })
    }

    /// Generates a multiple-choice quiz. Provider output must parse as the
    /// expected question schema; anything else degrades to the bank.
    pub async fn quiz(&self, topic: &str, difficulty: &str, question_count: usize) -> QuizReply {
        let prompt = prompts::quiz_prompt(topic, difficulty, question_count);
        let delegated = self.delegate(&prompt, QUIZ_MAX_TOKENS).await;

        let (questions, source) = match delegated {
            Some((text, source)) => match parse_provider_quiz(&text) {
                Some(questions) => (questions, source),
                None => {
                    warn!(
                        provider = source.as_str(),
                        "quiz response failed schema validation, using question bank"
                    );
                    (
                        generate_questions(topic, question_count),
                        FALLBACK_SOURCE.to_string(),
                    )
                }
            },
            None => (
                generate_questions(topic, question_count),
                FALLBACK_SOURCE.to_string(),
            ),
        };

        QuizReply {
            quiz: Quiz {
                topic: topic.to_string(),
                difficulty: difficulty.to_string(),
                questions,
            },
            source,
        }
    }

    /// Analyzes aggregate study metrics. An absent (or empty) payload gets
    /// the fixed "no data" reply without consulting any provider.
    pub async fn analyze(&self, metrics: Option<StudyMetrics>) -> AnalysisReply {
        let Some(metrics) = metrics else {
            return AnalysisReply {
                message: "No study data available for analysis.".to_string(),
                confidence: None,
                recommendations_count: None,
                source: FALLBACK_SOURCE.to_string(),
            };
        };

        let prompt = prompts::analysis_prompt(&metrics);
        match self.delegate(&prompt, ANALYSIS_MAX_TOKENS).await {
            Some((text, source)) => AnalysisReply {
                message: text,
                confidence: Some(0.9),
                recommendations_count: Some(5),
                source,
            },
            None => AnalysisReply {
                message: analyze_patterns(&metrics),
                confidence: Some(0.85),
                recommendations_count: Some(5),
                source: FALLBACK_SOURCE.to_string(),
            },
        }
    }
}

/// The structured schema a provider is asked to produce for quizzes.
#[derive(Deserialize)]
struct ProviderQuiz {
    questions: Vec<QuizQuestion>,
}

/// Parses and validates a provider's quiz text. Tolerates a Markdown code
/// fence around the JSON body; rejects empty sets and questions that break
/// the four-options/valid-index invariant.
fn parse_provider_quiz(text: &str) -> Option<Vec<QuizQuestion>> {
    let body = strip_code_fence(text);
    let parsed: ProviderQuiz = serde_json::from_str(body).ok()?;
    let valid = !parsed.questions.is_empty()
        && parsed
            .questions
            .iter()
            .all(|q| q.options.len() == 4 && q.correct < q.options.len());
    valid.then_some(parsed.questions)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::chat::{MOTIVATIONAL_QUOTES, STUDY_TIPS};
    use crate::ports::{PortError, PortResult};
    use async_trait::async_trait;

    struct FixedProvider {
        name: &'static str,
        reply: &'static str,
    }

    #[async_trait]
    impl TextGenerationService for FixedProvider {
        fn name(&self) -> &str {
            self.name
        }
        async fn generate_text(&self, _prompt: &str, _max_tokens: u32) -> PortResult<String> {
            Ok(self.reply.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TextGenerationService for FailingProvider {
        fn name(&self) -> &str {
            "broken"
        }
        async fn generate_text(&self, _prompt: &str, _max_tokens: u32) -> PortResult<String> {
            Err(PortError::Unavailable("connection refused".to_string()))
        }
    }

    fn assistant_with(providers: Vec<Arc<dyn TextGenerationService>>) -> StudyAssistant {
        StudyAssistant::new(providers)
    }

    fn offline() -> StudyAssistant {
        assistant_with(vec![])
    }

    #[tokio::test]
    async fn chat_uses_the_first_working_provider() {
        let assistant = assistant_with(vec![
            Arc::new(FailingProvider),
            Arc::new(FixedProvider {
                name: "openai",
                reply: "Study a little every day.",
            }),
        ]);
        let reply = assistant.chat("any advice?", &ChatContext::default()).await;
        assert_eq!(reply.source, "openai");
        assert_eq!(reply.kind, ReplyKind::AiGenerated);
        assert_eq!(reply.message, "Study a little every day.");
    }

    #[tokio::test]
    async fn chat_degrades_to_fallback_when_all_providers_fail() {
        let assistant = assistant_with(vec![Arc::new(FailingProvider)]);
        let reply = assistant
            .chat("I need motivation", &ChatContext::default())
            .await;
        assert_eq!(reply.source, "fallback");
        assert_eq!(reply.kind, ReplyKind::Motivation);
        assert!(MOTIVATIONAL_QUOTES
            .iter()
            .any(|q| reply.message.starts_with(q)));
    }

    #[tokio::test]
    async fn empty_provider_output_counts_as_unavailable() {
        let assistant = assistant_with(vec![Arc::new(FixedProvider {
            name: "openai",
            reply: "   ",
        })]);
        let reply = assistant.chat("hello", &ChatContext::default()).await;
        assert_eq!(reply.source, "fallback");
        assert!(STUDY_TIPS.iter().any(|t| reply.message.ends_with(t)));
    }

    #[tokio::test]
    async fn study_plan_rejects_blank_subjects_and_zero_hours() {
        let assistant = offline();
        assert!(matches!(
            assistant.study_plan("", 10.0, "x").await,
            Err(AssistantError::MissingInput(_))
        ));
        assert!(matches!(
            assistant.study_plan("Math", 0.0, "x").await,
            Err(AssistantError::MissingInput(_))
        ));
    }

    #[tokio::test]
    async fn study_plan_fallback_echoes_inputs() {
        let assistant = offline();
        let reply = assistant
            .study_plan("Math, Physics", 10.0, "pass exam")
            .await
            .unwrap();
        assert_eq!(reply.subjects, vec!["Math", "Physics"]);
        assert_eq!(reply.weekly_hours, 10.0);
        assert_eq!(reply.source, "fallback");
        assert!(reply.message.contains("**Math**"));
        assert!(reply.message.contains("**Physics**"));
    }

    #[tokio::test]
    async fn quiz_accepts_a_valid_fenced_provider_payload() {
        let assistant = assistant_with(vec![Arc::new(FixedProvider {
            name: "gemini",
            reply: "```json\n{\"questions\":[{\"question\":\"Q?\",\"options\":[\"a\",\"b\",\"c\",\"d\"],\"correct\":2,\"explanation\":\"because\"}]}\n```",
        })]);
        let reply = assistant.quiz("Physics", "hard", 1).await;
        assert_eq!(reply.source, "gemini");
        assert_eq!(reply.quiz.questions.len(), 1);
        assert_eq!(reply.quiz.questions[0].correct, 2);
        assert_eq!(reply.quiz.difficulty, "hard");
    }

    #[tokio::test]
    async fn quiz_rejects_unparseable_provider_output() {
        let assistant = assistant_with(vec![Arc::new(FixedProvider {
            name: "openai",
            reply: "Sure! Here are some questions about physics...",
        })]);
        let reply = assistant.quiz("physics", "medium", 3).await;
        assert_eq!(reply.source, "fallback");
        assert_eq!(reply.quiz.questions.len(), 3);
        assert_eq!(
            reply.quiz.questions[0].question,
            "What is Newton's second law of motion?"
        );
    }

    #[tokio::test]
    async fn quiz_rejects_payloads_breaking_the_answer_index_invariant() {
        let assistant = assistant_with(vec![Arc::new(FixedProvider {
            name: "openai",
            reply: "{\"questions\":[{\"question\":\"Q?\",\"options\":[\"a\",\"b\",\"c\",\"d\"],\"correct\":7,\"explanation\":\"\"}]}",
        })]);
        let reply = assistant.quiz("chemistry", "easy", 2).await;
        assert_eq!(reply.source, "fallback");
        assert_eq!(reply.quiz.questions.len(), 2);
    }

    #[tokio::test]
    async fn analyze_without_data_returns_the_fixed_reply() {
        let assistant = offline();
        let reply = assistant.analyze(None).await;
        assert_eq!(reply.message, "No study data available for analysis.");
        assert_eq!(reply.confidence, None);
        assert_eq!(reply.source, "fallback");
    }

    #[tokio::test]
    async fn analyze_fallback_reports_confidence() {
        let assistant = offline();
        let metrics = StudyMetrics {
            total_sessions: 25,
            completion_rate: 90.0,
            ..StudyMetrics::default()
        };
        let reply = assistant.analyze(Some(metrics)).await;
        assert_eq!(reply.source, "fallback");
        assert_eq!(reply.confidence, Some(0.85));
        assert_eq!(reply.recommendations_count, Some(5));
        assert!(reply.message.contains("- Excellent session completion rate"));
    }

    #[test]
    fn code_fence_stripping_handles_plain_and_fenced_bodies() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }
}
