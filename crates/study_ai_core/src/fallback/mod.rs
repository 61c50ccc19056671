//! crates/study_ai_core/src/fallback/mod.rs
//!
//! The deterministic rule-based generator used whenever no external provider
//! is configured, a provider call fails, or its output is unusable. Pure
//! keyword matching and template assembly; the only nondeterminism is the
//! random selection from fixed pools of quotes, tips and techniques.

pub mod analysis;
pub mod chat;
pub mod plan;
pub mod quiz;

pub use analysis::analyze_patterns;
pub use chat::chat_fallback;
pub use plan::compose_plan;
pub use quiz::generate_questions;

/// The `source` tag carried by every rule-based reply.
pub const FALLBACK_SOURCE: &str = "fallback";
