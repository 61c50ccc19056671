//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use std::sync::Arc;
use study_ai_core::StudyAssistant;

/// The shared application state, created once at startup and passed to all
/// handlers. The assistant owns the configured provider chain; requests
/// share it read-only.
pub struct AppState {
    pub assistant: StudyAssistant,
    pub config: Arc<Config>,
}
