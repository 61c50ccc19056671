pub mod rest;
pub mod state;

// Re-export the handlers to make them easily accessible to the binary
// that builds the web server router.
pub use rest::{
    analyze_handler, chat_handler, health_handler, quiz_handler, study_plan_handler, ApiDoc,
};
pub use state::AppState;
