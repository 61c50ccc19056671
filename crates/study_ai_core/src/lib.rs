pub mod assistant;
pub mod domain;
pub mod fallback;
pub mod ports;
pub mod prompts;

pub use assistant::{AssistantError, StudyAssistant};
pub use domain::{
    AnalysisReply, ChatContext, ChatReply, Quiz, QuizQuestion, QuizReply, ReplyKind,
    StudyMetrics, StudyPlanReply,
};
pub use ports::{PortError, PortResult, TextGenerationService};
