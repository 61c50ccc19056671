pub mod gemini_llm;
pub mod openai_llm;

pub use gemini_llm::GeminiTextAdapter;
pub use openai_llm::OpenAiTextAdapter;
