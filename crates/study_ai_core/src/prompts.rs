//! crates/study_ai_core/src/prompts.rs
//!
//! Builds the natural-language prompts handed to the text-generation
//! providers. One builder per operation; each embeds the request fields
//! into a fixed instruction template.

use crate::domain::{ChatContext, StudyMetrics};

const CHAT_TEMPLATE: &str = r#"You are an expert AI study assistant for a Smart Study Scheduler app.

Context: {context}

User question: "{message}"

Provide helpful, encouraging, and actionable study advice. Keep your response concise (2-3 sentences) and focus on practical tips. Include specific study techniques when relevant.

If the user asks about:
- Motivation: Provide encouraging words and motivation strategies
- Study techniques: Suggest evidence-based learning methods
- Time management: Recommend scheduling and productivity tips
- Subject-specific help: Give targeted advice for that subject
- Focus/concentration: Suggest attention improvement strategies

Be friendly, supportive, and educational."#;

const QUIZ_TEMPLATE: &str = r#"Generate {count} multiple-choice quiz questions about "{topic}" at {difficulty} difficulty level.

For each question, provide:
1. A clear, specific question
2. Four plausible answer options (A, B, C, D)
3. The correct answer (0=A, 1=B, 2=C, 3=D)
4. A brief explanation of why the answer is correct

Format your response as a JSON object with this exact structure:
{
  "questions": [
    {
      "question": "Question text here",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correct": 0,
      "explanation": "Explanation here"
    }
  ]
}

Make the questions educational, accurate, and appropriate for the {difficulty} difficulty level. Ensure all options are plausible but only one is clearly correct."#;

/// Builds the chat prompt, folding any known user context into a short
/// preamble sentence.
pub fn chat_prompt(message: &str, context: &ChatContext) -> String {
    let mut context_info = String::new();
    if let Some(name) = &context.user_name {
        context_info.push_str(&format!("User name: {}. ", name));
    }
    if let Some(sessions) = context.total_sessions {
        context_info.push_str(&format!(
            "They have completed {} study sessions. ",
            sessions
        ));
    }
    if let Some(subjects) = &context.recent_subjects {
        if !subjects.is_empty() {
            context_info.push_str(&format!("Recent subjects: {}. ", subjects.join(", ")));
        }
    }

    CHAT_TEMPLATE
        .replace("{context}", &context_info)
        .replace("{message}", message)
}

pub fn study_plan_prompt(subjects: &[String], time_available: f64, goals: &str) -> String {
    format!(
        "Create a detailed, personalized study plan with the following requirements:\n\n\
         Subjects: {}\n\
         Available time: {} hours per week\n\
         Goals: {}\n\n\
         Please provide a comprehensive study plan that includes:\n\
         1. Weekly time allocation for each subject\n\
         2. Specific study techniques for each subject\n\
         3. Daily schedule recommendations\n\
         4. Weekly milestones and progress tracking\n\
         5. Optimal study times based on cognitive science\n\n\
         Format the response with clear sections using emojis and markdown formatting. \
         Make it practical and actionable.",
        subjects.join(", "),
        time_available,
        goals
    )
}

pub fn quiz_prompt(topic: &str, difficulty: &str, question_count: usize) -> String {
    QUIZ_TEMPLATE
        .replace("{count}", &question_count.to_string())
        .replace("{topic}", topic)
        .replace("{difficulty}", difficulty)
}

pub fn analysis_prompt(metrics: &StudyMetrics) -> String {
    format!(
        "Analyze the following study data and provide personalized insights and recommendations:\n\n\
         Study Data:\n\
         - Total Sessions: {}\n\
         - Completion Rate: {}%\n\
         - Total Study Time: {} hours\n\
         - Average Session Length: {} minutes\n\
         - Subjects Tracked: {}\n\
         - Study Streak: {} days\n\
         - Recent Sessions: {}\n\n\
         Please provide a comprehensive analysis that includes:\n\
         1. Strengths in current study habits\n\
         2. Areas for improvement\n\
         3. Specific, actionable recommendations\n\
         4. Optimal study time suggestions based on patterns\n\
         5. Motivational feedback and progress celebration\n\n\
         Format the response with clear sections using emojis and markdown. \
         Be encouraging and provide evidence-based advice.",
        metrics.total_sessions,
        metrics.completion_rate,
        metrics.total_study_time,
        metrics.avg_session_length,
        metrics
            .subject_stats
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
        metrics.streak,
        metrics.recent_sessions.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_prompt_embeds_message_and_context() {
        let context = ChatContext {
            user_name: Some("Ada".to_string()),
            total_sessions: Some(12),
            recent_subjects: Some(vec!["Calculus".to_string(), "Physics".to_string()]),
        };
        let prompt = chat_prompt("how do I focus?", &context);
        assert!(prompt.contains("User question: \"how do I focus?\""));
        assert!(prompt.contains("User name: Ada."));
        assert!(prompt.contains("completed 12 study sessions"));
        assert!(prompt.contains("Recent subjects: Calculus, Physics."));
    }

    #[test]
    fn chat_prompt_with_empty_context_has_blank_preamble() {
        let prompt = chat_prompt("hi", &ChatContext::default());
        assert!(prompt.contains("Context: \n"));
    }

    #[test]
    fn quiz_prompt_interpolates_all_fields() {
        let prompt = quiz_prompt("Physics", "hard", 7);
        assert!(prompt.contains("Generate 7 multiple-choice quiz questions about \"Physics\""));
        assert!(prompt.contains("at hard difficulty level"));
        // The JSON skeleton must survive the placeholder substitution.
        assert!(prompt.contains("\"questions\": ["));
    }
}
