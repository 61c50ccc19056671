//! crates/study_ai_core/src/fallback/chat.rs
//!
//! Rule-based chat replies: an ordered keyword cascade over the lower-cased
//! message, first match wins. Motivation outranks focus, everything else
//! lands on a random study tip.

use rand::Rng;

use crate::domain::{ChatReply, ReplyKind};
use crate::fallback::FALLBACK_SOURCE;

/// Fixed pool of motivational quotes. Replies quote one uniformly at random.
pub const MOTIVATIONAL_QUOTES: [&str; 8] = [
    "Success is the sum of small efforts repeated day in and day out.",
    "The expert in anything was once a beginner.",
    "Don't watch the clock; do what it does. Keep going.",
    "Education is the most powerful weapon you can use to change the world.",
    "The beautiful thing about learning is that no one can take it away from you.",
    "Success is not final, failure is not fatal: it is the courage to continue that counts.",
    "The only way to do great work is to love what you do.",
    "Believe you can and you're halfway there.",
];

/// Fixed pool of generic study tips used for the catch-all reply.
pub const STUDY_TIPS: [&str; 10] = [
    "Use the Pomodoro Technique: 25 minutes focused study, 5 minute break",
    "Practice active recall by testing yourself without looking at notes",
    "Use spaced repetition to review material at increasing intervals",
    "Create mind maps to visualize connections between concepts",
    "Teach the material to someone else or explain it out loud",
    "Break complex topics into smaller, manageable chunks",
    "Use the Feynman Technique: explain concepts in simple terms",
    "Study in different locations to improve memory retention",
    "Use mnemonics and memory techniques for difficult information",
    "Take regular breaks to maintain focus and prevent burnout",
];

/// The keyword cascade, in priority order. Evaluated top to bottom; the
/// first rule with any matching substring decides the reply kind.
const CASCADE: &[(&[&str], ReplyKind)] = &[
    (&["motivat", "inspire", "encourage"], ReplyKind::Motivation),
    (&["focus", "concentration", "distract"], ReplyKind::Focus),
];

/// Produces a rule-based chat reply for the given message.
pub fn chat_fallback(message: &str) -> ChatReply {
    let lower = message.to_lowercase();
    let matched = CASCADE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind)| *kind);

    let mut rng = rand::thread_rng();
    let (message, kind) = match matched {
        Some(ReplyKind::Motivation) => {
            let quote = MOTIVATIONAL_QUOTES[rng.gen_range(0..MOTIVATIONAL_QUOTES.len())];
            (
                format!(
                    "{} Remember, consistent small steps lead to big achievements! 🌟",
                    quote
                ),
                ReplyKind::Motivation,
            )
        }
        Some(ReplyKind::Focus) => (
            "Try the Pomodoro Technique: 25 minutes of focused study followed by a \
             5-minute break. This helps maintain concentration and prevents mental fatigue."
                .to_string(),
            ReplyKind::Focus,
        ),
        _ => {
            let tip = STUDY_TIPS[rng.gen_range(0..STUDY_TIPS.len())];
            (
                format!("Great question! Here's a helpful study tip: {}", tip),
                ReplyKind::General,
            )
        }
    };

    ChatReply {
        message,
        kind,
        source: FALLBACK_SOURCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motivation_reply_quotes_the_known_pool() {
        let reply = chat_fallback("I need some motivation today");
        assert_eq!(reply.kind, ReplyKind::Motivation);
        assert_eq!(reply.source, "fallback");
        assert!(
            MOTIVATIONAL_QUOTES
                .iter()
                .any(|quote| reply.message.starts_with(quote)),
            "reply should start with one of the pooled quotes: {}",
            reply.message
        );
    }

    #[test]
    fn focus_reply_is_the_fixed_pomodoro_text() {
        let reply = chat_fallback("I get distracted constantly");
        assert_eq!(reply.kind, ReplyKind::Focus);
        assert!(reply.message.starts_with("Try the Pomodoro Technique"));
    }

    #[test]
    fn motivation_outranks_focus_when_both_match() {
        // Pins the cascade order: motivation keywords are checked first.
        let reply = chat_fallback("I can't focus and have no motivation");
        assert_eq!(reply.kind, ReplyKind::Motivation);
    }

    #[test]
    fn unmatched_message_gets_a_pooled_tip() {
        let reply = chat_fallback("what is the capital of France?");
        assert_eq!(reply.kind, ReplyKind::General);
        assert!(
            STUDY_TIPS
                .iter()
                .any(|tip| reply.message.ends_with(tip)),
            "reply should end with one of the pooled tips: {}",
            reply.message
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = chat_fallback("MOTIVATE me please");
        assert_eq!(reply.kind, ReplyKind::Motivation);
    }
}
