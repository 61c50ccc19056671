//! crates/study_ai_core/src/fallback/quiz.rs
//!
//! The fixed question bank and quiz assembly. Topics are matched by
//! substring against a priority-ordered list of known subjects; unknown
//! topics get general study-skills questions. Counts beyond the bank size
//! are padded with `[Advanced]`-marked copies rather than failing.

use crate::domain::QuizQuestion;

struct BankQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

impl BankQuestion {
    fn to_question(&self) -> QuizQuestion {
        QuizQuestion {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct: self.correct,
            explanation: self.explanation.to_string(),
        }
    }
}

const CALCULUS: &[BankQuestion] = &[
    BankQuestion {
        question: "What is the derivative of x²?",
        options: ["2x", "x", "2", "x²"],
        correct: 0,
        explanation: "Using the power rule: d/dx(x²) = 2x¹ = 2x",
    },
    BankQuestion {
        question: "What is the derivative of sin(x)?",
        options: ["cos(x)", "-cos(x)", "sin(x)", "-sin(x)"],
        correct: 0,
        explanation: "The derivative of sin(x) is cos(x)",
    },
    BankQuestion {
        question: "What is the integral of 2x?",
        options: ["x² + C", "2x² + C", "x + C", "2 + C"],
        correct: 0,
        explanation: "The integral of 2x is x² + C (constant of integration)",
    },
    BankQuestion {
        question: "What is the limit of (sin x)/x as x approaches 0?",
        options: ["1", "0", "∞", "undefined"],
        correct: 0,
        explanation: "This is a fundamental limit: lim(x→0) (sin x)/x = 1",
    },
    BankQuestion {
        question: "What is the derivative of e^x?",
        options: ["e^x", "xe^(x-1)", "e", "x"],
        correct: 0,
        explanation: "The derivative of e^x is e^x itself",
    },
    BankQuestion {
        question: "What is the chain rule used for?",
        options: [
            "Composite functions",
            "Product of functions",
            "Sum of functions",
            "Constant functions",
        ],
        correct: 0,
        explanation: "The chain rule is used to differentiate composite functions",
    },
];

const PHYSICS: &[BankQuestion] = &[
    BankQuestion {
        question: "What is Newton's second law of motion?",
        options: ["F = ma", "E = mc²", "v = u + at", "s = ut + ½at²"],
        correct: 0,
        explanation: "Newton's second law states that Force equals mass times acceleration",
    },
    BankQuestion {
        question: "What is the unit of force?",
        options: ["Newton", "Joule", "Watt", "Pascal"],
        correct: 0,
        explanation: "The SI unit of force is the Newton (N)",
    },
    BankQuestion {
        question: "What is the formula for kinetic energy?",
        options: ["½mv²", "mgh", "mv", "ma"],
        correct: 0,
        explanation: "Kinetic energy is ½mv² where m is mass and v is velocity",
    },
    BankQuestion {
        question: "What is the acceleration due to gravity on Earth?",
        options: ["9.8 m/s²", "10 m/s²", "8.9 m/s²", "9.0 m/s²"],
        correct: 0,
        explanation: "The standard acceleration due to gravity is approximately 9.8 m/s²",
    },
    BankQuestion {
        question: "What is Ohm's law?",
        options: ["V = IR", "P = IV", "E = mc²", "F = ma"],
        correct: 0,
        explanation: "Ohm's law states that Voltage = Current × Resistance",
    },
];

const CHEMISTRY: &[BankQuestion] = &[
    BankQuestion {
        question: "What is the chemical symbol for water?",
        options: ["H₂O", "CO₂", "NaCl", "CH₄"],
        correct: 0,
        explanation: "Water is composed of two hydrogen atoms and one oxygen atom: H₂O",
    },
    BankQuestion {
        question: "What is Avogadro's number?",
        options: ["6.022 × 10²³", "3.14159", "9.8", "1.602 × 10⁻¹⁹"],
        correct: 0,
        explanation: "Avogadro's number is 6.022 × 10²³ particles per mole",
    },
    BankQuestion {
        question: "What is the pH of pure water?",
        options: ["7", "0", "14", "1"],
        correct: 0,
        explanation: "Pure water has a neutral pH of 7",
    },
    BankQuestion {
        question: "What type of bond forms between metals and non-metals?",
        options: ["Ionic", "Covalent", "Metallic", "Hydrogen"],
        correct: 0,
        explanation: "Ionic bonds form between metals and non-metals through electron transfer",
    },
];

const MATH: &[BankQuestion] = &[
    BankQuestion {
        question: "What is the quadratic formula?",
        options: [
            "x = (-b ± √(b²-4ac))/2a",
            "x = -b/2a",
            "x = b²-4ac",
            "x = a + b + c",
        ],
        correct: 0,
        explanation: "The quadratic formula solves ax² + bx + c = 0",
    },
    BankQuestion {
        question: "What is the slope-intercept form of a line?",
        options: [
            "y = mx + b",
            "ax + by = c",
            "y - y₁ = m(x - x₁)",
            "x = my + b",
        ],
        correct: 0,
        explanation: "y = mx + b where m is slope and b is y-intercept",
    },
    BankQuestion {
        question: "What is the value of π (pi) approximately?",
        options: ["3.14159", "2.71828", "1.41421", "1.61803"],
        correct: 0,
        explanation: "π (pi) is approximately 3.14159...",
    },
    BankQuestion {
        question: "What is the Pythagorean theorem?",
        options: ["a² + b² = c²", "a + b = c", "a × b = c", "a/b = c"],
        correct: 0,
        explanation: "In a right triangle, a² + b² = c² where c is the hypotenuse",
    },
];

const GENERAL: &[BankQuestion] = &[
    BankQuestion {
        question: "What is an effective study technique for retention?",
        options: [
            "Active recall",
            "Passive reading",
            "Highlighting only",
            "Cramming",
        ],
        correct: 0,
        explanation: "Active recall involves testing yourself and is proven to improve long-term retention",
    },
    BankQuestion {
        question: "What is the Pomodoro Technique?",
        options: [
            "25 min study + 5 min break",
            "1 hour study + 15 min break",
            "2 hours continuous study",
            "30 min study + 30 min break",
        ],
        correct: 0,
        explanation: "The Pomodoro Technique uses 25-minute focused study sessions followed by 5-minute breaks",
    },
    BankQuestion {
        question: "What is spaced repetition?",
        options: [
            "Reviewing at increasing intervals",
            "Studying the same thing daily",
            "Cramming before exams",
            "Reading once and forgetting",
        ],
        correct: 0,
        explanation: "Spaced repetition involves reviewing material at increasing time intervals for better retention",
    },
    BankQuestion {
        question: "What is the Feynman Technique?",
        options: [
            "Explaining concepts simply",
            "Memorizing formulas",
            "Speed reading",
            "Group studying",
        ],
        correct: 0,
        explanation: "The Feynman Technique involves explaining concepts in simple terms to test understanding",
    },
];

/// Topic substring → bank, in priority order; the first match wins.
const BANKS: &[(&[&str], &[BankQuestion])] = &[
    (&["calculus"], CALCULUS),
    (&["physics"], PHYSICS),
    (&["chemistry"], CHEMISTRY),
    (&["math", "algebra"], MATH),
];

fn select_bank(topic: &str) -> &'static [BankQuestion] {
    let lower = topic.to_lowercase();
    BANKS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, bank)| *bank)
        .unwrap_or(GENERAL)
}

/// Assembles exactly `count` questions for the topic.
///
/// Counts within the bank size return a prefix of the bank in its original
/// order. Larger counts cycle the bank again with an `[Advanced]` marker
/// prefixed to the question text, so duplicates (marked) are expected there.
/// Difficulty is deliberately not consulted; the banks are not tiered.
pub fn generate_questions(topic: &str, count: usize) -> Vec<QuizQuestion> {
    let bank = select_bank(topic);
    let mut questions: Vec<QuizQuestion> =
        bank.iter().take(count).map(BankQuestion::to_question).collect();

    for i in bank.len()..count {
        let base = &bank[(i - bank.len()) % bank.len()];
        let mut padded = base.to_question();
        padded.question = format!("[Advanced] {}", base.question);
        questions.push(padded);
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_exactly_the_requested_count() {
        for count in [0, 1, 4, 5, 6, 13, 20] {
            for topic in ["Calculus", "physics", "Organic Chemistry", "algebra", "History"] {
                let questions = generate_questions(topic, count);
                assert_eq!(questions.len(), count, "topic={} count={}", topic, count);
            }
        }
    }

    #[test]
    fn every_question_has_four_options_and_a_valid_answer_index() {
        for q in generate_questions("calculus", 20) {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct < q.options.len());
        }
    }

    #[test]
    fn small_counts_are_a_prefix_of_the_bank() {
        let three = generate_questions("physics", 3);
        let five = generate_questions("physics", 5);
        assert_eq!(three[..], five[..3]);
        assert_eq!(three[0].question, "What is Newton's second law of motion?");
    }

    #[test]
    fn padding_marks_questions_beyond_the_bank() {
        // The chemistry bank has 4 questions; ask for 10.
        let questions = generate_questions("chemistry", 10);
        let bank = generate_questions("chemistry", 4);
        for (i, q) in questions.iter().enumerate() {
            if i < 4 {
                assert!(!q.question.starts_with("[Advanced]"));
            } else {
                assert!(q.question.starts_with("[Advanced] "));
                let original = &bank[(i - 4) % 4];
                assert_eq!(q.question, format!("[Advanced] {}", original.question));
                assert_eq!(q.options, original.options);
                assert_eq!(q.explanation, original.explanation);
            }
        }
    }

    #[test]
    fn topic_matching_is_substring_based_with_general_catch_all() {
        assert_eq!(
            generate_questions("Advanced Calculus II", 1)[0].question,
            "What is the derivative of x²?"
        );
        assert_eq!(
            generate_questions("linear algebra", 1)[0].question,
            "What is the quadratic formula?"
        );
        assert_eq!(
            generate_questions("General Knowledge", 1)[0].question,
            "What is an effective study technique for retention?"
        );
    }
}
