//! crates/study_ai_core/src/fallback/plan.rs
//!
//! Template-based study-plan composer. Splits the subject list, divides the
//! weekly hours evenly, schedules two weekly blocks per subject by index
//! arithmetic over a fixed day list, and appends a random sample of study
//! techniques plus a fixed milestone block.

use rand::seq::SliceRandom;

/// The technique pool; each plan recommends a random 3-of-6 sample.
pub const TECHNIQUES: [&str; 6] = [
    "Active recall and spaced repetition",
    "Pomodoro Technique (25min focus + 5min break)",
    "Mind mapping and visual learning",
    "Practice problems and application",
    "Peer discussion and teaching",
    "Regular review sessions",
];

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DEFAULT_SUBJECT: &str = "General Studies";

/// Splits a comma-separated subject string, trimming whitespace and
/// dropping empty entries.
pub fn split_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Composes a markdown-formatted weekly study plan.
///
/// An empty subject list falls back to a single default subject. Each
/// subject gets `max(1, floor(hours / subjects))` hours per week, scheduled
/// as two blocks of `max(1, half of that)` hours on deterministically
/// chosen days.
pub fn compose_plan(subjects: &[String], time_available: f64, goals: &str) -> String {
    let default_subjects;
    let subjects = if subjects.is_empty() {
        default_subjects = vec![DEFAULT_SUBJECT.to_string()];
        &default_subjects
    } else {
        subjects
    };

    let hours_per_subject = (time_available as i64 / subjects.len() as i64).max(1);
    let block_hours = (hours_per_subject / 2).max(1);

    let mut plan = format!(
        "📅 **Personalized Study Plan ({}h/week)**\n\n🎯 **Goals**: {}\n\n📚 **Subject Allocation**:\n",
        time_available, goals
    );

    for (i, subject) in subjects.iter().enumerate() {
        plan.push_str(&format!("\n**{}**: {}h/week\n", subject, hours_per_subject));
        plan.push_str(&format!(
            "  - {}: {}h (New concepts)\n",
            DAYS[i % 5],
            block_hours
        ));
        plan.push_str(&format!(
            "  - {}: {}h (Practice & review)\n",
            DAYS[(i + 2) % 7],
            block_hours
        ));
    }

    plan.push_str("\n💡 **Recommended Techniques**:\n");
    let mut rng = rand::thread_rng();
    for technique in TECHNIQUES.choose_multiple(&mut rng, 3) {
        plan.push_str(&format!("- {}\n", technique));
    }

    plan.push_str("\n📈 **Weekly Milestones**:\n");
    plan.push_str("- Week 1: Foundation building and concept understanding\n");
    plan.push_str("- Week 2: Practice application and problem-solving\n");
    plan.push_str("- Week 3: Review, assessment, and knowledge consolidation\n");
    plan.push_str("- Week 4: Advanced topics and comprehensive review\n");

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_subjects_trims_and_drops_empties() {
        assert_eq!(
            split_subjects(" Math , Physics ,, "),
            vec!["Math".to_string(), "Physics".to_string()]
        );
        assert!(split_subjects(" , ,").is_empty());
    }

    #[test]
    fn plan_schedules_two_blocks_per_subject() {
        let plan = compose_plan(&subjects(&["Math", "Physics"]), 10.0, "pass exam");
        assert!(plan.contains("**Math**: 5h/week"));
        assert!(plan.contains("**Physics**: 5h/week"));
        assert!(plan.contains("🎯 **Goals**: pass exam"));
        // Two scheduled blocks each: one "New concepts", one "Practice & review".
        assert_eq!(plan.matches("(New concepts)").count(), 2);
        assert_eq!(plan.matches("(Practice & review)").count(), 2);
        // Day assignment is pure index arithmetic.
        assert!(plan.contains("  - Monday: 2h (New concepts)"));
        assert!(plan.contains("  - Wednesday: 2h (Practice & review)"));
        assert!(plan.contains("  - Tuesday: 2h (New concepts)"));
        assert!(plan.contains("  - Thursday: 2h (Practice & review)"));
    }

    #[test]
    fn plan_recommends_three_distinct_pooled_techniques() {
        let plan = compose_plan(&subjects(&["Math"]), 10.0, "x");
        let picked: Vec<&str> = TECHNIQUES
            .iter()
            .copied()
            .filter(|t| plan.contains(t))
            .collect();
        assert_eq!(picked.len(), 3, "expected exactly 3 techniques in:\n{}", plan);
    }

    #[test]
    fn hours_never_drop_below_one() {
        // 2 hours across 5 subjects floors to 0, which is clamped to 1h each.
        let plan = compose_plan(
            &subjects(&["A", "B", "C", "D", "E"]),
            2.0,
            "cram",
        );
        assert!(plan.contains("**A**: 1h/week"));
        assert!(plan.contains("  - Monday: 1h (New concepts)"));
    }

    #[test]
    fn empty_subject_list_uses_the_default_subject() {
        let plan = compose_plan(&[], 10.0, "x");
        assert!(plan.contains("**General Studies**: 10h/week"));
    }

    #[test]
    fn milestone_block_is_fixed() {
        let plan = compose_plan(&subjects(&["Math"]), 10.0, "x");
        for week in [
            "- Week 1: Foundation building and concept understanding",
            "- Week 2: Practice application and problem-solving",
            "- Week 3: Review, assessment, and knowledge consolidation",
            "- Week 4: Advanced topics and comprehensive review",
        ] {
            assert!(plan.contains(week));
        }
    }
}
