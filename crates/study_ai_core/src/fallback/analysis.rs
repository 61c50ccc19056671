//! crates/study_ai_core/src/fallback/analysis.rs
//!
//! Threshold-driven study-pattern report. Fixed section headers with
//! canned bullet lines toggled by comparing the submitted metrics against
//! fixed cut-offs. No statistics beyond the comparisons.

use crate::domain::StudyMetrics;

/// Builds the markdown analysis report for the given metrics.
pub fn analyze_patterns(metrics: &StudyMetrics) -> String {
    let mut analysis = String::from("📊 **AI Study Pattern Analysis**\n\n");

    analysis.push_str("✅ **Strengths Identified**:\n");
    if metrics.completion_rate > 80.0 {
        analysis.push_str("- Excellent session completion rate\n");
    }
    if metrics.total_sessions > 20 {
        analysis.push_str("- Consistent study habit development\n");
    }
    if !metrics.subject_stats.is_empty() {
        analysis.push_str("- Good subject diversity in studies\n");
    }

    analysis.push_str("\n🎯 **Optimization Opportunities**:\n");
    if metrics.completion_rate < 70.0 {
        analysis.push_str("- Focus on completing started sessions\n");
    }
    if metrics.total_sessions < 10 {
        analysis.push_str("- Increase study frequency for better habit formation\n");
    }

    analysis.push_str("\n💡 **AI Recommendations**:\n");
    if metrics.completion_rate > 85.0 {
        analysis.push_str("- Consider increasing session difficulty or length\n");
    } else {
        analysis.push_str("- Try shorter, more focused sessions initially\n");
    }
    analysis.push_str("- Use spaced repetition for better retention\n");
    analysis.push_str("- Schedule regular review sessions\n");

    analysis.push_str("\n🌟 **Progress Celebration**:\n");
    analysis.push_str(&format!(
        "You've completed {} study sessions - that's fantastic progress! \
         Keep building on this momentum. Every session brings you closer to your goals!",
        metrics.total_sessions
    ));

    analysis
}
