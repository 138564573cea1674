//! @acp:module "Quality Report Renderer"
//! @acp:summary "Human-readable markdown rendering of a quality report"
//! @acp:domain quality
//! @acp:layer presentation

use super::QualityReport;

/// @acp:summary "Render a quality report as markdown"
pub fn render_markdown(report: &QualityReport, title: &str, min_score: u32) -> String {
    let mut out = format!("# Template Quality Report: {}\n\n", title);
    out.push_str(&format!("## Overall Score: {}/100\n\n", report.score));

    out.push_str("### ✅ Requirements Met:\n");
    for (label, passed) in report.checks() {
        let mark = if passed { "✅" } else { "❌" };
        out.push_str(&format!("{} {}\n", mark, label));
    }

    out.push_str("\n### ⚠️ Issues Found:\n");
    if report.issues.is_empty() {
        out.push_str("None\n");
    }
    for issue in &report.issues {
        out.push_str(&format!("- {}\n", issue));
    }

    out.push_str("\n### Recommendations:\n");
    if report.meets_standard(min_score) {
        out.push_str("✅ Template meets quality standards\n");
    } else {
        out.push_str("⚠️ Template needs improvements before publishing\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::{score_quality, DEFAULT_MIN_SCORE};

    #[test]
    fn test_render_failing_report() {
        let report = score_quality("<div>plain</div>");
        let markdown = render_markdown(&report, "Plain", DEFAULT_MIN_SCORE);

        assert!(markdown.starts_with("# Template Quality Report: Plain\n"));
        assert!(markdown.contains(&format!("## Overall Score: {}/100", report.score)));
        assert!(markdown.contains("❌ Responsive Design"));
        assert!(markdown.contains("- Missing documentation comments"));
        assert!(markdown.contains("needs improvements before publishing"));
    }

    #[test]
    fn test_render_passing_report() {
        let report = QualityReport {
            score: 100,
            has_responsive_design: true,
            has_typography_hierarchy: true,
            has_color_palette: true,
            has_customizable_content: true,
            has_performance_optimization: true,
            has_documentation: true,
            has_type_annotations: true,
            uses_safe_assets: true,
            issues: vec![],
        };
        let markdown = render_markdown(&report, "Hero", DEFAULT_MIN_SCORE);

        assert!(markdown.starts_with(
            "# Template Quality Report: Hero\n\n## Overall Score: 100/100\n\n### ✅ Requirements Met:\n✅ Responsive Design\n"
        ));
        assert!(!markdown.contains('❌'));
        assert!(markdown.contains("✅ Safe Assets (Licensing)\n\n### ⚠️ Issues Found:\nNone\n\n### Recommendations:\n"));
        assert!(markdown.contains("✅ Template meets quality standards"));
    }
}
