//! HTML report rendering.
//!
//! Pure assembly of a category bundle into one HTML document. The only
//! inputs besides the bundle are the topic and the footer, so the output is
//! reproducible for a fixed footer.

pub mod model;

use std::fmt::Write;

use crate::bundle::{self, fill, TitledItem};
use crate::category::Category;
use crate::error::AnalyzerResult;

pub use model::{RenderedReport, ReportFooter, ANALYSIS_ID_RANGE};

const PANEL_STYLE: &str = "background: #2a2b32; padding: 20px; border-radius: 12px; margin: 20px 0;";
const CARD_PANEL_STYLE: &str = "background: #40414f; padding: 20px; border-radius: 12px; margin: 20px 0;";

/// Render the report for a category and topic.
///
/// The topic is inserted verbatim; callers decide how the HTML is embedded.
pub fn render_report(
    category: Category,
    topic: &str,
    footer: &ReportFooter,
) -> AnalyzerResult<RenderedReport> {
    let b = bundle::bundle_for(category);
    let mut html = String::with_capacity(16 * 1024);

    writeln!(
        html,
        r#"<div class="analysis-report" data-category="{}">"#,
        category
    )?;
    writeln!(html, "    <h1>🔍 Deep Analysis Report: {}</h1>", topic)?;

    // Summary
    writeln!(html, "    <h2>📊 Executive Summary</h2>")?;
    writeln!(html, "    <p>{}</p>", fill(b.executive_summary, topic))?;

    // Insights
    writeln!(html, "    <h2>🎯 Key Insights & Findings</h2>")?;
    writeln!(html, r#"    <div style="{}">"#, PANEL_STYLE)?;
    writeln!(html, "        <h3>💡 Critical Insights</h3>")?;
    write_plain_list(&mut html, "ul", "", b.insights, topic)?;
    writeln!(html, "    </div>")?;

    // Market analysis and trends
    writeln!(html, "    <h2>📈 Market Analysis & Trends</h2>")?;
    writeln!(html, "    <h3>Current Market Dynamics</h3>")?;
    writeln!(html, "    <p>{}</p>", fill(b.market_analysis, topic))?;
    writeln!(html, "    <h3>Emerging Trends</h3>")?;
    write_titled_list(&mut html, "ul", "", b.trends, topic)?;

    // Technology analysis and cards
    writeln!(html, "    <h2>⚡ Technology & Innovation</h2>")?;
    writeln!(html, "    <h3>Technological Landscape</h3>")?;
    writeln!(html, "    <p>{}</p>", fill(b.technology_analysis, topic))?;
    writeln!(html, "    <h3>Key Technologies & Tools</h3>")?;
    writeln!(
        html,
        r#"    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 15px; margin: 20px 0;">"#
    )?;
    for tech in b.technologies {
        writeln!(
            html,
            r#"        <div style="background: #40414f; padding: 15px; border-radius: 8px; border-left: 4px solid #10a37f;">"#
        )?;
        writeln!(
            html,
            r#"            <h4 style="color: #10a37f; margin-bottom: 8px;">{}</h4>"#,
            fill(tech.name, topic)
        )?;
        writeln!(
            html,
            r#"            <p style="color: #d1d5db; font-size: 14px;">{}</p>"#,
            fill(tech.description, topic)
        )?;
        writeln!(html, "        </div>")?;
    }
    writeln!(html, "    </div>")?;

    // Opportunities and challenges
    writeln!(html, "    <h2>🎯 Opportunities & Challenges</h2>")?;
    writeln!(
        html,
        r#"    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin: 20px 0;">"#
    )?;
    writeln!(
        html,
        r#"        <div style="background: linear-gradient(135deg, #10a37f20, #10a37f10); padding: 20px; border-radius: 12px; border: 1px solid #10a37f30;">"#
    )?;
    writeln!(
        html,
        r#"            <h3 style="color: #10a37f; margin-bottom: 15px;">🚀 Opportunities</h3>"#
    )?;
    write_plain_list(
        &mut html,
        "ul",
        r#" style="margin-bottom: 8px;""#,
        b.opportunities,
        topic,
    )?;
    writeln!(html, "        </div>")?;
    writeln!(
        html,
        r#"        <div style="background: linear-gradient(135deg, #dc262620, #dc262610); padding: 20px; border-radius: 12px; border: 1px solid #dc262630;">"#
    )?;
    writeln!(
        html,
        r#"            <h3 style="color: #dc2626; margin-bottom: 15px;">⚠️ Challenges</h3>"#
    )?;
    write_plain_list(
        &mut html,
        "ul",
        r#" style="margin-bottom: 8px;""#,
        b.challenges,
        topic,
    )?;
    writeln!(html, "        </div>")?;
    writeln!(html, "    </div>")?;

    // Phased action plans
    let action_style = r#" style="margin-bottom: 10px;""#;
    writeln!(html, "    <h2>📋 Strategic Recommendations</h2>")?;
    writeln!(html, "    <h3>Immediate Actions (0-3 months)</h3>")?;
    write_titled_list(&mut html, "ol", action_style, b.immediate_actions, topic)?;
    writeln!(html, "    <h3>Medium-term Strategy (3-12 months)</h3>")?;
    write_titled_list(&mut html, "ol", action_style, b.medium_term_actions, topic)?;
    writeln!(html, "    <h3>Long-term Vision (1-3 years)</h3>")?;
    write_titled_list(&mut html, "ol", action_style, b.long_term_actions, topic)?;

    // Impact assessment
    writeln!(html, "    <h2>📊 Impact Assessment</h2>")?;
    writeln!(html, r#"    <div style="{}">"#, PANEL_STYLE)?;
    writeln!(html, "        <h3>Expected Outcomes</h3>")?;
    writeln!(html, "        <p>{}</p>", fill(b.impact_assessment, topic))?;
    writeln!(html, "        <h4>Success Metrics</h4>")?;
    write_plain_list(&mut html, "ul", "", b.success_metrics, topic)?;
    writeln!(html, "    </div>")?;

    // Future outlook
    writeln!(html, "    <h2>🔮 Future Outlook</h2>")?;
    writeln!(html, "    <p>{}</p>", fill(b.future_outlook, topic))?;
    writeln!(html, "    <h3>Predicted Developments</h3>")?;
    writeln!(html, "    <ul>")?;
    for p in b.predictions {
        writeln!(
            html,
            "        <li><strong>{}</strong>: {}</li>",
            p.timeframe,
            fill(p.prediction, topic)
        )?;
    }
    writeln!(html, "    </ul>")?;

    // Resources
    writeln!(html, "    <h2>📚 Additional Resources</h2>")?;
    writeln!(html, r#"    <div style="{}">"#, CARD_PANEL_STYLE)?;
    writeln!(html, "        <h3>Recommended Reading & Research</h3>")?;
    writeln!(html, "        <ul>")?;
    for resource in b.resources {
        writeln!(
            html,
            r##"            <li><a href="#" style="color: #10a37f; text-decoration: none;">{}</a></li>"##,
            fill(resource, topic)
        )?;
    }
    writeln!(html, "        </ul>")?;
    writeln!(html, "    </div>")?;

    write_footer(&mut html, footer)?;
    writeln!(html, "</div>")?;

    Ok(RenderedReport {
        category,
        topic: topic.to_string(),
        html,
    })
}

fn write_plain_list(
    html: &mut String,
    tag: &str,
    item_attrs: &str,
    items: &[&str],
    topic: &str,
) -> std::fmt::Result {
    writeln!(html, "    <{}>", tag)?;
    for item in items {
        writeln!(html, "        <li{}>{}</li>", item_attrs, fill(item, topic))?;
    }
    writeln!(html, "    </{}>", tag)
}

fn write_titled_list(
    html: &mut String,
    tag: &str,
    item_attrs: &str,
    items: &[TitledItem],
    topic: &str,
) -> std::fmt::Result {
    writeln!(html, "    <{}>", tag)?;
    for item in items {
        writeln!(
            html,
            "        <li{}><strong>{}</strong>: {}</li>",
            item_attrs,
            fill(item.title, topic),
            fill(item.description, topic)
        )?;
    }
    writeln!(html, "    </{}>", tag)
}

fn write_footer(html: &mut String, footer: &ReportFooter) -> std::fmt::Result {
    writeln!(
        html,
        r#"    <hr style="border: none; height: 2px; background: linear-gradient(90deg, #10a37f, #5436da); margin: 30px 0;">"#
    )?;
    writeln!(
        html,
        r#"    <div class="report-footer" style="text-align: center; color: #8e8ea0; font-size: 14px;">"#
    )?;
    writeln!(
        html,
        "        <p><strong>🤖 Generated by XtarzLab AI Content Analyzer</strong></p>"
    )?;
    writeln!(
        html,
        "        <p>Powered by Advanced AI Research Team • Analysis ID: {}</p>",
        footer.analysis_id
    )?;
    writeln!(html, "        <p>Generated on {}</p>", footer.generated_on())?;
    writeln!(html, "    </div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn fixed_footer() -> ReportFooter {
        ReportFooter {
            analysis_id: 424242,
            generated_at: Local.with_ymd_and_hms(2026, 3, 5, 14, 30, 0).unwrap(),
        }
    }

    const SECTION_ORDER: &[&str] = &[
        "Executive Summary",
        "Key Insights & Findings",
        "Market Analysis & Trends",
        "Emerging Trends",
        "Technology & Innovation",
        "Key Technologies & Tools",
        "Opportunities & Challenges",
        "Immediate Actions (0-3 months)",
        "Medium-term Strategy (3-12 months)",
        "Long-term Vision (1-3 years)",
        "Impact Assessment",
        "Success Metrics",
        "Future Outlook",
        "Predicted Developments",
        "Additional Resources",
        "Generated by XtarzLab AI Content Analyzer",
    ];

    #[test]
    fn test_sections_in_fixed_order() {
        let report = render_report(Category::Business, "Retail", &fixed_footer()).unwrap();
        let mut last = 0;
        for header in SECTION_ORDER {
            let pos = report.html[last..]
                .find(header)
                .unwrap_or_else(|| panic!("missing or out of order: {}", header));
            last += pos + header.len();
        }
    }

    #[test]
    fn test_topic_substituted_everywhere() {
        for category in Category::ALL {
            let report = render_report(category, "Ocean Farming", &fixed_footer()).unwrap();
            assert!(report
                .html
                .contains("Deep Analysis Report: Ocean Farming"));
            assert!(!report.html.contains("{topic}"), "{} left a placeholder", category);
            assert!(report.html.contains(&format!(
                "<p>{}</p>",
                fill(bundle::bundle_for(category).executive_summary, "Ocean Farming")
            )));
            assert!(report
                .html
                .contains(&format!(r#"data-category="{}""#, category)));
        }
    }

    #[test]
    fn test_topic_kept_verbatim() {
        let topic = "Blockchain & Supply <Chains>";
        let report = render_report(Category::Technology, topic, &fixed_footer()).unwrap();
        assert!(report.html.contains(topic));
        assert_eq!(report.topic, topic);
    }

    #[test]
    fn test_identical_output_for_same_footer() {
        let footer = fixed_footer();
        let a = render_report(Category::Healthcare, "Telehealth", &footer).unwrap();
        let b = render_report(Category::Healthcare, "Telehealth", &footer).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_footer_fields() {
        let report = render_report(Category::General, "Jazz", &fixed_footer()).unwrap();
        assert!(report.html.contains("Analysis ID: 424242"));
        assert!(report
            .html
            .contains("Generated on March 05, 2026 at 02:30 PM"));
    }

    #[test]
    fn test_generated_footer_id_in_range() {
        for _ in 0..100 {
            let footer = ReportFooter::generate();
            assert!(ANALYSIS_ID_RANGE.contains(&footer.analysis_id));
        }
    }

    #[test]
    fn test_category_specific_content() {
        let tech = render_report(Category::Technology, "X", &fixed_footer()).unwrap();
        let edu = render_report(Category::Education, "X", &fixed_footer()).unwrap();
        assert!(tech.html.contains("Edge Computing Integration"));
        assert!(!edu.html.contains("Edge Computing Integration"));
        assert!(edu.html.contains("Learning Management Systems"));
    }
}
