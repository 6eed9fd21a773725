// Report rendering for analysis runs

use crate::model::{AnalysisRun, Opportunity};
use colored::Colorize;
use std::str::FromStr;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const THIN_RULE: &str = "────────────────────────────────────────────────────────────────────────────────";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("Unknown report format '{}'", other)),
        }
    }
}

pub fn generate_report(run: &AnalysisRun, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(run)),
        ReportFormat::Json => generate_json_report(run),
    }
}

pub fn generate_text_report(run: &AnalysisRun) -> String {
    let mut report = String::new();

    report.push_str(&format!("{}\n", RULE));
    report.push_str("                         SEARCH GAP ANALYSIS REPORT\n");
    report.push_str(&format!("{}\n\n", RULE));

    report.push_str(&format!("Team:         {}\n", run.team_name));
    if let Some(ref league) = run.league {
        report.push_str(&format!("League:       {}\n", league));
    }
    report.push_str(&format!("Run ID:       {}\n", run.run_id));
    report.push_str(&format!(
        "Date:         {}\n",
        run.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    report.push_str(&format!("Data:         {}\n", run.meta.data_quality));
    report.push_str(&format!(
        "Keywords:     {} analyzed of {}\n",
        run.meta.keywords_analyzed, run.total_keywords
    ));
    report.push_str(&format!("Duration:     {} ms\n\n", run.meta.processing_time_ms));

    report.push_str(&format!("{}\n", RULE));
    report.push_str("SUMMARY\n");
    report.push_str(&format!("{}\n\n", RULE));

    let summary = &run.summary;
    report.push_str(&format!("Gaps found:          {}\n", run.meta.gaps_found));
    report.push_str(&format!("High opportunity:    {}\n", summary.high_opportunity));
    report.push_str(&format!("Est. search volume:  {}\n", summary.total_search_volume));
    report.push_str(&format!(
        "Live data points:    {} of {}\n",
        summary.real_data_points, run.meta.keywords_analyzed
    ));
    report.push_str(&format!(
        "Backed by:           {} live, {} simulated\n",
        summary.live_opportunities, summary.fallback_opportunities
    ));
    if !summary.top_gap_types.is_empty() {
        report.push_str(&format!(
            "Gap types:           {}\n",
            summary.top_gap_types.join(", ")
        ));
    }
    report.push('\n');

    if run.analyses.is_empty() {
        report.push_str(&format!(
            "{}\n\n",
            "No gaps found: the team performs well on every analyzed keyword.".green()
        ));
    } else {
        report.push_str(&format!("{}\n", RULE));
        report.push_str("OPPORTUNITIES\n");
        report.push_str(&format!("{}\n\n", RULE));

        for (idx, opportunity) in run.analyses.iter().enumerate() {
            push_opportunity(&mut report, idx + 1, opportunity);
        }
    }

    report.push_str(&format!("{}\n", RULE));
    report.push_str("                                End of Report\n");
    report.push_str(&format!("{}\n", RULE));

    report
}

fn push_opportunity(report: &mut String, position: usize, opportunity: &Opportunity) {
    let score = format!("{}/10", opportunity.opportunity);
    let score = match opportunity.opportunity {
        8..=10 => score.red().bold(),
        6..=7 => score.yellow().bold(),
        _ => score.normal(),
    };

    report.push_str(&format!("[{}] \"{}\"  {}\n", position, opportunity.keyword, score));
    report.push_str(&format!("Gap type:     {}\n", opportunity.gap_type));
    report.push_str(&format!("Team rank:    {}\n", opportunity.team_rank));
    report.push_str(&format!("Reason:       {}\n", opportunity.gap_reason));
    if opportunity.reasons.len() > 1 {
        for reason in &opportunity.reasons[..opportunity.reasons.len() - 1] {
            report.push_str(&format!("              also: {}\n", reason));
        }
    }
    report.push_str(&format!("Volume:       ~{} searches/month\n", opportunity.search_volume));
    if !opportunity.is_real_data {
        report.push_str(&format!("{}\n", "Source:       simulated (no live data)".dimmed()));
    }

    if !opportunity.competitors.is_empty() {
        report.push_str("Competitors:\n");
        for competitor in &opportunity.competitors {
            report.push_str(&format!("  #{:<3} {}", competitor.rank, competitor.domain));
            if let Some(ref title) = competitor.title {
                report.push_str(&format!("  {}", title.dimmed()));
            }
            report.push('\n');
        }
    }

    let suggestion = &opportunity.content_suggestion;
    report.push_str(&format!(
        "Suggestion:   {} ({})\n",
        suggestion.title, suggestion.format
    ));
    report.push_str(&format!("CTA:          {}\n", suggestion.cta));
    report.push_str(&format!("Messaging:    {}\n", opportunity.llm_strategy));
    report.push_str(&format!("\n{}\n\n", THIN_RULE));
}

pub fn generate_json_report(run: &AnalysisRun) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "success": true,
        "generator": {
            "name": "gapscout",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "run": run,
    });

    serde_json::to_string_pretty(&json_report)
}
