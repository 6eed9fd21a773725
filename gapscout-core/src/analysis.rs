use crate::analyzer::analyze_gap;
use crate::classifier::SiteClassifier;
use crate::error::Result;
use crate::fallback::fallback_gap;
use crate::keywords::generate_keywords;
use crate::model::{AnalysisRequest, AnalysisRun, Opportunity, RunMeta, RunSummary};
use chrono::Utc;
use gapscout_serp::{SearchResultItem, SerpClient};
use rand::Rng;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Source of ranked search results for a keyword. `None` means no live
/// data, for whatever reason.
pub trait SearchProvider {
    fn fetch_rankings(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Option<Vec<SearchResultItem>>> + Send;
}

impl SearchProvider for SerpClient {
    fn fetch_rankings(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Option<Vec<SearchResultItem>>> + Send {
        self.fetch(keyword)
    }
}

/// Limits for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Keywords queried live, from the front of the list
    pub primary_keywords: usize,
    /// Keywords after the primary ones that are estimated when the primary
    /// pass found nothing
    pub extra_keywords: usize,
    /// Cap on gaps that come from simulated data
    pub max_fallback_gaps: usize,
    /// A simulated gap must score at least this to be kept
    pub min_fallback_opportunity: u8,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            primary_keywords: 8,
            extra_keywords: 4,
            max_fallback_gaps: 3,
            min_fallback_opportunity: 8,
        }
    }
}

/// Callback for reporting analysis progress
pub type AnalysisProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Run the full pipeline for one request.
///
/// Keywords are processed one at a time so the provider's rate limit holds.
/// Gaps backed by simulated data must reach `min_fallback_opportunity` and
/// never number more than `max_fallback_gaps`. The extra keywords are only
/// estimated when the primary pass kept no gap at all.
pub async fn execute_analysis<P, R>(
    provider: &P,
    classifier: &SiteClassifier,
    request: &AnalysisRequest,
    options: &AnalysisOptions,
    rng: &mut R,
    progress_callback: Option<AnalysisProgressCallback>,
) -> Result<AnalysisRun>
where
    P: SearchProvider,
    R: Rng + ?Sized,
{
    let request = request.validated()?;
    let started = Instant::now();
    let started_at = Utc::now();
    let team_name = request.team_name.as_str();

    info!(
        "Gap analysis for \"{}\" ({})",
        team_name,
        request.league.as_deref().unwrap_or("no league")
    );

    let keywords = generate_keywords(team_name);
    let primary: Vec<&String> = keywords.iter().take(options.primary_keywords).collect();
    info!(
        "Analyzing {} of {} keywords for gaps",
        primary.len(),
        keywords.len()
    );

    let report = |msg: String| {
        if let Some(ref callback) = progress_callback {
            callback(msg);
        }
    };

    let mut analyses: Vec<Opportunity> = Vec::new();
    let mut real_data_points = 0;
    let mut fallback_gaps = 0;

    for (idx, keyword) in primary.iter().enumerate() {
        report(format!(
            "Keyword {}/{}: {}",
            idx + 1,
            primary.len(),
            keyword
        ));

        let rankings = provider.fetch_rankings(keyword).await;
        if rankings.is_some() {
            real_data_points += 1;
        }

        let finding = analyze_gap(rankings.as_deref(), team_name, keyword, classifier, rng);

        if finding.has_gap && !finding.is_real_data {
            if finding.opportunity < options.min_fallback_opportunity
                || fallback_gaps >= options.max_fallback_gaps
            {
                info!(
                    "Simulated gap for \"{}\" not kept (opportunity {})",
                    keyword, finding.opportunity
                );
                continue;
            }
            fallback_gaps += 1;
        }

        let reason = finding.gap_reason.clone();
        match Opportunity::from_finding(keyword, finding, rng) {
            Some(opportunity) => {
                info!("Gap found for \"{}\": {}", keyword, reason);
                analyses.push(opportunity);
            }
            None => info!("No gap for \"{}\"", keyword),
        }
    }

    if analyses.is_empty() {
        info!("No gaps in primary keywords, checking additional keywords");
        report("No gaps found, checking additional keywords".to_string());

        for keyword in keywords
            .iter()
            .skip(options.primary_keywords)
            .take(options.extra_keywords)
        {
            if fallback_gaps >= options.max_fallback_gaps {
                break;
            }

            let finding = fallback_gap(keyword, rng);
            if finding.has_gap && finding.opportunity >= options.min_fallback_opportunity {
                info!(
                    "Potential gap for \"{}\" (opportunity {})",
                    keyword, finding.opportunity
                );
                if let Some(opportunity) = Opportunity::from_finding(keyword, finding, rng) {
                    fallback_gaps += 1;
                    analyses.push(opportunity);
                }
            } else {
                info!("Additional keyword \"{}\": no significant gap", keyword);
            }
        }
    }

    // Stable, so ties keep discovery order
    analyses.sort_by(|a, b| b.opportunity.cmp(&a.opportunity));

    let summary = RunSummary::from_opportunities(&analyses, real_data_points);
    let meta = RunMeta {
        processing_time_ms: started.elapsed().as_millis() as u64,
        data_quality: if real_data_points > 0 {
            "Live Gap Analysis".to_string()
        } else {
            "Simulated Gap Analysis".to_string()
        },
        keywords_analyzed: primary.len(),
        gaps_found: analyses.len(),
    };

    info!(
        "Gaps found: {} ({} keywords with live data of {})",
        analyses.len(),
        real_data_points,
        primary.len()
    );

    Ok(AnalysisRun {
        run_id: Uuid::new_v4(),
        started_at,
        team_name: request.team_name.clone(),
        league: request.league.clone(),
        total_keywords: keywords.len(),
        keywords,
        analyses,
        summary,
        meta,
    })
}
