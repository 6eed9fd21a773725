// Data model shared by the analyzer, the enricher and the report

use crate::error::{AnalysisError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest team name accepted, in characters. Longer input is cut.
pub const MAX_TEAM_NAME_LEN: usize = 50;

/// Qualitative bucket for the team's best rank on a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRank {
    #[serde(rename = "Excellent (#1)")]
    Excellent,
    #[serde(rename = "Very Good (#2-3)")]
    VeryGood,
    #[serde(rename = "Good (#4-5)")]
    Good,
    #[serde(rename = "Fair (#6-10)")]
    Fair,
    #[serde(rename = "Poor (#11+)")]
    Poor,
    #[serde(rename = "Not Found")]
    NotFound,
}

impl TeamRank {
    pub fn from_rank(rank: Option<usize>) -> Self {
        match rank {
            None => TeamRank::NotFound,
            Some(0..=1) => TeamRank::Excellent,
            Some(2..=3) => TeamRank::VeryGood,
            Some(4..=5) => TeamRank::Good,
            Some(6..=10) => TeamRank::Fair,
            Some(_) => TeamRank::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRank::Excellent => "Excellent (#1)",
            TeamRank::VeryGood => "Very Good (#2-3)",
            TeamRank::Good => "Good (#4-5)",
            TeamRank::Fair => "Fair (#6-10)",
            TeamRank::Poor => "Poor (#11+)",
            TeamRank::NotFound => "Not Found",
        }
    }
}

impl std::fmt::Display for TeamRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub domain: String,
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Competitor {
    pub fn simulated(domain: &str, rank: usize) -> Self {
        Self {
            domain: domain.to_string(),
            rank,
            title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSite {
    pub domain: String,
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Outcome of gap analysis for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapFinding {
    pub has_gap: bool,
    /// Explanation from the last criterion that fired.
    pub gap_reason: String,
    /// Every triggered criterion's explanation, in evaluation order.
    pub reasons: Vec<String>,
    /// Always within 0..=10.
    pub opportunity: u8,
    pub team_rank: TeamRank,
    pub actual_rank: Option<usize>,
    pub competitors: Vec<Competitor>,
    pub team_sites: Vec<TeamSite>,
    pub is_real_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSuggestion {
    pub title: String,
    pub format: String,
    pub cta: String,
}

/// A confirmed gap with its suggested content. Only built when `has_gap` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub keyword: String,
    pub opportunity: u8,
    pub gap_type: String,
    pub team_rank: TeamRank,
    pub actual_rank: Option<usize>,
    pub competitors: Vec<Competitor>,
    pub content_suggestion: ContentSuggestion,
    pub llm_strategy: String,
    pub search_volume: u32,
    pub is_real_data: bool,
    pub gap_reason: String,
    pub reasons: Vec<String>,
}

/// Inbound request. The requester is only checked for presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub team_name: String,
    #[serde(default)]
    pub league: Option<String>,
    pub requester: String,
}

impl AnalysisRequest {
    pub fn new(
        team_name: impl Into<String>,
        league: Option<String>,
        requester: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            league,
            requester: requester.into(),
        }
    }

    /// Trimmed copy of the request with the team name cut to
    /// [`MAX_TEAM_NAME_LEN`] characters.
    pub fn validated(&self) -> Result<Self> {
        let team_name = self.team_name.trim();
        if team_name.is_empty() {
            return Err(AnalysisError::MissingTeamName);
        }

        let requester = self.requester.trim();
        if requester.is_empty() {
            return Err(AnalysisError::MissingRequester);
        }

        Ok(Self {
            team_name: team_name.chars().take(MAX_TEAM_NAME_LEN).collect(),
            league: self.league.clone(),
            requester: requester.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Opportunities scoring 7 or more
    pub high_opportunity: usize,
    pub total_search_volume: u64,
    /// Distinct gap types in ranking order
    pub top_gap_types: Vec<String>,
    /// Keywords that came back with live search data
    pub real_data_points: usize,
    pub live_opportunities: usize,
    pub fallback_opportunities: usize,
}

impl RunSummary {
    pub fn from_opportunities(analyses: &[Opportunity], real_data_points: usize) -> Self {
        let mut top_gap_types: Vec<String> = Vec::new();
        for analysis in analyses {
            if !top_gap_types.contains(&analysis.gap_type) {
                top_gap_types.push(analysis.gap_type.clone());
            }
        }

        let live_opportunities = analyses.iter().filter(|a| a.is_real_data).count();

        Self {
            high_opportunity: analyses.iter().filter(|a| a.opportunity >= 7).count(),
            total_search_volume: analyses.iter().map(|a| a.search_volume as u64).sum(),
            top_gap_types,
            real_data_points,
            live_opportunities,
            fallback_opportunities: analyses.len() - live_opportunities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMeta {
    pub processing_time_ms: u64,
    pub data_quality: String,
    pub keywords_analyzed: usize,
    pub gaps_found: usize,
}

/// Everything produced for one request. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub team_name: String,
    pub league: Option<String>,
    pub total_keywords: usize,
    pub keywords: Vec<String>,
    pub analyses: Vec<Opportunity>,
    pub summary: RunSummary,
    pub meta: RunMeta,
}
