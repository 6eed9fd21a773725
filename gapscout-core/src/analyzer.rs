// Gap classification and opportunity scoring for one keyword

use crate::classifier::SiteClassifier;
use crate::fallback::fallback_gap;
use crate::model::{Competitor, GapFinding, TeamRank, TeamSite};
use gapscout_serp::SearchResultItem;
use rand::Rng;
use tracing::{debug, info};

/// Reseller domains. Result domains match after lower-casing and
/// dropping a leading `www.`.
pub const TICKET_RESELLERS: &[&str] = &[
    "ticketmaster.com",
    "stubhub.com",
    "seatgeek.com",
    "vivid-seats.com",
    "vividseats.com",
];

/// Forums, video and review sites, matched like [`TICKET_RESELLERS`]
pub const FAN_CONTENT_SITES: &[&str] = &[
    "reddit.com",
    "facebook.com",
    "youtube.com",
    "tripadvisor.com",
    "yelp.com",
];

pub const BASE_OPPORTUNITY: u8 = 3;
pub const MAX_OPPORTUNITY: u8 = 10;

/// Only listings at or above this rank are kept as competitors.
const COMPETITOR_RANK_LIMIT: usize = 10;
const COMPETITORS_REPORTED: usize = 5;
const TITLE_LIMIT: usize = 50;

/// Analyze one keyword's rankings. Without rankings the finding comes from
/// [`fallback_gap`].
pub fn analyze_gap<R: Rng + ?Sized>(
    items: Option<&[SearchResultItem]>,
    team_name: &str,
    keyword: &str,
    classifier: &SiteClassifier,
    rng: &mut R,
) -> GapFinding {
    info!("Gap analysis: \"{}\"", keyword);

    let Some(items) = items else {
        info!("No search data for \"{}\", using fallback", keyword);
        return fallback_gap(keyword, rng);
    };

    let mut best_rank: Option<usize> = None;
    let mut team_sites = Vec::new();
    let mut competitors = Vec::new();

    for item in items {
        if classifier.is_team_site(&item.domain, team_name) {
            debug!("#{} {} is a team site", item.rank, item.domain);
            best_rank = Some(best_rank.map_or(item.rank, |best| best.min(item.rank)));
            team_sites.push(TeamSite {
                domain: item.domain.clone(),
                rank: item.rank,
                title: item.title.clone(),
            });
        } else if item.rank <= COMPETITOR_RANK_LIMIT {
            competitors.push(Competitor {
                domain: item.domain.clone(),
                rank: item.rank,
                title: Some(truncate_title(item.title.as_deref().unwrap_or("No title"))),
            });
        }
    }

    let finding = score_gap(keyword, best_rank, competitors, team_sites);

    info!(
        "Gap result: {} (team: {})",
        if finding.has_gap { "GAP FOUND" } else { "NO SIGNIFICANT GAP" },
        best_rank.map_or("not found".to_string(), |rank| format!("#{}", rank))
    );

    finding
}

/// Apply the gap criteria to an already classified result page.
///
/// Criteria run in a fixed order. Scores add up and are capped at
/// [`MAX_OPPORTUNITY`]; `gap_reason` holds the last criterion's explanation.
pub fn score_gap(
    keyword: &str,
    team_rank: Option<usize>,
    mut competitors: Vec<Competitor>,
    team_sites: Vec<TeamSite>,
) -> GapFinding {
    let mut reasons: Vec<String> = Vec::new();
    let mut opportunity = BASE_OPPORTUNITY;

    let outranks_team = |rank: usize| team_rank.is_none_or(|team| team > rank);
    let missing_top_three = team_rank.is_none_or(|team| team > 3);

    if team_rank.is_none_or(|team| team > 5) {
        reasons.push(match team_rank {
            Some(rank) => format!("Team ranks #{}, opportunity to reach top 5", rank),
            None => "Team not found in top 10".to_string(),
        });
        opportunity += 3;
    }

    let resellers: Vec<&Competitor> = competitors
        .iter()
        .filter(|c| is_listed(&c.domain, TICKET_RESELLERS))
        .collect();
    if let Some(first) = resellers.first()
        && outranks_team(first.rank)
    {
        let domains: Vec<&str> = resellers.iter().map(|c| c.domain.as_str()).collect();
        reasons.push(format!(
            "Ticket resellers ({}) outranking official site",
            domains.join(", ")
        ));
        opportunity += 2;
    }

    if let Some(first) = competitors
        .iter()
        .find(|c| is_listed(&c.domain, FAN_CONTENT_SITES))
        && outranks_team(first.rank)
    {
        reasons.push(format!("Fan content ({}) outranking official site", first.domain));
        opportunity += 1;
    }

    if keyword.contains("first time") && missing_top_three {
        reasons.push("Missing first-timer content - high-value keyword".to_string());
        opportunity += 2;
    }

    if keyword.contains("parking") && missing_top_three {
        reasons.push("Missing comprehensive parking information".to_string());
        opportunity += 1;
    }

    competitors.truncate(COMPETITORS_REPORTED);

    GapFinding {
        has_gap: !reasons.is_empty(),
        gap_reason: reasons.last().cloned().unwrap_or_default(),
        reasons,
        opportunity: opportunity.min(MAX_OPPORTUNITY),
        team_rank: TeamRank::from_rank(team_rank),
        actual_rank: team_rank,
        competitors,
        team_sites,
        is_real_data: true,
    }
}

/// Exact match against a domain list, ignoring a leading `www.`.
fn is_listed(domain: &str, list: &[&str]) -> bool {
    let domain = domain.trim().to_lowercase();
    let domain = domain.strip_prefix("www.").unwrap_or(&domain);
    list.contains(&domain)
}

fn truncate_title(title: &str) -> String {
    title.chars().take(TITLE_LIMIT).collect()
}
