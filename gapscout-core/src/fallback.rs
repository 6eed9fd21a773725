// Stand-in findings for keywords without live search data

use crate::model::{Competitor, GapFinding, TeamRank};
use rand::Rng;

/// Chance that a fallback finding reports a gap.
pub const FALLBACK_GAP_PROBABILITY: f64 = 0.2;

pub const FALLBACK_GAP_REASON: &str =
    "API data unavailable - potential opportunity based on keyword type";
pub const FALLBACK_NO_GAP_REASON: &str = "No significant gap detected";

/// Draw a conservative, simulated finding for `keyword`.
///
/// Gaps score 7 or 8, non-gaps 2 or 3. The result is never marked as real data.
pub fn fallback_gap<R: Rng + ?Sized>(keyword: &str, rng: &mut R) -> GapFinding {
    let has_gap = rng.gen_bool(FALLBACK_GAP_PROBABILITY);
    let opportunity = if has_gap {
        rng.gen_range(7..=8)
    } else {
        rng.gen_range(2..=3)
    };
    let team_rank = if rng.gen_bool(0.5) {
        TeamRank::NotFound
    } else {
        TeamRank::Fair
    };

    let reason = if has_gap {
        FALLBACK_GAP_REASON
    } else {
        FALLBACK_NO_GAP_REASON
    };

    GapFinding {
        has_gap,
        gap_reason: reason.to_string(),
        reasons: vec![reason.to_string()],
        opportunity,
        team_rank,
        actual_rank: None,
        competitors: simulated_competitors(keyword),
        team_sites: Vec::new(),
        is_real_data: false,
    }
}

/// Typical competitors for the keyword's intent.
pub fn simulated_competitors(keyword: &str) -> Vec<Competitor> {
    let set: &[(&str, usize)] = if keyword.contains("ticket") {
        &[("stubhub.com", 1), ("ticketmaster.com", 2), ("seatgeek.com", 3)]
    } else if keyword.contains("parking") {
        &[("spothero.com", 2), ("parkwhiz.com", 3)]
    } else if keyword.contains("first time") {
        &[("reddit.com", 1), ("youtube.com", 3)]
    } else {
        &[("yelp.com", 2), ("tripadvisor.com", 4)]
    };

    set.iter()
        .map(|(domain, rank)| Competitor::simulated(domain, *rank))
        .collect()
}
