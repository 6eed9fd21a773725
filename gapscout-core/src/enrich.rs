// Gap type, content suggestion, messaging and volume for confirmed gaps

use crate::model::{ContentSuggestion, GapFinding, Opportunity};
use rand::Rng;

/// Search intent of a keyword. Earlier variants win when several match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    FirstTime,
    Parking,
    Ticket,
    Local,
    Family,
    General,
}

impl KeywordCategory {
    pub fn of(keyword: &str) -> Self {
        if keyword.contains("first time") {
            KeywordCategory::FirstTime
        } else if keyword.contains("parking") {
            KeywordCategory::Parking
        } else if keyword.contains("ticket") {
            KeywordCategory::Ticket
        } else if keyword.contains("hotel") || keyword.contains("restaurant") {
            KeywordCategory::Local
        } else if keyword.contains("family") || keyword.contains("kids") {
            KeywordCategory::Family
        } else {
            KeywordCategory::General
        }
    }

    pub fn gap_type(&self) -> &'static str {
        match self {
            KeywordCategory::FirstTime => "First-Timer Experience Gap",
            KeywordCategory::Parking => "Arena Information Gap",
            KeywordCategory::Ticket => "Ticket Reseller Dominance",
            KeywordCategory::Local => "Local Information Gap",
            KeywordCategory::Family => "Family Content Gap",
            KeywordCategory::General => "General Content Gap",
        }
    }

    pub fn content_suggestion(&self) -> ContentSuggestion {
        let (title, format, cta) = match self {
            KeywordCategory::FirstTime => (
                "Complete First-Timer's Guide",
                "Step-by-step game day experience",
                "Buy Your First Game Tickets",
            ),
            KeywordCategory::Parking => (
                "Ultimate Parking Guide",
                "Interactive map with prices & tips",
                "Reserve Parking + Tickets",
            ),
            KeywordCategory::Ticket => (
                "Official Ticket Center",
                "Price comparison vs resellers",
                "Buy Direct & Save",
            ),
            KeywordCategory::Family => (
                "Family Game Day Guide",
                "Kids activities & family packages",
                "Book Family Experience",
            ),
            KeywordCategory::Local | KeywordCategory::General => (
                "Fan Experience Guide",
                "Comprehensive information hub",
                "Plan Your Visit",
            ),
        };

        ContentSuggestion {
            title: title.to_string(),
            format: format.to_string(),
            cta: cta.to_string(),
        }
    }

    /// Messaging guidance for answer engines and voice search.
    pub fn llm_strategy(&self) -> &'static str {
        match self {
            KeywordCategory::FirstTime => {
                "Create conversational FAQ content optimized for \"what to expect\" voice searches"
            }
            KeywordCategory::Parking => {
                "Provide specific, actionable parking instructions with pricing"
            }
            KeywordCategory::Family => "Focus on family-friendly language and safety information",
            _ => "Use natural language that answers specific fan questions",
        }
    }

    /// Inclusive range of estimated monthly searches.
    pub fn search_volume_range(&self) -> (u32, u32) {
        match self {
            KeywordCategory::Ticket => (400, 999),
            KeywordCategory::FirstTime => (200, 499),
            KeywordCategory::Parking => (150, 399),
            KeywordCategory::Family => (100, 299),
            KeywordCategory::Local | KeywordCategory::General => (75, 224),
        }
    }

    pub fn estimate_search_volume<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let (low, high) = self.search_volume_range();
        rng.gen_range(low..=high)
    }
}

impl Opportunity {
    /// Enrich a finding into an opportunity record. Findings without a gap
    /// yield nothing.
    pub fn from_finding<R: Rng + ?Sized>(
        keyword: &str,
        finding: GapFinding,
        rng: &mut R,
    ) -> Option<Self> {
        if !finding.has_gap {
            return None;
        }

        let category = KeywordCategory::of(keyword);

        Some(Self {
            keyword: keyword.to_string(),
            opportunity: finding.opportunity,
            gap_type: category.gap_type().to_string(),
            team_rank: finding.team_rank,
            actual_rank: finding.actual_rank,
            competitors: finding.competitors,
            content_suggestion: category.content_suggestion(),
            llm_strategy: category.llm_strategy().to_string(),
            search_volume: category.estimate_search_volume(rng),
            is_real_data: finding.is_real_data,
            gap_reason: finding.gap_reason,
            reasons: finding.reasons,
        })
    }
}
