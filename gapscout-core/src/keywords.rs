// Keyword generation from search-intent templates

/// Placeholder replaced by the normalized team name.
pub const TEAM_PLACEHOLDER: &str = "{team}";

/// Phrases this short or shorter are dropped after substitution.
const MIN_KEYWORD_LEN: usize = 5;

/// Search-intent templates, grouped by intent. Order matters: the
/// orchestrator only queries the first few live.
pub const KEYWORD_TEMPLATES: &[&str] = &[
    // First-timer
    "first time {team} game",
    "what to expect {team} hockey",
    "first hockey game {team}",
    "attending {team} game guide",
    // Parking
    "{team} parking tips",
    "where to park {team} game",
    "best parking {team}",
    "cheap parking {team}",
    // Tickets
    "cheap {team} tickets",
    "{team} ticket deals",
    "{team} discount tickets",
    "{team} group tickets",
    // Experience
    "what to wear {team} game",
    "food at {team} games",
    "{team} concessions",
    "best seats {team}",
    // Local and travel
    "hotels near {team}",
    "restaurants near {team}",
    "things to do near {team}",
    "{team} game day experience",
    // Family
    "{team} family packages",
    "kids activities {team}",
    "{team} birthday parties",
];

/// Lower-case, trim, and drop everything but ASCII letters, digits and whitespace.
pub fn normalize_team_name(team_name: &str) -> String {
    team_name
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Expand every template for `team_name`, in template order.
pub fn generate_keywords(team_name: &str) -> Vec<String> {
    let name = normalize_team_name(team_name);

    KEYWORD_TEMPLATES
        .iter()
        .map(|pattern| pattern.replacen(TEAM_PLACEHOLDER, &name, 1))
        .filter(|keyword| keyword.chars().count() > MIN_KEYWORD_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_team_name("  St. Louis Blues! "), "st louis blues");
        assert_eq!(normalize_team_name("Hershey Bears"), "hershey bears");
        assert_eq!(normalize_team_name("Team-99"), "team99");
    }

    #[test]
    fn test_every_template_has_one_placeholder() {
        for template in KEYWORD_TEMPLATES {
            assert_eq!(template.matches(TEAM_PLACEHOLDER).count(), 1, "{}", template);
        }
    }
}
