// Decides whether a result domain belongs to the team's own web presence

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Explicit allow-list for a franchise whose domains don't follow its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseRule {
    pub name: String,
    /// Matched as substrings of the lower-cased team name
    pub aliases: Vec<String>,
    /// Matched as substrings of the normalized domain
    pub domain_patterns: Vec<String>,
}

/// Classifier configuration: franchise allow-lists plus domains that are
/// never team-owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRules {
    #[serde(default)]
    pub franchises: Vec<FranchiseRule>,
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl Default for SiteRules {
    fn default() -> Self {
        Self {
            franchises: vec![FranchiseRule {
                name: "Hershey Bears".to_string(),
                aliases: vec!["hershey".to_string()],
                domain_patterns: vec![
                    "hersheybears".to_string(),
                    "hersheyentertainment".to_string(),
                    "hersheypark".to_string(),
                ],
            }],
            exclusions: vec![
                "chicagobears".to_string(),
                "chicagowolves".to_string(),
                "cleveland".to_string(),
                "soldierfieldparking".to_string(),
            ],
        }
    }
}

impl SiteRules {
    /// Load a rules table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let rules = serde_json::from_str(&content)?;
        Ok(rules)
    }

    pub fn franchise_for(&self, team_name: &str) -> Option<&FranchiseRule> {
        let team = team_name.trim().to_lowercase();
        if team.is_empty() {
            return None;
        }
        self.franchises.iter().find(|franchise| {
            franchise
                .aliases
                .iter()
                .map(|alias| alias.trim().to_lowercase())
                .any(|alias| !alias.is_empty() && team.contains(&alias))
        })
    }
}

/// Lower-case and keep ASCII letters only, so `www.Hershey-Bears.com`
/// becomes `wwwhersheybearscom`.
pub fn normalize_domain(domain: &str) -> String {
    domain
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SiteClassifier {
    rules: SiteRules,
}

impl SiteClassifier {
    pub fn new(rules: SiteRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SiteRules {
        &self.rules
    }

    /// True when `domain` looks like one of `team_name`'s own properties.
    pub fn is_team_site(&self, domain: &str, team_name: &str) -> bool {
        let clean_domain = normalize_domain(domain);
        let team = team_name.trim().to_lowercase();
        if clean_domain.is_empty() || team.is_empty() {
            return false;
        }

        if self.is_excluded(&clean_domain) {
            debug!("{} is on the exclusion list", domain);
            return false;
        }

        if let Some(franchise) = self.rules.franchise_for(&team) {
            return franchise
                .domain_patterns
                .iter()
                .map(|pattern| normalize_domain(pattern))
                .any(|pattern| !pattern.is_empty() && clean_domain.contains(&pattern));
        }

        let words: Vec<&str> = team
            .split_whitespace()
            .filter(|word| word.chars().count() > 2)
            .collect();

        let has_words = if words.len() >= 2 {
            words.iter().all(|word| clean_domain.contains(word))
        } else {
            words.iter().any(|word| clean_domain.contains(word))
        };

        let concatenated: String = team.split_whitespace().collect();
        let has_concatenated = clean_domain.contains(&concatenated);

        has_words || has_concatenated
    }

    fn is_excluded(&self, clean_domain: &str) -> bool {
        self.rules
            .exclusions
            .iter()
            .map(|exclusion| normalize_domain(exclusion))
            .any(|exclusion| !exclusion.is_empty() && clean_domain.contains(&exclusion))
    }
}
