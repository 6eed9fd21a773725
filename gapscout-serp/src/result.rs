use serde::{Deserialize, Serialize};

/// One listing on a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// 1-based position in the returned list
    pub rank: usize,
    pub domain: String,
    pub title: Option<String>,
}

impl SearchResultItem {
    pub fn new(rank: usize, domain: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            rank,
            domain: domain.into(),
            title: Some(title.into()),
        }
    }

    pub fn untitled(rank: usize, domain: impl Into<String>) -> Self {
        Self {
            rank,
            domain: domain.into(),
            title: None,
        }
    }
}

// Provider wire format. Only the fields the analysis reads are modelled.

#[derive(Debug, Serialize)]
pub(crate) struct TaskRequest<'a> {
    pub keyword: &'a str,
    pub location_code: u32,
    pub language_code: &'a str,
    pub device: &'a str,
    pub depth: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub status_code: u32,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub tasks: Option<Vec<ApiTask>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTask {
    #[serde(default)]
    pub result: Option<Vec<ApiTaskResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTaskResult {
    #[serde(default)]
    pub items: Option<Vec<ApiItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiItem {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ApiResponse {
    /// Ranked listings of the first task, numbered by their position in the list.
    pub(crate) fn into_items(self) -> Option<Vec<SearchResultItem>> {
        let items = self
            .tasks?
            .into_iter()
            .next()?
            .result?
            .into_iter()
            .next()?
            .items?;

        Some(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| SearchResultItem {
                    rank: index + 1,
                    domain: item
                        .domain
                        .filter(|d| !d.is_empty())
                        .unwrap_or_else(|| "unknown-domain".to_string()),
                    title: item.title,
                })
                .collect(),
        )
    }
}
