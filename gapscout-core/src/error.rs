use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Team name is required")]
    MissingTeamName,

    #[error("Requester identity is required")]
    MissingRequester,

    #[error("Failed to read site rules: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid site rules: {0}")]
    SiteRules(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
