use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerpError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Provider error {code}: {message}")]
    Provider { code: u32, message: String },

    #[error("Keyword is empty")]
    EmptyKeyword,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Missing provider credentials")]
    MissingCredentials,
}

pub type Result<T> = std::result::Result<T, SerpError>;
