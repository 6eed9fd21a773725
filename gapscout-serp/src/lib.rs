pub mod client;
pub mod config;
pub mod error;
pub mod limiter;
pub mod result;

pub use client::SerpClient;
pub use config::SerpConfig;
pub use error::SerpError;
pub use limiter::RateLimiter;
pub use result::SearchResultItem;
