pub mod analysis;
pub mod analyzer;
pub mod classifier;
pub mod enrich;
pub mod error;
pub mod fallback;
pub mod keywords;
pub mod model;
pub mod report;

pub use analysis::{AnalysisOptions, AnalysisProgressCallback, SearchProvider, execute_analysis};
pub use classifier::{SiteClassifier, SiteRules};
pub use error::AnalysisError;
pub use model::{AnalysisRequest, AnalysisRun, GapFinding, Opportunity, TeamRank};

pub fn print_banner() {
    eprintln!(
        r#"
   __ _  __ _ _ __  ___  ___ ___  _   _| |_
  / _` |/ _` | '_ \/ __|/ __/ _ \| | | | __|
 | (_| | (_| | |_) \__ \ (_| (_) | |_| | |_
  \__, |\__,_| .__/|___/\___\___/ \__,_|\__|
  |___/      |_|
        search gap analysis v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
