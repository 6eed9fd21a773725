pub mod handlers;

pub use handlers::{
    build_serp_config, classify_domains, failure_message, load_site_rules, write_report,
};
