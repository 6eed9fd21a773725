use gapscout::handlers::*;
use gapscout_core::{AnalysisError, SiteClassifier};
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};
use url::Url;

#[test]
fn test_load_site_rules_default() {
    let rules = load_site_rules(None).unwrap();
    assert!(rules.exclusions.contains(&"chicagobears".to_string()));
    assert_eq!(rules.franchises[0].name, "Hershey Bears");
}

#[test]
fn test_load_site_rules_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(
        temp_file,
        r#"{{"franchises": [{{"name": "Iowa Wild", "aliases": ["iowa wild"], "domain_patterns": ["iowawild"]}}]}}"#
    )?;

    let path = temp_file.path().to_string_lossy().into_owned();
    let rules = load_site_rules(Some(&path))?;

    assert_eq!(rules.franchises.len(), 1);
    assert_eq!(rules.franchises[0].domain_patterns, vec!["iowawild".to_string()]);
    assert!(rules.exclusions.is_empty());
    Ok(())
}

#[test]
fn test_load_site_rules_missing_file() {
    let path = "/nonexistent/gapscout/rules.json".to_string();
    let err = load_site_rules(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/gapscout/rules.json"));
}

#[test]
fn test_load_site_rules_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "not json")?;

    let path = temp_file.path().to_string_lossy().into_owned();
    assert!(load_site_rules(Some(&path)).is_err());
    Ok(())
}

#[test]
fn test_build_serp_config_requires_credentials() {
    let login = "user".to_string();
    assert!(build_serp_config(Some(&login), None, None).is_err());
    assert!(build_serp_config(None, None, None).is_err());

    let blank = "  ".to_string();
    assert!(build_serp_config(Some(&login), Some(&blank), None).is_err());
}

#[test]
fn test_build_serp_config_with_base_url() {
    let login = "user".to_string();
    let password = "secret".to_string();
    let base_url = Url::parse("http://127.0.0.1:8080/v3/").unwrap();

    let config = build_serp_config(Some(&login), Some(&password), Some(&base_url)).unwrap();

    assert_eq!(config.login, "user");
    assert_eq!(config.password, "secret");
    assert_eq!(config.base_url, "http://127.0.0.1:8080/v3");
    assert_eq!(config.min_delay_ms, 3000);
    assert_eq!(config.timeout_ms, 30000);
}

#[test]
fn test_classify_domains_keeps_order() {
    let classifier = SiteClassifier::default();
    let domains = vec![
        "hersheybears.com".to_string(),
        "stubhub.com".to_string(),
        "chicagobears.com".to_string(),
        "hersheypark.com".to_string(),
    ];

    let verdicts = classify_domains(&classifier, "Hershey Bears", &domains);

    assert_eq!(
        verdicts,
        vec![
            ("hersheybears.com".to_string(), true),
            ("stubhub.com".to_string(), false),
            ("chicagobears.com".to_string(), false),
            ("hersheypark.com".to_string(), true),
        ]
    );
}

#[test]
fn test_write_report_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.json");

    write_report("{\"success\": true}", Some(&path))?;

    assert_eq!(std::fs::read_to_string(&path)?, "{\"success\": true}");
    Ok(())
}

#[test]
fn test_write_report_to_missing_directory_fails() {
    let path = PathBuf::from("/nonexistent/gapscout/report.txt");
    assert!(write_report("report", Some(&path)).is_err());
}

#[test]
fn test_failure_message_for_invalid_input() {
    let err = anyhow::Error::from(AnalysisError::MissingTeamName);
    assert_eq!(failure_message(&err), "Team name is required");

    let err = anyhow::Error::from(AnalysisError::MissingRequester);
    assert_eq!(failure_message(&err), "Requester identity is required");
}

#[test]
fn test_failure_message_is_generic_otherwise() {
    let err = anyhow::anyhow!("connection reset by peer");
    assert_eq!(failure_message(&err), "Analysis failed");
}
