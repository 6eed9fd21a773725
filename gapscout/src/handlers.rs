use anyhow::{Context, bail};
use clap::ArgMatches;
use colored::Colorize;
use gapscout_core::keywords::generate_keywords;
use gapscout_core::report::{ReportFormat, generate_report};
use gapscout_core::{
    AnalysisError, AnalysisOptions, AnalysisProgressCallback, AnalysisRequest, SiteClassifier,
    SiteRules, execute_analysis,
};
use gapscout_serp::{SerpClient, SerpConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use url::Url;

/// Install the fmt subscriber. Logs go to stderr, like every other status
/// line, so stdout carries only the report.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-in rules, or the JSON table at `path` (`~` is expanded).
pub fn load_site_rules(path: Option<&String>) -> anyhow::Result<SiteRules> {
    let Some(path) = path else {
        return Ok(SiteRules::default());
    };

    let expanded = shellexpand::tilde(path);
    let rules_path = Path::new(expanded.as_ref());
    SiteRules::load(rules_path)
        .with_context(|| format!("Failed to load site rules from {}", rules_path.display()))
}

/// Provider settings from flags or environment. Both credentials are required.
pub fn build_serp_config(
    login: Option<&String>,
    password: Option<&String>,
    base_url: Option<&Url>,
) -> anyhow::Result<SerpConfig> {
    let config = SerpConfig::new(
        login.map(String::as_str).unwrap_or_default(),
        password.map(String::as_str).unwrap_or_default(),
    );
    if !config.has_credentials() {
        bail!(
            "DataForSEO credentials missing: set DATAFORSEO_LOGIN and DATAFORSEO_PASSWORD \
             or pass --login and --password"
        );
    }

    Ok(match base_url {
        Some(url) => config.with_base_url(url.as_str().trim_end_matches('/')),
        None => config,
    })
}

/// Per-domain verdicts, in input order.
pub fn classify_domains(
    classifier: &SiteClassifier,
    team_name: &str,
    domains: &[String],
) -> Vec<(String, bool)> {
    domains
        .iter()
        .map(|domain| (domain.clone(), classifier.is_team_site(domain, team_name)))
        .collect()
}

/// Save the report to `output` or print it.
pub fn write_report(report: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            fs::write(&expanded, report)
                .with_context(|| format!("Failed to write report to {}", expanded))?;
            eprintln!("{} Report saved to {}", "✓".green().bold(), expanded.bright_white());
        }
        None => print!("{}", report),
    }
    Ok(())
}

/// What the user sees when `analyze` fails. Input problems are reported
/// as such; anything else gets a generic message.
pub fn failure_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<AnalysisError>() {
        Some(err @ (AnalysisError::MissingTeamName | AnalysisError::MissingRequester)) => {
            err.to_string()
        }
        _ => "Analysis failed".to_string(),
    }
}

pub async fn handle_analyze(sub_matches: &ArgMatches, quiet: bool) -> anyhow::Result<()> {
    let team = sub_matches.get_one::<String>("team").map(String::as_str).unwrap_or_default();
    let email = sub_matches.get_one::<String>("email").map(String::as_str).unwrap_or_default();
    let league = sub_matches.get_one::<String>("league").cloned();
    let output = sub_matches.get_one::<PathBuf>("output");
    let format = sub_matches
        .get_one::<String>("format")
        .map(|f| ReportFormat::from_str(f))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(ReportFormat::Text);

    let request = AnalysisRequest::new(team, league, email).validated()?;
    let rules = load_site_rules(sub_matches.get_one::<String>("site-rules"))?;
    let mut config = build_serp_config(
        sub_matches.get_one::<String>("login"),
        sub_matches.get_one::<String>("password"),
        sub_matches.get_one::<Url>("base-url"),
    )?;
    if let Some(delay_ms) = sub_matches.get_one::<u64>("delay-ms") {
        config = config.with_min_delay(Duration::from_millis(*delay_ms));
    }
    if let Some(timeout_ms) = sub_matches.get_one::<u64>("timeout-ms") {
        config = config.with_timeout(Duration::from_millis(*timeout_ms));
    }

    let client = SerpClient::new(config)?;

    if !quiet {
        eprintln!(
            "\n{} Analyzing search gaps for {}",
            "→".blue().bold(),
            request.team_name.bright_white().bold()
        );
        eprintln!(
            "Provider delay: {} ms between requests, timeout {} ms\n",
            client.rate_limiter().min_delay().as_millis(),
            client.config().timeout_ms
        );
    }
    let classifier = SiteClassifier::new(rules);
    let options = AnalysisOptions::default();
    let mut rng = StdRng::from_entropy();

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };

    let spinner_clone = spinner.clone();
    let progress_callback: AnalysisProgressCallback = Arc::new(move |msg: String| {
        spinner_clone.set_message(msg);
    });

    let result = execute_analysis(
        &client,
        &classifier,
        &request,
        &options,
        &mut rng,
        Some(progress_callback),
    )
    .await;
    spinner.finish_and_clear();
    let run = result?;

    if !quiet {
        eprintln!(
            "{} Analysis complete: {} gap(s) in {} ms\n",
            "✓".green().bold(),
            run.meta.gaps_found,
            run.meta.processing_time_ms
        );
    }

    if output.is_some() {
        colored::control::set_override(false);
    }
    let report = generate_report(&run, format)?;
    write_report(&report, output)
}

pub fn handle_keywords(sub_matches: &ArgMatches) {
    let team = sub_matches.get_one::<String>("team").map(String::as_str).unwrap_or_default();
    for (idx, keyword) in generate_keywords(team).iter().enumerate() {
        println!("{:>3}. {}", idx + 1, keyword);
    }
}

pub fn handle_classify(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    let team = sub_matches.get_one::<String>("team").map(String::as_str).unwrap_or_default();
    let domains: Vec<String> = sub_matches
        .get_many::<String>("DOMAIN")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let classifier = SiteClassifier::new(load_site_rules(sub_matches.get_one::<String>("site-rules"))?);

    for (domain, is_team) in classify_domains(&classifier, team, &domains) {
        if is_team {
            println!("{} {:<40} {}", "✓".green().bold(), domain, "team site".green());
        } else {
            println!("{} {:<40} {}", "✗".red(), domain, "other".dimmed());
        }
    }
    Ok(())
}

pub fn handle_rules(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    let classifier = SiteClassifier::new(load_site_rules(sub_matches.get_one::<String>("site-rules"))?);
    println!("{}", serde_json::to_string_pretty(classifier.rules())?);
    Ok(())
}

pub fn handle_status(sub_matches: &ArgMatches) {
    let config = SerpConfig::new(
        sub_matches.get_one::<String>("login").map(String::as_str).unwrap_or_default(),
        sub_matches.get_one::<String>("password").map(String::as_str).unwrap_or_default(),
    );

    println!("Provider:     {}", config.base_url);
    if config.has_credentials() {
        println!("Credentials:  {}", "configured".green().bold());
    } else {
        println!("Credentials:  {}", "missing".red().bold());
        println!(
            "{} set DATAFORSEO_LOGIN and DATAFORSEO_PASSWORD to run live analyses",
            "ℹ".blue()
        );
    }
}
