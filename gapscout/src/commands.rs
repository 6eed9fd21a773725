use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("gapscout")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("gapscout")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Log every keyword and classification decision")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("analyze")
                .about(
                    "Query live rankings for a team's keywords and report where the official \
                site is missing or outranked.",
                )
                .arg(
                    arg!(-t --"team" <NAME>)
                        .required(true)
                        .help("The team name, e.g. \"Hershey Bears\""),
                )
                .arg(
                    arg!(-e --"email" <EMAIL>)
                        .required(true)
                        .help("Who is requesting the analysis"),
                )
                .arg(
                    arg!(-l --"league" <LEAGUE>)
                        .required(false)
                        .help("The team's league, shown in the report"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(site_rules_arg())
                .arg(
                    arg!(--"login" <LOGIN>)
                        .required(false)
                        .help("DataForSEO API login")
                        .env("DATAFORSEO_LOGIN"),
                )
                .arg(
                    arg!(--"password" <PASSWORD>)
                        .required(false)
                        .help("DataForSEO API password")
                        .env("DATAFORSEO_PASSWORD")
                        .hide_env_values(true),
                )
                .arg(
                    arg!(--"base-url" <URL>)
                        .required(false)
                        .help("Search provider API root")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(gapscout_serp::config::DEFAULT_BASE_URL),
                )
                .arg(
                    arg!(--"delay-ms" <MILLIS>)
                        .required(false)
                        .help("Minimum spacing between provider requests (default: 3000)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--"timeout-ms" <MILLIS>)
                        .required(false)
                        .help("Per-request provider timeout (default: 30000)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            command!("keywords")
                .about("Print the search keywords generated for a team")
                .arg(
                    arg!(-t --"team" <NAME>)
                        .required(true)
                        .help("The team name"),
                ),
        )
        .subcommand(
            command!("classify")
                .about("Show which domains would count as the team's own site")
                .arg(
                    arg!(-t --"team" <NAME>)
                        .required(true)
                        .help("The team name"),
                )
                .arg(
                    arg!(<DOMAIN> ...)
                        .required(true)
                        .help("One or more domains to classify"),
                )
                .arg(site_rules_arg()),
        )
        .subcommand(
            command!("rules")
                .about("Print the active site rules as JSON")
                .arg(site_rules_arg()),
        )
        .subcommand(
            command!("status")
                .about("Check whether search provider credentials are configured")
                .arg(
                    arg!(--"login" <LOGIN>)
                        .required(false)
                        .help("DataForSEO API login")
                        .env("DATAFORSEO_LOGIN"),
                )
                .arg(
                    arg!(--"password" <PASSWORD>)
                        .required(false)
                        .help("DataForSEO API password")
                        .env("DATAFORSEO_PASSWORD")
                        .hide_env_values(true),
                ),
        )
}

fn site_rules_arg() -> clap::Arg {
    arg!(-r --"site-rules" <PATH>)
        .required(false)
        .help("JSON file with franchise and exclusion rules (default: built-in rules)")
}
