use commands::command_argument_builder;
use gapscout::handlers::{
    failure_message, handle_analyze, handle_classify, handle_keywords, handle_rules,
    handle_status, init_logging,
};
use gapscout_core::print_banner;
use tracing::error;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_logging(chosen_command.get_flag("verbose"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let result = match chosen_command.subcommand() {
        // No subcommand provided, just show the banner
        None => Ok(()),
        Some(("analyze", primary_command)) => {
            if let Err(e) = handle_analyze(primary_command, quiet).await {
                error!("{:#}", e);
                eprintln!("✗ {}", failure_message(&e));
                std::process::exit(1);
            }
            Ok(())
        }
        Some(("keywords", primary_command)) => {
            handle_keywords(primary_command);
            Ok(())
        }
        Some(("classify", primary_command)) => handle_classify(primary_command),
        Some(("rules", primary_command)) => handle_rules(primary_command),
        Some(("status", primary_command)) => {
            handle_status(primary_command);
            Ok(())
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
