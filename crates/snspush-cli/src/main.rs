mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let profile = &cli.profile;

    match &cli.command {
        Commands::Create(args) => {
            commands::create::create(args, profile).await?;
        }
        Commands::List(args) => {
            commands::list::list(args, profile).await?;
        }
        Commands::Config(args) => match &args.command {
            cli::ConfigCommands::Show => {
                let cfg = config::load_profile(profile)?;
                println!("{}: {}", "Profile".cyan(), profile);
                println!(
                    "{}: {}",
                    "Region".cyan(),
                    cfg.region.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "{}: {}",
                    "Endpoint".cyan(),
                    cfg.endpoint_url.as_deref().unwrap_or("(not set)")
                );
            }
            cli::ConfigCommands::Set(set_args) => {
                let mut cfg = config::load_profile(profile)?;
                match set_args.key.as_str() {
                    "region" => cfg.region = Some(set_args.value.clone()),
                    "endpoint-url" | "endpoint_url" => {
                        cfg.endpoint_url = Some(set_args.value.clone())
                    }
                    other => {
                        anyhow::bail!(
                            "Unknown config key: {other}. Valid keys: region, endpoint-url"
                        )
                    }
                }
                config::save_profile(profile, &cfg)?;
                output::print_success(&format!("Set {} = {}", set_args.key, set_args.value));
            }
        },
    }

    Ok(())
}

/// Installs the log subscriber. Events go to stderr so stdout stays clean
/// for command output; RUST_LOG overrides the verbosity flags when set.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
