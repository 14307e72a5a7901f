//! Roster scraper CLI
//!
//! Scrapes a league's clubs and players and prints the roster.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use roster_scraper::{
    error::Result,
    models::{Config, Roster},
    pipeline::{RosterScraper, ScrapeReport},
};

/// roster - League roster scraper
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Scrapes club rosters from a football statistics site"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every club and print its players
    Scrape {
        /// Also write the roster as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// League index URL (overrides the configured one)
        #[arg(long)]
        league_url: Option<String>,
    },

    /// List the club names found on player pages
    Teams {
        /// League index URL (overrides the configured one)
        #[arg(long)]
        league_url: Option<String>,
    },

    /// Fetch and show a single player page
    Player {
        /// Player page URL
        url: String,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print the roster in the console report layout.
fn print_roster(roster: &Roster) {
    for (team, players) in roster.teams() {
        println!("Team: {team}");
        for player in players {
            println!("{player}");
        }
        println!("{}", "-".repeat(50));
    }
}

fn log_report(report: &ScrapeReport) {
    let stats = &report.stats;
    log::info!(
        "Teams: {} ({} failed), players: {} ({} failed), dropped: {}, took {}s",
        stats.team_units,
        stats.team_failures,
        stats.player_units,
        stats.player_failures,
        stats.dropped_players,
        stats.elapsed_secs()
    );
    for failure in &report.failures {
        log::warn!("  failed {}: {}", failure.unit, failure.error);
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    log::info!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Scrape { output, league_url } => {
            if let Some(url) = league_url {
                config.site.league_path = url;
            }
            config.validate()?;

            let scraper = RosterScraper::with_http(Arc::new(config))?;
            let report = scraper.scrape().await?;

            print_roster(&report.roster);
            log_report(&report);

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&report.roster)?;
                tokio::fs::write(&path, json).await?;
                log::info!("Roster saved to {}", path.display());
            }
        }

        Command::Teams { league_url } => {
            if let Some(url) = league_url {
                config.site.league_path = url;
            }
            config.validate()?;

            let scraper = RosterScraper::with_http(Arc::new(config))?;
            let result = scraper.discover_team_names().await?;
            for name in &result.names {
                println!("{name}");
            }
            for failure in &result.failures {
                log::warn!("  failed {}: {}", failure.unit, failure.error);
            }
        }

        Command::Player { url } => {
            config.validate()?;
            let scraper = RosterScraper::with_http(Arc::new(config))?;
            let player = scraper.fetch_player(&url).await?;
            println!("{}", player.format("Team: {team}"));
            println!("{player}");
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (site URLs and page selectors)");
        }
    }

    log::info!("Done!");

    Ok(())
}
