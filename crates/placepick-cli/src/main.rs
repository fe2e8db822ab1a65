use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placepick_infrastructure::ClientConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "placepick")]
#[command(
    about = "Placepick CLI - nickname registration and profile preferences",
    long_about = None
)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check or register a nickname
    Nickname {
        #[command(subcommand)]
        action: NicknameAction,
    },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List the selectable places and moods
    Catalog,
}

#[derive(Subcommand)]
enum NicknameAction {
    /// Validate locally and ask the server whether the nickname is taken
    Check { name: String },
    /// Validate, check for duplicates, then register the nickname
    Register { name: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the current profile
    Show,
    /// Edit fields and save them in one request
    Edit {
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Toggle a place (repeatable)
        #[arg(long = "place")]
        places: Vec<String>,
        /// Toggle a mood (repeatable)
        #[arg(long = "mood")]
        moods: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let default_directive = format!(
        "warn,placepick={level},placepick_core={level},placepick_application={level},placepick_infrastructure={level}"
    );
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Nickname { action } => match action {
            NicknameAction::Check { name } => commands::nickname::check(&config, &name).await?,
            NicknameAction::Register { name } => {
                commands::nickname::register(&config, &name).await?
            }
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&config).await?,
            ProfileAction::Edit {
                nickname,
                email,
                places,
                moods,
            } => {
                let edits = commands::profile::ProfileEdits {
                    nickname,
                    email,
                    places,
                    moods,
                };
                commands::profile::edit(&config, edits).await?
            }
        },
        Commands::Catalog => commands::catalog::list(&config),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_profile_edit_collects_repeated_toggles() {
        let cli = Cli::parse_from([
            "placepick", "profile", "edit", "--place", "강남", "--place", "성수", "--mood", "코지",
        ]);
        match cli.command {
            Commands::Profile {
                action: ProfileAction::Edit { places, moods, nickname, .. },
            } => {
                assert_eq!(places, vec!["강남", "성수"]);
                assert_eq!(moods, vec!["코지"]);
                assert!(nickname.is_none());
            }
            _ => panic!("expected profile edit"),
        }
    }
}
