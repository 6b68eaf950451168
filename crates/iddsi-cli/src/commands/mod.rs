//! CLI command definitions and dispatch.

pub mod food;
pub mod issues;
pub mod notifications;
pub mod recipient;
pub mod stats;

use clap::{Parser, Subcommand};

use iddsi_core::config::AppConfig;
use iddsi_core::result::AppResult;

use crate::context::AppContext;
use crate::output::OutputFormat;

/// IDDSI dashboard: food library management and change notification
#[derive(Debug, Parser)]
#[command(name = "iddsi", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Food library management
    Food(food::FoodArgs),
    /// Reported issues, most recent first
    Issues(issues::IssuesArgs),
    /// Dashboard statistics
    Stats,
    /// Delivered notifications
    Notifications(notifications::NotificationsArgs),
    /// Registered users
    Recipient(recipient::RecipientArgs),
}

impl Cli {
    /// Load configuration from the `--config` path
    pub fn load_config(&self) -> AppResult<AppConfig> {
        AppConfig::load(&self.config)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> AppResult<()> {
        let ctx = AppContext::open(config).await?;
        match &self.command {
            Commands::Food(args) => food::execute(args, &ctx, self.format).await,
            Commands::Issues(args) => issues::execute(args, &ctx, self.format).await,
            Commands::Stats => stats::execute(&ctx, self.format).await,
            Commands::Notifications(args) => notifications::execute(args, &ctx, self.format).await,
            Commands::Recipient(args) => recipient::execute(args, &ctx, self.format).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food_delete() {
        let cli = Cli::try_parse_from(["iddsi", "food", "delete", "abc", "--yes"]).unwrap();
        match cli.command {
            Commands::Food(food::FoodArgs {
                command: food::FoodCommand::Delete { id, yes },
            }) => {
                assert_eq!(id, "abc");
                assert!(yes);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, "config/default.toml");
    }

    #[test]
    fn test_parse_json_format() {
        let cli = Cli::try_parse_from(["iddsi", "--format", "json", "stats"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
