//! User registration CLI commands.
//!
//! Users normally register through the mobile app; these commands seed a
//! local store.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use iddsi_core::result::AppResult;
use iddsi_entity::recipient::Recipient;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for recipient commands
#[derive(Debug, Args)]
pub struct RecipientArgs {
    /// Recipient subcommand
    #[command(subcommand)]
    pub command: RecipientCommand,
}

/// Recipient subcommands
#[derive(Debug, Subcommand)]
pub enum RecipientCommand {
    /// List registered users
    List,
    /// Register a user
    Add {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Food IDDSI level
        #[arg(long)]
        food_level: Option<String>,
        /// Fluid IDDSI level
        #[arg(long)]
        fluid_level: Option<String>,
        /// Preferred category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Recipient display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RecipientRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Effective level
    level: String,
    /// Preferred category
    category: String,
}

/// Execute recipient commands
pub async fn execute(
    args: &RecipientArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        RecipientCommand::List => {
            let recipients = ctx.recipients.find_all().await?;
            let rows: Vec<RecipientRow> = recipients
                .iter()
                .map(|r| RecipientRow {
                    id: r.id.to_string(),
                    name: r.name.clone().unwrap_or_default(),
                    email: r.email.clone().unwrap_or_default(),
                    level: r.effective_level().unwrap_or("-").to_string(),
                    category: r.selected_category.clone().unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        RecipientCommand::Add {
            name,
            email,
            food_level,
            fluid_level,
            category,
        } => {
            let recipient = Recipient {
                name: name.clone(),
                email: email.clone(),
                food_level: food_level.clone(),
                fluid_level: fluid_level.clone(),
                selected_category: category.clone(),
                ..Default::default()
            };
            let id = ctx.recipients.create(&recipient).await?;
            output::print_success(&format!("Recipient registered ({id})"));
            ctx.persist().await?;
        }
    }

    Ok(())
}
