//! Food library CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use iddsi_core::error::AppError;
use iddsi_core::result::AppResult;
use iddsi_core::types::id::FoodId;
use iddsi_entity::food::{CatalogEntry, FoodDraft};
use iddsi_service::FoodFilter;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for food commands
#[derive(Debug, Args)]
pub struct FoodArgs {
    /// Food subcommand
    #[command(subcommand)]
    pub command: FoodCommand,
}

/// Food subcommands
#[derive(Debug, Subcommand)]
pub enum FoodCommand {
    /// List the food library
    List {
        /// Match name or description (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// `food`, `drink` or `all`
        #[arg(short, long)]
        category: Option<String>,
        /// IDDSI level 0-7 or `all`
        #[arg(short, long)]
        level: Option<String>,
    },
    /// Add a food and notify every user
    Add(EntryFields),
    /// Edit a food and notify every user
    Update {
        /// Food ID
        id: String,
        /// Fields to change
        #[command(flatten)]
        fields: EntryFields,
    },
    /// Delete a food and notify every user
    Delete {
        /// Food ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Foods rated below the configured threshold
    LowRated {
        /// Override the configured threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },
}

/// Editable food fields
#[derive(Debug, Args)]
pub struct EntryFields {
    /// Display name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Description
    #[arg(short, long)]
    pub description: Option<String>,
    /// IDDSI level 0-7
    #[arg(short, long)]
    pub level: Option<String>,
    /// `food` or `drink`
    #[arg(short, long)]
    pub category: Option<String>,
    /// Preparation instructions
    #[arg(long)]
    pub preparation: Option<String>,
    /// Texture notes
    #[arg(long)]
    pub texture: Option<String>,
    /// Serving tips
    #[arg(long)]
    pub tips: Option<String>,
}

/// Food display row for table output
#[derive(Debug, Serialize, Tabled)]
struct FoodRow {
    /// Food ID
    id: String,
    /// Name
    name: String,
    /// IDDSI level
    level: String,
    /// Category
    category: String,
    /// Average rating
    rating: String,
    /// Comment count
    comments: usize,
    /// Last update
    updated_at: String,
}

impl From<&CatalogEntry> for FoodRow {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            level: entry.level_label(),
            category: entry.category.to_string(),
            rating: format!("{:.1}", entry.average_rating),
            comments: entry.comment_count(),
            updated_at: output::format_time(entry.updated_at),
        }
    }
}

/// Execute food commands
pub async fn execute(args: &FoodArgs, ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        FoodCommand::List {
            search,
            category,
            level,
        } => {
            let filter = FoodFilter {
                search: search.clone(),
                category: parse_filter(category.as_deref())?,
                level: parse_filter(level.as_deref())?,
            };
            let foods = ctx.dashboard.search_foods(&filter).await?;
            let rows: Vec<FoodRow> = foods.iter().map(FoodRow::from).collect();
            output::print_list(&rows, format);
        }
        FoodCommand::Add(fields) => {
            let name = match &fields.name {
                Some(name) => name.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Food name")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            let draft = fields.apply(FoodDraft::new(name))?;

            let mutation = ctx.catalog.add_food(draft).await?;
            output::print_success(&format!(
                "Food '{}' added ({})",
                mutation.entry.name, mutation.entry.id
            ));
            output::print_delivery(mutation.delivery).await;
            ctx.persist().await?;
        }
        FoodCommand::Update { id, fields } => {
            let id = FoodId::new(id.as_str());
            let current = ctx.catalog.get(&id).await?;
            let draft = fields.apply(draft_from(&current))?;

            let mutation = ctx.catalog.update_food(&id, draft).await?;
            output::print_success(&format!("Food '{}' updated", mutation.entry.name));
            output::print_delivery(mutation.delivery).await;
            ctx.persist().await?;
        }
        FoodCommand::Delete { id, yes } => {
            let id = FoodId::new(id.as_str());
            let current = ctx.catalog.get(&id).await?;

            if !*yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Are you sure you want to delete \"{}\"?",
                        current.name
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirmed {
                    output::print_warning("Delete cancelled");
                    return Ok(());
                }
            }

            let mutation = ctx.catalog.delete_food(&id).await?;
            output::print_success(&format!("Food '{}' deleted", mutation.entry.name));
            output::print_delivery(mutation.delivery).await;
            ctx.persist().await?;
        }
        FoodCommand::LowRated { threshold } => {
            let threshold = threshold.unwrap_or(ctx.config.dashboard.low_rating_threshold);
            let foods = ctx.dashboard.low_rated_foods(threshold).await?;
            let rows: Vec<FoodRow> = foods.iter().map(FoodRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

impl EntryFields {
    /// Overlay the given fields onto `draft`.
    fn apply(&self, mut draft: FoodDraft) -> AppResult<FoodDraft> {
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(level) = &self.level {
            draft.iddsi_level = Some(level.parse()?);
        }
        if let Some(category) = &self.category {
            draft.category = category.parse()?;
        }
        if let Some(preparation) = &self.preparation {
            draft.preparation = preparation.clone();
        }
        if let Some(texture) = &self.texture {
            draft.texture = texture.clone();
        }
        if let Some(tips) = &self.tips {
            draft.tips = tips.clone();
        }
        Ok(draft)
    }
}

fn draft_from(entry: &CatalogEntry) -> FoodDraft {
    FoodDraft {
        name: entry.name.clone(),
        description: entry.description.clone(),
        iddsi_level: entry.iddsi_level,
        category: entry.category,
        preparation: entry.preparation.clone(),
        texture: entry.texture.clone(),
        tips: entry.tips.clone(),
    }
}

/// Parse an optional filter value where `all` means no filter.
fn parse_filter<T>(value: Option<&str>) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = AppError>,
{
    match value.map(str::trim) {
        None => Ok(None),
        Some(v) if v.is_empty() || v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}
