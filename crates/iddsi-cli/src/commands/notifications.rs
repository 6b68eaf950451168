//! Delivered notification CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use iddsi_core::result::AppResult;
use iddsi_core::types::id::RecipientId;
use iddsi_entity::notification::Notification;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for the notifications command
#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Only notifications addressed to this user
    #[arg(short, long)]
    pub recipient: Option<String>,

    /// Only unread notifications
    #[arg(short, long)]
    pub unread: bool,
}

/// Notification display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Recipient ID
    recipient: String,
    /// Change type
    change: String,
    /// Message
    message: String,
    /// Created at
    created: String,
    /// Read flag
    read: bool,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            recipient: n.recipient_id.to_string(),
            change: n.change_type.to_string(),
            message: n.message.clone(),
            created: output::format_time(n.created_timestamp),
            read: n.is_read,
        }
    }
}

/// Execute the notifications command
pub async fn execute(
    args: &NotificationsArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> AppResult<()> {
    let mut notifications = match &args.recipient {
        Some(id) => {
            ctx.notifications
                .find_by_recipient(&RecipientId::new(id.as_str()))
                .await?
        }
        None => ctx.notifications.find_all().await?,
    };
    if args.unread {
        notifications.retain(Notification::is_unread);
    }

    let rows: Vec<NotificationRow> = notifications.iter().map(NotificationRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
