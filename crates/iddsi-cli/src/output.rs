//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use iddsi_service::{DeliveryHandle, DeliveryReport};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of rows in the selected format
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(rows),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

/// Print a section heading (table output only)
pub fn print_heading(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.chars().count()));
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

/// A status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Printed with [`print_success`].
    Success(String),
    /// Printed with [`print_warning`].
    Warning(String),
    /// Printed with [`print_error`].
    Error(String),
}

impl Notice {
    /// Print the line in its style.
    pub fn print(&self) {
        match self {
            Self::Success(msg) => print_success(msg),
            Self::Warning(msg) => print_warning(msg),
            Self::Error(msg) => print_error(msg),
        }
    }
}

/// Wait for a mutation's fan-out and print its outcome.
pub async fn print_delivery(delivery: DeliveryHandle) {
    let dispatched = delivery.is_dispatched();
    let report = delivery.wait().await;
    delivery_notice(dispatched, report.as_ref()).print();
}

/// Summarize a fan-out outcome.
pub fn delivery_notice(dispatched: bool, report: Option<&DeliveryReport>) -> Notice {
    let Some(report) = report else {
        return if dispatched {
            Notice::Error("Notification fan-out did not finish, see the logs".to_string())
        } else {
            Notice::Warning("Notifications are disabled, no recipients were notified".to_string())
        };
    };

    if let Some(reason) = report.abort_reason() {
        return Notice::Error(format!("No notifications sent: {reason}"));
    }

    let failed = report.failed_recipients();
    if failed.is_empty() {
        Notice::Success(format!(
            "Notified {} recipient(s): {}",
            report.delivered_count(),
            report.message
        ))
    } else {
        let ids: Vec<&str> = failed.iter().map(|id| id.as_str()).collect();
        Notice::Warning(format!(
            "Notified {} recipient(s), {} failed: {}",
            report.delivered_count(),
            failed.len(),
            ids.join(", ")
        ))
    }
}

/// Format an optional timestamp for table cells
pub fn format_time(time: Option<chrono::DateTime<chrono::Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iddsi_core::error::AppError;
    use iddsi_core::types::id::{FoodId, NotificationId, RecipientId};
    use iddsi_entity::notification::ChangeType;
    use iddsi_service::notification::{DeliveryStatus, RecipientDelivery};

    fn report(status: DeliveryStatus) -> DeliveryReport {
        DeliveryReport {
            change_type: ChangeType::Added,
            entry_id: FoodId::new("f1"),
            entry_name: "Jelly".to_string(),
            message: "Jelly was added to Level 4".to_string(),
            status,
        }
    }

    #[test]
    fn test_missing_report_distinguishes_disabled_from_lost() {
        assert!(matches!(delivery_notice(false, None), Notice::Warning(m) if m.contains("disabled")));
        assert!(matches!(delivery_notice(true, None), Notice::Error(m) if m.contains("did not finish")));
    }

    #[test]
    fn test_report_outcomes() {
        let ok = report(DeliveryStatus::Attempted(vec![RecipientDelivery {
            recipient_id: RecipientId::new("u1"),
            outcome: Ok(NotificationId::new("n1")),
        }]));
        assert_eq!(
            delivery_notice(true, Some(&ok)),
            Notice::Success("Notified 1 recipient(s): Jelly was added to Level 4".to_string())
        );

        let partial = report(DeliveryStatus::Attempted(vec![RecipientDelivery {
            recipient_id: RecipientId::new("u2"),
            outcome: Err(AppError::store("rejected")),
        }]));
        assert_eq!(
            delivery_notice(true, Some(&partial)),
            Notice::Warning("Notified 0 recipient(s), 1 failed: u2".to_string())
        );

        let aborted = report(DeliveryStatus::Aborted(AppError::permission_denied("denied")));
        assert!(matches!(delivery_notice(true, Some(&aborted)), Notice::Error(_)));
    }
}
