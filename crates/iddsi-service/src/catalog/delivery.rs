//! Handle to a background notification fan-out.

use tokio::task::JoinHandle;
use tracing::error;

use crate::notification::DeliveryReport;

/// Handle to the fan-out spawned by a catalog mutation.
///
/// The mutation has already committed when this is returned. Dropping the
/// handle does not cancel the fan-out; call [`wait`](Self::wait) to observe
/// the per-recipient outcome.
#[derive(Debug, Default)]
pub struct DeliveryHandle {
    task: Option<JoinHandle<DeliveryReport>>,
}

impl DeliveryHandle {
    /// Handle for a spawned fan-out.
    pub(crate) fn spawned(task: JoinHandle<DeliveryReport>) -> Self {
        Self { task: Some(task) }
    }

    /// Handle for a mutation that sent no notifications (notifier disabled).
    pub fn disabled() -> Self {
        Self { task: None }
    }

    /// Whether a fan-out was started.
    pub fn is_dispatched(&self) -> bool {
        self.task.is_some()
    }

    /// Wait for the fan-out to finish.
    ///
    /// Returns `None` if no fan-out was started or the task panicked.
    pub async fn wait(self) -> Option<DeliveryReport> {
        let task = self.task?;
        match task.await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(error = %e, "Notification fan-out task failed");
                None
            }
        }
    }
}
