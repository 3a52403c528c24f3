// Action dispatcher - one-shot user actions forwarded to the backend
use crate::application::dashboard_api::DashboardApi;
use crate::domain::order::OrderTask;
use crate::presentation::page::{PageSurface, WidgetUpdate};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

const NETWORK_ERROR_MESSAGE: &str = "Network Error";
const SUPPLIER_ERROR_MESSAGE: &str = "Failed to connect to supplier API";

/// Fires single-attempt requests for user-triggered actions and applies the
/// success/failure reaction. Each invocation carries a fresh idempotency key
/// so the server can deduplicate a repeated click; the client never retries.
pub struct ActionDispatcher {
    api: Arc<dyn DashboardApi>,
    surface: Arc<dyn PageSurface>,
}

impl ActionDispatcher {
    pub fn new(api: Arc<dyn DashboardApi>, surface: Arc<dyn PageSurface>) -> Self {
        Self { api, surface }
    }

    /// Advance the workflow stage for an order. A declared success reloads
    /// the whole page for a brute-force state resync; anything else surfaces
    /// the server's message.
    pub async fn advance_workflow(&self, order_id: &str) {
        let clean_id = OrderTask::clean_id(order_id);
        let key = Uuid::new_v4().to_string();

        match self.api.advance_workflow(clean_id, &key).await {
            Ok(resp) if resp.is_success() => self.surface.apply(&WidgetUpdate::Reload),
            Ok(resp) => self.surface.apply(&WidgetUpdate::Dialog {
                message: format!("Error: {}", resp.message),
            }),
            Err(e) => {
                warn!(order_id = clean_id, error = %e, "workflow advance failed");
                self.surface.apply(&WidgetUpdate::Dialog {
                    message: NETWORK_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    /// Trigger an auto-reorder with the supplier. The server's message is
    /// always surfaced, success or not.
    pub async fn trigger_auto_reorder(&self) {
        let key = Uuid::new_v4().to_string();

        match self.api.trigger_auto_reorder(&key).await {
            Ok(resp) => self.surface.apply(&WidgetUpdate::Dialog {
                message: resp.message,
            }),
            Err(e) => {
                warn!(error = %e, "auto-reorder failed");
                self.surface.apply(&WidgetUpdate::Dialog {
                    message: SUPPLIER_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }
}
