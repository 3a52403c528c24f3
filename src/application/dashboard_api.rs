// API trait for the dashboard backend
use crate::domain::alert::Alert;
use crate::domain::maintenance::MaintenancePrediction;
use crate::domain::order::OrderTask;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Failure talking to the backend. Polling treats every variant the same
/// (log and keep the previous render); the action dispatcher maps them all
/// to its fixed network-failure dialog.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Outcome of a workflow advance. Success is declared by the server,
/// anything else carries an operator-facing message.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl WorkflowResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderResponse {
    pub message: String,
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Current alert queue, refetched wholesale.
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError>;

    /// Latest predictive maintenance snapshot.
    async fn fetch_maintenance(&self) -> Result<MaintenancePrediction, ApiError>;

    /// Active operator tasks.
    async fn fetch_orders(&self) -> Result<Vec<OrderTask>, ApiError>;

    /// Advance the workflow stage for an order. `order_id` must already be
    /// cleaned of its display marker.
    async fn advance_workflow(
        &self,
        order_id: &str,
        idempotency_key: &str,
    ) -> Result<WorkflowResponse, ApiError>;

    /// Trigger an auto-reorder with the supplier, no payload.
    async fn trigger_auto_reorder(&self, idempotency_key: &str)
        -> Result<ReorderResponse, ApiError>;
}
