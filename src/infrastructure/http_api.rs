// HTTP implementation of the dashboard backend API
use crate::application::dashboard_api::{
    ApiError, DashboardApi, ReorderResponse, WorkflowResponse,
};
use crate::domain::alert::Alert;
use crate::domain::maintenance::MaintenancePrediction;
use crate::domain::order::OrderTask;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDashboardApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        idempotency_key: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .header("Accept", "application/json")
            .header("Idempotency-Key", idempotency_key)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get_json("/api/alerts").await
    }

    async fn fetch_maintenance(&self) -> Result<MaintenancePrediction, ApiError> {
        self.get_json("/api/predictive_maintenance").await
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderTask>, ApiError> {
        self.get_json("/api/orders").await
    }

    async fn advance_workflow(
        &self,
        order_id: &str,
        idempotency_key: &str,
    ) -> Result<WorkflowResponse, ApiError> {
        let path = format!("/api/workflow/next/{}", urlencoding::encode(order_id));
        self.post_json(&path, idempotency_key).await
    }

    async fn trigger_auto_reorder(
        &self,
        idempotency_key: &str,
    ) -> Result<ReorderResponse, ApiError> {
        self.post_json("/api/auto_reorder", idempotency_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_trims_trailing_slash() {
        let api = HttpDashboardApi::new("http://127.0.0.1:8080/".to_string());
        assert_eq!(api.url("/api/alerts"), "http://127.0.0.1:8080/api/alerts");
    }

    #[test]
    fn test_workflow_path_encodes_the_id() {
        // Ids that survived marker stripping can still carry reserved chars.
        assert_eq!(
            format!("/api/workflow/next/{}", urlencoding::encode("ORD 12")),
            "/api/workflow/next/ORD%2012"
        );
    }
}
