use reqwest::{header::HeaderMap, Client, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    fn admin_headers(token: Option<&str>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::validation("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<ErrorBody>().await.ok();
        ApiError::from_status(status, body)
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
    }

    pub async fn get_active_session(&self) -> Result<Option<ActiveSession>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/sessions/active", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn submit_attendance(&self, request: &AttendanceRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/attendance", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn admin_login(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<AdminLoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/admin/login", base_url))
            .json(credentials)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(response
                .json::<AdminLoginResponse>()
                .await
                .unwrap_or_default())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn get_daily_list(&self, token: Option<&str>) -> Result<DailyListResponse, ApiError> {
        let headers = Self::admin_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/admin/daily-list", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn get_overall_stats(&self, token: Option<&str>) -> Result<OverallStats, ApiError> {
        let headers = Self::admin_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/stats/overall", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
