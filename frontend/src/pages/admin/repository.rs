use crate::api::{
    AdminCredentials, AdminLoginResponse, ApiClient, ApiError, DailyListResponse, OverallStats,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<AdminLoginResponse, ApiError> {
        self.client.admin_login(credentials).await
    }

    pub async fn daily_list(&self, token: Option<&str>) -> Result<DailyListResponse, ApiError> {
        self.client.get_daily_list(token).await
    }

    pub async fn stats(&self, token: Option<&str>) -> Result<OverallStats, ApiError> {
        self.client.get_overall_stats(token).await
    }
}
