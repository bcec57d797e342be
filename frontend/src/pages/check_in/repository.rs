use crate::api::{ActiveSession, ApiClient, ApiError, AttendanceRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Any failure, HTTP or transport, reads as "no active session".
    pub async fn fetch_active_session(&self) -> Option<ActiveSession> {
        match self.client.get_active_session().await {
            Ok(session) => session,
            Err(err) if err.status() == Some(404) => {
                log::debug!("No active session: {}", err);
                None
            }
            Err(err) => {
                log::warn!("Error fetching active session: {}", err);
                None
            }
        }
    }

    pub async fn submit(&self, name: String) -> Result<(), ApiError> {
        self.client
            .submit_attendance(&AttendanceRequest { name })
            .await
    }
}
