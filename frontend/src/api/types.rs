use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSession {
    #[serde(default)]
    pub id: Option<i64>,
    pub session_date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ActiveSession {
    /// Badge text: the session date, plus the time window when the server sent one.
    pub fn label(&self) -> String {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => format!("{} {}-{}", self.session_date, start, end),
            _ => self.session_date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRequest {
    pub name: String,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub student: Option<StudentSummary>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl AttendanceRecord {
    pub fn student_name(&self) -> &str {
        self.student
            .as_ref()
            .map(|student| student.name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyListResponse {
    #[serde(default)]
    pub session: Option<ActiveSession>,
    #[serde(default)]
    pub attendances: Vec<AttendanceRecord>,
    #[serde(default)]
    pub total_count: Option<usize>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DailyListResponse {
    pub fn record_count(&self) -> usize {
        self.total_count.unwrap_or(self.attendances.len())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallStats {
    pub total_students: u64,
    pub total_sessions: u64,
    pub total_attendances: u64,
    pub average_attendance_rate: f64,
}

/// Error body the attendance API returns with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

pub const SERVER_ERROR: &str = "SERVER_ERROR";
pub const HTTP_ERROR: &str = "HTTP_ERROR";
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, VALIDATION_ERROR)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, REQUEST_FAILED)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::with_code(msg, PARSE_ERROR)
    }

    /// Non-2xx response. Keeps the server's `error` text when it sent a usable one.
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        let details = Some(serde_json::json!({ "status": status }));
        match body.and_then(|b| b.error).filter(|msg| !msg.trim().is_empty()) {
            Some(msg) => Self {
                details,
                ..Self::with_code(msg, SERVER_ERROR)
            },
            None => Self {
                details,
                ..Self::with_code(format!("HTTP {}", status), HTTP_ERROR)
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }

    pub fn is_transport(&self) -> bool {
        self.code == REQUEST_FAILED
    }

    /// Text meant to be shown to the user verbatim, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self.code.as_str() {
            SERVER_ERROR | VALIDATION_ERROR => Some(self.error.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn active_session_tolerates_extra_and_missing_fields() {
        let session: ActiveSession = serde_json::from_value(json!({
            "id": 3,
            "session_date": "2025-03-10",
            "start_time": "08:25",
            "end_time": "09:05",
            "is_active": true,
            "created_at": "2025-03-10T05:00:00",
            "room": "A1"
        }))
        .unwrap();
        assert_eq!(session.label(), "2025-03-10 08:25-09:05");

        let bare: ActiveSession =
            serde_json::from_value(json!({ "session_date": "2025-03-10" })).unwrap();
        assert_eq!(bare.label(), "2025-03-10");
        assert!(!bare.is_active);
    }

    #[wasm_bindgen_test]
    fn stats_default_missing_fields_to_zero() {
        let stats: OverallStats = serde_json::from_value(json!({ "total_students": 12 })).unwrap();
        assert_eq!(stats.total_students, 12);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.average_attendance_rate, 0.0);
    }

    #[wasm_bindgen_test]
    fn daily_list_without_session_is_empty() {
        let list: DailyListResponse = serde_json::from_value(json!({
            "message": "Bugün için oturum bulunamadı",
            "attendances": []
        }))
        .unwrap();
        assert!(list.session.is_none());
        assert_eq!(list.record_count(), 0);
        assert_eq!(list.message.as_deref(), Some("Bugün için oturum bulunamadı"));
    }

    #[wasm_bindgen_test]
    fn attendance_record_without_student_has_empty_name() {
        let record: AttendanceRecord =
            serde_json::from_value(json!({ "timestamp": "2025-03-10T05:30:00" })).unwrap();
        assert_eq!(record.student_name(), "");
    }

    #[wasm_bindgen_test]
    fn credentials_debug_hides_password() {
        let creds = AdminCredentials {
            username: "admin".into(),
            password: "admin123".into(),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("admin123"));
    }

    #[test]
    fn from_status_keeps_server_text() {
        let err = ApiError::from_status(
            400,
            Some(ErrorBody {
                error: Some("Bu oturum için zaten yoklama verilmiş".into()),
            }),
        );
        assert_eq!(err.code, SERVER_ERROR);
        assert_eq!(err.user_message(), Some("Bu oturum için zaten yoklama verilmiş"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn from_status_without_text_has_no_user_message() {
        let err = ApiError::from_status(500, None);
        assert_eq!(err.code, HTTP_ERROR);
        assert_eq!(err.user_message(), None);
        assert_eq!(err.status(), Some(500));

        let blank = ApiError::from_status(
            401,
            Some(ErrorBody {
                error: Some("  ".into()),
            }),
        );
        assert_eq!(blank.code, HTTP_ERROR);
    }

    #[test]
    fn api_error_displays_error_text() {
        let error = ApiError::request_failed("boom");
        assert_eq!(format!("{}", error), "boom");
        assert!(error.is_transport());
        assert!(!ApiError::validation("bad input").is_transport());
    }
}
