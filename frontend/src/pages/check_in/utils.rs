use crate::api::ActiveSession;
use leptos::*;
use rust_i18n::t;

#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    pub name: RwSignal<String>,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceFormState {
    pub fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
        }
    }

    pub fn clear(&self) {
        self.name.set(String::new());
    }
}

pub fn validate_student_name(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(t!("attendance.name_required").to_string());
    }
    Ok(trimmed.to_string())
}

pub fn submission_enabled(session: Option<&ActiveSession>, name: &str) -> bool {
    session.is_some() && !name.trim().is_empty()
}
