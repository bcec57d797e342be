use crate::api::AdminCredentials;
use leptos::*;

/// Login form fields. The password visibility flag is display-only.
#[derive(Clone, Copy)]
pub struct CredentialsForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
}

impl Default for CredentialsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsForm {
    pub fn new() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }

    /// Sent as typed; the server decides what is acceptable.
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    pub fn clear(&self) {
        self.username.set(String::new());
        self.password.set(String::new());
    }

    pub fn toggle_password_visibility(&self) {
        self.show_password.update(|shown| *shown = !*shown);
    }
}

pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password {
        "text"
    } else {
        "password"
    }
}

pub fn format_average_rate(rate: f64) -> String {
    if rate.is_finite() {
        format!("%{:.1}", rate)
    } else {
        "%0.0".to_string()
    }
}
