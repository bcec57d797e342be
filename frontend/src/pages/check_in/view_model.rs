use super::{
    repository::AttendanceRepository,
    utils::{submission_enabled, validate_student_name, AttendanceFormState},
};
use crate::{
    api::{ActiveSession, ApiClient, ApiError},
    state::message::{describe_failure, use_message_slot, MessageSlot},
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;
use std::rc::Rc;

/// Validates, posts and reports one check-in. No request is made for a blank name.
pub async fn submit_attendance(
    repo: &AttendanceRepository,
    raw_name: String,
    form: AttendanceFormState,
    messages: MessageSlot,
) -> Result<(), ApiError> {
    let name = match validate_student_name(&raw_name) {
        Ok(name) => name,
        Err(msg) => {
            messages.error(msg.clone());
            return Err(ApiError::validation(msg));
        }
    };

    match repo.submit(name).await {
        Ok(()) => {
            form.clear();
            messages.success(t!("attendance.recorded"));
            Ok(())
        }
        Err(err) => {
            messages.error(describe_failure(&err, &t!("attendance.failed")));
            Err(err)
        }
    }
}

#[derive(Clone)]
pub struct CheckInViewModel {
    pub repo: AttendanceRepository,
    pub form: AttendanceFormState,
    pub session_resource: Resource<(), Option<ActiveSession>>,
    pub submit_action: Action<String, Result<(), ApiError>>,
    pub messages: MessageSlot,
}

impl CheckInViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = AttendanceRepository::new_with_client(Rc::new(api));
        let form = AttendanceFormState::new();
        let messages = use_message_slot();

        let repo_for_session = repo.clone();
        let session_resource = create_local_resource(
            || (),
            move |_| {
                let repo = repo_for_session.clone();
                async move { repo.fetch_active_session().await }
            },
        );

        let repo_for_submit = repo.clone();
        let submit_action = create_action(move |raw_name: &String| {
            let repo = repo_for_submit.clone();
            let raw_name = raw_name.clone();
            async move { submit_attendance(&repo, raw_name, form, messages).await }
        });

        Self {
            repo,
            form,
            session_resource,
            submit_action,
            messages,
        }
    }

    pub fn active_session(&self) -> Signal<Option<ActiveSession>> {
        let resource = self.session_resource;
        Signal::derive(move || resource.get().flatten())
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let session = self.active_session();
        let name = self.form.name;
        let pending = self.submit_action.pending();
        Signal::derive(move || {
            !pending.get() && name.with(|n| session.with(|s| submission_enabled(s.as_ref(), n)))
        })
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) {
        let submit_action = self.submit_action;
        let name = self.form.name;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if submit_action.pending().get_untracked() {
                return;
            }
            submit_action.dispatch(name.get_untracked());
        }
    }
}

impl Default for CheckInViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_check_in_view_model() -> CheckInViewModel {
    match use_context::<CheckInViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = CheckInViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
