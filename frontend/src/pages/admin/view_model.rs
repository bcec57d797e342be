use super::{repository::AdminRepository, utils::CredentialsForm};
use crate::{
    api::{AdminCredentials, ApiClient, ApiError},
    state::{
        admin::{use_admin_state, AdminState},
        message::{describe_failure, use_message_slot, MessageSlot},
    },
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;
use std::rc::Rc;

/// Posts the credentials as typed. On success the admin state is signed in
/// and the new login epoch is returned for the follow-up fetches.
pub async fn login_request(
    repo: &AdminRepository,
    credentials: AdminCredentials,
    state: RwSignal<AdminState>,
    messages: MessageSlot,
) -> Result<u64, ApiError> {
    match repo.login(&credentials).await {
        Ok(response) => {
            let epoch = state
                .try_update(|s| s.sign_in(response.token))
                .unwrap_or_default();
            messages.success(t!("admin.login_success"));
            Ok(epoch)
        }
        Err(err) => {
            messages.error(describe_failure(&err, &t!("admin.login_failed")));
            Err(err)
        }
    }
}

fn current_token(state: RwSignal<AdminState>) -> Option<String> {
    state.try_with_untracked(|s| s.token.clone()).flatten()
}

pub async fn refresh_roster(repo: &AdminRepository, state: RwSignal<AdminState>, epoch: u64) {
    let token = current_token(state);
    match repo.daily_list(token.as_deref()).await {
        Ok(roster) => {
            let applied = state
                .try_update(|s| s.apply_roster(epoch, roster))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarding daily list from login epoch {}", epoch);
            }
        }
        Err(err) => log::warn!("Error fetching daily list: {}", err),
    }
}

pub async fn refresh_stats(repo: &AdminRepository, state: RwSignal<AdminState>, epoch: u64) {
    let token = current_token(state);
    match repo.stats(token.as_deref()).await {
        Ok(stats) => {
            let applied = state
                .try_update(|s| s.apply_stats(epoch, stats))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarding stats from login epoch {}", epoch);
            }
        }
        Err(err) => log::warn!("Error fetching stats: {}", err),
    }
}

// Fire-and-forget; the two reads may finish in either order.
fn spawn_follow_ups(repo: AdminRepository, state: RwSignal<AdminState>, epoch: u64) {
    let roster_repo = repo.clone();
    spawn_local(async move { refresh_roster(&roster_repo, state, epoch).await });
    spawn_local(async move { refresh_stats(&repo, state, epoch).await });
}

/// Local reset only; no request is issued.
pub fn sign_out(form: CredentialsForm, state: RwSignal<AdminState>) {
    form.clear();
    state.update(|s| s.sign_out());
}

#[derive(Clone)]
pub struct AdminViewModel {
    pub repo: AdminRepository,
    pub form: CredentialsForm,
    pub state: RwSignal<AdminState>,
    pub login_action: Action<AdminCredentials, Result<u64, ApiError>>,
    pub messages: MessageSlot,
}

impl AdminViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = AdminRepository::new_with_client(Rc::new(api));
        let form = CredentialsForm::new();
        let state = use_admin_state();
        let messages = use_message_slot();

        let repo_for_login = repo.clone();
        let login_action = create_action(move |credentials: &AdminCredentials| {
            let repo = repo_for_login.clone();
            let credentials = credentials.clone();
            async move {
                let epoch = login_request(&repo, credentials, state, messages).await?;
                spawn_follow_ups(repo, state, epoch);
                Ok(epoch)
            }
        });

        Self {
            repo,
            form,
            state,
            login_action,
            messages,
        }
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated))
    }

    pub fn on_login(&self) -> impl Fn(SubmitEvent) {
        let login_action = self.login_action;
        let form = self.form;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if login_action.pending().get_untracked() {
                return;
            }
            login_action.dispatch(form.credentials());
        }
    }

    pub fn on_logout(&self) -> Callback<()> {
        let form = self.form;
        let state = self.state;
        Callback::new(move |_| sign_out(form, state))
    }
}

impl Default for AdminViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    match use_context::<AdminViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
