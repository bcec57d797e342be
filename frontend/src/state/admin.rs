use crate::api::{DailyListResponse, OverallStats};
use leptos::*;

/// Everything the admin panel knows once the login call succeeded.
///
/// `epoch` changes on every sign-in and sign-out. Follow-up fetches carry the
/// epoch they were started under and are dropped if it moved on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub roster: Option<DailyListResponse>,
    pub stats: OverallStats,
    pub epoch: u64,
}

impl AdminState {
    pub fn sign_in(&mut self, token: Option<String>) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.is_authenticated = true;
        self.token = token;
        self.roster = None;
        self.stats = OverallStats::default();
        self.epoch
    }

    pub fn sign_out(&mut self) {
        *self = AdminState {
            epoch: self.epoch.wrapping_add(1),
            ..AdminState::default()
        };
    }

    fn accepts(&self, epoch: u64) -> bool {
        self.is_authenticated && self.epoch == epoch
    }

    /// Results from an earlier login epoch, or arriving after logout, are dropped.
    pub fn apply_roster(&mut self, epoch: u64, roster: DailyListResponse) -> bool {
        if !self.accepts(epoch) {
            return false;
        }
        self.roster = Some(roster);
        true
    }

    pub fn apply_stats(&mut self, epoch: u64, stats: OverallStats) -> bool {
        if !self.accepts(epoch) {
            return false;
        }
        self.stats = stats;
        true
    }
}

pub fn use_admin_state() -> RwSignal<AdminState> {
    match use_context::<RwSignal<AdminState>>() {
        Some(state) => state,
        None => {
            let state = create_rw_signal(AdminState::default());
            provide_context(state);
            state
        }
    }
}
