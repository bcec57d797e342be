use crate::{api::ApiError, config};
use leptos::*;
use rust_i18n::t;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// The single message slot shared by every form on the screen.
///
/// Each pushed message gets a new epoch; an expiry only clears the slot when
/// it still holds the message that scheduled it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub current: Option<FlashMessage>,
    pub epoch: u64,
}

impl MessageState {
    pub fn push(&mut self, message: FlashMessage) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.current = Some(message);
        self.epoch
    }

    pub fn expire(&mut self, epoch: u64) -> bool {
        if self.epoch != epoch || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

#[derive(Clone, Copy)]
pub struct MessageSlot {
    state: RwSignal<MessageState>,
    ttl: Duration,
}

impl MessageSlot {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: create_rw_signal(MessageState::default()),
            ttl,
        }
    }

    pub fn current(&self) -> Signal<Option<FlashMessage>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.current.clone()))
    }

    pub fn snapshot(&self) -> MessageState {
        self.state.get_untracked()
    }

    pub fn success(&self, text: impl Into<String>) -> u64 {
        self.show(FlashMessage::success(text))
    }

    pub fn error(&self, text: impl Into<String>) -> u64 {
        self.show(FlashMessage::error(text))
    }

    pub fn show(&self, message: FlashMessage) -> u64 {
        let epoch = self
            .state
            .try_update(|s| s.push(message))
            .unwrap_or_default();
        schedule_expiry(self.state, epoch, self.ttl);
        epoch
    }

    pub fn expire(&self, epoch: u64) -> bool {
        self.state
            .try_update(|s| s.expire(epoch))
            .unwrap_or(false)
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_expiry(state: RwSignal<MessageState>, epoch: u64, ttl: Duration) {
    let millis = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(millis, move || {
        let _ = state.try_update(|s| s.expire(epoch));
    })
    .forget();
}

// Host builds have no browser timers; tests drive `MessageSlot::expire` directly.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_expiry(_state: RwSignal<MessageState>, _epoch: u64, _ttl: Duration) {}

pub fn use_message_slot() -> MessageSlot {
    match use_context::<MessageSlot>() {
        Some(slot) => slot,
        None => {
            let slot = MessageSlot::new(config::message_ttl());
            provide_context(slot);
            slot
        }
    }
}

/// Text for a failed request: connectivity problems get the generic message,
/// server-provided text is shown as is, anything else falls back.
pub fn describe_failure(err: &ApiError, fallback: &str) -> String {
    if err.is_transport() {
        return t!("common.connection_error").to_string();
    }
    err.user_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_replaces_message_and_bumps_epoch() {
        let mut state = MessageState::default();
        let first = state.push(FlashMessage::success("ok"));
        let second = state.push(FlashMessage::error("nope"));
        assert_eq!(second, first + 1);
        assert_eq!(state.current, Some(FlashMessage::error("nope")));
    }

    #[test]
    fn stale_expiry_keeps_newer_message() {
        let mut state = MessageState::default();
        let first = state.push(FlashMessage::success("ok"));
        let second = state.push(FlashMessage::error("nope"));

        assert!(!state.expire(first));
        assert_eq!(state.current, Some(FlashMessage::error("nope")));

        assert!(state.expire(second));
        assert!(state.current.is_none());
        assert!(!state.expire(second));
    }

    #[test]
    fn slot_exposes_current_message() {
        with_runtime(|| {
            let slot = MessageSlot::new(Duration::from_millis(3_000));
            let current = slot.current();
            assert!(current.get().is_none());

            let epoch = slot.success("Kaydedildi");
            assert_eq!(current.get(), Some(FlashMessage::success("Kaydedildi")));

            assert!(slot.expire(epoch));
            assert!(current.get().is_none());
        });
    }

    #[test]
    fn use_message_slot_reuses_context() {
        with_runtime(|| {
            let first = use_message_slot();
            first.error("x");
            let second = use_message_slot();
            assert_eq!(second.snapshot().current, Some(FlashMessage::error("x")));
        });
    }

    #[test]
    fn describe_failure_prefers_server_text() {
        let server = ApiError::from_status(
            400,
            Some(crate::api::ErrorBody {
                error: Some("X".into()),
            }),
        );
        assert_eq!(describe_failure(&server, "fallback"), "X");

        let bare = ApiError::from_status(500, None);
        assert_eq!(describe_failure(&bare, "fallback"), "fallback");

        let parse = ApiError::parse("bad json");
        assert_eq!(describe_failure(&parse, "fallback"), "fallback");
    }

    #[test]
    fn describe_failure_uses_connection_message_for_transport_errors() {
        let err = ApiError::request_failed("connection refused");
        assert_eq!(
            describe_failure(&err, "fallback"),
            t!("common.connection_error").to_string()
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn message_clears_after_ttl() {
        let _runtime = create_runtime();
        let slot = MessageSlot::new(Duration::from_millis(100));
        slot.success("Yoklama başarıyla kaydedildi!");

        TimeoutFuture::new(40).await;
        assert!(slot.snapshot().current.is_some());

        TimeoutFuture::new(120).await;
        assert!(slot.snapshot().current.is_none());
    }

    #[wasm_bindgen_test]
    async fn earlier_timer_leaves_newer_message() {
        let _runtime = create_runtime();
        let slot = MessageSlot::new(Duration::from_millis(100));
        slot.success("first");

        TimeoutFuture::new(60).await;
        slot.error("second");

        TimeoutFuture::new(60).await;
        assert_eq!(slot.snapshot().current, Some(FlashMessage::error("second")));

        TimeoutFuture::new(100).await;
        assert!(slot.snapshot().current.is_none());
    }
}
