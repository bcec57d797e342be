use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "https://g8h3ilc71mej.manus.space/api";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Istanbul;
pub const DEFAULT_LOCALE: &str = "tr";
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 3_000;

const ENV_GLOBAL: &str = "__YOKLAMA_ENV";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
    pub locale: Option<String>,
    pub message_ttl_ms: Option<u64>,
}

impl RuntimeConfig {
    /// Fills every unset field of `self` from `other`.
    pub fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            time_zone: self.time_zone.or(other.time_zone),
            locale: self.locale.or(other.locale),
            message_ttl_ms: self.message_ttl_ms.or(other.message_ttl_ms),
        }
    }

    pub fn base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
            .unwrap_or(DEFAULT_TIME_ZONE)
    }

    pub fn locale(&self) -> String {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
            .to_string()
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms.unwrap_or(DEFAULT_MESSAGE_TTL_MS))
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn snapshot() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

fn read_key(obj: &js_sys::Object, upper: &str, lower: &str) -> Option<wasm_bindgen::JsValue> {
    js_sys::Reflect::get(obj, &upper.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(obj, &lower.into()).ok())
        .filter(|v| !v.is_undefined() && !v.is_null())
}

// Expect optional global object: window.__YOKLAMA_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
fn config_from_env_js() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let string = |upper: &str, lower: &str| read_key(&obj, upper, lower).and_then(|v| v.as_string());
    Some(RuntimeConfig {
        api_base_url: string("API_BASE_URL", "api_base_url"),
        time_zone: string("TIME_ZONE", "time_zone"),
        locale: string("LOCALE", "locale"),
        message_ttl_ms: read_key(&obj, "MESSAGE_TTL_MS", "message_ttl_ms")
            .and_then(|v| v.as_f64())
            .filter(|ms| *ms >= 0.0)
            .map(|ms| ms as u64),
    })
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
    let href = window
        .location()
        .href()
        .map_err(|_| anyhow!("window location unavailable"))?;
    let url = reqwest::Url::parse(&href)
        .and_then(|page| page.join("config.json"))
        .context("failed to resolve config.json url")?;
    let resp = reqwest::get(url)
        .await
        .context("config.json request failed")?
        .error_for_status()
        .context("config.json returned an error status")?;
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid runtime config")
}

async fn resolve() -> RuntimeConfig {
    let from_env = config_from_env_js().unwrap_or_default();
    if from_env.api_base_url.is_some() {
        return from_env;
    }
    match fetch_runtime_config().await {
        Ok(cfg) => from_env.or(cfg),
        Err(err) => {
            log::warn!("Falling back to built-in runtime config: {:#}", err);
            from_env
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cfg) = RUNTIME_CONFIG.get() {
        return cfg.base_url();
    }
    init().await;
    snapshot().base_url()
}

pub fn current_time_zone() -> Tz {
    snapshot().time_zone()
}

pub fn current_locale() -> String {
    snapshot().locale()
}

pub fn message_ttl() -> Duration {
    snapshot().message_ttl()
}

pub async fn init() {
    if RUNTIME_CONFIG.get().is_some() {
        return;
    }
    let resolved = resolve().await;
    let _ = RUNTIME_CONFIG.set(resolved);
}
