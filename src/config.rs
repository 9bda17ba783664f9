//! Runtime Configuration
//!
//! Resolved once at start-up from, in order:
//! `window.BOARD_CONFIG`, the build-time `BOARD_API_URL`, the page origin.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Build-time API origin
const BUILD_API_URL: Option<&str> = option_env!("BOARD_API_URL");

/// Global JS object the host page may define
const RUNTIME_CONFIG_KEY: &str = "BOARD_CONFIG";

/// How a cross-list move is persisted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveMode {
    /// One server-side move call; only for servers exposing the move route
    Atomic,
    /// Two PUTs (source, then target) with compensation on partial failure
    #[default]
    PutPair,
}

impl MoveMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "atomic" => Some(MoveMode::Atomic),
            "put-pair" | "putpair" | "legacy" => Some(MoveMode::PutPair),
            _ => None,
        }
    }
}

/// Host-provided overrides, all optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfig {
    pub api_url: Option<String>,
    pub move_mode: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub move_mode: MoveMode,
    pub log_level: LevelFilter,
}

impl Config {
    /// Read configuration from the browser environment
    pub fn load() -> Self {
        let window = web_sys::window();
        let runtime = window.as_ref().and_then(|win| {
            let value = js_sys::Reflect::get(win, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
            if value.is_undefined() || value.is_null() {
                return None;
            }
            match serde_wasm_bindgen::from_value::<RawConfig>(value) {
                Ok(raw) => Some(raw),
                Err(e) => {
                    web_sys::console::warn_1(&format!("[config] ignoring {}: {}", RUNTIME_CONFIG_KEY, e).into());
                    None
                }
            }
        });
        let origin = window.and_then(|win| win.location().origin().ok());
        Self::resolve(runtime.unwrap_or_default(), BUILD_API_URL, origin)
    }

    /// Apply precedence and defaults
    pub fn resolve(runtime: RawConfig, build_url: Option<&str>, origin: Option<String>) -> Self {
        let api_url = runtime
            .api_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| build_url.filter(|url| !url.trim().is_empty()).map(str::to_string))
            .or(origin)
            .unwrap_or_default();

        let move_mode = runtime
            .move_mode
            .as_deref()
            .and_then(MoveMode::parse)
            .unwrap_or_default();

        let log_level = runtime
            .log_level
            .as_deref()
            .and_then(|raw| raw.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            move_mode,
            log_level,
        }
    }
}
