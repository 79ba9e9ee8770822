// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Runtime configuration injected by the hosting page as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "assetBaseUrl")]
    #[serde(default)]
    pub asset_base_url: Option<String>,
}

pub const APP_CONFIG_KEY: &str = "__APP_CONFIG";

/// The raw `window.__APP_CONFIG` value, if the page defines one.
fn app_config_value() -> Option<JsValue> {
    let win = window()?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str(APP_CONFIG_KEY)).ok()?;
    if config.is_undefined() || config.is_null() {
        None
    } else {
        Some(config)
    }
}

fn parse_app_config(config: JsValue) -> anyhow::Result<RuntimeConfig> {
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("Failed to parse {APP_CONFIG_KEY}"))
}

pub fn app_config() -> anyhow::Result<RuntimeConfig> {
    let config = app_config_value().ok_or_else(|| {
        anyhow!("Runtime configuration not found (window.{APP_CONFIG_KEY} missing)")
    })?;
    parse_app_config(config)
}

/// Base URL that static assets are served from, if the host configured one.
///
/// A page without a config serves assets from the site root. A config that
/// does not parse is logged and treated the same way.
pub fn asset_base_url() -> Option<String> {
    let config = app_config_value()?;
    match parse_app_config(config) {
        Ok(config) => config
            .asset_base_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        Err(e) => {
            log::warn!("ignoring runtime config, using root-relative assets: {e:#}");
            None
        }
    }
}
