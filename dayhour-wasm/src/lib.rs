//! Bridge WASM <-> trang HTML: gắn bộ lọc ngày/giờ vào document.

#[cfg(target_arch = "wasm32")]
mod dom;

use dayhour_core::{render_stylesheet, FilterConfig, FilterState};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Deserialize, Default)]
#[serde(default)]
struct JsFilterConfig {
    day_control_id: Option<String>,
    hour_control_id: Option<String>,
    row_selector: Option<String>,
    marker_selector: Option<String>,
    muted_declarations: Option<Vec<(String, String)>>,
    mirror_dataset: Option<bool>,
}

impl From<JsFilterConfig> for FilterConfig {
    fn from(cfg: JsFilterConfig) -> Self {
        let mut base = FilterConfig::default();
        if let Some(id) = cfg.day_control_id {
            base.day_control_id = id;
        }
        if let Some(id) = cfg.hour_control_id {
            base.hour_control_id = id;
        }
        if let Some(selector) = cfg.row_selector {
            base.row_selector = selector;
        }
        if let Some(selector) = cfg.marker_selector {
            base.marker_selector = selector;
        }
        if let Some(declarations) = cfg.muted_declarations {
            base.muted_declarations = declarations;
        }
        if let Some(mirror) = cfg.mirror_dataset {
            base.mirror_dataset = mirror;
        }
        base
    }
}

/// Sinh stylesheet cho cặp `(day, hour)` với cấu hình mặc định.
#[wasm_bindgen]
pub fn render_filter_css(day: &str, hour: &str) -> String {
    let state = FilterState::new(day, hour);
    render_stylesheet(&state.rule(), &FilterConfig::default())
}

/// Gắn bộ lọc vào trang: tìm control, chèn `<style>` và lắng nghe `change` ở document.
#[wasm_bindgen]
pub fn install_filter(config: Option<JsValue>) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cfg = match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsFilterConfig = serde_wasm_bindgen::from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            FilterConfig::from(cfg)
        }
        _ => FilterConfig::default(),
    };

    install_with_config(cfg)
}

#[cfg(target_arch = "wasm32")]
fn install_with_config(config: FilterConfig) -> Result<(), JsValue> {
    dom::install(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn install_with_config(_: FilterConfig) -> Result<(), JsValue> {
    Err(JsValue::from_str(
        "dayhour-wasm chỉ hỗ trợ gắn bộ lọc trên target wasm32",
    ))
}
