// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading overlay removal.

use alloc::string::ToString as _;

use midnight_core::config::PageConfig;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use crate::sink::html_element_by_id;

/// Fades the loading overlay out and removes it once the transition ends.
///
/// Returns `false` when the page has no overlay, which is not an error: only
/// some pages show one.
pub fn fade_out_loading(document: &Document, config: &PageConfig) -> bool {
    let Some(overlay) = html_element_by_id(document, config.loading_container_id) else {
        return false;
    };

    let style = overlay.style();
    let _ = style.set_property("transition", &config.fade.transition().to_string());
    let _ = style.set_property("opacity", "0");

    let target = overlay.clone();
    let on_end = Closure::once_into_js(move || target.remove());
    overlay
        .add_event_listener_with_callback("transitionend", on_end.unchecked_ref())
        .is_ok()
}
