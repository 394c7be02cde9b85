// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM display surfaces.

use alloc::string::String;

use midnight_core::backend::DisplaySink;
use midnight_core::config::PageConfig;
use midnight_core::error::MountError;
use midnight_core::progress::Progress;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

/// Writes the countdown into two page elements: the label's text content and
/// the bar's `style.width`.
///
/// Both elements are resolved once, in [`mount`](Self::mount). Ticks never
/// look them up again.
pub struct DomSink {
    text: HtmlElement,
    bar: HtmlElement,
    /// Reused width buffer.
    width: String,
}

impl core::fmt::Debug for DomSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSink")
            .field("text", &self.text.id())
            .field("bar", &self.bar.id())
            .finish_non_exhaustive()
    }
}

impl DomSink {
    /// Wraps two already-resolved elements.
    #[must_use]
    pub fn new(text: HtmlElement, bar: HtmlElement) -> Self {
        Self {
            text,
            bar,
            width: String::with_capacity(24),
        }
    }

    /// Looks up both surfaces by id.
    ///
    /// # Errors
    ///
    /// [`MountError::MissingSurface`] names the first id with no matching
    /// element.
    pub fn mount(document: &Document, config: &PageConfig) -> Result<Self, MountError> {
        let (text, bar) = config.resolve_surfaces(|id| html_element_by_id(document, id))?;
        Ok(Self::new(text, bar))
    }

    /// Returns the label element.
    #[must_use]
    pub fn text_element(&self) -> &HtmlElement {
        &self.text
    }

    /// Returns the bar element.
    #[must_use]
    pub fn bar_element(&self) -> &HtmlElement {
        &self.bar
    }
}

impl DisplaySink for DomSink {
    fn set_text(&mut self, text: &str) {
        self.text.set_text_content(Some(text));
    }

    fn set_width_percent(&mut self, progress: Progress) {
        progress.write_css_width(&mut self.width);
        let _ = self.bar.style().set_property("width", &self.width);
    }
}

/// Resolves `id` to an `HtmlElement`.
pub(crate) fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
