// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `keydown` listener for the data table shortcuts.
//!
//! The page is re-queried on every key press because the table widget
//! rebuilds its pagination and search markup whenever it redraws.

use alloc::boxed::Box;

use midnight_core::config::PageConfig;
use midnight_core::keys::{Key, KeyAction, KeyContext, resolve};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

/// An installed `keydown` listener. Dropping it removes the listener.
pub struct KeyBindings {
    document: Document,
    closure: KeyClosure,
}

impl core::fmt::Debug for KeyBindings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyBindings").finish_non_exhaustive()
    }
}

impl KeyBindings {
    /// Installs the shortcuts on `document`.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception if the listener could not be added.
    pub fn install(document: &Document, config: PageConfig) -> Result<Self, JsValue> {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            on_key_down(&doc, &config, &event);
        }) as Box<dyn FnMut(KeyboardEvent)>);

        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

        Ok(Self {
            document: document.clone(),
            closure,
        })
    }
}

impl Drop for KeyBindings {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}

/// Elements the shortcuts act on, looked up for one key press.
struct Targets {
    first_page: Option<HtmlElement>,
    last_page: Option<HtmlElement>,
    search: Option<HtmlInputElement>,
}

impl Targets {
    fn query(document: &Document, config: &PageConfig) -> Self {
        let pagination = document
            .query_selector(config.pagination_selector)
            .ok()
            .flatten();
        let link = |item: Option<web_sys::Element>| {
            item.and_then(|li| li.first_element_child())
                .and_then(|a| a.dyn_into::<HtmlElement>().ok())
        };
        let first_page = link(pagination.as_ref().and_then(|p| p.first_element_child()));
        let last_page = link(pagination.as_ref().and_then(|p| p.last_element_child()));
        let search = document
            .query_selector(config.search_input_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        Self {
            first_page,
            last_page,
            search,
        }
    }

    fn context(&self, document: &Document) -> KeyContext {
        let search_focused = match (&self.search, document.active_element()) {
            (Some(search), Some(active)) => {
                let search: &JsValue = search.as_ref();
                let active: &JsValue = active.as_ref();
                search == active
            }
            _ => false,
        };
        KeyContext {
            has_first_page_link: self.first_page.is_some(),
            has_last_page_link: self.last_page.is_some(),
            has_search: self.search.is_some(),
            search_focused,
        }
    }
}

fn on_key_down(document: &Document, config: &PageConfig, event: &KeyboardEvent) {
    let targets = Targets::query(document, config);
    let key = Key::from_dom_key(&event.key());
    let Some(action) = resolve(key, &targets.context(document)) else {
        return;
    };
    if action.prevents_default() {
        event.prevent_default();
    }
    perform(document, &targets, action);
}

fn perform(document: &Document, targets: &Targets, action: KeyAction) {
    match action {
        KeyAction::PreviousPage => {
            if let Some(link) = &targets.first_page {
                link.click();
            }
        }
        KeyAction::NextPage => {
            if let Some(link) = &targets.last_page {
                link.click();
            }
        }
        KeyAction::FocusSearch => {
            if let Some(search) = &targets.search {
                let _ = search.focus();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                search.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        KeyAction::ClearSearch => {
            if let Some(search) = &targets.search {
                search.set_value("");
                // Listeners (the table's live filter) only react to `input`.
                let init = EventInit::new();
                init.set_bubbles(true);
                if let Ok(input) = Event::new_with_event_init_dict("input", &init) {
                    let _ = search.dispatch_event(&input);
                }
                let _ = search.blur();
            }
        }
        KeyAction::BlurActive => {
            if let Some(active) = document
                .active_element()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = active.blur();
            }
        }
    }
}
