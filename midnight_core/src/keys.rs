// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts for the paginated data table.
//!
//! [`resolve`] maps a key press plus a snapshot of the page ([`KeyContext`])
//! to at most one [`KeyAction`]. It is pure; the backend takes the snapshot
//! before resolving and performs the action after.
//!
//! | Key                  | Needs                           | Action            |
//! |----------------------|---------------------------------|-------------------|
//! | `ArrowLeft`          | a first pagination link         | [`PreviousPage`]  |
//! | `ArrowRight`         | a last pagination link          | [`NextPage`]      |
//! | `f` / `F`            | a search input without focus    | [`FocusSearch`]   |
//! | `Escape`             | a search input                  | [`ClearSearch`]   |
//! | `Enter`              | nothing                         | [`BlurActive`]    |
//!
//! [`PreviousPage`]: KeyAction::PreviousPage
//! [`NextPage`]: KeyAction::NextPage
//! [`FocusSearch`]: KeyAction::FocusSearch
//! [`ClearSearch`]: KeyAction::ClearSearch
//! [`BlurActive`]: KeyAction::BlurActive

/// A key press, reduced to the keys that carry shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowRight`
    ArrowRight,
    /// `Escape`
    Escape,
    /// `Enter`
    Enter,
    /// A single printable character.
    Char(char),
    /// Anything else.
    Other,
}

impl Key {
    /// Parses a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" => Self::Escape,
            "Enter" => Self::Enter,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// What the page looked like when the key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyContext {
    /// The pagination list exists and its first item holds a link.
    pub has_first_page_link: bool,
    /// The pagination list exists and its last item holds a link.
    pub has_last_page_link: bool,
    /// A search input exists.
    pub has_search: bool,
    /// The search input currently has focus.
    pub search_focused: bool,
}

/// The effect a shortcut has on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Click the first pagination link.
    PreviousPage,
    /// Click the last pagination link.
    NextPage,
    /// Suppress the keystroke, focus the search input and scroll it to the
    /// center of the viewport.
    FocusSearch,
    /// Empty the search input, notify its listeners, and drop focus.
    ClearSearch,
    /// Drop focus from whatever element has it.
    BlurActive,
}

impl KeyAction {
    /// Returns `true` if the browser's default handling must be suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::FocusSearch)
    }
}

/// Resolves a key press against the current page state.
#[must_use]
pub fn resolve(key: Key, ctx: &KeyContext) -> Option<KeyAction> {
    match key {
        Key::ArrowLeft if ctx.has_first_page_link => Some(KeyAction::PreviousPage),
        Key::ArrowRight if ctx.has_last_page_link => Some(KeyAction::NextPage),
        Key::Char('f' | 'F') if ctx.has_search && !ctx.search_focused => {
            Some(KeyAction::FocusSearch)
        }
        Key::Escape if ctx.has_search => Some(KeyAction::ClearSearch),
        Key::Enter => Some(KeyAction::BlurActive),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: KeyContext = KeyContext {
        has_first_page_link: true,
        has_last_page_link: true,
        has_search: true,
        search_focused: false,
    };

    #[test]
    fn parses_dom_keys() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
        assert_eq!(Key::from_dom_key("F"), Key::Char('F'));
        assert_eq!(Key::from_dom_key("Shift"), Key::Other);
        assert_eq!(Key::from_dom_key(""), Key::Other);
    }

    #[test]
    fn arrows_page_through_the_table() {
        assert_eq!(resolve(Key::ArrowLeft, &FULL_PAGE), Some(KeyAction::PreviousPage));
        assert_eq!(resolve(Key::ArrowRight, &FULL_PAGE), Some(KeyAction::NextPage));
    }

    #[test]
    fn arrows_without_pagination_do_nothing() {
        let ctx = KeyContext {
            has_search: true,
            ..KeyContext::default()
        };
        assert_eq!(resolve(Key::ArrowLeft, &ctx), None);
        assert_eq!(resolve(Key::ArrowRight, &ctx), None);
    }

    #[test]
    fn f_focuses_search_either_case() {
        for c in ['f', 'F'] {
            let action = resolve(Key::Char(c), &FULL_PAGE);
            assert_eq!(action, Some(KeyAction::FocusSearch), "key {c}");
            assert!(action.is_some_and(KeyAction::prevents_default), "f is swallowed");
        }
    }

    #[test]
    fn f_types_normally_while_search_is_focused() {
        let ctx = KeyContext {
            search_focused: true,
            ..FULL_PAGE
        };
        assert_eq!(resolve(Key::Char('f'), &ctx), None);
    }

    #[test]
    fn escape_needs_a_search_input() {
        assert_eq!(resolve(Key::Escape, &FULL_PAGE), Some(KeyAction::ClearSearch));
        assert_eq!(resolve(Key::Escape, &KeyContext::default()), None);
    }

    #[test]
    fn enter_always_blurs() {
        assert_eq!(resolve(Key::Enter, &KeyContext::default()), Some(KeyAction::BlurActive));
        assert!(!KeyAction::BlurActive.prevents_default(), "enter keeps its default");
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(resolve(Key::Char('g'), &FULL_PAGE), None);
        assert_eq!(resolve(Key::Other, &FULL_PAGE), None);
    }
}
