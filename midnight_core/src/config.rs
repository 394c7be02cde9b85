// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where things live on the host page.

use crate::error::MountError;
use crate::fade::FadeOut;

/// Element ids and selectors the page glue looks up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Id of the element whose text shows `HH:MM:SS`.
    pub countdown_text_id: &'static str,
    /// Id of the element whose width tracks progress.
    pub progress_bar_id: &'static str,
    /// Id of the loading overlay removed after the page starts.
    pub loading_container_id: &'static str,
    /// Selector of the data table's pagination list.
    pub pagination_selector: &'static str,
    /// Selector of the data table's search input.
    pub search_input_selector: &'static str,
    /// How the loading overlay fades out.
    pub fade: FadeOut,
}

impl PageConfig {
    /// Ids and selectors used by the leaderboard pages.
    pub const DEFAULT: Self = Self {
        countdown_text_id: "countdown-timer",
        progress_bar_id: "progress-bar",
        loading_container_id: "loading-container",
        pagination_selector: ".datatable-pagination-list",
        search_input_selector: ".datatable-input[type=\"search\"]",
        fade: FadeOut::DEFAULT,
    };

    /// Resolves the label and the bar, in that order, through `lookup`.
    ///
    /// # Errors
    ///
    /// [`MountError::MissingSurface`] names the first id `lookup` could not
    /// find. The bar is not looked up when the label is missing.
    pub fn resolve_surfaces<E>(
        &self,
        mut lookup: impl FnMut(&'static str) -> Option<E>,
    ) -> Result<(E, E), MountError> {
        let mut find = |id: &'static str| lookup(id).ok_or(MountError::MissingSurface { id });
        let text = find(self.countdown_text_id)?;
        let bar = find(self.progress_bar_id)?;
        Ok((text, bar))
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn resolves_both_surfaces_in_order() {
        let mut asked = Vec::new();
        let found = PageConfig::DEFAULT.resolve_surfaces(|id| {
            asked.push(id);
            Some(id.len())
        });
        assert_eq!(found, Ok((15, 12)));
        assert_eq!(asked, ["countdown-timer", "progress-bar"]);
    }

    #[test]
    fn missing_bar_is_named() {
        let found = PageConfig::DEFAULT
            .resolve_surfaces(|id| (id != "progress-bar").then_some(()));
        assert_eq!(
            found,
            Err(MountError::MissingSurface { id: "progress-bar" }),
            "a page without the bar cannot mount"
        );
    }

    #[test]
    fn missing_label_stops_before_the_bar() {
        let mut asked = 0;
        let found = PageConfig::DEFAULT.resolve_surfaces(|_| {
            asked += 1;
            None::<()>
        });
        assert_eq!(found, Err(MountError::MissingSurface { id: "countdown-timer" }));
        assert_eq!(asked, 1, "the first missing id ends the lookup");
    }
}
