use anyhow::Context as _;

use crate::page::PageDom;
use crate::prefs::PreferenceStore;
use crate::theme::Theme;

/// Key under which the preference is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Owns the current theme value: syncs it with the preference store,
/// reflects it onto the page root, and keeps the toggle control's display
/// in step.
pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply the stored preference to the page root, defaulting to dark.
    /// The default is not written back until the user toggles.
    pub fn initialize(&self, page: &PageDom) -> anyhow::Result<Theme> {
        let theme = match self.store.get(STORAGE_KEY) {
            Some(raw) => match raw.parse() {
                Ok(theme) => theme,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid stored theme");
                    Theme::default()
                }
            },
            None => Theme::default(),
        };
        page.set_theme(theme)?;
        Ok(theme)
    }

    /// Sync the toggle control with the page's current theme. A page
    /// without the control is left alone.
    pub fn attach(&self, page: &PageDom) {
        let theme = page.theme().unwrap_or_default();
        if !page.set_toggle_display(&theme.display()) {
            tracing::debug!("toggle control absent; nothing to attach");
        }
    }

    /// One activation of the toggle control. Without a control no handler
    /// exists, so nothing changes and `None` is returned.
    pub fn toggle(&mut self, page: &PageDom) -> anyhow::Result<Option<Theme>> {
        if !page.has_toggle_control() {
            tracing::debug!("toggle control absent; ignoring activation");
            return Ok(None);
        }

        // Anything that is not currently dark flips to dark.
        let next = match page.theme() {
            Some(current) => current.opposite(),
            None => Theme::Dark,
        };
        page.set_theme(next)?;
        self.store
            .set(STORAGE_KEY, next.as_str())
            .context("persist theme preference")?;
        page.set_toggle_display(&next.display());
        Ok(Some(next))
    }
}
