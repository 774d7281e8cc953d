// src/store/theme.rs

use crate::errors::StoreResult;
use crate::store::KvStore;

/// Storage key for the theme preference token.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn parse(token: &str) -> Option<Theme> {
        match token {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Read the stored preference, falling back to the system preference on
    /// absent or unrecognized values.
    pub fn load(store: &KvStore, system_prefers_dark: bool) -> StoreResult<Theme> {
        let fallback = if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };
        Ok(store
            .get(THEME_KEY)?
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(fallback))
    }

    /// Flip dark/light and persist the result.
    pub fn toggle(&mut self, store: &KvStore) -> StoreResult<()> {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        store.set(THEME_KEY, self.as_str())
    }
}
