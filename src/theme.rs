//! Theme preference and the state container that owns it.
//!
//! `ThemeState` is the single source of truth for the current theme. It reads
//! the stored preference once on construction, writes through on every
//! toggle, and notifies subscribers after each change. Storage failures are
//! logged and absorbed; the in-memory value is always authoritative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored form, as written to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The opposite variant
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// CSS class applied to the theme root (empty for light)
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

/// Accepts the stored forms only, so config values follow the same rules as storage
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Handle returned by [`ThemeState::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Theme)>;

/// Theme state container
pub struct ThemeState {
    current: Theme,
    key: String,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ThemeState {
    /// Build the container, adopting the stored preference if it is usable.
    ///
    /// Never fails: a missing, unrecognized or unreadable entry keeps
    /// `config.default_theme`.
    pub fn load(store: impl PreferenceStore + 'static, config: &ThemeConfig) -> Self {
        let mut state = Self {
            current: config.default_theme,
            key: config.storage_key.clone(),
            store: Box::new(store),
            subscribers: Vec::new(),
            next_id: 0,
        };

        match state.store.get(&state.key) {
            Ok(Some(raw)) => match Theme::parse(&raw) {
                Some(theme) => {
                    tracing::debug!("Loaded stored theme: {}", theme);
                    state.current = theme;
                    if config.reconcile_on_load {
                        state.persist();
                    }
                }
                None => {
                    tracing::warn!(
                        "Ignoring unrecognized stored theme {:?}, using {}",
                        raw,
                        state.current
                    );
                }
            },
            Ok(None) => {
                tracing::debug!("No stored theme, using {}", state.current);
            }
            Err(e) => {
                tracing::warn!("Failed to load theme preference: {}", e);
            }
        }

        state
    }

    pub fn current_theme(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it and notify subscribers. Returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.current = self.current.toggled();
        tracing::info!("Theme toggled to {}", self.current);
        self.persist();
        self.notify();
        self.current
    }

    /// Register an observer called with the new theme after every change.
    ///
    /// Callbacks run while the container is mutably borrowed and must not
    /// read or toggle the owning `ThemeContext`.
    pub fn subscribe(&mut self, callback: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    fn notify(&mut self) {
        let theme = self.current;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(theme);
        }
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("current", &self.current)
            .field("key", &self.key)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
