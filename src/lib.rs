//! Theme Switcher
//!
//! A light/dark theme switcher for a single page, built on Dioxus.
//!
//! This library provides:
//! - The theme state container with a persisted preference
//! - Durable preference stores (browser `localStorage`, JSON file, memory)
//! - Layered configuration (defaults, config file, environment)
//! - The Dioxus UI: theme provider, toggle, navbar, content and footer

pub mod app;
pub mod config;
pub mod error;
pub mod storage;
pub mod theme;

pub use config::ThemeConfig;
pub use error::{StorageError, ThemeError};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{SubscriptionId, Theme, ThemeState};
