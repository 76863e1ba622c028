//! Theme context with persisted preference.
//!
//! The provider owns a [`ThemeState`] and mirrors its value into a signal, so
//! every component that reads the theme re-renders when it changes.

use dioxus::prelude::*;

use crate::config::{self, ThemeConfig};
use crate::error::ThemeError;
use crate::storage::{self, PreferenceStore};
use crate::theme::{Theme, ThemeState};

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    current: Signal<Theme>,
    state: CopyValue<ThemeState>,
}

impl ThemeContext {
    /// Get current theme (subscribes the calling component)
    pub fn current(&self) -> Theme {
        (self.current)()
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    /// Flip and persist the theme. Returns the new value.
    pub fn toggle(&self) -> Theme {
        let mut state = self.state;
        let next = state.write().toggle_theme();
        next
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() -> ThemeContext {
    use_theme_provider_with(
        || {
            config::load_config().unwrap_or_else(|e| {
                tracing::warn!("Invalid theme configuration, using defaults: {:#}", e);
                ThemeConfig::default()
            })
        },
        storage::default_store,
    )
}

/// Provider over an explicit configuration and store
pub fn use_theme_provider_with<S>(
    make_config: impl FnOnce() -> ThemeConfig,
    make_store: impl FnOnce(&ThemeConfig) -> S,
) -> ThemeContext
where
    S: PreferenceStore + 'static,
{
    let ctx = use_hook(|| {
        let config = make_config();
        let mut state = ThemeState::load(make_store(&config), &config);

        let mut current = Signal::new(state.current_theme());
        state.subscribe(move |theme| current.set(theme));

        #[cfg(target_arch = "wasm32")]
        {
            apply_theme_to_dom(state.current_theme());
            state.subscribe(apply_theme_to_dom);
        }

        ThemeContext {
            current,
            state: CopyValue::new(state),
        }
    });

    use_context_provider(|| ctx)
}

/// Get theme context, or `MissingProvider` outside the provider's subtree
pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    try_use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Get theme context - use in any component below the provider
///
/// # Panics
///
/// Panics when called outside the provider's subtree.
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{}", e),
    }
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };

    if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("color-scheme", theme.as_str());
    }
}
