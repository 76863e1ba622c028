//! Behavior of the theme state container: defaults, load fallbacks,
//! toggling and write-through persistence.

mod common;

use common::{seeded, FlakyStore};
use theme_switcher::{MemoryStore, Theme, ThemeConfig, ThemeState};

fn load(store: impl theme_switcher::PreferenceStore + 'static) -> ThemeState {
    ThemeState::load(store, &ThemeConfig::default())
}

#[test]
fn toggle_parity_from_light() {
    for n in 0..9 {
        let mut state = load(MemoryStore::new());
        for _ in 0..n {
            state.toggle_theme();
        }
        let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(state.current_theme(), expected, "after {} toggles", n);
    }
}

#[test]
fn fresh_session_toggles_to_dark_and_persists() {
    let store = MemoryStore::new();
    let mut state = load(store.clone());

    assert_eq!(state.current_theme(), Theme::Light);
    assert_eq!(state.toggle_theme(), Theme::Dark);
    assert_eq!(state.current_theme(), Theme::Dark);
    assert_eq!(store.value("theme").as_deref(), Some("dark"));
}

#[test]
fn seeded_dark_is_adopted_without_toggle() {
    let state = load(seeded("dark"));
    assert_eq!(state.current_theme(), Theme::Dark);
}

#[test]
fn persisted_value_survives_reinitialization() {
    let store = MemoryStore::new();
    let mut first = load(store.clone());
    first.toggle_theme();
    drop(first);

    let second = load(store);
    assert_eq!(second.current_theme(), Theme::Dark);
}

#[test]
fn absent_entry_yields_default() {
    let store = MemoryStore::new();
    let state = load(store.clone());

    assert_eq!(state.current_theme(), Theme::Light);
    assert!(store.is_empty(), "loading must not write");
}

#[test]
fn malformed_entry_yields_default() {
    for raw in ["blue", "", "DARK", "{\"theme\":\"dark\"}"] {
        let state = load(seeded(raw));
        assert_eq!(state.current_theme(), Theme::Light, "stored {:?}", raw);
    }
}

#[test]
fn malformed_entry_is_replaced_on_next_toggle() {
    let store = seeded("blue");
    let mut state = load(store.clone());

    state.toggle_theme();

    assert_eq!(store.value("theme").as_deref(), Some("dark"));
}

#[test]
fn read_failure_keeps_default() {
    let state = load(FlakyStore::failing_reads());
    assert_eq!(state.current_theme(), Theme::Light);
}

#[test]
fn write_failure_does_not_block_toggle() {
    let store = FlakyStore::failing_writes();
    let mut state = load(store.clone());

    assert_eq!(state.toggle_theme(), Theme::Dark);
    assert_eq!(state.current_theme(), Theme::Dark);
    assert_eq!(state.toggle_theme(), Theme::Light);
    assert_eq!(store.writes.get(), 2);
    assert!(store.inner.is_empty());
}

#[test]
fn configured_default_and_key_are_honored() {
    let config = ThemeConfig {
        storage_key: "site-theme".to_string(),
        default_theme: Theme::Dark,
        ..ThemeConfig::default()
    };
    let store = MemoryStore::new();
    store.insert("theme", "light");

    let mut state = ThemeState::load(store.clone(), &config);
    assert_eq!(state.current_theme(), Theme::Dark, "other keys are ignored");
    assert_eq!(state.storage_key(), "site-theme");

    state.toggle_theme();
    assert_eq!(store.value("site-theme").as_deref(), Some("light"));
    assert_eq!(store.value("theme").as_deref(), Some("light"));
}

#[test]
fn load_does_not_write_back_by_default() {
    let mut store = FlakyStore::default();
    store.inner = seeded("dark");

    let state = load(store.clone());

    assert_eq!(state.current_theme(), Theme::Dark);
    assert_eq!(store.writes.get(), 0);
}

#[test]
fn reconcile_on_load_writes_adopted_value_back() {
    let mut store = FlakyStore::default();
    store.inner = seeded(" dark\n");
    let config = ThemeConfig {
        reconcile_on_load: true,
        ..ThemeConfig::default()
    };

    let state = ThemeState::load(store.clone(), &config);

    assert_eq!(state.current_theme(), Theme::Dark);
    assert_eq!(store.writes.get(), 1);
    assert_eq!(store.inner.value("theme").as_deref(), Some("dark"));
}
