//! Dioxus application entry point.
//!
//! `App` installs the theme provider at the root; every section below it
//! reads the theme through [`theme::use_theme`].

use dioxus::prelude::*;

pub mod components;
pub mod palette;
pub mod theme;

use components::{Content, Footer, Navbar, ThemeRoot};
use theme::use_theme_provider;

const MAIN_CSS: Asset = asset!("/public/main.css");

/// Root app component
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (loads the stored preference)
    use_theme_provider();

    rsx! {
        document::Title { "My Website" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeRoot {
            Navbar {}
            Content {}
            Footer {}
        }
    }
}
