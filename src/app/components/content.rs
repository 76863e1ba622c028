//! Main content area.

use dioxus::prelude::*;

use crate::app::palette;
use crate::app::theme::use_theme;

const FEATURES: &[&str] = &[
    "Theme Toggle: Switch between light and dark themes.",
    "Context API: Theme state managed globally.",
    "Custom Hook: use_theme hook for easy access.",
    "Local Storage: Theme persists across sessions.",
    "Responsive Design",
];

#[component]
pub fn Content() -> Element {
    let theme = use_theme().current();
    let label = theme.label();

    rsx! {
        main { id: "home", class: palette::content(theme),
            div { class: "container",
                h1 { "Welcome to the {label} Side" }
                p {
                    "This is a themeable website. You can toggle between light and dark themes "
                    "using the button in the navigation bar."
                }
                section { id: "about", class: "features",
                    h2 { "Features" }
                    ul {
                        for feature in FEATURES.iter().copied() {
                            li { key: "{feature}", "{feature}" }
                        }
                    }
                }
            }
        }
    }
}
