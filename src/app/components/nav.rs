//! Navigation bar with the theme toggle.

use dioxus::prelude::*;

use super::toggle::ThemeToggle;
use crate::app::palette;
use crate::app::theme::use_theme;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> Element {
    let theme = use_theme().current();
    let link_class = palette::nav_link(theme);

    rsx! {
        nav { class: palette::navbar(theme),
            div { class: "container navbar-inner",
                span { class: "brand", "My Website" }
                div { class: "nav-links",
                    for (label, href) in NAV_LINKS.iter().copied() {
                        a { key: "{label}", class: link_class.clone(), href, "{label}" }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}
