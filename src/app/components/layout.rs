//! Theme root wrapping the page sections.

use dioxus::prelude::*;

use crate::app::palette;
use crate::app::theme::use_theme;

#[derive(Props, Clone, PartialEq)]
pub struct ThemeRootProps {
    /// Page content
    pub children: Element,
}

/// Wrapper carrying the `dark` class while the dark theme is active.
#[component]
pub fn ThemeRoot(props: ThemeRootProps) -> Element {
    let theme = use_theme().current();

    rsx! {
        div { class: palette::root(theme),
            {props.children}
        }
    }
}
