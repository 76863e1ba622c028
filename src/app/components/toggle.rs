//! Light/dark toggle button.

use dioxus::prelude::*;

use crate::app::palette;
use crate::app::theme::use_theme;

/// Toggle button: moon in light mode, sun in dark mode.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let current = theme.current();

    rsx! {
        button {
            r#type: "button",
            class: palette::toggle_button(current),
            "aria-label": "Toggle Theme",
            title: if current.is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                theme.toggle();
            },
            if current.is_dark() {
                SunIcon {}
            } else {
                MoonIcon {}
            }
        }
    }
}

#[component]
fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}
