use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::palette;
use crate::app::theme::use_theme;

#[component]
pub fn Footer() -> Element {
    let theme = use_theme().current();
    let year = chrono::Local::now().year();

    rsx! {
        footer { id: "contact", class: palette::footer(theme),
            div { class: "container", "© {year} My Website. All rights reserved." }
        }
    }
}
