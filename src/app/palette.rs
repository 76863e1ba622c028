//! Class names for each section, derived from the current theme.
//!
//! Rules live in `public/main.css`; every section has a `-light` and a
//! `-dark` modifier.

use crate::theme::Theme;

fn modifier(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

/// Root wrapper; carries `dark` so descendant rules can key off it
pub fn root(theme: Theme) -> String {
    match theme.css_class() {
        "" => "theme-root".to_string(),
        class => format!("theme-root {}", class),
    }
}

pub fn navbar(theme: Theme) -> String {
    format!("navbar navbar-{}", modifier(theme))
}

pub fn nav_link(theme: Theme) -> String {
    format!("nav-link nav-link-{}", modifier(theme))
}

pub fn content(theme: Theme) -> String {
    format!("content content-{}", modifier(theme))
}

pub fn footer(theme: Theme) -> String {
    format!("footer footer-{}", modifier(theme))
}

pub fn toggle_button(theme: Theme) -> String {
    format!("theme-toggle theme-toggle-{}", modifier(theme))
}
