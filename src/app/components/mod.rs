//! Page sections and the theme toggle.

pub mod content;
pub mod footer;
pub mod layout;
pub mod nav;
pub mod toggle;

pub use content::Content;
pub use footer::Footer;
pub use layout::ThemeRoot;
pub use nav::Navbar;
pub use toggle::ThemeToggle;
