//! Shared UI components for the server-rendered pages.

pub mod article_card;
pub mod layout;
pub mod motion;
pub mod theme;

pub use article_card::ArticleCard;
pub use layout::Layout;
pub use motion::{FloatingIcons, RevealTitle};
pub use theme::ThemeToggle;
