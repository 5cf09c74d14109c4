//! Page components for the server-rendered blog.
//!
//! Each page is a Dioxus component that renders a full page using the Layout component.

pub mod article;
pub mod home;
pub mod not_found;

pub use article::ArticlePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
