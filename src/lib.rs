//! Aishwarya's Blog - Rust Implementation
//!
//! A small personal tech blog rendered on the server.
//!
//! This library provides:
//! - A read-only content registry (articles, profile, categories)
//! - Light/dark theme state persisted in a browser cookie
//! - Seeding for the decorative floating-icon field
//! - Web UI pages rendered with Dioxus SSR and served by axum

pub mod content;
pub mod motion;
pub mod theme;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
