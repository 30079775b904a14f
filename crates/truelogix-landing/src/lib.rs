//! TrueLogiX marketing landing page
//!
//! A Dioxus desktop application rendering the landing site: a one-time
//! animated welcome intro, a handful of pages, and a project-quote lead form.

pub mod components;
pub mod session;
pub mod state;
pub mod theme;
