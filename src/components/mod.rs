//! UI Components
//!
//! Reusable Leptos components for the shell.

pub mod nav;

pub use nav::Nav;
