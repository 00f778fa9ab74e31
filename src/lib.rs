//! Query Diff library
//!
//! The comparison core lives in [`diff`]; the remaining modules make up the
//! desktop app around it.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod constant;
pub mod diff;
pub mod loader;
pub mod messages;
pub mod notifier;
pub mod style;
pub mod ui;
