//! Core types and utilities for the mcpr-howto TUI.
//!
//! This crate provides foundational types shared across the TUI crates:
//! - Theme system with color definitions
//! - Localized string lookup
//! - Event handling

pub mod event;
pub mod i18n;
pub mod theme;

pub use event::{is_quit, Event, EventHandler, EventLoopHandle};
pub use i18n::{Catalog, Locale, StaticStrings, Translate};
pub use theme::Theme;
