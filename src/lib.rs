//! screenhop - a multi-screen terminal app with stack-based navigation
//!
//! The library provides the route registry, the navigation controller and
//! host, the screens, and the terminal shell around them.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod route;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use navigation::{NavHost, RouteAction};
pub use route::{Route, RouteError};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
