//! Stack-based navigation.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ NavHost                                      │
//! │  routes: Route -> Box<dyn Screen>            │
//! │  ┌──────────────────────────┐                │
//! │  │ NavController            │── NavChange ──▶ subscribers
//! │  │  stack: [MAIN, LOGIN]    │                │
//! │  └──────────────────────────┘                │
//! │        ▲                                     │
//! │        │ navigate_to / go_back               │
//! │  RouteAction (lent to the active screen)     │
//! └──────────────────────────────────────────────┘
//! ```

pub mod action;
pub mod controller;
pub mod host;

pub use action::RouteAction;
pub use controller::{
    BackOutcome, ChangeKind, NavChange, NavController, RootBackPolicy, SubscriptionId,
};
pub use host::{NavHost, NavHostBuilder};
