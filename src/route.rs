//! Route registry.
//!
//! The set of destinations is closed: every screen the app can show is a
//! variant of [`Route`], and each variant carries its identifier, label and
//! accent color. Nothing here is mutable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while resolving routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The identifier does not name a registered route.
    #[error("unknown route '{0}' (expected one of: MAIN, LOGIN, REGISTER, USER_PROFILE, SETTING)")]
    InvalidRoute(String),
    /// A navigation host was built without a screen for this route.
    #[error("no screen registered for route {0}")]
    UnregisteredScreen(Route),
}

/// A statically registered screen destination.
///
/// Serialized as its identifier; deserialization accepts anything
/// [`FromStr`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    Main,
    Login,
    Register,
    UserProfile,
    Setting,
}

impl Route {
    /// Every route, in declaration order.
    pub const ALL: [Route; 5] = [
        Route::Main,
        Route::Login,
        Route::Register,
        Route::UserProfile,
        Route::Setting,
    ];

    /// Every route, in declaration order.
    pub fn all() -> &'static [Route] {
        &Self::ALL
    }

    /// Routes reachable from the main screen, in button order.
    pub fn forward_routes() -> &'static [Route] {
        &Self::ALL[1..]
    }

    /// Stable identifier, used in config files and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Route::Main => "MAIN",
            Route::Login => "LOGIN",
            Route::Register => "REGISTER",
            Route::UserProfile => "USER_PROFILE",
            Route::Setting => "SETTING",
        }
    }

    /// Human-readable screen name.
    pub const fn label(self) -> &'static str {
        match self {
            Route::Main => "Main screen",
            Route::Login => "Login screen",
            Route::Register => "Register screen",
            Route::UserProfile => "Profile screen",
            Route::Setting => "Settings screen",
        }
    }

    /// Accent color used for this route's button.
    pub const fn color(self) -> Color {
        match self {
            Route::Main => Color::Rgb(0xE9, 0x1E, 0x63),
            Route::Login => Color::Rgb(0x67, 0x3A, 0xB7),
            Route::Register => Color::Rgb(0xCD, 0xDC, 0x39),
            Route::UserProfile => Color::Rgb(0x4C, 0xAF, 0x50),
            Route::Setting => Color::Rgb(0x3F, 0x51, 0xB5),
        }
    }

    /// Accent color as a `#RRGGBB` string.
    pub fn color_hex(self) -> String {
        match self.color() {
            Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
            other => format!("{}", other),
        }
    }

    /// Text shown on the button that navigates here.
    pub fn button_text(self) -> String {
        format!("Go to {}", self.label())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.id() == normalized)
            .ok_or_else(|| RouteError::InvalidRoute(s.to_string()))
    }
}

impl TryFrom<String> for Route {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.id().to_string()
    }
}
