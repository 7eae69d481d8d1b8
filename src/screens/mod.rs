//! Screen controllers for the application.
//!
//! Each screen implements the [`Screen`] trait: it renders itself and turns
//! input into navigation requests on the [`RouteAction`] it is handed.
//!
//! ```text
//! MAIN          -> MainMenuScreen
//! LOGIN         -> DetailScreen::login()
//! REGISTER      -> DetailScreen::register()
//! USER_PROFILE  -> DetailScreen::user_profile()
//! SETTING       -> DetailScreen::setting()
//! ```
//!
//! [`RouteAction`]: crate::navigation::RouteAction

pub mod detail;
pub mod main_menu;
pub mod screen_trait;

pub use detail::DetailScreen;
pub use main_menu::MainMenuScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};

use crate::navigation::{NavHost, NavHostBuilder};
use crate::route::Route;

/// The application's route table, starting at `start`.
pub fn nav_graph(start: Route) -> NavHostBuilder {
    NavHost::builder(start)
        .screen(Route::Main, MainMenuScreen::new())
        .screen(Route::Login, DetailScreen::login())
        .screen(Route::Register, DetailScreen::register())
        .screen(Route::UserProfile, DetailScreen::user_profile())
        .screen(Route::Setting, DetailScreen::setting())
}
