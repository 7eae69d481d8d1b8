//! Screen trait and associated types.
//!
//! A screen owns whatever local state it needs (selection, hit areas),
//! renders itself, and requests navigation through a [`RouteAction`]
//! handle instead of touching the navigation stack directly.

use crate::config::Config;
use crate::navigation::RouteAction;
use crate::route::Route;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Current navigation stack, root first.
    pub stack: &'a [Route],
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, stack: &'a [Route]) -> Self {
        Self { config, stack }
    }

    /// Number of entries on the navigation stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration (keymap lives here).
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// What a screen reports back after handling an event.
///
/// Navigation is not part of this enum: screens navigate by calling
/// [`RouteAction`] and the host observes the resulting stack change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Event was not relevant to this screen.
    #[default]
    None,
    /// Local state changed (e.g. selection moved).
    Update,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct AboutScreen;
///
/// impl Screen for AboutScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
///         frame.render_widget(Paragraph::new("About"), area);
///         Ok(())
///     }
///
///     fn handle_event(
///         &mut self,
///         event: &Event,
///         ctx: &ScreenContext,
///         routes: &mut RouteAction,
///     ) -> Result<ScreenAction> {
///         routes.go_back();
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen within `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    ///
    /// Navigation requests go through `routes`; the returned action only
    /// describes local state.
    fn handle_event(
        &mut self,
        event: &Event,
        ctx: &ScreenContext,
        routes: &mut RouteAction,
    ) -> Result<ScreenAction>;

    /// Called when the screen becomes the active route.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen stops being the active route.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
