//! Navigation host: maps routes to screens and dispatches the active one.

use super::action::RouteAction;
use super::controller::{NavChange, NavController, RootBackPolicy, SubscriptionId};
use crate::route::{Route, RouteError};
use crate::screens::{RenderContext, Screen, ScreenAction, ScreenContext};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::info;

/// Collects the route table before the host is mounted.
pub struct NavHostBuilder {
    start: Route,
    screens: HashMap<Route, Box<dyn Screen>>,
}

impl NavHostBuilder {
    /// Register the screen rendered for `route`. A later registration for
    /// the same route replaces the earlier one.
    pub fn screen(mut self, route: Route, screen: impl Screen + 'static) -> Self {
        self.screens.insert(route, Box::new(screen));
        self
    }

    /// Mount the host at the start route.
    ///
    /// Fails with [`RouteError::UnregisteredScreen`] if any registered
    /// route lacks a screen.
    pub fn mount(self, policy: RootBackPolicy, ctx: &ScreenContext) -> Result<NavHost> {
        if let Some(missing) = Route::all()
            .iter()
            .find(|route| !self.screens.contains_key(route))
        {
            return Err(RouteError::UnregisteredScreen(*missing).into());
        }

        let mut controller = NavController::new(self.start, policy);
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&pending);
        let subscription = controller.subscribe(move |change| queue.borrow_mut().push(*change));

        let mut host = NavHost {
            controller,
            screens: self.screens,
            pending,
            subscription,
        };
        host.active_screen_mut()?.on_enter(ctx)?;
        info!(
            "Navigation host mounted at {} ({:?} at root)",
            host.current(),
            host.policy()
        );
        Ok(host)
    }
}

/// Owns the navigation state for as long as it is mounted.
pub struct NavHost {
    controller: NavController,
    screens: HashMap<Route, Box<dyn Screen>>,
    pending: Rc<RefCell<Vec<NavChange>>>,
    subscription: SubscriptionId,
}

impl NavHost {
    pub fn builder(start: Route) -> NavHostBuilder {
        NavHostBuilder {
            start,
            screens: HashMap::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.controller.current()
    }

    pub fn depth(&self) -> usize {
        self.controller.depth()
    }

    pub fn stack(&self) -> &[Route] {
        self.controller.stack()
    }

    pub fn exit_requested(&self) -> bool {
        self.controller.exit_requested()
    }

    /// What `go_back` does at the root.
    pub fn policy(&self) -> RootBackPolicy {
        self.controller.policy()
    }

    /// Subscribe to navigation changes alongside the host.
    pub fn subscribe(&mut self, listener: impl FnMut(&NavChange) + 'static) -> SubscriptionId {
        self.controller.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        id != self.subscription && self.controller.unsubscribe(id)
    }

    /// Navigation handle for callers outside a screen.
    ///
    /// Changes made through it are applied to screens on the next
    /// [`sync`](Self::sync) or [`handle_event`](Self::handle_event).
    pub fn route_action(&mut self) -> RouteAction<'_> {
        RouteAction::new(&mut self.controller)
    }

    /// Render the active route's screen.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let route = self.controller.current();
        let screen = self
            .screens
            .get_mut(&route)
            .ok_or(RouteError::UnregisteredScreen(route))?;
        screen.render(frame, area, ctx)
    }

    /// Forward an event to the active screen, then apply any navigation it
    /// triggered.
    pub fn handle_event(&mut self, event: &Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let route = self.controller.current();
        let screen = self
            .screens
            .get_mut(&route)
            .ok_or(RouteError::UnregisteredScreen(route))?;
        let mut routes = RouteAction::new(&mut self.controller);
        let action = screen.handle_event(event, ctx, &mut routes)?;
        self.sync(ctx)?;
        Ok(action)
    }

    /// Run lifecycle hooks for queued navigation changes. Returns how many
    /// changes were applied.
    pub fn sync(&mut self, ctx: &ScreenContext) -> Result<usize> {
        let changes: Vec<NavChange> = self.pending.borrow_mut().drain(..).collect();
        for change in &changes {
            self.screen_mut(change.from)?.on_exit(ctx)?;
            self.screen_mut(change.to)?.on_enter(ctx)?;
        }
        Ok(changes.len())
    }

    /// Tear the host down, returning the final stack.
    pub fn unmount(mut self, ctx: &ScreenContext) -> Result<Vec<Route>> {
        self.sync(ctx)?;
        self.active_screen_mut()?.on_exit(ctx)?;
        self.controller.unsubscribe(self.subscription);
        let stack = self.controller.stack().to_vec();
        info!("Navigation host unmounted at {} (depth {})", self.current(), stack.len());
        Ok(stack)
    }

    fn active_screen_mut(&mut self) -> Result<&mut Box<dyn Screen>, RouteError> {
        let route = self.controller.current();
        self.screen_mut(route)
    }

    fn screen_mut(&mut self, route: Route) -> Result<&mut Box<dyn Screen>, RouteError> {
        self.screens
            .get_mut(&route)
            .ok_or(RouteError::UnregisteredScreen(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::BackOutcome;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Records lifecycle calls and navigates to a fixed route on any key.
    struct Probe {
        route: Route,
        target: Option<Route>,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Screen for Probe {
        fn render(&mut self, _frame: &mut Frame, _area: Rect, _ctx: &RenderContext) -> Result<()> {
            Ok(())
        }

        fn handle_event(
            &mut self,
            _event: &Event,
            _ctx: &ScreenContext,
            routes: &mut RouteAction,
        ) -> Result<ScreenAction> {
            match self.target {
                Some(target) => routes.navigate_to(target),
                None => {
                    routes.go_back();
                }
            }
            Ok(ScreenAction::None)
        }

        fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
            self.log.borrow_mut().push(format!("enter {}", self.route));
            Ok(())
        }

        fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
            self.log.borrow_mut().push(format!("exit {}", self.route));
            Ok(())
        }
    }

    fn probe_host(log: &Rc<RefCell<Vec<String>>>, config: &Config) -> NavHost {
        let mut builder = NavHost::builder(Route::Main);
        for route in Route::all() {
            let target = (*route == Route::Main).then_some(Route::Login);
            builder = builder.screen(
                *route,
                Probe {
                    route: *route,
                    target,
                    log: Rc::clone(log),
                },
            );
        }
        builder
            .mount(RootBackPolicy::Stay, &ScreenContext::new(config))
            .unwrap()
    }

    fn key() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_mount_enters_start_screen() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let host = probe_host(&log, &config);
        assert_eq!(host.current(), Route::Main);
        assert_eq!(*log.borrow(), vec!["enter MAIN"]);
    }

    #[test]
    fn test_mount_keeps_root_back_policy() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let mut host = probe_host(&log, &config);
        assert_eq!(host.policy(), RootBackPolicy::Stay);
        assert_eq!(host.route_action().go_back(), BackOutcome::AtRoot);
        assert!(!host.exit_requested());
    }

    #[test]
    fn test_mount_rejects_missing_screen() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let result = NavHost::builder(Route::Main)
            .screen(
                Route::Main,
                Probe {
                    route: Route::Main,
                    target: None,
                    log,
                },
            )
            .mount(RootBackPolicy::Stay, &ScreenContext::new(&config));

        let err = result.err().unwrap();
        assert_eq!(
            err.downcast_ref::<RouteError>(),
            Some(&RouteError::UnregisteredScreen(Route::Login))
        );
    }

    #[test]
    fn test_event_runs_lifecycle_hooks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut host = probe_host(&log, &config);

        host.handle_event(&key(), &ctx).unwrap();
        assert_eq!(host.current(), Route::Login);
        host.handle_event(&key(), &ctx).unwrap();
        assert_eq!(host.current(), Route::Main);

        assert_eq!(
            *log.borrow(),
            vec!["enter MAIN", "exit MAIN", "enter LOGIN", "exit LOGIN", "enter MAIN"]
        );
    }

    #[test]
    fn test_route_action_changes_apply_on_sync() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut host = probe_host(&log, &config);

        host.route_action().navigate_to(Route::Setting);
        host.route_action().navigate_to(Route::UserProfile);
        assert_eq!(host.sync(&ctx).unwrap(), 2);
        assert_eq!(host.sync(&ctx).unwrap(), 0);
        assert_eq!(host.stack(), &[Route::Main, Route::Setting, Route::UserProfile]);
    }

    #[test]
    fn test_host_subscription_cannot_be_removed_externally() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let mut host = probe_host(&log, &config);
        let subscription = host.subscription;
        assert!(!host.unsubscribe(subscription));
    }

    #[test]
    fn test_unmount_returns_stack() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut host = probe_host(&log, &config);

        host.route_action().navigate_to(Route::Register);
        let stack = host.unmount(&ctx).unwrap();
        assert_eq!(stack, vec![Route::Main, Route::Register]);
        assert_eq!(log.borrow().last().map(String::as_str), Some("exit REGISTER"));
    }
}
