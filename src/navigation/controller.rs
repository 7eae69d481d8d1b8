//! Navigation state and change notification.

use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What `go_back` does when only the root entry is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootBackPolicy {
    /// Ignore the request; the root stays active.
    #[default]
    Stay,
    /// Leave the stack alone and ask the host's container to exit.
    Exit,
}

/// Direction of a navigation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Push,
    Pop,
}

/// Notification sent to subscribers after the stack changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChange {
    pub kind: ChangeKind,
    /// Route that was active before the change.
    pub from: Route,
    /// Route that is active after the change.
    pub to: Route,
    /// Stack depth after the change.
    pub depth: usize,
}

/// Result of a `go_back` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The given route was popped.
    Popped(Route),
    /// Already at the root; nothing changed.
    AtRoot,
    /// Already at the root; an exit was requested.
    ExitRequested,
}

/// Handle returned by [`NavController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&NavChange)>;

/// Owns the stack of visited routes.
///
/// The stack always holds at least one entry. Mutation is crate-internal;
/// screens go through [`RouteAction`](super::RouteAction).
pub struct NavController {
    stack: Vec<Route>,
    policy: RootBackPolicy,
    exit_requested: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl NavController {
    pub fn new(initial: Route, policy: RootBackPolicy) -> Self {
        Self {
            stack: vec![initial],
            policy,
            exit_requested: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The active route (top of the stack).
    pub fn current(&self) -> Route {
        // The stack is seeded in `new` and `pop` never removes the root.
        self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Visited routes, root first.
    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn policy(&self) -> RootBackPolicy {
        self.policy
    }

    /// Whether a back request at the root asked the app to exit.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Register a listener called after every stack change.
    pub fn subscribe(&mut self, listener: impl FnMut(&NavChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < before
    }

    pub(crate) fn push(&mut self, route: Route) -> NavChange {
        let from = self.current();
        self.stack.push(route);
        let change = NavChange {
            kind: ChangeKind::Push,
            from,
            to: route,
            depth: self.stack.len(),
        };
        self.notify(&change);
        change
    }

    pub(crate) fn pop(&mut self) -> BackOutcome {
        if self.stack.len() <= 1 {
            return match self.policy {
                RootBackPolicy::Stay => {
                    debug!("Back at root {} ignored", self.current());
                    BackOutcome::AtRoot
                }
                RootBackPolicy::Exit => {
                    debug!("Back at root {} requested exit", self.current());
                    self.exit_requested = true;
                    BackOutcome::ExitRequested
                }
            };
        }

        let Some(popped) = self.stack.pop() else {
            return BackOutcome::AtRoot;
        };
        let change = NavChange {
            kind: ChangeKind::Pop,
            from: popped,
            to: self.current(),
            depth: self.stack.len(),
        };
        self.notify(&change);
        BackOutcome::Popped(popped)
    }

    fn notify(&mut self, change: &NavChange) {
        debug!(
            "Navigation {:?}: {} -> {} (depth {})",
            change.kind, change.from, change.to, change.depth
        );
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }
}

impl fmt::Debug for NavController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavController")
            .field("stack", &self.stack)
            .field("policy", &self.policy)
            .field("exit_requested", &self.exit_requested)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_controller_has_single_entry() {
        let controller = NavController::new(Route::Main, RootBackPolicy::Stay);
        assert_eq!(controller.depth(), 1);
        assert_eq!(controller.current(), Route::Main);
        assert!(!controller.exit_requested());
    }

    #[test]
    fn test_push_allows_duplicates() {
        let mut controller = NavController::new(Route::Main, RootBackPolicy::Stay);
        controller.push(Route::Login);
        controller.push(Route::Login);
        assert_eq!(controller.stack(), &[Route::Main, Route::Login, Route::Login]);
    }

    #[test]
    fn test_pop_at_root_with_stay_policy() {
        let mut controller = NavController::new(Route::Setting, RootBackPolicy::Stay);
        assert_eq!(controller.pop(), BackOutcome::AtRoot);
        assert_eq!(controller.pop(), BackOutcome::AtRoot);
        assert_eq!(controller.stack(), &[Route::Setting]);
        assert!(!controller.exit_requested());
    }

    #[test]
    fn test_pop_at_root_with_exit_policy() {
        let mut controller = NavController::new(Route::Main, RootBackPolicy::Exit);
        assert_eq!(controller.pop(), BackOutcome::ExitRequested);
        assert_eq!(controller.depth(), 1);
        assert!(controller.exit_requested());
    }

    #[test]
    fn test_listeners_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller = NavController::new(Route::Main, RootBackPolicy::Stay);
        let sink = Rc::clone(&seen);
        controller.subscribe(move |change| sink.borrow_mut().push(*change));

        controller.push(Route::Register);
        controller.pop();
        controller.pop(); // root no-op, no notification

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].kind, ChangeKind::Push);
        assert_eq!(seen[0].to, Route::Register);
        assert_eq!(seen[0].depth, 2);
        assert_eq!(seen[1].kind, ChangeKind::Pop);
        assert_eq!(seen[1].from, Route::Register);
        assert_eq!(seen[1].to, Route::Main);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut controller = NavController::new(Route::Main, RootBackPolicy::Stay);
        let counter = Rc::clone(&count);
        let id = controller.subscribe(move |_| *counter.borrow_mut() += 1);

        controller.push(Route::Login);
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.push(Route::Register);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(serde_json::to_string(&RootBackPolicy::Exit).unwrap(), "\"exit\"");
        let policy: RootBackPolicy = serde_json::from_str("\"stay\"").unwrap();
        assert_eq!(policy, RootBackPolicy::Stay);
    }
}
