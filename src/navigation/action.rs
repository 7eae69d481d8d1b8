use super::controller::{BackOutcome, NavController};
use crate::route::{Route, RouteError};
use tracing::warn;

/// The navigation operations screens are allowed to perform.
///
/// A `RouteAction` borrows the host's controller for the duration of one
/// event, so every call mutates the same stack the host renders from.
pub struct RouteAction<'a> {
    controller: &'a mut NavController,
}

impl<'a> RouteAction<'a> {
    pub fn new(controller: &'a mut NavController) -> Self {
        Self { controller }
    }

    /// Push `route` onto the stack, making it active.
    pub fn navigate_to(&mut self, route: Route) {
        self.controller.push(route);
    }

    /// Navigate by identifier. Unknown identifiers leave the stack untouched.
    pub fn navigate_to_id(&mut self, id: &str) -> Result<Route, RouteError> {
        let route = id.parse::<Route>().inspect_err(|e| {
            warn!("Rejected navigation: {}", e);
        })?;
        self.navigate_to(route);
        Ok(route)
    }

    /// Pop the active route. At the root the controller's policy decides.
    pub fn go_back(&mut self) -> BackOutcome {
        self.controller.pop()
    }

    pub fn current(&self) -> Route {
        self.controller.current()
    }

    pub fn depth(&self) -> usize {
        self.controller.depth()
    }
}
