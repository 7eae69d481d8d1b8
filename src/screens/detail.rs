//! Leaf screens: a title and a single "go back" button.
//!
//! Login, Register, UserProfile and Setting are placeholders that differ
//! only in the route they show, so one screen type serves all four.

use crate::keymap::Action;
use crate::navigation::RouteAction;
use crate::route::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_rect, rect_contains};
use crate::widgets::Button;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const BACK_LABEL: &str = "go back";
/// Rows between the title and the button
const BUTTON_OFFSET: u16 = 3;

pub struct DetailScreen {
    route: Route,
    /// Button area from the last render, for mouse hit testing
    back_button: Option<Rect>,
}

impl DetailScreen {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            back_button: None,
        }
    }

    pub fn login() -> Self {
        Self::new(Route::Login)
    }

    pub fn register() -> Self {
        Self::new(Route::Register)
    }

    pub fn user_profile() -> Self {
        Self::new(Route::UserProfile)
    }

    pub fn setting() -> Self {
        Self::new(Route::Setting)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    fn back(&self, routes: &mut RouteAction) -> ScreenAction {
        routes.go_back();
        ScreenAction::Update
    }
}

impl Screen for DetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let button = Button::new(BACK_LABEL)
            .style(t.accent_style(self.route))
            .focused(true);
        let (button_width, button_height) = button.size();

        let content = center_rect(area, area.width, 1 + BUTTON_OFFSET + button_height);
        let [title_row, depth_row, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_OFFSET - 1),
            Constraint::Length(button_height),
        ])
        .areas(content);

        frame.render_widget(
            Paragraph::new(self.route.label())
                .style(t.text_style().add_modifier(Modifier::BOLD))
                .centered(),
            title_row,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "stack depth {} · {} to go back",
                ctx.depth(),
                ctx.config.keymap.key_for(Action::Back)
            ))
                .style(t.muted_style())
                .centered(),
            depth_row,
        );

        let button_area = center_rect(button_row, button_width, button_height);
        frame.render_widget(button, button_area);
        self.back_button = Some(button_area);
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: &Event,
        ctx: &ScreenContext,
        routes: &mut RouteAction,
    ) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.config.keymap.get_action(key.code, key.modifiers) {
                    // The back button is the only control, so it always has focus.
                    Some(Action::Back | Action::Confirm) => Ok(self.back(routes)),
                    _ => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.back_button {
                    Some(rect) if rect_contains(rect, mouse.column, mouse.row) => {
                        Ok(self.back(routes))
                    }
                    _ => Ok(ScreenAction::None),
                }
            }
            _ => Ok(ScreenAction::None),
        }
    }
}
