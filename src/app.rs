use crate::config::Config;
use crate::keymap::Action;
use crate::navigation::NavHost;
use crate::route::Route;
use crate::screens::{nav_graph, ScreenAction, ScreenContext};
use crate::tui::Tui;
use crate::ui::render_app;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseEventKind};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    host: NavHost,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Mount the navigation host at the configured start route.
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let host = nav_graph(config.start_route)
            .mount(config.root_back, &ScreenContext::new(&config))?;
        Ok(Self {
            config,
            config_path,
            host,
            show_help: false,
            should_quit: false,
        })
    }

    pub fn current_route(&self) -> Route {
        self.host.current()
    }

    pub fn stack(&self) -> &[Route] {
        self.host.stack()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the event loop until the user quits, then unmount the host.
    pub fn run(mut self, tui: &mut Tui) -> Result<Vec<Route>> {
        tui.enter()?;

        let result = self.event_loop(tui);
        let exited = tui.exit();
        self.teardown(result, exited)
    }

    /// Unmount the host whatever the loop outcome. A loop error takes
    /// precedence over a terminal restore error.
    fn teardown(self, result: Result<()>, exited: Result<()>) -> Result<Vec<Route>> {
        let ctx = ScreenContext::new(&self.config);
        let unmounted = self.host.unmount(&ctx);
        result?;
        exited?;

        let stack = unmounted?;
        info!("Exited with navigation stack {:?}", stack);
        Ok(stack)
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            let mut drawn = Ok(());
            tui.terminal_mut().draw(|frame| drawn = self.draw(frame))?;
            drawn?;

            if self.should_quit {
                return Ok(());
            }

            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(&event)?;
            }
        }
    }

    /// Draw one frame.
    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let config_path = self.config_path.display().to_string();
        render_app(
            frame,
            &mut self.host,
            &self.config,
            self.show_help,
            &config_path,
        )
    }

    /// Apply global bindings, then hand the event to the active screen.
    pub fn handle_event(&mut self, event: &Event) -> Result<ScreenAction> {
        if self.show_help {
            // Any key or click dismisses the overlay.
            let dismissed = match event {
                Event::Key(key) => key.kind == KeyEventKind::Press,
                Event::Mouse(mouse) => matches!(mouse.kind, MouseEventKind::Down(_)),
                _ => false,
            };
            if dismissed {
                self.show_help = false;
                return Ok(ScreenAction::Update);
            }
            return Ok(ScreenAction::None);
        }

        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match self.config.keymap.get_action(key.code, key.modifiers) {
                    Some(Action::Quit) => {
                        debug!("Quit requested at {}", self.host.current());
                        self.should_quit = true;
                        return Ok(ScreenAction::None);
                    }
                    Some(Action::Help) => {
                        self.show_help = true;
                        return Ok(ScreenAction::Update);
                    }
                    _ => {}
                }
            }
        }

        let ctx = ScreenContext::new(&self.config);
        let action = self.host.handle_event(event, &ctx)?;
        if self.host.exit_requested() {
            info!("Back pressed at root, exiting");
            self.should_quit = true;
        }
        Ok(action)
    }
}
