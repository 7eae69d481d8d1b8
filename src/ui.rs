//! Frame composition: header, active screen, footer, optional help overlay.

use crate::components::footer::FOOTER_HEIGHT;
use crate::components::header::HEADER_HEIGHT;
use crate::components::{Footer, Header, HelpOverlay};
use crate::config::Config;
use crate::navigation::NavHost;
use crate::route::Route;
use crate::screens::RenderContext;
use crate::utils::create_standard_layout;
use anyhow::Result;
use ratatui::Frame;

pub const APP_TITLE: &str = "screenhop";

/// Draw one full frame for the host's current state.
pub fn render_app(
    frame: &mut Frame,
    host: &mut NavHost,
    config: &Config,
    show_help: bool,
    config_path: &str,
) -> Result<()> {
    let area = frame.area();
    let (header, body, footer) = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);

    // Screens get their own copy so the host can be borrowed mutably.
    let stack: Vec<Route> = host.stack().to_vec();
    Header::render(frame, header, APP_TITLE, &stack)?;

    let ctx = RenderContext::new(config, &stack);
    host.render(frame, body, &ctx)?;

    let hints = if host.current() == Route::Main {
        config.keymap.footer_menu()
    } else {
        config.keymap.footer_back()
    };
    Footer::render(frame, footer, &hints)?;

    if show_help {
        HelpOverlay::render(frame, area, &config.keymap, config_path)?;
    }
    Ok(())
}
