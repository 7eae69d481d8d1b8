//! Shared helpers for integration tests: synthetic input events and
//! rendering an [`App`] into a ratatui `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use screenhop::app::App;
use screenhop::config::Config;
use std::path::PathBuf;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

pub fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn app(config: Config) -> App {
    App::new(config, PathBuf::from("/tmp/screenhop-test/config.toml")).unwrap()
}

/// Rendered screen, one string per terminal row.
pub struct Screen {
    pub rows: Vec<String>,
}

impl Screen {
    pub fn contains(&self, text: &str) -> bool {
        self.rows.iter().any(|row| row.contains(text))
    }

    /// Cell position of the first occurrence of `text`.
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.find(text)
                .map(|byte| (row[..byte].chars().count() as u16, y as u16))
        })
    }
}

pub fn render(app: &mut App) -> Screen {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.draw(frame).unwrap()).unwrap();

    let buffer = terminal.backend().buffer();
    let rows = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect();
    Screen { rows }
}
