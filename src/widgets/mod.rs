// Reusable UI widgets

pub mod button;
pub mod menu;

pub use button::Button;
pub use menu::{Menu, MenuState};
