pub mod action_buttons;
pub mod card;
pub mod header;
pub mod horde_grid;
pub mod theme;

pub use theme::Theme;
