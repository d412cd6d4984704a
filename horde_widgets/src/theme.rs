use ratatui::style::Color;

/// Graveyard palette for the horde TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(12, 14, 12);
    pub const PANEL_BG: Color = Color::Rgb(24, 30, 24);

    // Card tiles
    pub const TILE_BORDER: Color = Color::Rgb(96, 110, 96);
    pub const TILE_CURSOR: Color = Color::Rgb(170, 220, 90);
    pub const TILE_TOKEN: Color = Color::Rgb(120, 140, 170);
    pub const TILE_ZOMBIE: Color = Color::Rgb(150, 90, 170);
    pub const REMOVE_X: Color = Color::Rgb(100, 149, 237);

    // Strength meter
    pub const STRENGTH_FULL: Color = Color::Rgb(120, 200, 90);
    pub const STRENGTH_LOW: Color = Color::Rgb(230, 170, 40);
    pub const STRENGTH_SPENT: Color = Color::Rgb(200, 50, 50);

    // Buttons
    pub const RELEASE: Color = Color::Rgb(170, 220, 90);
    pub const WEAKEN: Color = Color::Rgb(200, 50, 50);

    // Text
    pub const DIM_TEXT: Color = Color::Rgb(90, 100, 90);
    pub const MUTED_TEXT: Color = Color::Rgb(150, 165, 150);
    pub const BRIGHT_TEXT: Color = Color::Rgb(235, 240, 235);
    pub const LINK_TEXT: Color = Color::Rgb(110, 170, 230);
    pub const ERROR_TEXT: Color = Color::Rgb(230, 80, 80);
}
