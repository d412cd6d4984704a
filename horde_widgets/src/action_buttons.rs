use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// The two horde buttons: [Release the Horde] | [Decrease the Horde]
pub struct ActionButtonsWidget {
    pub can_release: bool,
    pub can_weaken: bool,
    /// True once the table has at least one card; changes the release label
    pub horde_on_table: bool,
}

/// Identifies which button was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonHit {
    Release,
    Weaken,
}

impl ActionButtonsWidget {
    pub fn new(can_release: bool, can_weaken: bool, horde_on_table: bool) -> Self {
        Self {
            can_release,
            can_weaken,
            horde_on_table,
        }
    }

    pub fn release_label(&self) -> &'static str {
        if self.horde_on_table {
            "Release More of the Horde!"
        } else {
            "Release the Horde"
        }
    }

    /// Returns (release_rect, separator_rect, weaken_rect)
    pub fn button_rects(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(32), // Release
            Constraint::Length(5),  // " | "
            Constraint::Length(24), // Decrease
            Constraint::Min(0),
        ])
        .split(area);

        (chunks[1], chunks[2], chunks[3])
    }

    /// Check if a click at (col, row) hits any button
    pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<ButtonHit> {
        let (release, _, weaken) = Self::button_rects(area);

        if point_in_rect(col, row, release) {
            return Some(ButtonHit::Release);
        }
        if point_in_rect(col, row, weaken) {
            return Some(ButtonHit::Weaken);
        }
        None
    }
}

pub(crate) fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

impl Widget for ActionButtonsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 20 {
            return;
        }

        let (release_rect, sep_rect, weaken_rect) = Self::button_rects(area);

        render_button(
            buf,
            release_rect,
            &format!("[R] {}", self.release_label()),
            self.can_release,
            Theme::RELEASE,
        );

        let sep_x = sep_rect.x + sep_rect.width / 2;
        buf.set_string(
            sep_x,
            sep_rect.y + 1,
            "|",
            Style::default().fg(Theme::DIM_TEXT),
        );

        render_button(
            buf,
            weaken_rect,
            "[D] Decrease the Horde",
            self.can_weaken,
            Theme::WEAKEN,
        );
    }
}

fn render_button(buf: &mut Buffer, area: Rect, label: &str, enabled: bool, active_color: Color) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let color = if enabled {
        active_color
    } else {
        Theme::DIM_TEXT
    };
    let border_style = Style::default().fg(color);
    let text_style = if enabled {
        Style::default()
            .fg(Theme::BRIGHT_TEXT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Theme::DIM_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    };

    let inner_w = area.width.saturating_sub(2) as usize;
    let rule = "\u{2500}".repeat(inner_w);

    buf.set_string(area.x, area.y, format!("\u{256d}{}\u{256e}", rule), border_style);

    let y = area.y + 1;
    buf.set_string(area.x, y, "\u{2502}", border_style);
    buf.set_string(area.x + 1, y, " ".repeat(inner_w), Style::default());
    let display_label: String = label.chars().take(inner_w).collect();
    let label_w = display_label.chars().count() as u16;
    let label_x = area.x + 1 + (inner_w as u16).saturating_sub(label_w) / 2;
    buf.set_string(label_x, y, &display_label, text_style);
    buf.set_string(area.x + area.width - 1, y, "\u{2502}", border_style);

    buf.set_string(
        area.x,
        area.y + 2,
        format!("\u{2570}{}\u{256f}", rule),
        border_style,
    );
}
