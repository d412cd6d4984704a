use horde_core::card::Card;
use horde_core::image::image_or;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Width and height of a card tile in terminal cells
pub const TILE_WIDTH: u16 = 26;
pub const TILE_HEIGHT: u16 = 7;

/// One horde entry: name, type, power/toughness and image link,
/// with a remove marker in the top-right corner
pub struct CardTileWidget<'a> {
    pub card: &'a Card,
    pub placeholder: &'a str,
    pub highlighted: bool,
}

impl<'a> CardTileWidget<'a> {
    pub fn new(card: &'a Card, placeholder: &'a str) -> Self {
        Self {
            card,
            placeholder,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// The cell holding the remove marker for a tile placed at `area`
    pub fn remove_cell(area: Rect) -> (u16, u16) {
        (area.x + TILE_WIDTH - 2, area.y)
    }

    fn border_color(&self) -> ratatui::style::Color {
        if self.highlighted {
            Theme::TILE_CURSOR
        } else if self.card.is_token() {
            Theme::TILE_TOKEN
        } else {
            Theme::TILE_ZOMBIE
        }
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('\u{2026}');
    clipped
}

/// Keep the tail of a URL, which is the part that tells images apart
fn clip_url(url: &str, width: usize) -> String {
    let count = url.chars().count();
    if count <= width {
        return url.to_string();
    }
    let tail: String = url.chars().skip(count - width.saturating_sub(1)).collect();
    format!("\u{2026}{}", tail)
}

impl<'a> Widget for CardTileWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < TILE_WIDTH || area.height < TILE_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(self.border_color());
        let inner_w = (TILE_WIDTH - 2) as usize;
        let rule = "\u{2500}".repeat(inner_w);

        buf.set_string(area.x, area.y, format!("\u{256d}{}\u{256e}", rule), border_style);
        for y in 1..TILE_HEIGHT - 1 {
            buf.set_string(area.x, area.y + y, "\u{2502}", border_style);
            buf.set_string(area.x + 1, area.y + y, " ".repeat(inner_w), Style::default());
            buf.set_string(area.x + TILE_WIDTH - 1, area.y + y, "\u{2502}", border_style);
        }
        buf.set_string(
            area.x,
            area.y + TILE_HEIGHT - 1,
            format!("\u{2570}{}\u{256f}", rule),
            border_style,
        );

        let (rx, ry) = Self::remove_cell(area);
        buf.set_string(
            rx,
            ry,
            "x",
            Style::default()
                .fg(Theme::REMOVE_X)
                .add_modifier(Modifier::BOLD),
        );

        let text_w = inner_w - 1;
        let x = area.x + 2;

        buf.set_string(
            x,
            area.y + 1,
            clip(&self.card.to_string(), text_w),
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        if let Some(type_line) = self.card.type_line() {
            buf.set_string(
                x,
                area.y + 2,
                clip(&type_line, text_w),
                Style::default().fg(Theme::MUTED_TEXT),
            );
        }

        if let Some(pt) = self.card.power_toughness() {
            buf.set_string(
                area.x + TILE_WIDTH - 2 - pt.chars().count() as u16,
                area.y + 3,
                &pt,
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let image = image_or(self.card, self.placeholder);
        buf.set_string(
            x,
            area.y + TILE_HEIGHT - 2,
            clip_url(image, text_w),
            Style::default()
                .fg(Theme::LINK_TEXT)
                .add_modifier(Modifier::UNDERLINED),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::card::ImageUris;
    use horde_core::image::PLACEHOLDER_IMAGE;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_clip_marks_truncation() {
        assert_eq!(clip("Zombie", 10), "Zombie");
        assert_eq!(clip("Gravecrawler", 6), "Grave\u{2026}");
        assert_eq!(clip_url("https://a/b/c.jpg", 6), "\u{2026}c.jpg");
    }

    #[test]
    fn test_tile_shows_placeholder_when_no_image() {
        let card = Card {
            name: "Zombie".into(),
            type_line: Some("Token Creature — Zombie".into()),
            power: Some("2".into()),
            toughness: Some("2".into()),
            ..Card::default()
        };
        let area = Rect::new(0, 0, TILE_WIDTH, TILE_HEIGHT);
        let mut buf = Buffer::empty(area);

        CardTileWidget::new(&card, PLACEHOLDER_IMAGE).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Zombie"));
        assert!(row_text(&buf, 3).contains("2/2"));
        assert!(row_text(&buf, TILE_HEIGHT - 2).contains("146x204"));
        let (rx, ry) = CardTileWidget::remove_cell(area);
        assert_eq!(buf[(rx, ry)].symbol(), "x");
    }

    #[test]
    fn test_tile_shows_resolved_image() {
        let card = Card {
            name: "Gravecrawler".into(),
            image_uris: Some(ImageUris {
                small: Some("https://cards.scryfall.io/small/grave.jpg".into()),
                ..ImageUris::default()
            }),
            ..Card::default()
        };
        let area = Rect::new(0, 0, TILE_WIDTH, TILE_HEIGHT);
        let mut buf = Buffer::empty(area);

        CardTileWidget::new(&card, PLACEHOLDER_IMAGE).render(area, &mut buf);

        assert!(row_text(&buf, TILE_HEIGHT - 2).contains("grave.jpg"));
    }
}
