use horde_core::card::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::action_buttons::point_in_rect;
use crate::card::{CardTileWidget, TILE_HEIGHT, TILE_WIDTH};
use crate::theme::Theme;

/// What a click on the grid landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    Tile(usize),
    Remove(usize),
}

/// Wrapping grid of horde tiles, scrolled by whole rows so the cursor stays visible
pub struct HordeGridWidget<'a> {
    pub entries: &'a [(&'a str, &'a Card)],
    pub placeholder: &'a str,
    pub cursor: Option<usize>,
    pub h_gap: u16,
    pub v_gap: u16,
}

impl<'a> HordeGridWidget<'a> {
    pub fn new(entries: &'a [(&'a str, &'a Card)], placeholder: &'a str) -> Self {
        Self {
            entries,
            placeholder,
            cursor: None,
            h_gap: 2,
            v_gap: 1,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn columns(&self, area: Rect) -> usize {
        ((area.width + self.h_gap) / (TILE_WIDTH + self.h_gap)).max(1) as usize
    }

    fn visible_rows(&self, area: Rect) -> usize {
        ((area.height + self.v_gap) / (TILE_HEIGHT + self.v_gap)).max(1) as usize
    }

    /// First row drawn, chosen so the cursor row is on screen
    fn first_row(&self, area: Rect) -> usize {
        let cols = self.columns(area);
        let rows = self.visible_rows(area);
        match self.cursor {
            Some(c) if c / cols >= rows => c / cols + 1 - rows,
            _ => 0,
        }
    }

    /// Get the Rect for a tile, or None when it is scrolled out of view
    pub fn tile_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        if index >= self.entries.len() {
            return None;
        }
        let cols = self.columns(area);
        let row = index / cols;
        let first = self.first_row(area);
        if row < first || row >= first + self.visible_rows(area) {
            return None;
        }

        let used_w = cols as u16 * TILE_WIDTH + (cols as u16).saturating_sub(1) * self.h_gap;
        let start_x = area.x + area.width.saturating_sub(used_w) / 2;
        let x = start_x + (index % cols) as u16 * (TILE_WIDTH + self.h_gap);
        let y = area.y + (row - first) as u16 * (TILE_HEIGHT + self.v_gap);
        let rect = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);

        if rect.right() > area.right() || rect.bottom() > area.bottom() {
            None
        } else {
            Some(rect)
        }
    }

    pub fn hit_test(&self, area: Rect, col: u16, row: u16) -> Option<GridHit> {
        (0..self.entries.len()).find_map(|i| {
            let rect = self.tile_rect(area, i)?;
            if !point_in_rect(col, row, rect) {
                return None;
            }
            let (rx, ry) = CardTileWidget::remove_cell(rect);
            if row == ry && (col == rx || col == rx - 1) {
                Some(GridHit::Remove(i))
            } else {
                Some(GridHit::Tile(i))
            }
        })
    }
}

impl<'a> Widget for HordeGridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entries.is_empty() {
            let msg = "The graveyard is quiet.";
            let x = area.x + area.width.saturating_sub(msg.len() as u16) / 2;
            if area.height > 0 {
                buf.set_string(x, area.y, msg, Style::default().fg(Theme::DIM_TEXT));
            }
            return;
        }

        for (i, (_, card)) in self.entries.iter().enumerate() {
            if let Some(tile_area) = self.tile_rect(area, i) {
                CardTileWidget::new(card, self.placeholder)
                    .highlighted(self.cursor == Some(i))
                    .render(tile_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                name: format!("Zombie {}", i),
                ..Card::default()
            })
            .collect()
    }

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{:08}", i)).collect()
    }

    #[test]
    fn test_tiles_wrap_into_rows() {
        let cards = cards(5);
        let ids = ids(5);
        let entries: Vec<(&str, &Card)> = ids.iter().map(|s| s.as_str()).zip(cards.iter()).collect();
        let grid = HordeGridWidget::new(&entries, "p");
        let area = Rect::new(0, 0, 80, 30);

        assert_eq!(grid.columns(area), 2);
        let first = grid.tile_rect(area, 0).unwrap();
        let third = grid.tile_rect(area, 2).unwrap();
        assert_eq!(third.x, first.x);
        assert_eq!(third.y, first.y + TILE_HEIGHT + 1);
        assert!(grid.tile_rect(area, 5).is_none());
    }

    #[test]
    fn test_scrolls_to_cursor() {
        let cards = cards(10);
        let ids = ids(10);
        let entries: Vec<(&str, &Card)> = ids.iter().map(|s| s.as_str()).zip(cards.iter()).collect();
        let area = Rect::new(0, 0, 54, 15);

        let grid = HordeGridWidget::new(&entries, "p").cursor(Some(9));

        assert!(grid.tile_rect(area, 0).is_none());
        assert!(grid.tile_rect(area, 9).is_some());
    }

    #[test]
    fn test_hit_test_separates_remove_marker() {
        let cards = cards(1);
        let ids = ids(1);
        let entries: Vec<(&str, &Card)> = ids.iter().map(|s| s.as_str()).zip(cards.iter()).collect();
        let grid = HordeGridWidget::new(&entries, "p");
        let area = Rect::new(0, 0, 40, 10);
        let rect = grid.tile_rect(area, 0).unwrap();
        let (rx, ry) = CardTileWidget::remove_cell(rect);

        assert_eq!(grid.hit_test(area, rx, ry), Some(GridHit::Remove(0)));
        assert_eq!(grid.hit_test(area, rect.x + 2, rect.y + 2), Some(GridHit::Tile(0)));
        assert_eq!(grid.hit_test(area, 0, 9), None);
    }
}
