use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Wave title plus the remaining horde strength
pub struct HeaderWidget {
    pub wave: u32,
    pub remaining: i64,
    pub max_cards: u32,
}

impl HeaderWidget {
    pub fn new(wave: u32, remaining: i64, max_cards: u32) -> Self {
        Self {
            wave,
            remaining,
            max_cards,
        }
    }

    /// "Current Wave" before the first release, "Current Wave: N" after
    pub fn title(&self) -> String {
        if self.wave > 0 {
            format!("Current Wave: {}", self.wave)
        } else {
            "Current Wave".to_string()
        }
    }

    fn strength_color(&self) -> ratatui::style::Color {
        if self.remaining <= 0 {
            Theme::STRENGTH_SPENT
        } else if self.remaining * 4 <= self.max_cards as i64 {
            Theme::STRENGTH_LOW
        } else {
            Theme::STRENGTH_FULL
        }
    }
}

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        let title = Line::from(Span::styled(
            self.title(),
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        Paragraph::new(Line::from(Span::styled(
            "Remaining Horde Strength:",
            Style::default().fg(Theme::MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .render(rows[1], buf);

        let strength = Line::from(vec![
            Span::styled(
                format!("{}", self.remaining),
                Style::default()
                    .fg(self.strength_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" / {}", self.max_cards),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ]);
        Paragraph::new(strength)
            .alignment(Alignment::Center)
            .render(rows[2], buf);
    }
}
