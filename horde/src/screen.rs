use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use horde_core::{Card, HordeState};
use horde_widgets::action_buttons::{ActionButtonsWidget, ButtonHit};
use horde_widgets::header::HeaderWidget;
use horde_widgets::horde_grid::{GridHit, HordeGridWidget};
use horde_widgets::theme::Theme;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::ScreenAction;

/// Everything the screen needs to draw one frame
pub struct HordeView<'a> {
    pub state: &'a HordeState,
    pub tokens_loading: bool,
    pub zombie_loading: bool,
    pub status: Option<&'a str>,
    pub placeholder: &'a str,
}

impl<'a> HordeView<'a> {
    pub fn can_release(&self) -> bool {
        self.state
            .can_release(self.tokens_loading, self.zombie_loading)
    }

    fn entries(&self) -> Vec<(&'a str, &'a Card)> {
        self.state.entries().collect()
    }
}

/// The single horde screen: header, buttons, card grid, status line
pub struct HordeScreen {
    pub cursor: usize,
    pub header_area: Rect,
    pub grid_area: Rect,
    buttons_area: Rect,
    columns: usize,
}

impl HordeScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            header_area: Rect::default(),
            grid_area: Rect::default(),
            buttons_area: Rect::default(),
            columns: 1,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, view: &HordeView) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Wave + strength
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Rule
            Constraint::Min(0),    // Horde grid
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

        self.header_area = chunks[0];
        self.buttons_area = chunks[1];
        self.grid_area = chunks[3];

        let state = view.state;
        frame.render_widget(
            HeaderWidget::new(state.wave, state.remaining_strength(), state.max_cards),
            chunks[0],
        );

        frame.render_widget(
            ActionButtonsWidget::new(view.can_release(), state.can_weaken(), !state.is_empty()),
            chunks[1],
        );

        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Theme::TILE_BORDER)),
            chunks[2],
        );

        let entries = view.entries();
        let grid = HordeGridWidget::new(&entries, view.placeholder).cursor(if entries.is_empty() {
            None
        } else {
            Some(self.cursor)
        });
        self.columns = grid.columns(self.grid_area);
        frame.render_widget(grid, chunks[3]);

        frame.render_widget(Paragraph::new(status_line(view)), chunks[4]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("R", Style::default().fg(Theme::RELEASE)),
            Span::styled("] Release  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("D", Style::default().fg(Theme::WEAKEN)),
            Span::styled("] Decrease  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2190}\u{2191}\u{2192}\u{2193}", Style::default().fg(Theme::TILE_CURSOR)),
            Span::styled("] Move  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("X", Style::default().fg(Theme::REMOVE_X)),
            Span::styled("] Remove  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Q", Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }

    pub fn handle_key(&mut self, key: KeyEvent, view: &HordeView) -> Option<ScreenAction> {
        let len = view.state.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Some(ScreenAction::Quit);
            }
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                return Some(ScreenAction::Release);
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                return Some(ScreenAction::Weaken);
            }
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete | KeyCode::Backspace => {
                return self.remove_at(self.cursor, view);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(self.columns);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + self.columns < len {
                    self.cursor += self.columns;
                }
            }
            _ => {}
        }
        None
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, view: &HordeView) -> Option<ScreenAction> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return None;
        };
        let (col, row) = (mouse.column, mouse.row);

        match ActionButtonsWidget::hit_test(self.buttons_area, col, row) {
            Some(ButtonHit::Release) => return Some(ScreenAction::Release),
            Some(ButtonHit::Weaken) => return Some(ScreenAction::Weaken),
            None => {}
        }

        let entries = view.entries();
        let grid = HordeGridWidget::new(&entries, view.placeholder).cursor(Some(self.cursor));
        match grid.hit_test(self.grid_area, col, row) {
            Some(GridHit::Remove(i)) => self.remove_at(i, view),
            Some(GridHit::Tile(i)) => {
                self.cursor = i;
                None
            }
            None => None,
        }
    }

    fn remove_at(&self, index: usize, view: &HordeView) -> Option<ScreenAction> {
        view.state
            .entries()
            .nth(index)
            .map(|(id, _)| ScreenAction::Remove(id.to_string()))
    }

    /// Where tile `index` sits in the grid as last laid out, if on screen
    pub fn tile_area(&self, state: &HordeState, index: usize) -> Option<Rect> {
        let entries: Vec<(&str, &Card)> = state.entries().collect();
        HordeGridWidget::new(&entries, "")
            .cursor(Some(self.cursor))
            .tile_rect(self.grid_area, index)
    }

    /// Keep the cursor on a real tile after the horde shrinks
    pub fn clamp_cursor(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

pub(crate) fn status_line<'a>(view: &HordeView<'a>) -> Line<'a> {
    if let Some(status) = view.status {
        return Line::from(Span::styled(
            format!("  {}", status),
            Style::default().fg(Theme::ERROR_TEXT),
        ));
    }
    let text = match (view.tokens_loading, view.zombie_loading) {
        (true, _) => "  Digging up the token pool\u{2026}",
        (false, true) => "  Summoning the next zombie\u{2026}",
        (false, false) => "",
    };
    Line::from(Span::styled(text, Style::default().fg(Theme::MUTED_TEXT)))
}
