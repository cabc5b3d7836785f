//! GameView: maps engine snapshots into a styled terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::types::{Color, GameResult};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for StyledCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(12, 12, 18),
            bold: false,
        }
    }
}

/// A rectangular buffer of styled cells, origin at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<StyledCell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![StyledCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<StyledCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: StyledCell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    /// Write a string starting at (x, y), clipped at the frame edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bold: bool) {
        let bg = StyledCell::default().bg;
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, StyledCell { ch, fg, bg, bold });
        }
    }
}

/// Frontend-side state: cursor, pending selection marker, feedback line.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub cursor: usize,
    pub selected: Option<usize>,
    pub message: Option<String>,
}

/// Feedback tiers for the end of a cascade sequence, keyed by the
/// sequence's highest combo.
const TIER_8: [&str; 3] = ["GODLIKE!", "UNSTOPPABLE!", "LEGENDARY!"];
const TIER_6: [&str; 3] = ["AMAZING!", "INCREDIBLE!", "SPECTACULAR!"];
const TIER_4: [&str; 3] = ["GOOD!", "NICE!", "WELL DONE!"];
const TIER_2: [&str; 3] = ["Meh!", "OKAY!", "NOT BAD!"];
const TIER_1: [&str; 3] = [
    "My grandmother could do better...",
    "Is that all you got?",
    "Try harder next time!",
];

/// Pick the encouragement line for a finished sequence. The salt selects a
/// variant within the tier, so feedback varies without an RNG.
pub fn encouragement_for(highest_combo: u32, salt: u32) -> &'static str {
    let pick = |tier: [&'static str; 3]| tier[(salt % 3) as usize];
    match highest_combo {
        8.. => pick(TIER_8),
        6..=7 => pick(TIER_6),
        4..=5 => pick(TIER_4),
        2..=3 => pick(TIER_2),
        1 => pick(TIER_1),
        0 => "Keep going! You can do it!",
    }
}

/// Status line shown under the board.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    format!(
        "Score: {} | Moves Left: {} | Goal: {} Points",
        snapshot.score, snapshot.moves_left, snapshot.target_score
    )
}

/// A lightweight terminal view for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per tile compensates for the terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render the snapshot into a frame sized to the viewport.
    pub fn render(&self, snapshot: &GameSnapshot, ui: &UiState, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let board_w = snapshot.width as u16 * self.cell_w;
        let board_h = snapshot.height as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport
            .height
            .saturating_sub(frame_h + 2)
            / 2;

        let border = Rgb::new(190, 190, 190);
        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snapshot.height {
            for col in 0..snapshot.width {
                let index = row as usize * snapshot.width as usize + col as usize;
                let cell = snapshot.cells[index];
                let bg = cell.map(tile_rgb).unwrap_or(Rgb::new(30, 30, 40));
                let marker = if ui.selected == Some(index) {
                    Some(('<', '>'))
                } else if ui.cursor == index {
                    Some(('[', ']'))
                } else {
                    None
                };

                let x0 = start_x + 1 + col as u16 * self.cell_w;
                let y = start_y + 1 + row as u16;
                for dx in 0..self.cell_w {
                    let ch = match (marker, dx) {
                        (Some((open, _)), 0) => open,
                        (Some((_, close)), dx) if dx == self.cell_w - 1 => close,
                        _ => ' ',
                    };
                    frame.set(
                        x0 + dx,
                        y,
                        StyledCell {
                            ch,
                            fg: Rgb::new(255, 255, 255),
                            bg,
                            bold: marker.is_some(),
                        },
                    );
                }
            }
        }

        // Status and feedback under the board.
        let status = status_line(snapshot);
        frame.put_str(start_x, start_y + frame_h, &status, border, false);
        if let Some(message) = &ui.message {
            frame.put_str(
                start_x,
                start_y + frame_h + 1,
                message,
                Rgb::new(255, 120, 60),
                true,
            );
        }

        // Terminal overlay replaces the board center.
        if snapshot.result != GameResult::InProgress {
            let text = match snapshot.result {
                GameResult::Won => "You Win!",
                GameResult::Lost => "Game Over!",
                GameResult::InProgress => unreachable!(),
            };
            let hint = "Press r to restart, q to quit";
            let mid_y = start_y + frame_h / 2;
            let text_x = start_x + (frame_w.saturating_sub(text.len() as u16)) / 2;
            let hint_x = start_x + (frame_w.saturating_sub(hint.len() as u16)) / 2;
            frame.put_str(text_x, mid_y, text, Rgb::new(255, 220, 90), true);
            frame.put_str(hint_x, mid_y + 1, hint, border, false);
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, fg: Rgb) {
        let bg = StyledCell::default().bg;
        let put = |frame: &mut Frame, x, y, ch| {
            frame.set(x, y, StyledCell { ch, fg, bg, bold: false });
        };
        for dx in 0..w {
            let ch = if dx == 0 || dx == w - 1 { '+' } else { '-' };
            put(frame, x + dx, y, ch);
            put(frame, x + dx, y + h - 1, ch);
        }
        for dy in 1..h.saturating_sub(1) {
            put(frame, x, y + dy, '|');
            put(frame, x + w - 1, y + dy, '|');
        }
    }
}

/// Terminal color for a tile.
fn tile_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(205, 70, 70),
        Color::Blue => Rgb::new(70, 110, 220),
        Color::Green => Rgb::new(70, 170, 95),
        Color::Yellow => Rgb::new(215, 195, 75),
        Color::Purple => Rgb::new(155, 90, 200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::EngineConfig;

    #[test]
    fn test_frame_set_get() {
        let mut frame = Frame::new(4, 2);
        let cell = StyledCell {
            ch: 'X',
            ..StyledCell::default()
        };
        frame.set(3, 1, cell);
        assert_eq!(frame.get(3, 1), Some(cell));
        assert_eq!(frame.get(4, 1), None);
        assert_eq!(frame.get(0, 2), None);
    }

    #[test]
    fn test_status_line_text() {
        let game = GameState::new(EngineConfig::default()).unwrap();
        let status = status_line(&game.snapshot());
        assert_eq!(status, "Score: 0 | Moves Left: 20 | Goal: 10000 Points");
    }

    #[test]
    fn test_encouragement_tiers() {
        assert_eq!(encouragement_for(0, 0), "Keep going! You can do it!");
        assert!(TIER_1.contains(&encouragement_for(1, 2)));
        assert!(TIER_2.contains(&encouragement_for(3, 0)));
        assert!(TIER_4.contains(&encouragement_for(5, 1)));
        assert!(TIER_6.contains(&encouragement_for(7, 2)));
        assert!(TIER_8.contains(&encouragement_for(8, 0)));
        assert!(TIER_8.contains(&encouragement_for(20, 1)));
    }

    #[test]
    fn test_encouragement_salt_varies_within_tier() {
        let a = encouragement_for(8, 0);
        let b = encouragement_for(8, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_render_fits_viewport() {
        let game = GameState::new(EngineConfig::default()).unwrap();
        let view = GameView::default();
        let ui = UiState::default();

        let frame = view.render(&game.snapshot(), &ui, Viewport::new(80, 24));
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 24);
    }

    #[test]
    fn test_render_marks_cursor() {
        let game = GameState::new(EngineConfig::default()).unwrap();
        let view = GameView::default();
        let ui = UiState {
            cursor: 0,
            selected: None,
            message: None,
        };

        let frame = view.render(&game.snapshot(), &ui, Viewport::new(80, 24));
        let open = (0..frame.width())
            .flat_map(|x| (0..frame.height()).map(move |y| (x, y)))
            .filter_map(|(x, y)| frame.get(x, y))
            .filter(|cell| cell.ch == '[')
            .count();
        assert_eq!(open, 1);
    }
}
