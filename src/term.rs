use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::Cell;
use crate::board::Board;
use crate::config::Palette;
use crate::error::{GameError, Result};
use crate::render::Renderer;

const FILLED_CELL: &str = "██";
const OUTLINED_CELL: &str = "▐▌";
const EMPTY_CELL: &str = "  ";

/// Terminal position of the board's top-left frame corner.
type TermPos = (u16, u16);

/// Renders the board in the alternate screen, two columns per grid cell.
pub struct TermRenderer {
    board: Board,
    palette: Palette,
    stdout: Stdout,
    origin: TermPos,
    current_msg: Option<Message>,
}

struct Message {
    top_left: TermPos,
    width: u16,
    height: u16,
}

impl TermRenderer {
    pub fn new(board: Board, palette: Palette) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let (needed_width, needed_height) = needed_size(&board);

        if width < needed_width || height < needed_height {
            return Err(GameError::TerminalTooSmall { needed_width, needed_height, width, height });
        }

        let origin = ((width - needed_width) / 2, (height - needed_height) / 2);
        Ok(TermRenderer { board, palette, stdout: stdout(), origin, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;
        self.draw_borders()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = needed_size(&self.board);
        let (left, top) = self.origin;
        let (right, bottom) = (left + width - 1, top + height - 1);

        queue!(self.stdout, style::SetForegroundColor(self.palette.border))?;

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            self.print_at((x, top), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in top + 1..bottom {
            self.print_at((left, y), '|')?;
            self.print_at((right, y), '|')?;
        }

        queue!(self.stdout, style::ResetColor)?;
        self.flush()
    }

    fn print_at(&mut self, pos: TermPos, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn paint(&mut self, pos: TermPos, fg: Color, bg: Color, glyph: &str) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            style::Print(glyph),
            style::ResetColor
        )?;
        Ok(())
    }
}

impl Renderer for TermRenderer {
    fn clear(&mut self) -> Result<()> {
        let blank_row = EMPTY_CELL.repeat(self.board.columns() as usize);
        let background = self.palette.background;

        for row in 0..self.board.rows() as u16 {
            let pos = (self.origin.0 + 1, self.origin.1 + 1 + row);
            self.paint(pos, background, background, &blank_row)?;
        }

        Ok(())
    }

    fn draw_cell(&mut self, cell: Cell, color: Color, outlined: bool) -> Result<()> {
        let pos = cell_to_term(&self.board, self.origin, cell);

        if outlined {
            let border = self.palette.border;
            self.paint(pos, color, border, OUTLINED_CELL)
        } else {
            let background = self.palette.background;
            self.paint(pos, color, background, FILLED_CELL)
        }
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.current_msg.is_some() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as u16;
        let (board_width, board_height) = needed_size(&self.board);
        let center = (self.origin.0 + board_width / 2, self.origin.1 + board_height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        queue!(self.stdout, style::SetAttribute(style::Attribute::Reverse))?;

        for row in 0..msg_height {
            let text = match row {
                0 => "",
                r if r == msg_height - 1 => "",
                r => lines[r as usize - 1],
            };
            let padded = format!("{text: ^width$}", text = text, width = msg_width as usize);
            queue!(self.stdout, cursor::MoveTo(top_left.0, top_left.1 + row), style::Print(padded))?;
        }

        queue!(self.stdout, style::SetAttribute(style::Attribute::Reset))?;

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.flush()
    }

    fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        let blank = " ".repeat(msg.width as usize);
        let background = self.palette.background;

        for row in 0..msg.height {
            self.paint((msg.top_left.0, msg.top_left.1 + row), background, background, &blank)?;
        }

        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Terminal size needed for the board plus its frame.
fn needed_size(board: &Board) -> TermPos {
    ((board.columns() * 2 + 2) as u16, (board.rows() + 2) as u16)
}

fn cell_to_term(board: &Board, origin: TermPos, cell: Cell) -> TermPos {
    let (col, row) = (cell.0 / board.cell_size(), cell.1 / board.cell_size());
    (origin.0 + 1 + 2 * col as u16, origin.1 + 1 + row as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_needs_a_66x26_terminal() {
        assert_eq!(needed_size(&Board::new(640, 480, 20)), (66, 26));
    }

    #[test]
    fn cells_map_inside_the_frame() {
        let board = Board::new(640, 480, 20);

        assert_eq!(cell_to_term(&board, (0, 0), (0, 0)), (1, 1));
        assert_eq!(cell_to_term(&board, (0, 0), (20, 40)), (3, 3));
        assert_eq!(cell_to_term(&board, (5, 2), (620, 460)), (5 + 1 + 62, 2 + 1 + 23));
    }
}
