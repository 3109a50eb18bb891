use crossterm::style::Color;

use crate::Cell;
use crate::config::Palette;
use crate::error::Result;

/// Drawing surface for the board. Implementations own the background and
/// border colors; callers pick the fill.
pub trait Renderer {
    /// Paint every cell of the board in the background color.
    fn clear(&mut self) -> Result<()>;

    fn draw_cell(&mut self, cell: Cell, color: Color, outlined: bool) -> Result<()>;

    /// Overlay a centered block of text on the board.
    fn show_message(&mut self, lines: &[&str]) -> Result<()>;

    /// Remove the overlay. Board cells under it are left blank, so callers
    /// redraw afterwards.
    fn hide_message(&mut self) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// Something that knows how to paint itself on the board.
pub trait Draw {
    fn draw<R: Renderer>(&self, renderer: &mut R, palette: &Palette) -> Result<()>;
}
