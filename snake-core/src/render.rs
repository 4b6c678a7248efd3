// Drawing seam between the game and a board's screen.
//
// The game only ever speaks in grid cells, semantic colour slots and a
// handful of font sizes. Turning those into pixels (cell pitch, edge
// cells, palette, glyphs) is the renderer's business.

use crate::grid::Cell;

/// Semantic colours; a `Palette` maps them to panel colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Background,
    Snake,
    Apple,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// Large title lettering.
    Title,
    /// Prompts and status lines.
    Body,
    /// Tiny print used for the score.
    Small,
}

/// A line of static text at a pixel position. `y` is the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine {
    pub font: FontKind,
    pub x: i32,
    pub y: i32,
    pub text: &'static str,
}

impl TextLine {
    pub const fn new(font: FontKind, x: i32, y: i32, text: &'static str) -> Self {
        Self { font, x, y, text }
    }
}

pub trait Renderer {
    type Error;

    fn clear_screen(&mut self, color: ColorSlot) -> Result<(), Self::Error>;

    fn fill_cell(&mut self, cell: Cell, color: ColorSlot) -> Result<(), Self::Error>;

    fn draw_text(
        &mut self,
        font: FontKind,
        x: i32,
        y: i32,
        text: &str,
        color: ColorSlot,
    ) -> Result<(), Self::Error>;

    fn draw_line(&mut self, line: &TextLine, color: ColorSlot) -> Result<(), Self::Error> {
        self.draw_text(line.font, line.x, line.y, line.text, color)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn clear_screen(&mut self, color: ColorSlot) -> Result<(), Self::Error> {
        (**self).clear_screen(color)
    }

    fn fill_cell(&mut self, cell: Cell, color: ColorSlot) -> Result<(), Self::Error> {
        (**self).fill_cell(cell, color)
    }

    fn draw_text(
        &mut self,
        font: FontKind,
        x: i32,
        y: i32,
        text: &str,
        color: ColorSlot,
    ) -> Result<(), Self::Error> {
        (**self).draw_text(font, x, y, text, color)
    }
}
