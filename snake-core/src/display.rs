// Renderer over any embedded-graphics RGB565 target.
//
// Grid cells become filled rectangles on the CellGeometry lattice; text
// uses the built-in mono fonts with an alphabetic baseline so the y in
// a TextLine is where the letters sit.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_4X6, FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};

use crate::config::{CellGeometry, Palette};
use crate::grid::{Cell, Grid};
use crate::render::{ColorSlot, FontKind, Renderer};

pub const fn font(kind: FontKind) -> &'static MonoFont<'static> {
    match kind {
        FontKind::Title => &FONT_10X20,
        FontKind::Body => &FONT_9X15,
        FontKind::Small => &FONT_4X6,
    }
}

pub struct CellRenderer<D> {
    target: D,
    grid: Grid,
    geometry: CellGeometry,
    palette: Palette,
}

impl<D> CellRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D, grid: Grid, geometry: CellGeometry, palette: Palette) -> Self {
        Self {
            target,
            grid,
            geometry,
            palette,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn release(self) -> D {
        self.target
    }

    /// Pixel rectangle covered by `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rectangle {
        let g = self.geometry;
        let w = if cell.x == self.grid.width - 1 {
            g.last_col_width
        } else {
            g.size
        };
        let h = if cell.y == self.grid.height - 1 {
            g.last_row_height
        } else {
            g.size
        };
        Rectangle::new(
            Point::new(
                cell.x as i32 * g.pitch as i32,
                cell.y as i32 * g.pitch as i32,
            ),
            Size::new(w as u32, h as u32),
        )
    }
}

impl<D> Renderer for CellRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn clear_screen(&mut self, color: ColorSlot) -> Result<(), Self::Error> {
        self.target.clear(self.palette.color(color))
    }

    fn fill_cell(&mut self, cell: Cell, color: ColorSlot) -> Result<(), Self::Error> {
        let rect = self.cell_rect(cell);
        self.target.fill_solid(&rect, self.palette.color(color))
    }

    fn draw_text(
        &mut self,
        font_kind: FontKind,
        x: i32,
        y: i32,
        text: &str,
        color: ColorSlot,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(font(font_kind), self.palette.color(color));
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic)
            .draw(&mut self.target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    fn renderer(geometry: CellGeometry) -> CellRenderer<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        CellRenderer::new(display, Grid::new(4, 4), geometry, Palette::CLASSIC)
    }

    #[test]
    fn inner_cell_is_nine_pixels_square() {
        let mut r = renderer(CellGeometry::LANDSCAPE);
        r.fill_cell(Cell::new(1, 2), ColorSlot::Snake).unwrap();

        let d = r.target();
        let snake = Palette::CLASSIC.snake;
        assert_eq!(d.get_pixel(Point::new(10, 20)), Some(snake));
        assert_eq!(d.get_pixel(Point::new(18, 28)), Some(snake));
        assert_eq!(d.get_pixel(Point::new(19, 20)), None);
        assert_eq!(d.get_pixel(Point::new(10, 29)), None);
        assert_eq!(d.affected_area(), Rectangle::new(Point::new(10, 20), Size::new(9, 9)));
    }

    #[test]
    fn last_row_is_shorter_in_landscape() {
        let r = renderer(CellGeometry::LANDSCAPE);
        assert_eq!(r.cell_rect(Cell::new(0, 3)).size, Size::new(9, 8));
        assert_eq!(r.cell_rect(Cell::new(3, 0)).size, Size::new(9, 9));
    }

    #[test]
    fn last_column_is_narrower_in_portrait() {
        let r = renderer(CellGeometry::PORTRAIT);
        assert_eq!(r.cell_rect(Cell::new(3, 0)).size, Size::new(8, 9));
        assert_eq!(r.cell_rect(Cell::new(0, 3)).size, Size::new(9, 9));
    }

    #[test]
    fn text_sits_on_its_baseline() {
        let mut r = renderer(CellGeometry::LANDSCAPE);
        r.draw_text(FontKind::Small, 2, 20, "0", ColorSlot::Text).unwrap();

        let area = r.target().affected_area();
        assert!(area.top_left.y < 20);
        assert!(area.top_left.y + area.size.height as i32 <= 21);
        assert!(area.top_left.x >= 2);
    }

    #[test]
    fn clear_uses_background_color() {
        let mut r = renderer(CellGeometry::LANDSCAPE);
        r.clear_screen(ColorSlot::Background).unwrap();
        assert_eq!(
            r.target().get_pixel(Point::new(63, 63)),
            Some(Palette::CLASSIC.background)
        );
    }
}
