// ST7735R TFT driver (board-independent)
// 128x160 native, RGB565 over 4-wire SPI. No framebuffer: every draw
// opens a RAM window on the controller and streams pixels into it, so
// a filled rectangle costs one window setup plus w*h*2 bytes.
//
// Panel variants with a smaller glass than the controller RAM need a
// column/row offset; rotation swaps them along with the axes.

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{IntoStorage, Rgb565},
    primitives::Rectangle,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

pub const NATIVE_WIDTH: u16 = 128;
pub const NATIVE_HEIGHT: u16 = 160;

pub const SPI_FREQ_MHZ: u32 = 8;

// pixels per SPI burst in fill_solid
const FILL_CHUNK: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

mod cmd {
    pub const SW_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const NORMAL_ON: u8 = 0x13;
    pub const INVERT_OFF: u8 = 0x20;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_SET: u8 = 0x2A;
    pub const ROW_SET: u8 = 0x2B;
    pub const RAM_WRITE: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
    pub const FRMCTR1: u8 = 0xB1;
    pub const FRMCTR2: u8 = 0xB2;
    pub const FRMCTR3: u8 = 0xB3;
    pub const INVCTR: u8 = 0xB4;
    pub const PWCTR1: u8 = 0xC0;
    pub const PWCTR2: u8 = 0xC1;
    pub const PWCTR3: u8 = 0xC2;
    pub const PWCTR4: u8 = 0xC3;
    pub const PWCTR5: u8 = 0xC4;
    pub const VMCTR1: u8 = 0xC5;
}

mod madctl {
    pub const MY: u8 = 0x80;
    pub const MX: u8 = 0x40;
    pub const MV: u8 = 0x20;
    pub const BGR: u8 = 0x08;
}

/// Panel mounting: orientation, colour order and RAM offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub rotation: Rotation,
    pub bgr: bool,
    pub col_offset: u16,
    pub row_offset: u16,
}

pub struct St7735<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    config: Config,
}

impl<SPI, DC, RST, E> St7735<SPI, DC, RST>
where
    SPI: SpiDevice<Error = E>,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, config: Config) -> Self {
        Self {
            spi,
            dc,
            rst,
            config,
        }
    }

    pub fn reset(&mut self, delay: &mut impl DelayNs) {
        let _ = self.rst.set_high();
        delay.delay_ms(10);
        let _ = self.rst.set_low();
        delay.delay_ms(10);
        let _ = self.rst.set_high();
        delay.delay_ms(120);
    }

    // ST7735R "red tab" sequence
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), E> {
        self.reset(delay);

        self.command(cmd::SW_RESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLEEP_OUT, &[])?;
        delay.delay_ms(255);

        self.command(cmd::FRMCTR1, &[0x01, 0x2C, 0x2D])?;
        self.command(cmd::FRMCTR2, &[0x01, 0x2C, 0x2D])?;
        self.command(cmd::FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D])?;
        self.command(cmd::INVCTR, &[0x07])?;
        self.command(cmd::PWCTR1, &[0xA2, 0x02, 0x84])?;
        self.command(cmd::PWCTR2, &[0xC5])?;
        self.command(cmd::PWCTR3, &[0x0A, 0x00])?;
        self.command(cmd::PWCTR4, &[0x8A, 0x2A])?;
        self.command(cmd::PWCTR5, &[0x8A, 0xEE])?;
        self.command(cmd::VMCTR1, &[0x0E])?;
        self.command(cmd::INVERT_OFF, &[])?;
        self.command(cmd::COLMOD, &[0x05])?; // 16 bpp
        self.set_rotation(self.config.rotation)?;

        self.command(cmd::NORMAL_ON, &[])?;
        delay.delay_ms(10);
        self.command(cmd::DISPLAY_ON, &[])?;
        delay.delay_ms(100);
        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), E> {
        self.config.rotation = rotation;
        let mut m = match rotation {
            Rotation::Deg0 => madctl::MX | madctl::MY,
            Rotation::Deg90 => madctl::MY | madctl::MV,
            Rotation::Deg180 => 0,
            Rotation::Deg270 => madctl::MX | madctl::MV,
        };
        if self.config.bgr {
            m |= madctl::BGR;
        }
        self.command(cmd::MADCTL, &[m])
    }

    /// Logical (rotated) width and height.
    pub fn dimensions(&self) -> (u16, u16) {
        if self.config.rotation.swaps_axes() {
            (NATIVE_HEIGHT, NATIVE_WIDTH)
        } else {
            (NATIVE_WIDTH, NATIVE_HEIGHT)
        }
    }

    // inclusive window in logical coordinates, then RAM_WRITE
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), E> {
        let (xo, yo) = if self.config.rotation.swaps_axes() {
            (self.config.row_offset, self.config.col_offset)
        } else {
            (self.config.col_offset, self.config.row_offset)
        };
        let (x0, x1, y0, y1) = (x0 + xo, x1 + xo, y0 + yo, y1 + yo);

        self.command(
            cmd::COLUMN_SET,
            &[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8],
        )?;
        self.command(
            cmd::ROW_SET,
            &[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8],
        )?;
        self.command(cmd::RAM_WRITE, &[])
    }

    fn command(&mut self, cmd: u8, data: &[u8]) -> Result<(), E> {
        let _ = self.dc.set_low();
        self.spi.write(&[cmd])?;
        if !data.is_empty() {
            self.send_data(data)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), E> {
        let _ = self.dc.set_high();
        self.spi.write(data)
    }
}

impl<SPI, DC, RST, E> OriginDimensions for St7735<SPI, DC, RST>
where
    SPI: SpiDevice<Error = E>,
    DC: OutputPin,
    RST: OutputPin,
{
    fn size(&self) -> Size {
        let (w, h) = self.dimensions();
        Size::new(w as u32, h as u32)
    }
}

impl<SPI, DC, RST, E> DrawTarget for St7735<SPI, DC, RST>
where
    SPI: SpiDevice<Error = E>,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = E;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(p, color) in pixels {
            if !bounds.contains(p) {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            self.set_window(x, y, x, y)?;
            self.send_data(&color.into_storage().to_be_bytes())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;

        let [hi, lo] = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK * 2];
        for px in chunk.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }

        let mut remaining = area.size.width as usize * area.size.height as usize;
        let _ = self.dc.set_high();
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.spi.write(&chunk[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
