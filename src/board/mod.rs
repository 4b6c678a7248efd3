//! Board support for the ESP32-C3 snake handhelds.
//!
//! Maps the physical wiring onto named subsystems so the game never
//! sees a GPIO number. The panel and keypad flavour follow the variant
//! selected in variant.rs.
//!
//! GPIO |     Function        |      Notes
//! -----+---------------------+----------------------------------
//!  0   | KEY LATCH / LEFT    | 74HC165 PL (gamer, badge) or button (diy)
//!  1   | KEY CLK / UP        | 74HC165 CP (gamer, badge) or button (diy)
//!  2   | KEY DATA / RIGHT    | 74HC165 Q7 (gamer, badge) or button (diy)
//!  3   | TFT LITE            | Backlight enable, active HIGH
//!  4   | TFT DC              | Data/Command select
//!  5   | TFT RST             | Reset (active low)
//!  6   | SPI2 SCK            |
//!  7   | SPI2 MOSI           | Display is write-only, no MISO
//! 10   | TFT CS              | Display chip select
//! 20   | DOWN                | Button (diy only); UART0 RX otherwise unused

pub mod variant;

use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Blocking,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::Peripherals,
    rng::Rng,
    spi,
    time::Rate,
};
#[cfg(feature = "diy")]
use snake_core::Buttons;

#[cfg(feature = "diy")]
use crate::drivers::keypad::DirectKeypad;
#[cfg(not(feature = "diy"))]
use crate::drivers::{keypad::ShiftKeypad, shifter::ShiftRegister};
use crate::drivers::rng::HwRng;
use crate::drivers::st7735::{SPI_FREQ_MHZ, St7735};

// Type Aliases
pub type SpiBus = spi::master::Spi<'static, Blocking>;
pub type SpiDevice = ExclusiveDevice<SpiBus, Output<'static>, Delay>;
pub type Tft = St7735<SpiDevice, Output<'static>, Output<'static>>;

#[cfg(feature = "diy")]
pub type Keypad = DirectKeypad<Input<'static>, 4>;
#[cfg(not(feature = "diy"))]
pub type Keypad = ShiftKeypad<Output<'static>, Output<'static>, Input<'static>>;

// Hardware Bundles
/// Display subsystem: TFT driver plus the backlight line it needs lit.
pub struct DisplayHw {
    pub tft: Tft,
    pub backlight: Output<'static>,
}

/// Complete board hardware, ready for the game loop.
pub struct Board {
    pub display: DisplayHw,
    pub keypad: Keypad,
    pub rng: HwRng,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let keypad = Self::init_keypad(&p);
        let display = Self::init_display(p);
        Board {
            display,
            keypad,
            rng: HwRng::new(Rng::new()),
        }
    }

    #[cfg(not(feature = "diy"))]
    fn init_keypad(p: &Peripherals) -> Keypad {
        let latch = Output::new(
            unsafe { p.GPIO0.clone_unchecked() },
            Level::High,
            OutputConfig::default(),
        );
        let clk = Output::new(
            unsafe { p.GPIO1.clone_unchecked() },
            Level::High,
            OutputConfig::default(),
        );
        let data = Input::new(
            unsafe { p.GPIO2.clone_unchecked() },
            InputConfig::default().with_pull(Pull::None),
        );
        ShiftKeypad::new(ShiftRegister::new(latch, clk, data))
    }

    #[cfg(feature = "diy")]
    fn init_keypad(p: &Peripherals) -> Keypad {
        let cfg = || InputConfig::default().with_pull(Pull::Up);
        DirectKeypad::new([
            (Input::new(unsafe { p.GPIO0.clone_unchecked() }, cfg()), Buttons::LEFT),
            (Input::new(unsafe { p.GPIO1.clone_unchecked() }, cfg()), Buttons::UP),
            (Input::new(unsafe { p.GPIO2.clone_unchecked() }, cfg()), Buttons::RIGHT),
            (Input::new(unsafe { p.GPIO20.clone_unchecked() }, cfg()), Buttons::DOWN),
        ])
    }

    fn init_display(p: Peripherals) -> DisplayHw {
        // GPIO setup
        let cs = Output::new(p.GPIO10, Level::High, OutputConfig::default());
        let dc = Output::new(p.GPIO4, Level::High, OutputConfig::default());
        let rst = Output::new(p.GPIO5, Level::High, OutputConfig::default());
        let backlight = Output::new(p.GPIO3, Level::High, OutputConfig::default());

        // SPI bus
        let spi_cfg =
            spi::master::Config::default().with_frequency(Rate::from_mhz(SPI_FREQ_MHZ));
        let spi_bus = spi::master::Spi::new(p.SPI2, spi_cfg)
            .unwrap()
            .with_sck(p.GPIO6)
            .with_mosi(p.GPIO7);

        let spi_dev = ExclusiveDevice::new(spi_bus, cs, Delay::new()).unwrap();

        let tft = St7735::new(spi_dev, dc, rst, variant::PANEL);

        DisplayHw { tft, backlight }
    }
}
