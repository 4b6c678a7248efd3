// pocket-snake entry point
//
// Boot sequence: logger -> hardware -> panel init -> game loop
// The loop never returns; a render or keypad failure is logged and
// turned into a panic, which esp-backtrace reports over serial.
//
// The board variant (keypad flavour, panel orientation, grid shape,
// screen text) is fixed at build time through Cargo features.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use log::{error, info};

use pocket_snake::board::Board;
use pocket_snake::board::variant::PROFILE;
use snake_core::Console;
use snake_core::display::CellRenderer;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting ({} board)...", PROFILE.name);

    let board = Board::init(peripherals);
    let mut delay = Delay::new();
    let mut tft = board.display.tft;
    tft.init(&mut delay).unwrap();
    let _backlight = board.display.backlight;
    info!("hardware initialized.");

    let renderer = CellRenderer::new(tft, PROFILE.game.grid, PROFILE.cell, PROFILE.palette);
    let mut console = Console::new(&PROFILE, renderer, board.keypad, delay, board.rng).unwrap();
    info!(
        "game ready: {}x{} grid, {}ms tick",
        PROFILE.game.grid.width, PROFILE.game.grid.height, PROFILE.timing.tick_ms
    );

    let Err(e) = console.run();
    error!("fatal: {}", e);
    panic!("game loop stopped: {}", e);
}
