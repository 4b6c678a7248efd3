// Build-time board variant.
//
// Picked by Cargo feature; `diy` wins over `badge`, and `gamer` is what
// remains when neither is enabled.

use snake_core::BoardProfile;
use snake_core::config;

use crate::drivers::st7735::{self, Rotation};

#[cfg(feature = "diy")]
pub const PROFILE: BoardProfile = config::DIY;
#[cfg(all(feature = "badge", not(feature = "diy")))]
pub const PROFILE: BoardProfile = config::BADGE;
#[cfg(not(any(feature = "badge", feature = "diy")))]
pub const PROFILE: BoardProfile = config::GAMER;

/// Portrait bare panel with a 2/1 px RAM offset.
#[cfg(feature = "diy")]
pub const PANEL: st7735::Config = st7735::Config {
    rotation: Rotation::Deg0,
    bgr: false,
    col_offset: 2,
    row_offset: 1,
};

/// Landscape panel soldered to the keypad boards.
#[cfg(not(feature = "diy"))]
pub const PANEL: st7735::Config = st7735::Config {
    rotation: Rotation::Deg90,
    bgr: false,
    col_offset: 0,
    row_offset: 0,
};
