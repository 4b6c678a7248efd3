// Snake for small TFT boards: board-independent game core.
//
// Everything here is hardware agnostic. Boards plug in through three
// seams: a Renderer (cells + text), a ButtonSource (one bitmask per
// poll) and an embedded-hal DelayNs for the fixed tick sleeps.

#![cfg_attr(not(test), no_std)]

pub mod apple;
pub mod config;
pub mod direction;
pub mod display;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod runner;
pub mod snake;
pub mod stack_fmt;

pub use config::{BoardProfile, ConfigError, GameConfig};
pub use direction::Direction;
pub use game::{Game, Status, Step};
pub use grid::{Cell, Grid};
pub use input::{ButtonSource, Buttons, StartPolicy};
pub use render::{ColorSlot, FontKind, Renderer};
pub use runner::Console;
