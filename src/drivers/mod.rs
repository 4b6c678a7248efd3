// Hardware drivers: chip-level and protocol-level, board-independent.
//
// Each module is reusable across boards; only pin assignments and bus
// wiring (in board/) are board-specific.

pub mod keypad;
pub mod rng;
pub mod shifter;
pub mod st7735;
