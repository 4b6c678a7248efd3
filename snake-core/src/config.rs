// Board profiles.
//
// The three boards run the same game and differ only in grid shape,
// screen text placement and which button starts a round. A profile
// bundles everything that varies; the firmware picks one at build time.

use embedded_graphics::pixelcolor::Rgb565;

use crate::direction::Direction;
use crate::grid::{Cell, Grid};
use crate::input::StartPolicy;
use crate::render::{ColorSlot, FontKind, TextLine};
use crate::snake::MAX_SEGMENTS;

/// Snake spawned on every entry into PLAY: a vertical stub in the
/// left column, heading right.
pub const INITIAL_SNAKE: [Cell; 3] = [Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board has more cells than the snake body can hold.
    GridTooLarge { cells: usize, capacity: usize },
    EmptyGrid,
    EmptySnake,
    SnakeTooLong { len: usize, capacity: usize },
    SegmentOffGrid(Cell),
    DuplicateSegment(Cell),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GridTooLarge { cells, capacity } => {
                write!(f, "grid has {cells} cells, body capacity is {capacity}")
            }
            Self::EmptyGrid => f.write_str("grid has no cells"),
            Self::EmptySnake => f.write_str("initial snake is empty"),
            Self::SnakeTooLong { len, capacity } => {
                write!(f, "initial snake has {len} segments, capacity is {capacity}")
            }
            Self::SegmentOffGrid(c) => write!(f, "initial segment {c} is off the grid"),
            Self::DuplicateSegment(c) => write!(f, "initial segment {c} appears twice"),
        }
    }
}

/// The simulation part of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub initial_snake: &'static [Cell],
    pub initial_direction: Direction,
}

impl GameConfig {
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            initial_snake: &INITIAL_SNAKE,
            initial_direction: INITIAL_DIRECTION,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for(MAX_SEGMENTS)
    }

    pub fn validate_for(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.grid.width <= 0 || self.grid.height <= 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let cells = self.grid.cell_count();
        if cells > capacity {
            return Err(ConfigError::GridTooLarge { cells, capacity });
        }

        let snake = self.initial_snake;
        if snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }
        if snake.len() > capacity {
            return Err(ConfigError::SnakeTooLong {
                len: snake.len(),
                capacity,
            });
        }
        for (i, &seg) in snake.iter().enumerate() {
            if !self.grid.contains(seg) {
                return Err(ConfigError::SegmentOffGrid(seg));
            }
            if snake[..i].contains(&seg) {
                return Err(ConfigError::DuplicateSegment(seg));
            }
        }
        Ok(())
    }
}

/// Pixel layout of one grid cell.
///
/// Cells sit on a `pitch` px lattice and are drawn `size` px square,
/// leaving a one pixel gutter. The 128 px panel edge fits 12.8 cells,
/// so the last row or column on that edge is drawn shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub pitch: u16,
    pub size: u16,
    pub last_col_width: u16,
    pub last_row_height: u16,
}

impl CellGeometry {
    pub const LANDSCAPE: Self = Self {
        pitch: 10,
        size: 9,
        last_col_width: 9,
        last_row_height: 8,
    };

    pub const PORTRAIT: Self = Self {
        pitch: 10,
        size: 9,
        last_col_width: 8,
        last_row_height: 9,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub snake: Rgb565,
    pub apple: Rgb565,
    pub text: Rgb565,
}

impl Palette {
    /// Black board, green snake (0,200,0), red apple (250,0,0),
    /// grey text (160,160,160), quantised to 5/6/5 bits.
    pub const CLASSIC: Self = Self {
        background: Rgb565::new(0, 0, 0),
        snake: Rgb565::new(0, 49, 0),
        apple: Rgb565::new(30, 0, 0),
        text: Rgb565::new(19, 39, 19),
    };

    pub const fn color(&self, slot: ColorSlot) -> Rgb565 {
        match slot {
            ColorSlot::Background => self.background,
            ColorSlot::Snake => self.snake,
            ColorSlot::Apple => self.apple,
            ColorSlot::Text => self.text,
        }
    }
}

/// Where the title and game-over text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: &'static [TextLine],
    pub game_over: &'static [TextLine],
    /// Font and baseline origin of the `SCORE: nnn` label.
    pub score: (FontKind, i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// One PLAY tick.
    pub tick_ms: u32,
    /// Pause after a screen is drawn before input is honoured.
    pub settle_ms: u32,
    /// Input polling interval on the title and game-over screens.
    pub poll_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        tick_ms: 100,
        settle_ms: 2000,
        poll_ms: 10,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardProfile {
    pub name: &'static str,
    pub game: GameConfig,
    pub cell: CellGeometry,
    pub palette: Palette,
    pub layout: ScreenLayout,
    pub start: StartPolicy,
    pub timing: Timing,
}

const LANDSCAPE_GRID: Grid = Grid::new(16, 13);
const PORTRAIT_GRID: Grid = Grid::new(13, 16);

const GAME_OVER_ANY: [TextLine; 2] = [
    TextLine::new(FontKind::Body, 8, 50, "GAME OVER"),
    TextLine::new(FontKind::Body, 8, 100, "Press ANY"),
];

const SCORE_AT: (FontKind, i32, i32) = (FontKind::Small, 50, 120);

/// Eight-button shift-register keypad, 160x128 landscape, any button starts.
pub const GAMER: BoardProfile = BoardProfile {
    name: "gamer",
    game: GameConfig::new(LANDSCAPE_GRID),
    cell: CellGeometry::LANDSCAPE,
    palette: Palette::CLASSIC,
    layout: ScreenLayout {
        title: &[
            TextLine::new(FontKind::Title, 55, 50, "SNAKE"),
            TextLine::new(FontKind::Body, 8, 100, "Press any"),
            TextLine::new(FontKind::Body, 8, 118, "BUTTON"),
        ],
        game_over: &GAME_OVER_ANY,
        score: SCORE_AT,
    },
    start: StartPolicy::AnyButton,
    timing: Timing::DEFAULT,
};

/// Same keypad and panel as `GAMER`, but only START begins a round.
pub const BADGE: BoardProfile = BoardProfile {
    name: "badge",
    game: GameConfig::new(LANDSCAPE_GRID),
    cell: CellGeometry::LANDSCAPE,
    palette: Palette::CLASSIC,
    layout: ScreenLayout {
        title: &[
            TextLine::new(FontKind::Title, 0, 50, "SNAKE"),
            TextLine::new(FontKind::Body, 8, 100, "Press START"),
        ],
        game_over: &[
            TextLine::new(FontKind::Body, 8, 50, "GAME OVER"),
            TextLine::new(FontKind::Body, 8, 100, "Press START"),
        ],
        score: SCORE_AT,
    },
    start: StartPolicy::StartButton,
    timing: Timing::DEFAULT,
};

/// Four loose push buttons and a bare 128x160 portrait panel.
pub const DIY: BoardProfile = BoardProfile {
    name: "diy",
    game: GameConfig::new(PORTRAIT_GRID),
    cell: CellGeometry::PORTRAIT,
    palette: Palette::CLASSIC,
    layout: ScreenLayout {
        title: &[
            TextLine::new(FontKind::Title, 26, 50, "SNAKE"),
            TextLine::new(FontKind::Body, 8, 100, "Press any"),
            TextLine::new(FontKind::Body, 14, 124, "BUTTON"),
        ],
        game_over: &GAME_OVER_ANY,
        score: SCORE_AT,
    },
    start: StartPolicy::AnyButton,
    timing: Timing::DEFAULT,
};
