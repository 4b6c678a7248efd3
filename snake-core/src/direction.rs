// Four-way heading. Discriminants match the numeric codes the boards
// have always used (LEFT=0, UP=1, DOWN=2, RIGHT=3).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    /// Order in which held buttons are considered each tick.
    pub const STEER_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn is_opposite(self, other: Direction) -> bool {
        self.opposite() as u8 == other as u8
    }

    /// Unit step (dx, dy); y grows downwards.
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Direction::Left),
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Right => "Right",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
