// Logical buttons, one bitmask per poll.
//
// Bit order follows the eight-button shift-register keypads the badge
// style boards use, so their raw byte maps straight across. Boards
// with other wiring build the mask themselves.

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const B: Buttons = Buttons(1 << 0);
    pub const A: Buttons = Buttons(1 << 1);
    pub const START: Buttons = Buttons(1 << 2);
    pub const SELECT: Buttons = Buttons(1 << 3);
    pub const RIGHT: Buttons = Buttons(1 << 4);
    pub const DOWN: Buttons = Buttons(1 << 5);
    pub const UP: Buttons = Buttons(1 << 6);
    pub const LEFT: Buttons = Buttons(1 << 7);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Buttons) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Buttons) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::LEFT,
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Right => Self::RIGHT,
        }
    }

    /// Heading for this tick given the held buttons.
    ///
    /// Held buttons are applied one after another in the order LEFT, UP,
    /// DOWN, RIGHT, each checked against the heading left by the one
    /// before it; a button that would reverse that heading is skipped.
    /// Returns the final heading if it differs from `current`.
    ///
    /// Two held buttons can therefore chain into a reversal of `current`
    /// within one tick (UP with LEFT+DOWN held ends up DOWN).
    pub fn steer(self, current: Direction) -> Option<Direction> {
        let mut heading = current;
        for dir in Direction::STEER_ORDER {
            if self.contains(Self::for_direction(dir)) && !heading.is_opposite(dir) {
                heading = dir;
            }
        }
        (heading != current).then_some(heading)
    }

    /// Whether this poll should leave a title or game-over screen.
    pub const fn starts(self, policy: StartPolicy) -> bool {
        match policy {
            StartPolicy::AnyButton => !self.is_empty(),
            StartPolicy::StartButton => self.contains(Self::START),
        }
    }
}

impl core::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

/// Which input leaves the title and game-over screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPolicy {
    AnyButton,
    StartButton,
}

/// A board's buttons, sampled once per call.
pub trait ButtonSource {
    type Error;

    fn poll_buttons(&mut self) -> Result<Buttons, Self::Error>;
}

impl<S: ButtonSource + ?Sized> ButtonSource for &mut S {
    type Error = S::Error;

    fn poll_buttons(&mut self) -> Result<Buttons, Self::Error> {
        (**self).poll_buttons()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_button_steers() {
        assert_eq!(Buttons::UP.steer(Direction::Right), Some(Direction::Up));
        assert_eq!(Buttons::NONE.steer(Direction::Right), None);
    }

    #[test]
    fn reversal_is_not_a_candidate() {
        assert_eq!(Buttons::LEFT.steer(Direction::Right), None);
        assert_eq!(Buttons::DOWN.steer(Direction::Up), None);
    }

    #[test]
    fn held_buttons_apply_in_order() {
        // UP turns first, then DOWN would reverse UP and is skipped
        let held = Buttons::LEFT | Buttons::UP | Buttons::DOWN;
        assert_eq!(held.steer(Direction::Right), Some(Direction::Up));

        let held = Buttons::UP | Buttons::RIGHT;
        assert_eq!(held.steer(Direction::Down), Some(Direction::Right));

        // LEFT is a reversal here, so UP is the only turn
        let held = Buttons::UP | Buttons::LEFT;
        assert_eq!(held.steer(Direction::Right), Some(Direction::Up));

        // LEFT then DOWN chain into a reversal of UP
        let held = Buttons::LEFT | Buttons::DOWN;
        assert_eq!(held.steer(Direction::Up), Some(Direction::Down));

        let held = Buttons::UP | Buttons::RIGHT;
        assert_eq!(held.steer(Direction::Left), Some(Direction::Right));

        // holding only the current heading is no change
        assert_eq!(Buttons::RIGHT.steer(Direction::Right), None);
    }

    #[test]
    fn start_policies() {
        assert!(Buttons::A.starts(StartPolicy::AnyButton));
        assert!(!Buttons::NONE.starts(StartPolicy::AnyButton));
        assert!(!Buttons::A.starts(StartPolicy::StartButton));
        assert!((Buttons::START | Buttons::B).starts(StartPolicy::StartButton));
    }
}
