// Game state: one snake, one apple, one status.
//
// All mutation goes through `&mut Game`; the runner owns the only
// instance. Drawing is incremental: a tick touches at most the new
// head, the vacated tail and a freshly placed apple.

use core::fmt::Write;

use log::{debug, info};
use rand::RngCore;

use crate::apple::place_apple;
use crate::config::{ConfigError, GameConfig};
use crate::direction::Direction;
use crate::grid::{Cell, Grid};
use crate::input::Buttons;
use crate::render::{ColorSlot, Renderer};
use crate::snake::{MAX_SEGMENTS, Snake};
use crate::stack_fmt::StackFmt;

/// Length of `"SCORE: nnn"`.
pub const SCORE_LABEL_LEN: usize = 10;
/// Byte offset of the three score digits inside the label.
pub const SCORE_DIGITS_AT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Start,
    Play,
    GameOver,
}

impl Status {
    pub const fn name(self) -> &'static str {
        match self {
            Status::Start => "START",
            Status::Play => "PLAY",
            Status::GameOver => "GAMEOVER",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of moving the snake one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Grew,
    /// The head ran into the body. The move has still been applied and
    /// drawn; ending the round is up to the caller.
    SelfCollision,
}

pub struct Game<const CAP: usize = MAX_SEGMENTS> {
    config: GameConfig,
    snake: Snake<CAP>,
    apple: Option<Cell>,
    status: Status,
}

impl<const CAP: usize> Game<CAP> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate_for(CAP)?;
        Ok(Self {
            config,
            snake: Snake::new(config.initial_snake, config.initial_direction),
            apple: None,
            status: Status::Start,
        })
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.config.grid
    }

    #[inline]
    pub fn snake(&self) -> &Snake<CAP> {
        &self.snake
    }

    #[inline]
    pub fn apple(&self) -> Option<Cell> {
        self.apple
    }

    /// Apples eaten this round.
    pub fn score(&self) -> usize {
        self.snake
            .len()
            .saturating_sub(self.config.initial_snake.len())
    }

    /// `"SCORE: nnn"`, three zero padded digits.
    pub fn score_label(&self) -> StackFmt<SCORE_LABEL_LEN> {
        let mut label = StackFmt::new();
        let _ = write!(label, "SCORE: {:03}", self.score() % 1000);
        label
    }

    /// GAMEOVER -> START.
    pub fn return_to_title(&mut self) {
        info!("game: {} -> {}", self.status, Status::Start);
        self.status = Status::Start;
    }

    /// START -> PLAY: respawn the snake, draw it and place an apple.
    pub fn begin_round<R, G>(&mut self, renderer: &mut R, rng: &mut G) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
        G: RngCore + ?Sized,
    {
        info!("game: {} -> {}", self.status, Status::Play);
        self.status = Status::Play;
        self.snake
            .reset(self.config.initial_snake, self.config.initial_direction);
        self.apple = None;

        for &seg in self.snake.segments() {
            renderer.fill_cell(seg, ColorSlot::Snake)?;
        }
        self.respawn_apple(renderer, rng)
    }

    /// One PLAY tick: steer from the held buttons, then advance.
    /// A self-collision moves the game to GAMEOVER.
    ///
    /// Held buttons are resolved one by one (see `Buttons::steer`), so a
    /// chain of two turns may reverse the heading into the neck.
    pub fn tick<R, G>(
        &mut self,
        buttons: Buttons,
        renderer: &mut R,
        rng: &mut G,
    ) -> Result<Step, R::Error>
    where
        R: Renderer + ?Sized,
        G: RngCore + ?Sized,
    {
        if let Some(dir) = buttons.steer(self.snake.direction()) {
            self.snake.turn(dir);
        }
        let step = self.advance(None, renderer, rng)?;
        if step == Step::SelfCollision {
            info!(
                "game: self collision at {:?}, score {}",
                self.snake.head(),
                self.score()
            );
            info!("game: {} -> {}", self.status, Status::GameOver);
            self.status = Status::GameOver;
        }
        Ok(step)
    }

    /// Move the snake one cell, optionally turning first.
    ///
    /// A reversal request is ignored. The colliding move is applied and
    /// drawn like any other before it is reported.
    pub fn advance<R, G>(
        &mut self,
        requested: Option<Direction>,
        renderer: &mut R,
        rng: &mut G,
    ) -> Result<Step, R::Error>
    where
        R: Renderer + ?Sized,
        G: RngCore + ?Sized,
    {
        if let Some(dir) = requested {
            self.snake.steer(dir);
        }
        let Some(head) = self.snake.next_head(self.config.grid) else {
            return Ok(Step::Moved);
        };

        let collided = self.snake.contains(head);
        let ate = self.apple == Some(head);

        renderer.fill_cell(head, ColorSlot::Snake)?;
        if let Some(tail) = self.snake.push_head(head, ate) {
            renderer.fill_cell(tail, ColorSlot::Background)?;
        }

        if collided {
            return Ok(Step::SelfCollision);
        }
        if ate {
            debug!("game: apple at {} eaten, length {}", head, self.snake.len());
            self.respawn_apple(renderer, rng)?;
            return Ok(Step::Grew);
        }
        Ok(Step::Moved)
    }

    fn respawn_apple<R, G>(&mut self, renderer: &mut R, rng: &mut G) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
        G: RngCore + ?Sized,
    {
        self.apple = place_apple(self.config.grid, &self.snake, rng);
        if let Some(apple) = self.apple {
            debug!("game: apple placed at {}", apple);
            renderer.fill_cell(apple, ColorSlot::Apple)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn force_apple(&mut self, apple: Option<Cell>) {
        self.apple = apple;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::render::recording::{Op, Recorder};

    fn portrait() -> GameConfig {
        GameConfig::new(Grid::new(13, 16))
    }

    fn started(config: GameConfig) -> (Game, Recorder, SmallRng) {
        let mut game = Game::new(config).unwrap();
        let mut r = Recorder::default();
        let mut rng = SmallRng::seed_from_u64(42);
        game.begin_round(&mut r, &mut rng).unwrap();
        r.clear();
        (game, r, rng)
    }

    fn assert_distinct(snake: &Snake) {
        let segs = snake.segments();
        for (i, s) in segs.iter().enumerate() {
            assert!(!segs[i + 1..].contains(s), "duplicate segment {s}");
        }
    }

    #[test]
    fn begin_round_draws_snake_and_apple() {
        let mut game = Game::<MAX_SEGMENTS>::new(portrait()).unwrap();
        let mut r = Recorder::default();
        let mut rng = SmallRng::seed_from_u64(1);

        game.begin_round(&mut r, &mut rng).unwrap();

        assert_eq!(game.status(), Status::Play);
        assert_eq!(
            r.cells(ColorSlot::Snake),
            vec![Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1)]
        );
        let apple = game.apple().unwrap();
        assert_eq!(r.cells(ColorSlot::Apple), vec![apple]);
        assert!(!game.snake().contains(apple));
    }

    #[test]
    fn straight_line_wraps_without_collision() {
        let (mut game, mut r, mut rng) = started(portrait());
        game.force_apple(Some(Cell::new(5, 10)));

        for x in 1..=12 {
            let step = game.advance(Some(Direction::Right), &mut r, &mut rng).unwrap();
            assert_eq!(step, Step::Moved);
            assert_eq!(game.snake().head(), Some(Cell::new(x, 3)));
        }
        let step = game.advance(Some(Direction::Right), &mut r, &mut rng).unwrap();
        assert_eq!(step, Step::Moved);
        assert_eq!(game.snake().head(), Some(Cell::new(0, 3)));
        assert_eq!(game.snake().len(), 3);
        assert_distinct(game.snake());
    }

    #[test]
    fn reversal_behaves_like_no_change() {
        let (mut a, mut ra, mut rng_a) = started(portrait());
        let (mut b, mut rb, mut rng_b) = started(portrait());

        a.advance(Some(Direction::Left), &mut ra, &mut rng_a).unwrap();
        b.advance(None, &mut rb, &mut rng_b).unwrap();

        assert_eq!(a.snake().direction(), Direction::Right);
        assert_eq!(a.snake().segments(), b.snake().segments());
        assert_eq!(a.snake().head(), Some(Cell::new(1, 3)));
        assert_eq!(ra.ops, rb.ops);
    }

    #[test]
    fn moving_clears_the_tail() {
        let (mut game, mut r, mut rng) = started(portrait());
        game.force_apple(Some(Cell::new(8, 8)));

        let step = game.advance(None, &mut r, &mut rng).unwrap();

        assert_eq!(step, Step::Moved);
        assert_eq!(
            r.ops,
            vec![
                Op::Cell(Cell::new(1, 3), ColorSlot::Snake),
                Op::Cell(Cell::new(0, 1), ColorSlot::Background),
            ]
        );
        assert_eq!(
            game.snake().segments(),
            &[Cell::new(1, 3), Cell::new(0, 3), Cell::new(0, 2)]
        );
    }

    #[test]
    fn eating_grows_and_keeps_tail() {
        let (mut game, mut r, mut rng) = started(portrait());
        game.force_apple(Some(Cell::new(1, 3)));

        let step = game.advance(None, &mut r, &mut rng).unwrap();

        assert_eq!(step, Step::Grew);
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.snake().tail(), Some(Cell::new(0, 1)));
        assert!(r.cells(ColorSlot::Background).is_empty());

        let apple = game.apple().unwrap();
        assert_ne!(apple, Cell::new(1, 3));
        assert!(!game.snake().contains(apple));
        assert_eq!(r.cells(ColorSlot::Apple), vec![apple]);
    }

    #[test]
    fn collision_still_applies_the_move() {
        static LONG: [Cell; 5] = [
            Cell::new(4, 0),
            Cell::new(3, 0),
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(0, 0),
        ];
        let mut config = portrait();
        config.initial_snake = &LONG;
        let (mut game, mut r, mut rng) = started(config);
        game.force_apple(Some(Cell::new(10, 10)));

        assert_eq!(game.tick(Buttons::UP, &mut r, &mut rng).unwrap(), Step::Moved);
        assert_eq!(game.snake().head(), Some(Cell::new(4, 15)));
        assert_eq!(game.tick(Buttons::LEFT, &mut r, &mut rng).unwrap(), Step::Moved);
        assert_eq!(game.status(), Status::Play);

        r.clear();
        let step = game.tick(Buttons::DOWN, &mut r, &mut rng).unwrap();

        assert_eq!(step, Step::SelfCollision);
        assert_eq!(game.status(), Status::GameOver);
        assert_eq!(game.snake().head(), Some(Cell::new(3, 0)));
        assert_eq!(
            r.ops,
            vec![
                Op::Cell(Cell::new(3, 0), ColorSlot::Snake),
                Op::Cell(Cell::new(2, 0), ColorSlot::Background),
            ]
        );
    }

    #[test]
    fn chained_turns_can_reverse_into_the_neck() {
        static LONG: [Cell; 5] = [
            Cell::new(4, 0),
            Cell::new(3, 0),
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(0, 0),
        ];
        let mut config = portrait();
        config.initial_snake = &LONG;
        let (mut game, mut r, mut rng) = started(config);
        game.force_apple(Some(Cell::new(10, 10)));

        assert_eq!(game.tick(Buttons::UP, &mut r, &mut rng).unwrap(), Step::Moved);
        assert_eq!(game.snake().direction(), Direction::Up);

        // LEFT turns, then DOWN turns again off the new heading
        let step = game
            .tick(Buttons::LEFT | Buttons::DOWN, &mut r, &mut rng)
            .unwrap();

        assert_eq!(game.snake().direction(), Direction::Down);
        assert_eq!(step, Step::SelfCollision);
        assert_eq!(game.snake().head(), Some(Cell::new(4, 0)));
        assert_eq!(game.status(), Status::GameOver);
    }

    #[test]
    fn score_label_pads_to_three_digits() {
        let (mut game, mut r, mut rng) = started(portrait());
        for x in 1..=4 {
            game.force_apple(Some(Cell::new(x, 3)));
            assert_eq!(game.advance(None, &mut r, &mut rng).unwrap(), Step::Grew);
        }

        assert_eq!(game.snake().len(), 7);
        assert_eq!(game.score(), 4);
        let label = game.score_label();
        assert_eq!(label.as_str(), "SCORE: 004");
        assert_eq!(&label.as_str()[SCORE_DIGITS_AT..], "004");
    }

    #[test]
    fn random_play_keeps_invariants() {
        let (mut game, mut r, mut rng) = started(GameConfig::new(Grid::new(16, 13)));
        let mut input = SmallRng::seed_from_u64(99);
        let mut rounds = 0;

        for _ in 0..5000 {
            let buttons = Buttons::from_bits(input.random::<u8>() & 0xF0);
            let before = game.snake().len();
            let step = game.tick(buttons, &mut r, &mut rng).unwrap();

            match step {
                Step::SelfCollision => {
                    rounds += 1;
                    game.return_to_title();
                    game.begin_round(&mut r, &mut rng).unwrap();
                    continue;
                }
                Step::Grew => assert_eq!(game.snake().len(), before + 1),
                Step::Moved => assert_eq!(game.snake().len(), before),
            }
            assert_distinct(game.snake());
            if let Some(apple) = game.apple() {
                assert!(!game.snake().contains(apple));
            }
        }
        assert!(rounds > 0);
    }

    #[test]
    fn title_transition() {
        let (mut game, _, _) = started(portrait());
        game.return_to_title();
        assert_eq!(game.status(), Status::Start);
    }
}
