// The forever loop.
//
// Console owns every collaborator plus the single Game and walks the
// START -> PLAY -> GAMEOVER cycle. Each state runs its own sub-loop to
// completion; the only suspension points are fixed delays.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{debug, info};
use rand::RngCore;

use crate::config::{BoardProfile, ConfigError, ScreenLayout, Timing};
use crate::game::{Game, Status, Step};
use crate::input::{ButtonSource, StartPolicy};
use crate::render::{ColorSlot, Renderer};
use crate::snake::MAX_SEGMENTS;

/// A collaborator failed. Either one is fatal for the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<R, I> {
    Render(R),
    Input(I),
}

impl<R: core::fmt::Debug, I: core::fmt::Debug> core::fmt::Display for Error<R, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Render(e) => write!(f, "render failed: {e:?}"),
            Error::Input(e) => write!(f, "button poll failed: {e:?}"),
        }
    }
}

pub struct Console<R, I, D, G, const CAP: usize = MAX_SEGMENTS> {
    renderer: R,
    buttons: I,
    delay: D,
    rng: G,
    game: Game<CAP>,
    layout: ScreenLayout,
    start: StartPolicy,
    timing: Timing,
}

impl<R, I, D, G, const CAP: usize> Console<R, I, D, G, CAP>
where
    R: Renderer,
    I: ButtonSource,
    D: DelayNs,
    G: RngCore,
{
    pub fn new(
        profile: &BoardProfile,
        renderer: R,
        buttons: I,
        delay: D,
        rng: G,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            renderer,
            buttons,
            delay,
            rng,
            game: Game::new(profile.game)?,
            layout: profile.layout,
            start: profile.start,
            timing: profile.timing,
        })
    }

    pub fn game(&self) -> &Game<CAP> {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Never returns unless a collaborator fails.
    pub fn run(&mut self) -> Result<Infallible, Error<R::Error, I::Error>> {
        info!("console: running");
        loop {
            self.step()?;
        }
    }

    /// Run the current state's loop to completion and return the state
    /// the game moved to.
    pub fn step(&mut self) -> Result<Status, Error<R::Error, I::Error>> {
        match self.game.status() {
            Status::Start => self.title_screen()?,
            Status::Play => self.play_round()?,
            Status::GameOver => self.game_over_screen()?,
        }
        Ok(self.game.status())
    }

    fn title_screen(&mut self) -> Result<(), Error<R::Error, I::Error>> {
        self.renderer
            .clear_screen(ColorSlot::Background)
            .map_err(Error::Render)?;
        for line in self.layout.title {
            self.renderer
                .draw_line(line, ColorSlot::Text)
                .map_err(Error::Render)?;
        }
        self.delay.delay_ms(self.timing.settle_ms);
        self.wait_for_start()?;

        // PLAY entry
        self.renderer
            .clear_screen(ColorSlot::Background)
            .map_err(Error::Render)?;
        self.game
            .begin_round(&mut self.renderer, &mut self.rng)
            .map_err(Error::Render)?;
        self.delay.delay_ms(self.timing.settle_ms);
        Ok(())
    }

    fn play_round(&mut self) -> Result<(), Error<R::Error, I::Error>> {
        let mut ticks: u32 = 0;
        while self.game.status() == Status::Play {
            let held = self.buttons.poll_buttons().map_err(Error::Input)?;
            let step = self
                .game
                .tick(held, &mut self.renderer, &mut self.rng)
                .map_err(Error::Render)?;
            ticks += 1;
            if step == Step::Grew {
                debug!("console: grew on tick {}", ticks);
            }
            self.delay.delay_ms(self.timing.tick_ms);
        }
        info!("console: round over after {} ticks", ticks);
        Ok(())
    }

    fn game_over_screen(&mut self) -> Result<(), Error<R::Error, I::Error>> {
        self.renderer
            .clear_screen(ColorSlot::Background)
            .map_err(Error::Render)?;
        for line in self.layout.game_over {
            self.renderer
                .draw_line(line, ColorSlot::Text)
                .map_err(Error::Render)?;
        }
        let (font, x, y) = self.layout.score;
        let label = self.game.score_label();
        self.renderer
            .draw_text(font, x, y, label.as_str(), ColorSlot::Text)
            .map_err(Error::Render)?;

        self.delay.delay_ms(self.timing.settle_ms);
        self.wait_for_start()?;
        self.game.return_to_title();
        Ok(())
    }

    fn wait_for_start(&mut self) -> Result<(), Error<R::Error, I::Error>> {
        loop {
            let held = self.buttons.poll_buttons().map_err(Error::Input)?;
            if held.starts(self.start) {
                return Ok(());
            }
            self.delay.delay_ms(self.timing.poll_ms);
        }
    }
}
