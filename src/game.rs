use log::{debug, info, warn};
use rand::Rng;

use crate::apple::Apple;
use crate::board::Board;
use crate::clock::Clock;
use crate::config::{Config, Palette};
use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::render::{Draw, Renderer};
use crate::snake::{Snake, Direction::Right, MoveResult};

const PAUSE_MESSAGE: &[&str] = &["Paused", "Press Esc to resume", "or Q to quit"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    /// The snake ran into itself and was reset.
    Collided,
    /// The snake filled the board and was reset.
    Cleared,
    Paused,
    Quit,
}

pub struct SnakeGame<R, I, C> {
    board: Board,
    palette: Palette,
    renderer: R,
    input: I,
    clock: C,
    snake: Snake,
    apple: Apple,
    paused: bool,
}

impl<R: Renderer, I: InputSource, C: Clock> SnakeGame<R, I, C> {
    pub fn new(config: &Config, renderer: R, input: I, clock: C, rng: &mut impl Rng) -> Self {
        let board = config.board();
        let snake = Snake::new(board.center(), Right);
        let apple = Apple::new(&board, rng);

        SnakeGame {
            board,
            palette: config.palette.clone(),
            renderer,
            input,
            clock,
            snake,
            apple,
            paused: false,
        }
    }

    /// Runs until a quit event arrives.
    pub fn run(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.redraw()?;

        loop {
            self.clock.wait_tick();

            if self.tick(rng)? == TickOutcome::Quit {
                info!("Quit with snake length {}", self.snake.length());
                return Ok(());
            }
        }
    }

    pub fn tick(&mut self, rng: &mut impl Rng) -> Result<TickOutcome> {
        for event in self.input.poll_events()? {
            match event {
                InputEvent::Quit => return Ok(TickOutcome::Quit),
                InputEvent::Turn(dir) => {
                    self.snake.request_direction(dir);
                },
                InputEvent::Pause => self.toggle_pause()?,
            }
        }

        if self.paused {
            return Ok(TickOutcome::Paused);
        }

        let outcome = self.advance(rng);

        match outcome {
            TickOutcome::Collided | TickOutcome::Cleared => self.redraw()?,
            _ => {
                self.snake.draw(&mut self.renderer, &self.palette)?;
                self.apple.draw(&mut self.renderer, &self.palette)?;
                self.renderer.flush()?;
            },
        }

        Ok(outcome)
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn advance(&mut self, rng: &mut impl Rng) -> TickOutcome {
        let previous_length = self.snake.length();

        match self.snake.move_step(&self.board, rng) {
            MoveResult::Reset { at } => {
                info!("Snake of length {} ran into itself at {:?}", previous_length, at);
                TickOutcome::Collided
            },
            MoveResult::Moved { new_head, old_tail: _ } if new_head == self.apple.position() => {
                self.snake.grow();

                match self.apple.randomize_position(&self.board, self.snake.body(), rng) {
                    Some(apple) => {
                        debug!("Ate at {:?} heading {:?}, length {}, apple moved to {:?}",
                            new_head, self.snake.direction(), self.snake.length(), apple);
                        TickOutcome::Ate
                    },
                    None => {
                        info!("Board cleared with snake length {}", self.snake.length());
                        self.snake.reset(self.board.center(), rng);
                        if self.apple.randomize_position(&self.board, self.snake.body(), rng).is_none() {
                            warn!("No free cell left for the apple");
                        }
                        TickOutcome::Cleared
                    },
                }
            },
            MoveResult::Moved { .. } => TickOutcome::Moved,
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.renderer.clear()?;
        self.snake.draw_full(&mut self.renderer, &self.palette)?;
        self.apple.draw(&mut self.renderer, &self.palette)?;
        self.renderer.flush()
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.renderer.show_message(PAUSE_MESSAGE)?;
        } else {
            self.renderer.hide_message()?;
            self.redraw()?;
        }

        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
        Ok(())
    }
}
