use std::time::Duration;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::grid::{self, in_bounds};
use crate::snake::{Direction, Snake};
use crate::Cell;

/// How eating food changes the snake's length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FoodPolicy {
    /// Classic rules: the snake grows by one cell per food eaten.
    Grow,
    /// Reverse rules: the snake shrinks by one cell per food eaten and
    /// wins by shrinking down to nothing.
    Shrink,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Lost,
    Won,
}

/// The fixed parameters of one game variant.
#[derive(Clone)]
pub struct Ruleset {
    pub title: &'static str,
    pub policy: FoodPolicy,
    pub tick_delay: Duration,
    pub start: Cell,
    pub start_len: usize,
    pub start_heading: Direction,
}

impl Ruleset {
    pub fn classic() -> Self {
        Ruleset {
            title: "Multithreaded Snake Game",
            policy: FoodPolicy::Grow,
            tick_delay: Duration::from_millis(100),
            start: (100, 100),
            start_len: 1,
            start_heading: Direction::Right,
        }
    }

    pub fn reverse() -> Self {
        Ruleset {
            title: "Reverse Snake Game",
            policy: FoodPolicy::Shrink,
            tick_delay: Duration::from_millis(120),
            start: (200, 200),
            start_len: 3,
            start_heading: Direction::Right,
        }
    }
}

/// Immutable copy of the visible game state, published to the renderer
/// at the end of every tick.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub body: Vec<Cell>,
    pub food: Cell,
    pub heading: Direction,
    pub state: RunState,
    pub food_eaten: u32,
}

pub struct Game<R = SmallRng> {
    rng: R,
    rules: Ruleset,
    snake: Snake,
    food: Cell,
    heading: Direction,
    pending: Option<Direction>,
    state: RunState,
    food_eaten: u32,
}

impl Game<SmallRng> {
    pub fn new(rules: Ruleset) -> Self {
        Game::new_with_rng(rules, SmallRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(rules: Ruleset, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            snake: Snake::new(rules.start, rules.start_len, rules.start_heading),
            food: (0, 0),
            heading: rules.start_heading,
            pending: None,
            state: RunState::Running,
            food_eaten: 0,
            rules,
        };

        game.replace_food();
        game
    }

    /// Starts a fresh round under the same rules, keeping the rng.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.rules.start, self.rules.start_len, self.rules.start_heading);
        self.heading = self.rules.start_heading;
        self.pending = None;
        self.state = RunState::Running;
        self.food_eaten = 0;
        self.replace_food();
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn tick_delay(&self) -> Duration {
        self.rules.tick_delay
    }

    /// Requests a heading change for the next tick. A press for the direct
    /// reverse of the committed heading is ignored, so the snake can never
    /// fold onto its own neck; any other press overwrites the pending slot.
    pub fn apply_direction(&mut self, dir: Direction) {
        if dir != self.heading.opposite() {
            self.pending = Some(dir);
        }
    }

    /// Advances the game by one step. Does nothing once a terminal state
    /// has been reached.
    pub fn tick(&mut self) {
        if self.state != RunState::Running {
            return;
        }

        if let Some(dir) = self.pending.take() {
            self.heading = dir;
        }

        let head = self.snake.advance(self.heading);

        if head == self.food {
            self.food_eaten += 1;

            match self.rules.policy {
                // The tail stays put, so the body nets one extra cell
                FoodPolicy::Grow => self.replace_food(),
                FoodPolicy::Shrink => {
                    self.snake.drop_tail();
                    if self.snake.len() > 1 {
                        self.snake.drop_tail();
                        self.replace_food();
                    } else {
                        self.state = RunState::Won;
                        return;
                    }
                }
            }
        } else {
            self.snake.drop_tail();
        }

        if !in_bounds(head) || self.snake.self_intersects() {
            self.state = RunState::Lost;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.body().iter().copied().collect(),
            food: self.food,
            heading: self.heading,
            state: self.state,
            food_eaten: self.food_eaten,
        }
    }

    fn replace_food(&mut self) {
        match self.place_food() {
            Some(cell) => self.food = cell,
            // The snake covers the whole board
            None => self.state = RunState::Won,
        }
    }

    /// Picks a food cell uniformly among the cells the snake does not
    /// occupy, or `None` when the board is full.
    fn place_food(&mut self) -> Option<Cell> {
        let free: Vec<Cell> = grid::all_cells().filter(|&c| !self.snake.contains(c)).collect();
        free.choose(&mut self.rng).copied()
    }
}
