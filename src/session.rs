use tracing::debug;

use crate::food::Spawner;
use crate::grid::{Cell, Grid};
use crate::snake::{Advance, Heading, Snake};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Running,
    Ended(EndCause),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EndCause {
    Wall,
    SelfHit,
    BoardFull,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tick {
    Moved,
    Fed,
    Over(EndCause),
}

/// One playthrough: owns the snake, the food, the score and the heading
/// bookkeeping from reset until game-over.
pub struct Session {
    grid: Grid,
    snake: Snake,
    heading: Heading,
    pending: Heading,
    food: Cell,
    score: u32,
    state: State,
    spawner: Spawner,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Session::with_spawner(grid, Spawner::new())
    }

    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Session::with_spawner(grid, Spawner::with_seed(seed))
    }

    fn with_spawner(grid: Grid, mut spawner: Spawner) -> Self {
        let snake = Snake::new(grid.center());
        let food = spawner
            .spawn(&grid, &snake)
            .expect("fresh board has a free cell");

        Session {
            grid,
            snake,
            heading: Heading::Right,
            pending: Heading::Right,
            food,
            score: 0,
            state: State::Running,
            spawner,
        }
    }

    /// Records the requested heading for the next tick, unless it would
    /// reverse the heading currently in effect.
    pub fn steer(&mut self, requested: Heading) {
        if !requested.is_reverse_of(self.heading) {
            self.pending = requested;
        }
    }

    /// One fixed-interval step: adopt the pending heading, move, handle
    /// food, then check collisions. The new head is never compared against
    /// itself, so growth cannot read as a self-hit.
    pub fn tick(&mut self) -> Tick {
        if let State::Ended(cause) = self.state {
            return Tick::Over(cause);
        }

        self.heading = self.pending;
        let advance = self.snake.advance(self.heading, self.grid.unit(), self.food);

        if let Advance::Fed = advance {
            self.score += 1;
            match self.spawner.spawn(&self.grid, &self.snake) {
                Some(cell) => {
                    debug!(x = cell.x, y = cell.y, score = self.score, "food respawned");
                    self.food = cell;
                }
                None => return self.end(EndCause::BoardFull),
            }
        }

        if !self.grid.contains(self.snake.head()) {
            return self.end(EndCause::Wall);
        }
        if self.snake.self_collided() {
            return self.end(EndCause::SelfHit);
        }

        match advance {
            Advance::Fed => Tick::Fed,
            Advance::Moved => Tick::Moved,
        }
    }

    fn end(&mut self, cause: EndCause) -> Tick {
        self.state = State::Ended(cause);
        Tick::Over(cause)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
