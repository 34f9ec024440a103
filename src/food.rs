use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    pub fn new() -> Self {
        Spawner { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Spawner { rng: StdRng::seed_from_u64(seed) }
    }

    /// Uniform draw among the cells the snake does not occupy.
    /// `None` means the board is full.
    pub fn spawn(&mut self, grid: &Grid, snake: &Snake) -> Option<Cell> {
        let free: Vec<Cell> = grid.cells().filter(|&c| !snake.occupies(c)).collect();
        free.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Heading;

    #[test]
    fn spawn_lands_on_a_free_cell() {
        let grid = Grid::new(60, 60, 20);
        let snake = Snake::new(grid.center());
        let mut spawner = Spawner::with_seed(1);

        for _ in 0..100 {
            let cell = spawner.spawn(&grid, &snake).unwrap();
            assert!(grid.contains(cell));
            assert!(!snake.occupies(cell));
        }
    }

    #[test]
    fn spawn_takes_the_last_free_cell() {
        let grid = Grid::new(40, 40, 20);
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.advance(Heading::Right, 20, Cell::new(20, 0));
        snake.advance(Heading::Down, 20, Cell::new(20, 20));

        let mut spawner = Spawner::with_seed(1);
        assert_eq!(spawner.spawn(&grid, &snake), Some(Cell::new(0, 20)));
    }

    #[test]
    fn spawn_reports_a_full_board() {
        let grid = Grid::new(40, 40, 20);
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.advance(Heading::Right, 20, Cell::new(20, 0));
        snake.advance(Heading::Down, 20, Cell::new(20, 20));
        snake.advance(Heading::Left, 20, Cell::new(0, 20));

        let mut spawner = Spawner::with_seed(1);
        assert_eq!(spawner.spawn(&grid, &snake), None);
    }
}
