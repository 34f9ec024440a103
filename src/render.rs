use anyhow::Result;

use crate::grid::{Cell, Grid};
use crate::session::Session;
use crate::term::TermManager;
use crate::{Coords, TermInt};

// Cells are two columns wide so they come out roughly square on screen.
const CELL_COLS: TermInt = 2;
const SNAKE_CELL: &str = "██";
const FOOD_CELL: &str = "()";
const EMPTY_CELL: &str = "  ";

/// Terminal footprint of the score line plus the bordered board.
pub fn frame_size(grid: &Grid) -> Coords {
    let width = grid.cols() as TermInt * CELL_COLS + 2;
    let height = grid.rows() as TermInt + 3;
    (width, height)
}

/// Score line and border, painted once per session.
pub fn draw_board(term: &mut TermManager, grid: &Grid, origin: Coords) -> Result<()> {
    let (width, height) = frame_size(grid);
    term.draw_borders((origin.0, origin.1 + 1), (width, height - 1))?;
    term.flush()
}

/// Full repaint of the play field and the score from the current session.
pub fn draw_frame(term: &mut TermManager, session: &Session, origin: Coords) -> Result<()> {
    let grid = session.grid();

    for cell in grid.cells() {
        let glyph = if session.snake().occupies(cell) {
            SNAKE_CELL
        } else if cell == session.food() {
            FOOD_CELL
        } else {
            EMPTY_CELL
        };
        term.print_str_at(cell_origin(&grid, origin, cell), glyph)?;
    }

    term.print_str_at(origin, &format!("Score: {}", session.score()))?;
    term.flush()
}

fn cell_origin(grid: &Grid, origin: Coords, cell: Cell) -> Coords {
    let cx = (cell.x / grid.unit()) as TermInt;
    let cy = (cell.y / grid.unit()) as TermInt;
    (origin.0 + 1 + cx * CELL_COLS, origin.1 + 2 + cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_covers_board_score_and_border() {
        assert_eq!(frame_size(&Grid::default()), (42, 23));
    }

    #[test]
    fn cells_map_inside_the_border() {
        let grid = Grid::default();
        let origin = (5, 3);
        assert_eq!(cell_origin(&grid, origin, Cell::new(0, 0)), (6, 5));
        assert_eq!(cell_origin(&grid, origin, Cell::new(380, 380)), (44, 24));
    }
}
