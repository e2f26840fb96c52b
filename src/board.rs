//! Board generation: random light placement and neighbor wiring.
//!
//! `generate_valid_board()` runs the whole rejection-sampling loop, redrawing
//! layouts until one has at least one lit cell. An all-off layout is already
//! won and is never a valid starting position.

use log::{debug, warn};

use crate::rng::GameRng;
use crate::types::{Cell, Position};

/// Index of `pos` in a column-major board of side `size`, or `None` off-board.
#[inline]
pub fn cell_index(size: usize, pos: Position) -> Option<usize> {
    if pos.in_bounds(size) {
        Some(pos.x as usize * size + pos.y as usize)
    } else {
        None
    }
}

/// Create `size * size` cells, each lit with probability `percent_on / 100`.
pub fn place_lights_random(size: usize, percent_on: u8, rng: &mut GameRng) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(size * size);
    for x in 0..size {
        for y in 0..size {
            let pos = Position::new(x as i32, y as i32);
            cells.push(Cell::new(pos, rng.chance(percent_on)));
        }
    }
    cells
}

/// Link every cell to its four orthogonal neighbor positions.
///
/// Off-board positions are stored as-is; lookups resolve them to the dummy.
pub fn wire_neighbors(cells: &mut [Cell]) {
    for cell in cells.iter_mut() {
        let neighbors = cell.position().neighbors();
        cell.set_neighbors(neighbors);
    }
}

/// True if at least one real cell is lit.
pub fn has_lit_cell(cells: &[Cell]) -> bool {
    cells.iter().any(|c| c.is_on() && !c.is_dummy())
}

/// Result of a board generation run.
pub struct BoardResult {
    /// Cells in column-major order, neighbors wired.
    pub cells: Vec<Cell>,
    /// How many random layouts were drawn.
    pub attempts: u32,
    /// True if an accepted layout was found within the attempt cap.
    pub success: bool,
}

/// Draw layouts until `accept` returns true or `max_attempts` is reached.
///
/// On failure the last drawn layout is returned with `success == false`.
pub fn generate_board<F>(
    size: usize,
    percent_on: u8,
    max_attempts: u32,
    rng: &mut GameRng,
    accept: F,
) -> BoardResult
where
    F: Fn(&[Cell]) -> bool,
{
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;

        let mut cells = place_lights_random(size, percent_on, rng);
        wire_neighbors(&mut cells);

        if accept(&cells) {
            debug!("generated {size}x{size} board in {attempts} attempt(s)");
            return BoardResult {
                cells,
                attempts,
                success: true,
            };
        }

        if attempts >= max_attempts {
            warn!("gave up generating a {size}x{size} board after {attempts} attempts");
            return BoardResult {
                cells,
                attempts,
                success: false,
            };
        }
    }
}

/// Generate a board with at least one lit cell.
pub fn generate_valid_board(
    size: usize,
    percent_on: u8,
    max_attempts: u32,
    rng: &mut GameRng,
) -> BoardResult {
    generate_board(size, percent_on, max_attempts, rng, has_lit_cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_column_major() {
        assert_eq!(cell_index(3, Position::new(0, 0)), Some(0));
        assert_eq!(cell_index(3, Position::new(0, 2)), Some(2));
        assert_eq!(cell_index(3, Position::new(1, 0)), Some(3));
        assert_eq!(cell_index(3, Position::new(2, 2)), Some(8));
        assert_eq!(cell_index(3, Position::new(3, 0)), None);
        assert_eq!(cell_index(3, Position::new(-1, 1)), None);
    }

    #[test]
    fn test_place_lights_full() {
        let mut rng = GameRng::from_seed(42);
        let cells = place_lights_random(4, 100, &mut rng);
        assert_eq!(cells.len(), 16);
        assert!(cells.iter().all(|c| c.is_on() && !c.just_toggled()));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell_index(4, cell.position()), Some(i));
        }
    }

    #[test]
    fn test_wire_neighbors_border() {
        let mut rng = GameRng::from_seed(1);
        let mut cells = place_lights_random(2, 50, &mut rng);
        wire_neighbors(&mut cells);

        let corner = &cells[0];
        assert_eq!(corner.position(), Position::new(0, 0));
        let on_board: Vec<_> = corner
            .neighbors()
            .iter()
            .filter(|p| p.in_bounds(2))
            .copied()
            .collect();
        assert_eq!(on_board, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_generate_valid_board_has_light() {
        let mut rng = GameRng::from_seed(9);
        for _ in 0..50 {
            let result = generate_valid_board(3, 5, 10_000, &mut rng);
            assert!(result.success);
            assert!(has_lit_cell(&result.cells));
            assert_eq!(result.cells.len(), 9);
        }
    }

    #[test]
    fn test_generate_board_first_try() {
        let mut rng = GameRng::from_seed(3);
        let result = generate_board(5, 100, 10, &mut rng, |_| true);
        assert!(result.success);
        assert_eq!(result.attempts, 1);
    }

    #[test]
    fn test_generate_board_exhausted() {
        let mut rng = GameRng::from_seed(3);
        let result = generate_board(5, 50, 10, &mut rng, |_| false);
        assert!(!result.success);
        assert_eq!(result.attempts, 10);
        assert_eq!(result.cells.len(), 25);
    }
}
