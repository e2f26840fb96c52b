//! The Lights Out grid: cell ownership, toggling, win detection and
//! pixel mapping.
//!
//! A toggle flips the target cell and its four orthogonal neighbors. Border
//! cells link to off-board positions, which resolve to a shared dummy cell
//! that silently absorbs the flip. Once every real cell is off the grid is
//! won and ignores further toggles until `reset()`.

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::board::{self, cell_index};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::events::GameObserver;
use crate::rng::GameRng;
use crate::types::{Cell, Position};

/// Lifecycle of a grid. `Won` is terminal until `reset()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameState {
    Active,
    Won,
}

/// A cell's on-canvas rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Flat view of the grid for a renderer. Arrays are column-major
/// (`x * size + y`), one byte per cell (0 or 1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub size: usize,
    pub move_number: u32,
    pub game_over: bool,
    pub lights: Vec<u8>,
    pub just_toggled: Vec<u8>,
}

pub struct Grid {
    size: usize,
    percent_on: u8,
    max_generation_attempts: u32,
    cells: Vec<Cell>,
    dummy: Cell,
    game_over: bool,
    move_number: u32,
    rng: GameRng,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Grid {
    /// Build and randomize a grid. The seed in `config` is used if present.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::from_seed(seed),
            None => GameRng::new(),
        };
        Self::with_rng(config, rng)
    }

    /// Build a grid drawing from an injected RNG. `config.seed` is ignored.
    pub fn with_rng(config: &GameConfig, rng: GameRng) -> Result<Self, GameError> {
        config.validate()?;

        let mut grid = Self {
            size: config.size,
            percent_on: config.percent_on,
            max_generation_attempts: config.max_generation_attempts,
            cells: Vec::new(),
            dummy: Cell::dummy(),
            game_over: false,
            move_number: 0,
            rng,
            observers: Vec::new(),
        };
        grid.reset()?;
        Ok(grid)
    }

    /// Replace every cell with a fresh random layout containing at least one
    /// lit cell, and return to the active state with a zero move counter.
    ///
    /// If no acceptable layout is drawn within the configured attempt cap the
    /// current game is left untouched.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let result = board::generate_valid_board(
            self.size,
            self.percent_on,
            self.max_generation_attempts,
            &mut self.rng,
        );
        if !result.success {
            return Err(GameError::GenerationExhausted {
                attempts: result.attempts,
            });
        }
        self.generate(result.cells);
        Ok(())
    }

    fn generate(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.size * self.size);
        self.game_over = false;
        self.move_number = 0;
        self.cells = cells;
    }

    /// Register a listener for cell and win notifications.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Toggle the cell at `pos` and its orthogonal neighbors.
    ///
    /// Returns false, changing nothing, if the game is already won or `pos`
    /// is off-board. Only a true return counts as a move.
    pub fn toggle(&mut self, pos: Position) -> bool {
        if self.game_over {
            return false;
        }
        for cell in &mut self.cells {
            cell.clear_just_toggled();
        }

        let toggled = self.toggle_cell(pos, true);
        if toggled {
            self.move_number += 1;
            debug!("move {}: toggled ({}, {})", self.move_number, pos.x, pos.y);

            self.game_over = self.all_off();
            if self.game_over {
                info!("grid solved in {} moves", self.move_number);
                for observer in &mut self.observers {
                    observer.game_won();
                }
            }
        }
        toggled
    }

    /// Flip one cell, then (if `propagate`) each neighbor without further
    /// propagation. Neighbor results are ignored so the dummy absorbs flips.
    fn toggle_cell(&mut self, pos: Position, propagate: bool) -> bool {
        let cell = self.cell_at_mut(pos);
        if !cell.flip() {
            return false;
        }
        let neighbors = *cell.neighbors();
        self.notify_cell_changed(pos);

        if propagate {
            for neighbor in neighbors {
                self.toggle_cell(neighbor, false);
            }
        }
        true
    }

    fn notify_cell_changed(&mut self, pos: Position) {
        let Some(idx) = cell_index(self.size, pos) else {
            return;
        };
        let cell = &self.cells[idx];
        for observer in &mut self.observers {
            observer.cell_changed(cell);
        }
    }

    /// True iff no real cell is lit.
    pub fn all_off(&self) -> bool {
        self.cells.iter().all(|c| c.is_dummy() || !c.is_on())
    }

    /// Map a pixel on a `canvas_width` x `canvas_height` canvas to a cell.
    ///
    /// Uses exact integer arithmetic truncating toward zero, so cell
    /// boundaries never drift. Pixels outside the canvas map to off-board
    /// positions, which `toggle()` treats as a no-op.
    pub fn pixel_to_cell(
        &self,
        canvas_width: i32,
        canvas_height: i32,
        pixel_x: i32,
        pixel_y: i32,
    ) -> Result<Position, GameError> {
        if canvas_width <= 0 || canvas_height <= 0 {
            return Err(GameError::InvalidCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }
        let size = self.size as i64;
        let scale = |pixel: i32, extent: i32| -> i32 {
            let v = pixel as i64 * size / extent as i64;
            v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
        Ok(Position::new(
            scale(pixel_x, canvas_width),
            scale(pixel_y, canvas_height),
        ))
    }

    /// The pixel rectangle covered by `pos`, or `None` if `pos` is off-board
    /// or the canvas is empty. Consistent with `pixel_to_cell`: every pixel
    /// inside the rectangle maps back to `pos`.
    pub fn cell_to_pixel_rect(
        &self,
        canvas_width: i32,
        canvas_height: i32,
        pos: Position,
    ) -> Option<PixelRect> {
        if canvas_width <= 0 || canvas_height <= 0 || !pos.in_bounds(self.size) {
            return None;
        }
        let size = self.size as i64;
        // First pixel whose scaled value reaches `index`.
        let edge = |index: i64, extent: i32| -> i32 {
            ((index * extent as i64 + size - 1) / size) as i32
        };
        let (x0, x1) = (edge(pos.x as i64, canvas_width), edge(pos.x as i64 + 1, canvas_width));
        let (y0, y1) = (edge(pos.y as i64, canvas_height), edge(pos.y as i64 + 1, canvas_height));
        Some(PixelRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }

    /// The cell at `pos`, or the dummy sentinel if `pos` is off-board.
    pub fn cell_at(&self, pos: Position) -> &Cell {
        match cell_index(self.size, pos) {
            Some(idx) => &self.cells[idx],
            None => &self.dummy,
        }
    }

    fn cell_at_mut(&mut self, pos: Position) -> &mut Cell {
        match cell_index(self.size, pos) {
            Some(idx) => &mut self.cells[idx],
            None => &mut self.dummy,
        }
    }

    /// Real cells in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of real cells currently lit.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_on()).count()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            move_number: self.move_number,
            game_over: self.game_over,
            lights: self.cells.iter().map(|c| c.is_on() as u8).collect(),
            just_toggled: self.cells.iter().map(|c| c.just_toggled() as u8).collect(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn percent_on(&self) -> u8 {
        self.percent_on
    }

    #[inline]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn state(&self) -> GameState {
        if self.game_over {
            GameState::Won
        } else {
            GameState::Active
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("percent_on", &self.percent_on)
            .field("move_number", &self.move_number)
            .field("game_over", &self.game_over)
            .field("lit", &self.lit_count())
            .field("observers", &self.observers.len())
            .finish()
    }
}
