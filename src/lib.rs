//! Lights Out grid engine.
//!
//! An N×N grid of lights where toggling a cell also toggles its four
//! orthogonal neighbors; the puzzle is solved when every light is off.
//! The `wasm_exports` module exposes the grid to a JavaScript front end.
//! State arrays cross the boundary as flat `Uint8Array`s in column-major
//! layout: `cells[x * size + y]` maps to JS `grid[x][y]`.

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod rng;
pub mod types;

pub use config::GameConfig;
pub use error::GameError;
pub use events::{EventLog, GameEvent, GameObserver};
pub use grid::{BoardSnapshot, GameState, Grid, PixelRect};
pub use types::{Cell, Direction, Position};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use crate::events::GameObserver;
    use crate::types::{Cell, Position};
    use crate::{GameConfig, GameError, Grid};

    fn to_js_error(err: GameError) -> JsError {
        JsError::new(&err.to_string())
    }

    /// Forwards grid notifications to JS callbacks.
    struct JsObserver {
        on_cell_changed: Option<js_sys::Function>,
        on_game_won: Option<js_sys::Function>,
    }

    impl GameObserver for JsObserver {
        fn cell_changed(&mut self, cell: &Cell) {
            if let Some(f) = &self.on_cell_changed {
                let pos = cell.position();
                // A throwing callback must not abort the move mid-propagation.
                let _ = f.call3(
                    &JsValue::NULL,
                    &pos.x.into(),
                    &pos.y.into(),
                    &cell.is_on().into(),
                );
            }
        }

        fn game_won(&mut self) {
            if let Some(f) = &self.on_game_won {
                let _ = f.call0(&JsValue::NULL);
            }
        }
    }

    /// A game handle owned by JavaScript.
    #[wasm_bindgen(js_name = "LightsOutGame")]
    pub struct WasmGame {
        grid: Grid,
    }

    #[wasm_bindgen(js_class = "LightsOutGame")]
    impl WasmGame {
        /// Create a game from `{ size, percentOn, maxGenerationAttempts, seed }`.
        /// Missing fields take their defaults.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue) -> Result<WasmGame, JsError> {
            let config: GameConfig = if config.is_undefined() || config.is_null() {
                GameConfig::default()
            } else {
                serde_wasm_bindgen::from_value(config)?
            };
            let grid = Grid::new(&config).map_err(to_js_error)?;
            Ok(WasmGame { grid })
        }

        /// Register callbacks: `onCellChanged(x, y, isOn)` and `onGameWon()`.
        #[wasm_bindgen(js_name = "subscribe")]
        pub fn subscribe(
            &mut self,
            on_cell_changed: Option<js_sys::Function>,
            on_game_won: Option<js_sys::Function>,
        ) {
            self.grid.subscribe(Box::new(JsObserver {
                on_cell_changed,
                on_game_won,
            }));
        }

        #[wasm_bindgen(js_name = "reset")]
        pub fn reset(&mut self) -> Result<(), JsError> {
            self.grid.reset().map_err(to_js_error)
        }

        #[wasm_bindgen(js_name = "toggle")]
        pub fn toggle(&mut self, x: i32, y: i32) -> bool {
            self.grid.toggle(Position::new(x, y))
        }

        /// Toggle the cell under a pointer. Returns false for pixels outside
        /// the board or an empty canvas.
        #[wasm_bindgen(js_name = "clickAt")]
        pub fn click_at(&mut self, width: i32, height: i32, px: i32, py: i32) -> bool {
            match self.grid.pixel_to_cell(width, height, px, py) {
                Ok(pos) => self.grid.toggle(pos),
                Err(_) => false,
            }
        }

        /// Returns JS object `{ x, y }`.
        #[wasm_bindgen(js_name = "pixelToCell")]
        pub fn pixel_to_cell(
            &self,
            width: i32,
            height: i32,
            px: i32,
            py: i32,
        ) -> Result<JsValue, JsError> {
            let pos = self
                .grid
                .pixel_to_cell(width, height, px, py)
                .map_err(to_js_error)?;
            let obj = js_sys::Object::new();
            js_sys::Reflect::set(&obj, &"x".into(), &pos.x.into())
                .map_err(|_| JsError::new("failed to build position"))?;
            js_sys::Reflect::set(&obj, &"y".into(), &pos.y.into())
                .map_err(|_| JsError::new("failed to build position"))?;
            Ok(obj.into())
        }

        /// Returns JS object `{ x, y, width, height }` or `null`.
        #[wasm_bindgen(js_name = "cellRect")]
        pub fn cell_rect(&self, width: i32, height: i32, x: i32, y: i32) -> Result<JsValue, JsError> {
            match self.grid.cell_to_pixel_rect(width, height, Position::new(x, y)) {
                Some(rect) => Ok(serde_wasm_bindgen::to_value(&rect)?),
                None => Ok(JsValue::NULL),
            }
        }

        /// On/off state of every cell, column-major.
        #[wasm_bindgen(js_name = "lights")]
        pub fn lights(&self) -> js_sys::Uint8Array {
            let flat: Vec<u8> = self.grid.cells().map(|c| c.is_on() as u8).collect();
            let arr = js_sys::Uint8Array::new_with_length(flat.len() as u32);
            arr.copy_from(&flat);
            arr
        }

        /// Cells flipped by the last move, column-major.
        #[wasm_bindgen(js_name = "justToggled")]
        pub fn just_toggled(&self) -> js_sys::Uint8Array {
            let flat: Vec<u8> = self.grid.cells().map(|c| c.just_toggled() as u8).collect();
            let arr = js_sys::Uint8Array::new_with_length(flat.len() as u32);
            arr.copy_from(&flat);
            arr
        }

        /// Full state as `{ size, moveNumber, gameOver, lights, justToggled }`.
        #[wasm_bindgen(js_name = "snapshot")]
        pub fn snapshot(&self) -> Result<JsValue, JsError> {
            Ok(serde_wasm_bindgen::to_value(&self.grid.snapshot())?)
        }

        #[wasm_bindgen(getter)]
        pub fn size(&self) -> usize {
            self.grid.size()
        }

        #[wasm_bindgen(getter, js_name = "moveNumber")]
        pub fn move_number(&self) -> u32 {
            self.grid.move_number()
        }

        #[wasm_bindgen(getter, js_name = "gameOver")]
        pub fn game_over(&self) -> bool {
            self.grid.game_over()
        }
    }
}
