use thiserror::Error;

/// Errors raised while configuring or generating a game.
///
/// Toggling never fails: off-board positions and moves after a win are
/// reported as no-ops through the `bool` returned by `Grid::toggle`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The grid must have at least one row and one column.
    #[error("grid size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    /// No light could ever be switched on, or the percentage is out of range.
    #[error("percent_on must be between 1 and 100, got {percent_on}")]
    InvalidPercent { percent_on: u8 },

    #[error("max_generation_attempts must be at least 1")]
    InvalidAttempts,

    /// Every generated layout was already solved.
    #[error("no layout with a lit cell after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("canvas must have positive dimensions, got {width}x{height}")]
    InvalidCanvas { width: i32, height: i32 },
}
