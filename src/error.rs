//! Error types for board configuration and move validation.

pub const OCCUPIED_CODE: i32 = -1;
pub const KO_CODE: i32 = -2;
pub const SUICIDE_CODE: i32 = -3;
pub const OUT_OF_BOUNDS_CODE: i32 = -4;

/// A board size the engine refuses to configure.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board size {width}x{height} is invalid: both sides must be integers in 1..=25")]
    InvalidSize { width: f64, height: f64 },
}

/// Why a stone placement was refused. A refused move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    #[display("({x}, {y}) is an immediate ko recapture")]
    Ko { x: u8, y: u8 },

    #[display("({x}, {y}) would leave its own group without liberties")]
    Suicide { x: u8, y: u8 },

    #[display("({x}, {y}) is off the board")]
    OutOfBounds { x: u8, y: u8 },
}

impl MoveError {
    /// Negative result code handed to the host in place of a capture count.
    pub fn code(&self) -> i32 {
        match self {
            MoveError::Occupied { .. } => OCCUPIED_CODE,
            MoveError::Ko { .. } => KO_CODE,
            MoveError::Suicide { .. } => SUICIDE_CODE,
            MoveError::OutOfBounds { .. } => OUT_OF_BOUNDS_CODE,
        }
    }
}
