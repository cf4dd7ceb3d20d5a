//! Rules engine for the game of Go: liberty counting, captures, suicide and
//! ko checks, turn alternation and prisoner tallies.
//!
//! [`GoGame`] is the native API; [`wasm::GoEngine`] wraps it for a browser host.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Board, Group};
pub use error::{ConfigError, MoveError};
pub use game::GoGame;
pub use types::{BoardSize, CaptureClass, Captured, Cell, Color, GameState, MoveOutcome, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
