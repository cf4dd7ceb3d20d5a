//! WebAssembly API used by the rendering host.
//!
//! Moves report a single `i32`: a non-negative capture count on success or a
//! negative rejection code (see [`crate::error`]). The host reads everything
//! else through [`GoEngine::state`].

use wasm_bindgen::prelude::*;

use crate::error::{MoveError, OUT_OF_BOUNDS_CODE};
use crate::game::GoGame;
use crate::types::{BoardSize, CaptureClass, MoveOutcome};

#[wasm_bindgen]
pub struct GoEngine {
    game: GoGame,
}

#[wasm_bindgen]
impl GoEngine {
    /// Creates a game; both sizes default to 19 and a lone width makes the board square.
    #[wasm_bindgen(constructor)]
    pub fn new(width: Option<f64>, height: Option<f64>) -> Result<GoEngine, JsValue> {
        let size = match width {
            Some(width) => BoardSize::from_dimensions(width, height).map_err(to_js_error)?,
            None => BoardSize::default(),
        };
        Ok(Self {
            game: GoGame::new(size),
        })
    }

    /// Stores a new size for the next `reset`. Throws and keeps the old size on bad input.
    pub fn configure(&mut self, width: f64, height: Option<f64>) -> Result<(), JsValue> {
        self.game
            .configure_dimensions(width, height)
            .map_err(to_js_error)
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn play(&mut self, x: i32, y: i32) -> i32 {
        let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) else {
            return OUT_OF_BOUNDS_CODE;
        };
        result_code(&self.game.play(x, y))
    }

    pub fn pass(&mut self) {
        self.game.pass();
    }

    /// 1 = black, 2 = white.
    pub fn turn(&self) -> u8 {
        self.game.turn().stone() as u8
    }

    pub fn move_number(&self) -> u32 {
        self.game.move_number()
    }

    /// Serialised [`crate::types::GameState`].
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.game.to_game_state()).map_err(JsValue::from)
    }
}

/// Capture class (0..=4) of a `play` result code, or 255 for a rejected move.
#[wasm_bindgen]
pub fn capture_class(code: i32) -> u8 {
    CaptureClass::from_code(code).map_or(u8::MAX, |class| class as u8)
}

fn result_code(result: &Result<MoveOutcome, MoveError>) -> i32 {
    match result {
        Ok(outcome) => i32::try_from(outcome.captured).unwrap_or(i32::MAX),
        Err(err) => err.code(),
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_reports_counts_and_rejection_codes() {
        let mut engine = GoEngine::new(Some(9.0), None).unwrap();

        assert_eq!(engine.play(5, 5), 0);
        assert_eq!(engine.play(5, 5), -1);
        assert_eq!(engine.play(0, 3), OUT_OF_BOUNDS_CODE);
        assert_eq!(engine.play(-7, 300), OUT_OF_BOUNDS_CODE);
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.move_number(), 1);
    }

    #[test]
    fn capture_code_maps_to_class() {
        let mut engine = GoEngine::new(Some(9.0), None).unwrap();
        for (x, y) in [(5, 5), (5, 4), (1, 1), (4, 5), (1, 3), (6, 5), (1, 5)] {
            assert_eq!(engine.play(x, y), 0);
        }

        let code = engine.play(5, 6);

        assert_eq!(code, 1);
        assert_eq!(capture_class(code), CaptureClass::One as u8);
        assert_eq!(capture_class(-2), u8::MAX);
        assert_eq!(capture_class(9), CaptureClass::Many as u8);
    }

    #[test]
    fn pass_and_reset_drive_the_game() {
        let mut engine = GoEngine::new(None, None).unwrap();
        engine.pass();
        assert_eq!(engine.turn(), 2);

        engine.reset();

        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.move_number(), 0);
    }
}
