use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::error::{ConfigError, MoveError};
use crate::types::{BoardSize, Captured, Cell, Color, GameState, MoveOutcome};

/// One game of Go: the board plus turn, move counter, prisoners and ko history.
///
/// All mutation goes through `&mut self`, and a rejected move leaves every
/// field exactly as it was.
#[derive(Debug, Clone)]
pub struct GoGame {
    /// Size used by the next `reset`.
    size: BoardSize,
    board: Board,
    turn: Color,
    move_number: u32,
    captured: Captured,
    /// Point forbidden on move `n` is stored at `ko_history[n]`.
    ko_history: Vec<Option<usize>>,
    last_captures: Vec<Vec<usize>>,
    is_pass: bool,
}

impl GoGame {
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            board: Board::new(size),
            turn: Color::Black,
            move_number: 0,
            captured: Captured::default(),
            ko_history: vec![None],
            last_captures: Vec::new(),
            is_pass: false,
        }
    }

    /// Stores a new board size. It takes effect on the next [`GoGame::reset`].
    #[instrument(skip(self))]
    pub fn configure(&mut self, size: BoardSize) {
        self.size = size;
    }

    /// Validates host-supplied dimensions before storing them.
    /// On error the previously configured size is kept.
    #[instrument(skip(self))]
    pub fn configure_dimensions(
        &mut self,
        width: f64,
        height: Option<f64>,
    ) -> Result<(), ConfigError> {
        let size = BoardSize::from_dimensions(width, height).inspect_err(|err| {
            warn!(%err, "board size rejected");
        })?;
        self.configure(size);
        Ok(())
    }

    /// Starts a fresh game on the configured size.
    #[instrument(skip(self), fields(size = ?self.size))]
    pub fn reset(&mut self) {
        if self.board.size() == self.size {
            self.board.reset();
        } else {
            self.board = Board::new(self.size);
        }
        self.turn = Color::Black;
        self.move_number = 0;
        self.captured = Captured::default();
        self.ko_history.clear();
        self.ko_history.push(None);
        self.last_captures.clear();
        self.is_pass = false;
    }

    /// Plays a stone for the side to move at the 1-indexed point `(x, y)`.
    #[instrument(skip(self), fields(turn = ?self.turn, move_number = self.move_number))]
    pub fn play(&mut self, x: u8, y: u8) -> Result<MoveOutcome, MoveError> {
        let result = self.apply_move(x, y);
        match &result {
            Ok(outcome) => debug!(captured = outcome.captured, "move accepted"),
            Err(err) => debug!(%err, "move rejected"),
        }
        result
    }

    /// Hands the turn to the opponent without touching the board.
    #[instrument(skip(self), fields(turn = ?self.turn, move_number = self.move_number))]
    pub fn pass(&mut self) {
        self.last_captures.clear();
        self.is_pass = true;
        self.advance(None);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn configured_size(&self) -> BoardSize {
        self.size
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn captured(&self) -> Captured {
        self.captured
    }

    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    /// Groups removed by the last accepted move.
    pub fn last_captures(&self) -> &[Vec<usize>] {
        &self.last_captures
    }

    /// Grid index the side to move may not play, if a ko is pending.
    pub fn ko_point(&self) -> Option<usize> {
        self.ko_history.get(self.move_number as usize).copied().flatten()
    }

    pub fn to_game_state(&self) -> GameState {
        let size = self.board.size();
        GameState {
            width: size.width(),
            height: size.height(),
            board: self.board.to_array(),
            turn: self.turn.stone() as u8,
            move_number: self.move_number,
            captured: self.captured,
            ko_point: self.ko_point(),
            is_pass: self.is_pass,
            captured_batches: self.last_captures.clone(),
            star_points: self.board.star_points(),
        }
    }

    fn apply_move(&mut self, x: u8, y: u8) -> Result<MoveOutcome, MoveError> {
        let index = self.board.index(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        if self.board.get(index) != Cell::Empty {
            return Err(MoveError::Occupied { x, y });
        }
        if self.ko_point() == Some(index) {
            return Err(MoveError::Ko { x, y });
        }

        let own = self.turn.stone();
        let enemy = self.turn.opponent().stone();
        self.board.set(index, own);

        let mut batches = Vec::new();
        for next in self.board.neighbors(index) {
            if self.board.get(next) != enemy {
                continue;
            }
            let group = self.board.count_liberties(next);
            if group.liberty_count() == 0 {
                self.board.fill(&group.stones, Cell::Empty);
                batches.push(group.stones);
            }
        }

        let placed = self.board.count_liberties(index);
        if placed.liberty_count() == 0 {
            for batch in &batches {
                self.board.fill(batch, enemy);
            }
            self.board.set(index, Cell::Empty);
            return Err(MoveError::Suicide { x, y });
        }

        let captured: usize = batches.iter().map(Vec::len).sum();
        let ko = if captured == 1 && placed.liberty_count() == 1 && placed.len() == 1 {
            batches.first().and_then(|batch| batch.first()).copied()
        } else {
            None
        };
        if captured > 0 {
            debug!(captured, groups = batches.len(), "enemy stones removed");
        }

        self.captured.add(self.turn.opponent(), captured);
        self.last_captures = batches.clone();
        self.is_pass = false;
        self.advance(ko);

        Ok(MoveOutcome { captured, batches })
    }

    fn advance(&mut self, ko: Option<usize>) {
        self.ko_history.push(ko);
        self.move_number += 1;
        self.turn = self.turn.opponent();
    }
}

impl Default for GoGame {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
