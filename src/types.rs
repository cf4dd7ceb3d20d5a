use serde::Serialize;

use crate::error::ConfigError;

pub const MIN_BOARD_SIZE: u8 = 1;
pub const MAX_BOARD_SIZE: u8 = 25;
pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// State of one grid cell. The discriminants are the values handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
    /// Sentinel border around the playable area.
    Out = 3,
}

impl Cell {
    pub fn is_stone(self) -> bool {
        matches!(self, Cell::Black | Cell::White)
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The cell value a stone of this colour occupies.
    pub fn stone(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Board dimensions, validated to `1..=25` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardSize {
    width: u8,
    height: u8,
}

impl BoardSize {
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if range.contains(&width) && range.contains(&height) {
            Ok(Self { width, height })
        } else {
            Err(ConfigError::InvalidSize {
                width: f64::from(width),
                height: f64::from(height),
            })
        }
    }

    pub fn square(size: u8) -> Result<Self, ConfigError> {
        Self::new(size, size)
    }

    /// Builds a size from host-supplied numbers.
    /// A missing height makes the board square; fractional, NaN or
    /// out-of-range values are rejected.
    pub fn from_dimensions(width: f64, height: Option<f64>) -> Result<Self, ConfigError> {
        let height = height.unwrap_or(width);
        match (dimension(width), dimension(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(ConfigError::InvalidSize { width, height }),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Distance between vertically adjacent cells in the padded grid.
    pub fn stride(&self) -> usize {
        self.width as usize + 2
    }

    /// Number of cells in the padded grid, border included.
    pub fn grid_len(&self) -> usize {
        self.stride() * (self.height as usize + 2)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_SIZE,
            height: DEFAULT_BOARD_SIZE,
        }
    }
}

fn dimension(value: f64) -> Option<u8> {
    let range = f64::from(MIN_BOARD_SIZE)..=f64::from(MAX_BOARD_SIZE);
    (value.fract() == 0.0 && range.contains(&value)).then_some(value as u8)
}

/// A 1-indexed intersection on the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// Stones removed from the board so far, keyed by the colour of the removed stones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Captured {
    pub black: u32,
    pub white: u32,
}

impl Captured {
    pub fn add(&mut self, color: Color, count: usize) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        match color {
            Color::Black => self.black = self.black.saturating_add(count),
            Color::White => self.white = self.white.saturating_add(count),
        }
    }

    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Size bucket of a capture, used by the host to pick a sound and animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum CaptureClass {
    Placement = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Many = 4,
}

impl CaptureClass {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => CaptureClass::Placement,
            1 => CaptureClass::One,
            2 => CaptureClass::Two,
            3 => CaptureClass::Three,
            _ => CaptureClass::Many,
        }
    }

    /// Classifies a host result code. Negative codes are rejections and have no class.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().map(Self::from_count)
    }
}

/// Result of an accepted stone placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Total stones removed by this move.
    pub captured: usize,
    /// Grid indices of each removed enemy group, one batch per group.
    pub batches: Vec<Vec<usize>>,
}

impl MoveOutcome {
    pub fn capture_class(&self) -> CaptureClass {
        CaptureClass::from_count(self.captured)
    }
}

/// Public game state returned to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub width: u8,
    pub height: u8,
    /// Padded grid, `(width + 2) * (height + 2)` cells, row-major.
    pub board: Vec<u8>,
    /// 1 = black, 2 = white.
    pub turn: u8,
    pub move_number: u32,
    pub captured: Captured,
    /// Grid index the side to move may not play because of ko.
    pub ko_point: Option<usize>,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` after a stone placement or a reset.
    pub is_pass: bool,
    /// Contract:
    /// - Capturing move: one list of grid indices per removed group.
    /// - Otherwise: empty.
    pub captured_batches: Vec<Vec<usize>>,
    pub star_points: Vec<Position>,
}
