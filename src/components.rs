#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;

use crate::catalog::{Orientation, ShapeKind};

/// Top-left corner of the falling piece's bounding box on the board.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub kind: ShapeKind,
    pub orientation: usize,
}

impl FallingPiece {
    #[must_use]
    pub fn new(kind: ShapeKind, orientation: usize) -> Self {
        Self { kind, orientation }
    }

    #[must_use]
    pub fn cells(self) -> Orientation {
        self.kind.orientations()[self.orientation]
    }

    /// The piece advanced to its next orientation, wrapping around the
    /// family's orientation list.
    #[must_use]
    pub fn rotated(self) -> Self {
        Self {
            kind: self.kind,
            orientation: (self.orientation + 1) % self.kind.orientation_count(),
        }
    }
}

/// Discrete commands the input and timer adapters feed into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShiftLeft,
    ShiftRight,
    SoftDrop,
    Rotate,
}

/// The settled board: `true` marks a cell permanently occupied by a locked
/// block. Row 0 is the top, column 0 the left edge.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<bool>>,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![false; cols]; rows],
        }
    }

    /// Whether placing `piece` with its bounding box at (`x`, `y`) is illegal:
    /// past the floor, past either side wall, or overlapping a settled cell.
    /// `y` never goes negative in play and is not checked.
    #[must_use]
    pub fn collides(&self, piece: &FallingPiece, x: i32, y: i32) -> bool {
        let shape = piece.cells();
        let height = shape.height() as i32;
        let width = shape.width() as i32;

        // Wall collisions.
        if y + height - 1 >= self.rows as i32 || x + width - 1 >= self.cols as i32 || x < 0 {
            return true;
        }

        // Block collisions.
        for i in 0..shape.height() {
            for j in 0..shape.width() {
                if shape.cell(i, j) && self.cells[y as usize + i][x as usize + j] {
                    return true;
                }
            }
        }

        false
    }

    /// The settled board overlaid with the piece's occupied cells. A pure
    /// view: `self` is never modified. Cells pushed out of bounds by an
    /// unchecked soft drop are left out of the overlay.
    #[must_use]
    pub fn combined_with(&self, piece: &FallingPiece, position: Position) -> Board {
        let mut combined = self.clone();
        let shape = piece.cells();

        for i in 0..shape.height() {
            for j in 0..shape.width() {
                if !shape.cell(i, j) {
                    continue;
                }
                let row = position.y + i as i32;
                let col = position.x + j as i32;
                if row >= 0 && (row as usize) < combined.rows && col >= 0 && (col as usize) < combined.cols {
                    combined.cells[row as usize][col as usize] = true;
                }
            }
        }

        combined
    }

    /// Remove every complete row, keep the rest in order, and prepend empty
    /// rows to restore the original height. Returns the new board and the
    /// number of rows removed.
    #[must_use]
    pub fn clear_complete_rows(&self) -> (Board, usize) {
        let remaining: Vec<Vec<bool>> = self
            .cells
            .iter()
            .filter(|row| !row.iter().all(|&cell| cell))
            .cloned()
            .collect();

        let cleared = self.rows - remaining.len();
        let mut cells = vec![vec![false; self.cols]; cleared];
        cells.extend(remaining);

        (
            Board {
                rows: self.rows,
                cols: self.cols,
                cells,
            },
            cleared,
        )
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameState {
    pub game_over: bool,
}

/// Accumulates frame time until the next forced descent.
#[derive(Resource, Debug, Clone, Default)]
pub struct GravityClock {
    pub timer: f32,
}

/// Spawn randomness. Seedable so tests can replay exact piece sequences.
#[derive(Resource, Debug, Clone)]
pub struct PieceRng(pub fastrand::Rng);

impl PieceRng {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(fastrand::Rng::new())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}
