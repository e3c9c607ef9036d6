#![warn(clippy::all, clippy::pedantic)]

// Game board dimensions
pub const BOARD_ROWS: usize = 12;
pub const BOARD_COLS: usize = 10;

// Game timing
pub const GRAVITY_INTERVAL: f32 = 0.4; // Seconds between forced descents
