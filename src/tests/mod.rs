#![warn(clippy::all, clippy::pedantic)]

// Test modules
pub mod app_tests;
pub mod game_tests;
pub mod input_tests;

// Shared test utilities
pub mod test_utils {
    use bevy_ecs::prelude::*;

    use crate::Time;
    use crate::catalog::ShapeKind;
    use crate::components::{Board, FallingPiece, GameState, GravityClock, PieceRng, Position};
    use crate::config::Rules;
    use crate::game::{BOARD_COLS, BOARD_ROWS};

    /// World with every engine resource, default rules, and no falling piece.
    #[must_use]
    pub fn empty_world() -> World {
        world_with_rules(Rules::default())
    }

    #[must_use]
    pub fn world_with_rules(rules: Rules) -> World {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(GameState::default());
        world.insert_resource(GravityClock::default());
        world.insert_resource(Board::new(BOARD_ROWS, BOARD_COLS));
        world.insert_resource(PieceRng::seeded(0x5eed));
        world.insert_resource(rules);
        world
    }

    /// Place a specific piece, bypassing the random spawn.
    pub fn place_piece(
        world: &mut World,
        kind: ShapeKind,
        orientation: usize,
        x: i32,
        y: i32,
    ) -> Entity {
        world
            .spawn((FallingPiece::new(kind, orientation), Position { x, y }))
            .id()
    }

    /// Mark individual settled cells.
    pub fn fill_cells(board: &mut Board, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            board.cells[row][col] = true;
        }
    }

    /// Fill one whole row with settled cells.
    pub fn fill_row(board: &mut Board, row: usize) {
        for col in 0..board.cols {
            board.cells[row][col] = true;
        }
    }

    /// The single falling piece and its position, if one exists.
    #[must_use]
    pub fn piece_state(world: &mut World) -> Option<(FallingPiece, Position)> {
        let mut query = world.query::<(&FallingPiece, &Position)>();
        query
            .iter(world)
            .next()
            .map(|(piece, position)| (*piece, *position))
    }
}
