#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::*;

    use crate::app::App;
    use crate::catalog::ShapeKind;
    use crate::components::{Board, FallingPiece, Position};
    use crate::game::{BOARD_COLS, BOARD_ROWS};

    fn pin_piece(app: &mut App, kind: ShapeKind, orientation: usize, x: i32, y: i32) {
        let entity = app
            .world
            .query_filtered::<Entity, With<FallingPiece>>()
            .iter(&app.world)
            .next()
            .unwrap();
        app.world
            .entity_mut(entity)
            .insert((FallingPiece::new(kind, orientation), Position { x, y }));
    }

    #[test]
    fn test_new_app_has_an_empty_board_and_one_piece() {
        let mut app = App::new();

        let board = app.world.resource::<Board>();
        assert_eq!(board.rows, BOARD_ROWS);
        assert_eq!(board.cols, BOARD_COLS);
        assert!(board.cells.iter().flatten().all(|&cell| !cell));

        let pieces = app
            .world
            .query::<&FallingPiece>()
            .iter(&app.world)
            .count();
        assert_eq!(pieces, 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_combined_board_includes_the_falling_piece() {
        let mut app = App::new();
        pin_piece(&mut app, ShapeKind::T, 0, 4, 0);

        let combined = app.combined_board();

        assert!(combined.cells[0][5]);
        assert!(combined.cells[1][4]);
        // The settled board stays empty; the overlay is a view
        assert!(!app.world.resource::<Board>().cells[0][5]);
    }

    #[test]
    fn test_combined_board_matches_settled_state_without_a_piece() {
        let mut app = App::new();
        let entity = app
            .world
            .query_filtered::<Entity, With<FallingPiece>>()
            .iter(&app.world)
            .next()
            .unwrap();
        app.world.despawn(entity);
        app.world.resource_mut::<Board>().cells[6][3] = true;

        let combined = app.combined_board();

        assert!(combined.cells[6][3]);
        let filled = combined.cells.iter().flatten().filter(|&&cell| cell).count();
        assert_eq!(filled, 1);
    }
}
