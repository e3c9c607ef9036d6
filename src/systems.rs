#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::catalog::ShapeKind;
use crate::components::{
    Board, Command, FallingPiece, GameState, GravityClock, PieceRng, Position,
};
use crate::config::Rules;
use crate::game::{BOARD_COLS, BOARD_ROWS, GRAVITY_INTERVAL};

/// Introduce a new falling piece at the top of the board: random family,
/// random orientation, random column that keeps the piece inside the walls.
///
/// With default rules the board is not consulted at all, so a piece can
/// spawn on top of settled cells. `checked_spawn` turns a blocked spawn
/// into game over instead.
pub fn spawn_piece(world: &mut World) {
    let (piece, position) = {
        let mut rng = world.resource_mut::<PieceRng>();
        let kind = ShapeKind::random(&mut rng.0);
        let orientation = rng.0.usize(0..kind.orientation_count());
        let piece = FallingPiece::new(kind, orientation);
        let width = piece.cells().width() as i32;
        let x = rng.0.i32(0..=BOARD_COLS as i32 - width);
        (piece, Position { x, y: 0 })
    };

    let rules = *world.resource::<Rules>();
    if rules.checked_spawn && world.resource::<Board>().collides(&piece, position.x, position.y) {
        info!("Spawn position blocked, ending game");
        world.resource_mut::<GameState>().game_over = true;
        return;
    }

    debug!("Spawning {:?} piece at x={}", piece.kind, position.x);
    world.spawn((piece, position));
}

// The engine never keeps more than one falling piece.
fn active_piece(world: &mut World) -> Option<(Entity, FallingPiece, Position)> {
    let mut query = world.query::<(Entity, &FallingPiece, &Position)>();
    query
        .iter(world)
        .next()
        .map(|(entity, piece, position)| (entity, *piece, *position))
}

/// Apply one player command to the falling piece. No-op when no piece
/// exists or the game has ended.
pub fn apply_command(world: &mut World, command: Command) {
    if world.resource::<GameState>().game_over {
        return;
    }
    let Some((entity, piece, position)) = active_piece(world) else {
        return;
    };
    let rules = *world.resource::<Rules>();

    match command {
        Command::ShiftLeft | Command::ShiftRight => {
            let dx = if command == Command::ShiftLeft { -1 } else { 1 };
            if world
                .resource::<Board>()
                .collides(&piece, position.x + dx, position.y)
            {
                return;
            }
            // The gate already rules out-of-range x out; the clamp is a
            // second bound against the walls.
            let x = (position.x + dx).clamp(0, BOARD_COLS as i32 - 1);
            world.entity_mut(entity).insert(Position { x, y: position.y });
        }
        Command::SoftDrop => {
            if rules.checked_soft_drop
                && world
                    .resource::<Board>()
                    .collides(&piece, position.x, position.y + 1)
            {
                return;
            }
            let y = (position.y + 1).min(BOARD_ROWS as i32 - 1);
            world.entity_mut(entity).insert(Position { x: position.x, y });
        }
        Command::Rotate => {
            let rotated = piece.rotated();
            if rules.checked_rotation
                && world
                    .resource::<Board>()
                    .collides(&rotated, position.x, position.y)
            {
                return;
            }
            world.entity_mut(entity).insert(rotated);
        }
    }
}

/// Advance the gravity clock by the frame delta; force one descent step each
/// time the fixed interval elapses.
pub fn gravity_system(world: &mut World, delta_seconds: f32) {
    trace!("Gravity tick with delta: {delta_seconds}");

    if world.resource::<GameState>().game_over {
        return;
    }

    let fire = {
        let mut clock = world.resource_mut::<GravityClock>();
        clock.timer += delta_seconds;
        if clock.timer >= GRAVITY_INTERVAL {
            clock.timer = 0.0;
            true
        } else {
            false
        }
    };

    if fire {
        drop_step(world);
    }
}

/// One forced descent: move the piece down a row, or lock it into the
/// board, clear complete rows, and spawn the next piece in the same step.
/// No-op when no piece exists.
pub fn drop_step(world: &mut World) {
    let Some((entity, piece, position)) = active_piece(world) else {
        return;
    };

    let blocked = world
        .resource::<Board>()
        .collides(&piece, position.x, position.y + 1);

    if blocked {
        info!(
            "Locking {:?} piece at ({}, {})",
            piece.kind, position.x, position.y
        );
        let (settled, cleared) = world
            .resource::<Board>()
            .combined_with(&piece, position)
            .clear_complete_rows();
        if cleared > 0 {
            info!("Cleared {cleared} complete rows");
        }
        world.insert_resource(settled);
        world.despawn(entity);
        spawn_piece(world);
    } else {
        debug!("Piece descends to y={}", position.y + 1);
        world.entity_mut(entity).insert(Position {
            x: position.x,
            y: position.y + 1,
        });
    }
}
