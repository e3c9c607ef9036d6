#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

use crate::Time;
use crate::components::{Board, FallingPiece, GameState, GravityClock, PieceRng, Position};
use crate::config::{self, Rules};
use crate::game::{BOARD_COLS, BOARD_ROWS};
use crate::systems::spawn_piece;

pub struct App {
    pub world: World,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        let rules = config::CONFIG.read().unwrap().rules;
        Self::with_rules(rules)
    }

    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(GameState::default());
        world.insert_resource(GravityClock::default());
        world.insert_resource(Board::new(BOARD_ROWS, BOARD_COLS));
        world.insert_resource(PieceRng::from_entropy());
        world.insert_resource(rules);

        let mut app = Self {
            world,
            should_quit: false,
        };

        // Spawn the first falling piece
        spawn_piece(&mut app.world);

        app
    }

    /// The render-facing view: the settled board overlaid with the falling
    /// piece's cells. Recomputed on every call, never cached.
    #[must_use]
    pub fn combined_board(&mut self) -> Board {
        let piece = self
            .world
            .query::<(&FallingPiece, &Position)>()
            .iter(&self.world)
            .next()
            .map(|(piece, position)| (*piece, *position));

        let board = self.world.resource::<Board>();
        match piece {
            Some((piece, position)) => board.combined_with(&piece, position),
            None => board.clone(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
