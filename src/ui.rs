#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::components::GameState;
use crate::game::{BOARD_COLS, BOARD_ROWS};

pub fn render(f: &mut Frame, app: &mut App) {
    let cell_width = 2; // Each cell is 2 characters wide
    let board_width = BOARD_COLS as u16 * cell_width + 2; // +2 for borders
    let board_height = BOARD_ROWS as u16 + 2; // +2 for borders
    let min_info_width = 20u16;
    let min_total_width = board_width + min_info_width;
    let min_total_height = board_height + 3; // Adding space for title

    // Check if the terminal is too small to render the game properly
    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Gridfall"));

        let warning_area = centered_rect(60, 40, f.area());
        f.render_widget(warning, warning_area);
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width),
            Constraint::Min(min_info_width),
        ])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(board_height), // Game board (fixed height)
            Constraint::Fill(1),              // Flexible spacing below
        ])
        .split(main_layout[0]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(5),    // Controls
        ])
        .split(main_layout[1]);

    // Render game title
    let title = Paragraph::new("GRIDFALL")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_board(f, app, game_layout[1]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let controls = Paragraph::new(
        "Controls:\n\
        ←/→: Move left/right\n\
        ↓: Soft drop\n\
        ↑: Rotate\n\
        Q: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::NONE))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[1]);
}

fn render_board(f: &mut Frame, app: &mut App, area: Rect) {
    let cell_width = 2;

    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    // The combined view: settled cells plus the falling piece
    let board = app.combined_board();

    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &filled) in cells.iter().enumerate() {
            if !filled {
                continue;
            }

            let block_x = inner_area.left() + col as u16 * cell_width;
            let block_y = inner_area.top() + row as u16;

            if block_x + 1 >= inner_area.right() || block_y >= inner_area.bottom() {
                continue;
            }

            // Each cell is 2x1 characters to make it more square-like
            if let Some(cell) = f.buffer_mut().cell_mut((block_x, block_y)) {
                cell.set_symbol("█");
                cell.set_fg(Color::White);
                cell.set_bg(Color::Black);
            }
            if let Some(cell) = f.buffer_mut().cell_mut((block_x + 1, block_y)) {
                cell.set_symbol("█");
                cell.set_fg(Color::White);
                cell.set_bg(Color::Black);
            }
        }
    }

    // Only reachable when blocked spawns are configured to end the game
    let game_state = app.world.resource::<GameState>();
    if game_state.game_over {
        let game_over = Paragraph::new("GAME OVER")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let game_over_area = Rect {
            x: inner_area.x + inner_area.width.saturating_sub(9) / 2,
            y: inner_area.y + inner_area.height / 2,
            width: 9.min(inner_area.width),
            height: 1,
        };

        f.render_widget(game_over, game_over_area);
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
