#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridfall::app::App;
use gridfall::{Time, config, input, systems, ui};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> Result<()> {
    // Create log file and redirect stderr to it, so the logger never draws
    // over the board
    let log_path = "gridfall.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let stderr_handle = io::stderr();
    let stderr_fd = stderr_handle.as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting gridfall");

    if let Err(e) = config::init() {
        error!("Failed to load configuration: {e:?}");
        // Continue with default configuration
    } else {
        info!("Configuration loaded successfully");
    }

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let render_rate = Duration::from_millis(33); // ~30 FPS
    let app = App::new();
    let res = run_app(&mut terminal, app, render_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    render_rate: Duration,
) -> Result<()> {
    let mut last_render = Instant::now();

    // Flush any input events buffered before raw mode
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    loop {
        // Draw the UI
        if last_render.elapsed() >= render_rate {
            terminal.draw(|f| ui::render(f, &mut app))?;
            last_render = Instant::now();
        }

        // Advance the gravity clock by the elapsed frame time
        let delta_seconds = {
            let mut time = app.world.resource_mut::<Time>();
            time.update();
            time.delta_seconds()
        };
        systems::gravity_system(&mut app.world, delta_seconds);

        if app.should_quit {
            return Ok(());
        }

        // Process keyboard input; commands run to completion in arrival order
        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                debug!("Key event: {key:?}");

                if key.code == KeyCode::Char('q') {
                    app.should_quit = true;
                    continue;
                }

                if let Some(command) = input::map_key(key.code) {
                    systems::apply_command(&mut app.world, command);
                }
            }
        }
    }
}
