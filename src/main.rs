#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

use slotreels::app::{App, AppResult};
use slotreels::components::{Input, Machine};
use slotreels::config::{self, Config};
use slotreels::game::TICKS_PER_SECOND;
use slotreels::ui;

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "slotreels.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting slotreels");

    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            // Continue with default configuration
            Config::default()
        }
    };

    // Startup validation failures surface before the terminal is taken over
    let app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_secs(1) / TICKS_PER_SECOND;
    let res = run_app(&mut terminal, app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> AppResult<()> {
    let mut last_tick = Instant::now();

    // Explicitly flush any pending input events that might be in the buffer
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    loop {
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            handle_event(terminal, &mut app, &event)?;
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.on_tick();
            terminal.draw(|f| ui::render(f, &app))?;
        }
    }
}

fn handle_event<B: Backend>(terminal: &Terminal<B>, app: &mut App, event: &Event) -> AppResult<()> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return Ok(());
            }
            debug!("Key event: {key:?}");

            let mut input = app.world.resource_mut::<Input>();
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(' ') | KeyCode::Enter => input.spin = true,
                KeyCode::Up | KeyCode::Char('w') => input.bet_up = true,
                KeyCode::Down | KeyCode::Char('s') => input.bet_down = true,
                _ => {}
            }
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let size = terminal.size()?;
            let board = ui::board_area(Rect::new(0, 0, size.width, size.height));
            let canvas = app.world.resource::<Machine>().canvas;

            if let Some(point) = ui::canvas_point(board, canvas, mouse.column, mouse.row) {
                debug!("Pointer down at ({}, {})", point.x, point.y);
                app.world.resource_mut::<Input>().pointer = Some(point);
            }
        }
        _ => {}
    }

    Ok(())
}
