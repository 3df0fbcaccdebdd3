pub mod app;
pub mod event;
pub mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, poll, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::TimerConfig;
use app::{App, Message, RunningState};

const TICK_RATE: Duration = Duration::from_secs(1);

/// Main entry point for the timer UI
pub fn run_tui(config: TimerConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle events, waiting at most until the next whole second
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            if let Event::Key(key) = read()? {
                if let Some(msg) = event::handle_key(key, app) {
                    let was_running = app.scheduler.is_running();

                    // Process message and any follow-up messages
                    let mut current_msg = Some(msg);
                    while let Some(m) = current_msg {
                        current_msg = app.update(m);
                    }

                    if tick_clock_restarts(was_running, app.scheduler.is_running()) {
                        last_tick = Instant::now();
                    }
                }
            }
        }

        // The countdown contract is one tick per second
        if last_tick.elapsed() >= TICK_RATE {
            app.update(Message::Tick);
            last_tick = Instant::now();
        }

        // Check if we should quit
        if app.running_state == RunningState::Done {
            return Ok(());
        }
    }
}

/// A command that moves the countdown from stopped to running also restarts
/// the tick clock, so the first displayed second lasts a full second instead
/// of whatever was left of the previous poll interval.
fn tick_clock_restarts(was_running: bool, now_running: bool) -> bool {
    !was_running && now_running
}
