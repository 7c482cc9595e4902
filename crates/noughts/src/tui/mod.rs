//! Terminal UI for noughts.

mod app;
mod input;
mod scheduler;
mod ui;

use crate::settings::Settings;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use scheduler::ComputerScheduler;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info, instrument};

use noughts_engine::ComputerTurn;

/// How long one pass of the loop waits for a key.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the app until the player quits.
pub async fn run(settings: Settings) -> Result<()> {
    info!(mode = %settings.mode(), "Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(&settings);
    let (scheduler, due_rx) = ComputerScheduler::new(settings.computer_delay());

    let res = run_app(&mut terminal, app, scheduler, due_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    scheduler: ComputerScheduler,
    mut due_rx: UnboundedReceiver<ComputerTurn>,
) -> Result<()> {
    loop {
        settle(&mut app, &scheduler, &mut due_rx);
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Keep the runtime free for the scheduler while waiting on keys.
        let ready = tokio::task::block_in_place(|| event::poll(INPUT_POLL))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(intent) = input::intent_for(key.code) {
                        app.handle(intent);
                    }
                }
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}

/// Applies computer turns that came due, then schedules the next one.
fn settle(
    app: &mut App,
    scheduler: &ComputerScheduler,
    due_rx: &mut UnboundedReceiver<ComputerTurn>,
) {
    while let Ok(turn) = due_rx.try_recv() {
        app.on_computer_turn(turn);
    }
    if let Some(turn) = app.next_computer_turn() {
        debug!(?turn, "Scheduling computer turn");
        scheduler.schedule(turn);
    }
}
