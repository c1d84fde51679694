//! jobboard-tui - Terminal UI for the job board
//!
//! Browse listings, narrow them by city, niche and keyword, and see the
//! results update as filters change.

use std::fs::OpenOptions;
use std::sync::Mutex;

use jobboard_tui::{
    app::{effects, event::EventHandler, reduce, Action, AppState, Effect},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, SearchBox},
};
use libjobboard::logging::LoggingConfig;
use libjobboard::Config;

fn main() -> Result<()> {
    init_logging();

    // Configuration errors are reported before the screen is taken over
    let config = Config::load()?;
    let services = ServiceHandle::new(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &services);

    restore_terminal(terminal)?;

    result
}

/// Log to the file named by `JOBBOARD_TUI_LOG`; stderr would corrupt the screen
fn init_logging() {
    let Ok(path) = std::env::var("JOBBOARD_TUI_LOG") else {
        return;
    };
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            LoggingConfig::from_env(false).init_with_writer(Mutex::new(file));
        }
        Err(e) => eprintln!("Warning: cannot open log file {}: {}", path, e),
    }
}

fn run_app(terminal: &mut Tui, services: &ServiceHandle) -> Result<()> {
    let mut state = AppState::new();
    let mut search = SearchBox::new();

    let event_handler =
        EventHandler::new(state.config.tick_rate_ms).with_board_updates(services.subscribe());

    dispatch(&mut state, Action::Mounted, services);

    loop {
        terminal.draw(|frame| ui::render(frame, &state, &mut search))?;

        let action = match event_handler.next()? {
            jobboard_tui::app::event::TuiEvent::Key(key) => match search.input(key, &state) {
                Some(keyword) => Action::SearchChanged(keyword),
                None => Action::Key(key),
            },
            other => other.into(),
        };

        dispatch(&mut state, action, services);

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Reduce, then run the effects implied by the transition
fn dispatch(state: &mut AppState, action: Action, services: &ServiceHandle) {
    let prev = std::mem::take(state);
    let next = reduce(prev.clone(), action.clone());

    for effect in effects(&prev, &next, &action) {
        match effect {
            Effect::FetchJobs(filters) => {
                tracing::debug!(?filters, "fetching jobs");
                services.fetch_jobs(filters);
            }
            Effect::ClearJobsError => services.clear_jobs_error(),
        }
    }

    *state = next;
}
