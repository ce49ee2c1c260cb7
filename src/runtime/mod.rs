use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::auth::{FileStorage, MemoryStorage, Session, Storage};
use crate::config::Settings;
use crate::library::{Catalog, seed_tracks};
use crate::view::ViewControls;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings);
    info!("songbook starting");

    let mut session = Session::new(open_storage(&settings));
    session.restore();

    let controls = ViewControls {
        search: String::new(),
        filter_by: settings.view.filter_by,
        sort_by: settings.view.sort_by,
        sort_order: settings.view.sort_order,
        group_by: settings.view.group_by,
    };
    let mut app = App::new(Catalog::new(seed_tracks()), session, controls);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// The session slot lives on disk unless no location can be resolved.
fn open_storage(settings: &Settings) -> Box<dyn Storage> {
    match settings.storage_path() {
        Some(path) => {
            info!(path = %path.display(), "using session storage");
            Box::new(FileStorage::new(path))
        }
        None => {
            warn!("no storage location (HOME unset); session will not survive a restart");
            Box::new(MemoryStorage::default())
        }
    }
}
