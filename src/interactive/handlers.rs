use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use super::app::{InteractiveApp, PendingAction, TableFactory};
use super::event::{Event, EventHandler};
use super::table_view::TableView;
use crate::cli_context::CliContext;
use crate::client::ApiClient;
use crate::error::{AdminError, AdminResult, ErrorContext};
use crate::models::{EntityKind, Project, Team, User};
use crate::nav::{Location, Route};
use crate::table::TableController;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Table factory backed by the HTTP API.
fn api_factory(context: &mut CliContext) -> TableFactory {
    let client = context.unverified_client();
    let take = context.config().page_size();
    let policy = context.config().loading_policy();

    Box::new(move |kind| {
        let client: Arc<ApiClient> = match &client {
            Ok(client) => Arc::clone(client),
            Err(e) => return Err(AdminError::ConfigError(e.to_string())),
        };
        let table: Box<dyn TableView> = match kind {
            EntityKind::User => Box::new(TableController::<User, _>::new(client, take, policy)),
            EntityKind::Team => Box::new(TableController::<Team, _>::new(client, take, policy)),
            EntityKind::Project => {
                Box::new(TableController::<Project, _>::new(client, take, policy))
            }
        };
        Ok(table)
    })
}

pub async fn run_interactive_mode(start: Option<&str>) -> AdminResult<()> {
    info!("Starting interactive mode");

    let mut context = CliContext::load()?;
    let location = match start {
        Some(raw) => Location::parse(raw)?,
        None => match context.session().role() {
            Some(_) => Location::new(Route::Users),
            None => Location::new(Route::Login),
        },
    };

    let factory = api_factory(&mut context);
    let mut app = InteractiveApp::new(context.session().clone(), factory);
    app.navigate(location)?;

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut context).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!(error = %e, "interactive mode failed");
    }
    info!("Exiting interactive mode");
    result
}

fn setup_terminal() -> AdminResult<Term> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    debug!("Terminal initialized");
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> AdminResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut InteractiveApp,
    context: &mut CliContext,
) -> AdminResult<()> {
    let events = EventHandler::new(100);

    loop {
        terminal
            .draw(|f| super::ui::draw(f, app))
            .map_err(|e| AdminError::TerminalError(e.to_string()))?;

        if let Some(action) = app.pending {
            if action == PendingAction::Logout {
                app.pending = None;
                if let Err(e) = context.logout().await {
                    app.notify_error(e.to_string());
                }
                app.sign_out();
            } else {
                app.run_pending().await;
            }
            events.drain();
            continue;
        }

        match events
            .recv()
            .map_err(|e| AdminError::TerminalError(e.to_string()))?
        {
            Event::Key(key) => {
                debug!(key = ?key.code, mode = ?app.mode, "key pressed");
                app.handle_key(key);
            }
            Event::Resize => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
