use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use super::notifications::{Notification, NotificationKind};
use super::table_view::{Row, TableView};
use crate::error::{AdminError, AdminResult};
use crate::filtering::DateRange;
use crate::models::EntityKind;
use crate::nav::{FooterAction, Location, Route, Sidebar};
use crate::session::Session;
use crate::table::Operation;

/// Builds the table for an entity route. Called on every navigation so the
/// previous table, and anything it still has in flight, is torn down.
pub type TableFactory = Box<dyn Fn(EntityKind) -> AdminResult<Box<dyn TableView>> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Create { field: usize },
    Update { field: usize },
    ConfirmDelete(i64),
    DateRange,
    Help,
}

/// Work requested by a key press, run by the event loop after the busy
/// frame has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Load(u32),
    Create,
    Update,
    Delete(i64),
    Logout,
}

impl PendingAction {
    pub fn label(&self) -> String {
        let operation = match self {
            PendingAction::Load(_) => Operation::Load,
            PendingAction::Create => Operation::Create,
            PendingAction::Update => Operation::Update,
            PendingAction::Delete(_) => Operation::Delete,
            PendingAction::Logout => return "Signing out...".to_string(),
        };
        format!("{}...", operation)
    }
}

pub struct InteractiveApp {
    pub session: Session,
    pub location: Location,
    pub sidebar: Option<Sidebar>,
    pub table: Option<Box<dyn TableView>>,
    factory: TableFactory,
    pub mode: AppMode,
    pub popup: Option<Popup>,
    pub search_query: String,
    pub selected_index: usize,
    /// Text typed into the date range popup.
    pub date_input: String,
    pub date_range: DateRange,
    pub notifications: Vec<Notification>,
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
}

impl InteractiveApp {
    pub fn new(session: Session, factory: TableFactory) -> Self {
        let sidebar = Sidebar::for_session(&session).ok();
        Self {
            session,
            location: Location::new(Route::Login),
            sidebar,
            table: None,
            factory,
            mode: AppMode::Normal,
            popup: None,
            search_query: String::new(),
            selected_index: 0,
            date_input: String::new(),
            date_range: DateRange::default(),
            notifications: Vec::new(),
            pending: None,
            should_quit: false,
        }
    }

    /// Go to `location` after the route guard. The current table is dropped,
    /// which cancels whatever it was doing.
    pub fn navigate(&mut self, location: Location) -> AdminResult<()> {
        let location = location.resolve(&self.session);
        info!(location = %location, "navigating");

        self.table = None;
        self.popup = None;
        self.mode = AppMode::Normal;
        self.search_query.clear();
        self.selected_index = 0;
        self.pending = None;

        if let Some(kind) = location.route.entity() {
            self.table = Some((self.factory)(kind)?);
            self.pending = Some(PendingAction::Load(location.page()));
        }
        if location.route == Route::Dashboard {
            self.date_range = DateRange::from_location(&location);
        }

        self.location = location;
        Ok(())
    }

    /// Forget the session and fall back to the login page.
    pub fn sign_out(&mut self) {
        self.session = Session::Anonymous;
        self.sidebar = None;
        if let Err(e) = self.navigate(Location::new(Route::Login)) {
            self.notify_error(e.to_string());
        }
    }

    pub fn rows(&self) -> Vec<Row> {
        self.table
            .as_ref()
            .map(|table| table.rows(&self.search_query))
            .unwrap_or_default()
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.rows().into_iter().nth(self.selected_index)
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
            || self
                .table
                .as_ref()
                .is_some_and(|table| table.activity().is_busy())
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification::new(kind, message));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn on_tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    fn request(&mut self, action: PendingAction) {
        if self.pending.is_some() {
            self.notify_error(AdminError::Busy.to_string());
            return;
        }
        debug!(?action, "action requested");
        self.pending = Some(action);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(popup) = self.popup {
            self.handle_popup_key(popup, key);
            return;
        }

        match self.mode {
            AppMode::Search => self.handle_search_key(key),
            AppMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.popup = Some(Popup::Help),
            KeyCode::Char('c') => self.notifications.clear(),
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.rows().len();
                if count > 0 && self.selected_index + 1 < count {
                    self.selected_index += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Char('/') if self.table.is_some() => self.mode = AppMode::Search,
            KeyCode::Char('a') => self.open_create(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_update(),
            KeyCode::Char('x') => {
                if let Some(row) = self.selected_row() {
                    self.popup = Some(Popup::ConfirmDelete(row.id));
                }
            }
            KeyCode::Char('n') => self.change_page(true),
            KeyCode::Char('p') => self.change_page(false),
            KeyCode::Char('r') => {
                if let Some(table) = &self.table {
                    let page = table.pagination().current;
                    self.request(PendingAction::Load(page));
                }
            }
            KeyCode::Tab => self.next_route(),
            KeyCode::Char('f') if self.location.route == Route::Dashboard => {
                self.date_input = self.date_range_input();
                self.popup = Some(Popup::DateRange);
            }
            KeyCode::Char('s') => self.footer_action(FooterAction::Settings),
            KeyCode::Char('L') => self.footer_action(FooterAction::Logout),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_query.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => self.mode = AppMode::Normal,
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            KeyCode::Char(c) => self.search_query.push(c),
            _ => {}
        }
        self.selected_index = 0;
    }

    fn handle_popup_key(&mut self, popup: Popup, key: KeyEvent) {
        match popup {
            Popup::Help => self.popup = None,
            Popup::ConfirmDelete(id) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.popup = None;
                    self.request(PendingAction::Delete(id));
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.popup = None,
                _ => {}
            },
            Popup::Create { field } => self.handle_form_key(field, key, true),
            Popup::Update { field } => self.handle_form_key(field, key, false),
            Popup::DateRange => self.handle_date_key(key),
        }
    }

    fn handle_form_key(&mut self, field: usize, key: KeyEvent, creating: bool) {
        let Some(table) = self.table.as_mut() else {
            self.popup = None;
            return;
        };
        let fields = if creating {
            table.create_fields()
        } else {
            table.update_fields()
        };
        let count = fields.len().max(1);
        let at = |field: usize| {
            if creating {
                Popup::Create { field }
            } else {
                Popup::Update { field }
            }
        };

        match key.code {
            KeyCode::Esc => {
                if creating {
                    table.close_create();
                } else {
                    table.close_update();
                }
                self.popup = None;
            }
            KeyCode::Tab | KeyCode::Down => self.popup = Some(at((field + 1) % count)),
            KeyCode::BackTab | KeyCode::Up => self.popup = Some(at((field + count - 1) % count)),
            KeyCode::Enter => {
                if creating && !table.can_submit_create() {
                    self.notify_error("Name is required");
                } else if creating {
                    self.request(PendingAction::Create);
                } else {
                    self.request(PendingAction::Update);
                }
            }
            KeyCode::Backspace | KeyCode::Char(_) => {
                let Some(current) = fields.get(field) else {
                    return;
                };
                let mut value = current.value.clone();
                match key.code {
                    KeyCode::Char(c) => value.push(c),
                    _ => {
                        value.pop();
                    }
                }
                if creating {
                    table.set_create_field(field, value);
                } else {
                    table.set_update_field(field, value);
                }
            }
            _ => {}
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.popup = None,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.date_input.clear();
            }
            KeyCode::Delete => self.date_input.clear(),
            KeyCode::Backspace => {
                self.date_input.pop();
            }
            KeyCode::Char(c) => self.date_input.push(c),
            KeyCode::Enter => match DateRange::parse_input(&self.date_input) {
                Ok(range) => {
                    if let Err(e) = self.navigate(range.apply()) {
                        self.notify_error(e.to_string());
                    }
                }
                Err(e) => self.notify_error(e.to_string()),
            },
            _ => {}
        }
    }

    fn date_range_input(&self) -> String {
        let iso = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        if self.date_range.is_empty() {
            String::new()
        } else {
            format!("{}..{}", iso(self.date_range.from), iso(self.date_range.to))
        }
    }

    fn open_create(&mut self) {
        if let Some(table) = self.table.as_mut() {
            table.open_create();
            self.popup = Some(Popup::Create { field: 0 });
        }
    }

    fn open_update(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if let Some(table) = self.table.as_mut() {
            if table.select(row.id) && table.open_update() {
                self.popup = Some(Popup::Update { field: 0 });
            }
        }
    }

    fn change_page(&mut self, forward: bool) {
        let Some(table) = &self.table else {
            return;
        };
        let pagination = table.pagination();
        let target = if forward {
            pagination.next()
        } else {
            pagination.previous()
        };
        if let Some(page) = target {
            self.request(PendingAction::Load(page));
        }
    }

    fn next_route(&mut self) {
        let Some(sidebar) = &self.sidebar else {
            return;
        };
        if sidebar.links.is_empty() {
            self.notify(NotificationKind::Info, "No pages available for this role");
            return;
        }

        let next = match sidebar.position(self.location.route) {
            Some(index) => (index + 1) % sidebar.links.len(),
            None => 0,
        };
        let route = sidebar.links[next].route;
        if let Err(e) = self.navigate(Location::new(route)) {
            self.notify_error(e.to_string());
        }
    }

    fn footer_action(&mut self, action: FooterAction) {
        match action {
            FooterAction::Settings => self.notify(
                NotificationKind::Info,
                "Settings are managed with 'admin config'",
            ),
            FooterAction::Logout if self.session.is_authenticated() => {
                self.request(PendingAction::Logout)
            }
            FooterAction::Logout => {}
        }
    }

    /// Run the queued table action, if any. Logout is left for the caller,
    /// which owns the stored session.
    pub async fn run_pending(&mut self) {
        let Some(action) = self.pending else {
            return;
        };
        if action == PendingAction::Logout {
            return;
        }
        self.pending = None;

        let Some(table) = self.table.as_mut() else {
            return;
        };
        let kind = table.kind();

        match action {
            PendingAction::Load(page) => match table.load(page).await {
                Ok(()) => {
                    self.location = Location::table_page(kind, table.pagination().current);
                    let count = self.rows().len();
                    if self.selected_index >= count {
                        self.selected_index = count.saturating_sub(1);
                    }
                }
                Err(e) => self.report(kind, "load", e),
            },
            PendingAction::Create => match table.submit_create().await {
                Ok(()) => {
                    self.popup = None;
                    self.notify(NotificationKind::Success, format!("Created {}", kind));
                }
                // The dialog stays open with the error shown inside it.
                Err(e) => warn!(error = %e, "create failed"),
            },
            PendingAction::Update => match table.submit_update().await {
                Ok(()) => {
                    self.popup = None;
                    self.notify(NotificationKind::Success, format!("Updated {}", kind));
                }
                Err(e) => self.report(kind, "update", e),
            },
            PendingAction::Delete(id) => match table.delete(id).await {
                Ok(()) => {
                    let count = self.rows().len();
                    if self.selected_index >= count {
                        self.selected_index = count.saturating_sub(1);
                    }
                    self.notify(NotificationKind::Success, format!("Deleted {}", kind));
                }
                Err(e) => self.report(kind, "delete", e),
            },
            PendingAction::Logout => {}
        }
    }

    fn report(&mut self, kind: EntityKind, what: &str, error: AdminError) {
        if error.is_cancelled() {
            return;
        }
        self.notify_error(format!("Failed to {} {}: {}", what, kind, error.user_message()));
    }
}
