use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Map;

use admin_console::client::MockEntityApi;
use admin_console::interactive::notifications::NotificationKind;
use admin_console::interactive::{InteractiveApp, PendingAction, Popup, TableFactory, TableView};
use admin_console::models::{EntityKind, Project, ProjectDraft, Team, TeamDraft};
use admin_console::nav::{Location, Route};
use admin_console::session::{Role, Session};
use admin_console::table::{LoadingPolicy, TableController};

fn project(id: i64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        extra: Map::new(),
    }
}

fn project_api(count: i64) -> MockEntityApi<Project> {
    let records = (1..=count).map(|id| project(id, &format!("Project {}", id))).collect();
    MockEntityApi::new(records, |id, draft: &ProjectDraft| project(id, &draft.name))
}

fn factory(projects: Arc<MockEntityApi<Project>>) -> TableFactory {
    let teams = Arc::new(MockEntityApi::new(Vec::new(), |id, draft: &TeamDraft| Team {
        id,
        name: draft.name.clone(),
        extra: Map::new(),
    }));

    Box::new(move |kind| {
        let table: Box<dyn TableView> = match kind {
            EntityKind::Project => Box::new(TableController::<Project, _>::new(
                Arc::clone(&projects),
                10,
                LoadingPolicy::immediate(),
            )),
            _ => Box::new(TableController::<Team, _>::new(
                Arc::clone(&teams),
                10,
                LoadingPolicy::immediate(),
            )),
        };
        Ok(table)
    })
}

fn admin() -> Session {
    Session::authenticated(Role::Admin, None)
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut InteractiveApp, text: &str) {
    for c in text.chars() {
        app.handle_key(key(c));
    }
}

async fn projects_app(api: MockEntityApi<Project>) -> (InteractiveApp, Arc<MockEntityApi<Project>>) {
    let api = Arc::new(api);
    let mut app = InteractiveApp::new(admin(), factory(Arc::clone(&api)));
    app.navigate(Location::parse("/projetos").unwrap()).unwrap();
    app.run_pending().await;
    (app, api)
}

#[tokio::test]
async fn test_anonymous_user_is_sent_to_login() {
    let api = Arc::new(project_api(3));
    let mut app = InteractiveApp::new(Session::Anonymous, factory(api));

    app.navigate(Location::parse("/projetos").unwrap()).unwrap();

    assert_eq!(app.location.route, Route::Login);
    assert!(app.table.is_none());
    assert!(app.sidebar.is_none());
    assert!(app.pending.is_none());
}

#[tokio::test]
async fn test_navigation_loads_the_requested_page() {
    let api = Arc::new(project_api(15));
    let mut app = InteractiveApp::new(admin(), factory(api));

    app.navigate(Location::parse("/projetos?page=2").unwrap()).unwrap();
    assert_eq!(app.pending, Some(PendingAction::Load(2)));

    app.run_pending().await;
    assert!(app.pending.is_none());
    assert_eq!(app.rows().len(), 5);
    assert_eq!(app.location.to_string(), "/projetos?page=2");
}

#[tokio::test]
async fn test_add_record_through_the_form() {
    let (mut app, api) = projects_app(project_api(2)).await;

    app.handle_key(key('a'));
    assert_eq!(app.popup, Some(Popup::Create { field: 0 }));

    type_text(&mut app, "Nova");
    app.handle_key(code(KeyCode::Enter));
    assert_eq!(app.pending, Some(PendingAction::Create));

    app.run_pending().await;
    assert_eq!(app.popup, None);
    let names: Vec<String> = app.rows().into_iter().map(|r| r.cells[1].clone()).collect();
    assert_eq!(names, vec!["Project 1", "Project 2", "Nova"]);
    assert_eq!(api.stored().len(), 3);
    assert!(app
        .notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Success));
}

#[tokio::test]
async fn test_empty_form_is_not_submitted() {
    let (mut app, api) = projects_app(project_api(1)).await;
    let calls = api.calls();

    app.handle_key(key('a'));
    app.handle_key(code(KeyCode::Enter));

    assert!(app.pending.is_none());
    assert_eq!(api.calls(), calls);
    assert!(app.notifications.iter().any(|n| n.kind == NotificationKind::Error));
}

#[tokio::test]
async fn test_rejected_create_keeps_form_open_with_error() {
    let (mut app, _) = projects_app(project_api(1).with_rejection("duplicate name")).await;

    app.handle_key(key('a'));
    type_text(&mut app, "Project 1");
    app.handle_key(code(KeyCode::Enter));
    app.run_pending().await;

    assert_eq!(app.popup, Some(Popup::Create { field: 0 }));
    let table = app.table.as_ref().unwrap();
    assert_eq!(table.create_error().as_deref(), Some("duplicate name"));
    assert_eq!(app.rows().len(), 1);
}

#[tokio::test]
async fn test_search_filters_rows() {
    let (mut app, _) = projects_app(project_api(12)).await;

    app.handle_key(key('/'));
    type_text(&mut app, "project 1");
    app.handle_key(code(KeyCode::Enter));

    let ids: Vec<i64> = app.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 10]);

    app.handle_key(key('/'));
    app.handle_key(code(KeyCode::Esc));
    assert_eq!(app.rows().len(), 10);
}

#[tokio::test]
async fn test_edit_selected_row() {
    let (mut app, _) = projects_app(project_api(3)).await;

    app.handle_key(key('j'));
    app.handle_key(key('e'));
    assert_eq!(app.popup, Some(Popup::Update { field: 0 }));

    app.handle_key(code(KeyCode::Backspace));
    type_text(&mut app, "X");
    app.handle_key(code(KeyCode::Enter));
    app.run_pending().await;

    assert_eq!(app.popup, None);
    assert_eq!(app.rows()[1].cells[1], "Project X");
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (mut app, api) = projects_app(project_api(3)).await;

    app.handle_key(key('x'));
    assert_eq!(app.popup, Some(Popup::ConfirmDelete(1)));
    app.handle_key(key('n'));
    assert_eq!(app.popup, None);
    assert!(app.pending.is_none());

    app.handle_key(key('x'));
    app.handle_key(key('y'));
    assert_eq!(app.pending, Some(PendingAction::Delete(1)));
    app.run_pending().await;

    let ids: Vec<i64> = app.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(api.stored().len(), 2);
}

#[tokio::test]
async fn test_paging_keys_respect_bounds() {
    let (mut app, _) = projects_app(project_api(25)).await;

    app.handle_key(key('p'));
    assert!(app.pending.is_none());

    app.handle_key(key('n'));
    assert_eq!(app.pending, Some(PendingAction::Load(2)));

    // A second request while one is queued is refused.
    app.handle_key(key('r'));
    assert_eq!(app.pending, Some(PendingAction::Load(2)));
    assert!(app.notifications.iter().any(|n| n.kind == NotificationKind::Error));
}

#[tokio::test]
async fn test_switching_routes_tears_down_the_table() {
    let (mut app, _) = projects_app(project_api(3)).await;
    let token = app.table.as_ref().unwrap().cancel_handle();

    app.handle_key(code(KeyCode::Tab));

    assert!(token.is_cancelled());
    assert_eq!(app.location.route, Route::Users);
    assert_eq!(app.pending, Some(PendingAction::Load(1)));
}

#[tokio::test]
async fn test_colaborador_has_no_routes_to_switch_to() {
    let api = Arc::new(project_api(3));
    let mut app = InteractiveApp::new(Session::authenticated(Role::Colaborador, None), factory(api));
    app.navigate(Location::parse("/projetos").unwrap()).unwrap();

    app.handle_key(code(KeyCode::Tab));

    assert_eq!(app.location.route, Route::Projects);
    assert!(app.notifications.iter().any(|n| n.kind == NotificationKind::Info));
}

#[tokio::test]
async fn test_dashboard_date_filter() {
    let api = Arc::new(project_api(0));
    let mut app = InteractiveApp::new(admin(), factory(api));
    app.navigate(Location::parse("/dashboard?from=2024-01-05&to=").unwrap())
        .unwrap();
    assert_eq!(app.date_range.label(), "05 Jan, 2024");

    app.handle_key(key('f'));
    assert_eq!(app.popup, Some(Popup::DateRange));
    assert_eq!(app.date_input, "2024-01-05..");

    type_text(&mut app, "2024-01-31");
    app.handle_key(code(KeyCode::Enter));
    assert_eq!(app.location.to_string(), "/dashboard?from=2024-01-05&to=2024-01-31");
    assert_eq!(app.date_range.label(), "05 Jan, 2024 - 31 Jan, 2024");

    app.handle_key(key('f'));
    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    app.handle_key(code(KeyCode::Enter));
    assert_eq!(app.location.to_string(), "/dashboard?from=&to=");
    assert_eq!(app.date_range.label(), "Filtrar por data");
}

#[tokio::test]
async fn test_logout_is_left_to_the_event_loop() {
    let (mut app, _) = projects_app(project_api(1)).await;

    app.handle_key(key('L'));
    assert_eq!(app.pending, Some(PendingAction::Logout));

    app.run_pending().await;
    assert_eq!(app.pending, Some(PendingAction::Logout));

    app.sign_out();
    assert_eq!(app.location.route, Route::Login);
    assert!(app.table.is_none());
    assert!(app.sidebar.is_none());
}
