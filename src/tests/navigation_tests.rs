use crate::filtering::DateRange;
use crate::nav::{Location, Route, Sidebar};
use crate::session::{Role, Session};

#[test]
fn test_anonymous_sessions_land_on_login() {
    for path in ["/", "/usuarios", "/equipes?page=3", "/projetos", "/dashboard"] {
        let location = Location::parse(path).unwrap().resolve(&Session::Anonymous);
        assert_eq!(location.route, Route::Login, "{}", path);
    }
}

#[test]
fn test_colaborador_can_open_tables_without_links() {
    let session = Session::authenticated(Role::Colaborador, None);
    let sidebar = Sidebar::for_session(&session).unwrap();
    assert!(sidebar.links.is_empty());

    let location = Location::parse("/equipes?page=2").unwrap().resolve(&session);
    assert_eq!(location.route, Route::Teams);
    assert_eq!(location.page(), 2);
}

#[test]
fn test_admin_sidebar_order() {
    let session = Session::authenticated(Role::Admin, None);
    let sidebar = Sidebar::for_session(&session).unwrap();
    let labels: Vec<&str> = sidebar.links.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["Usuários", "Equipes", "Projetos"]);
    assert_eq!(sidebar.position(Route::Projects), Some(2));
}

#[test]
fn test_date_filter_round_trip_through_dashboard() {
    let session = Session::authenticated(Role::Admin, None);
    let range = DateRange::parse_input("2024-05-01..2024-05-31").unwrap();
    let location = range.apply().resolve(&session);

    assert_eq!(location.to_string(), "/dashboard?from=2024-05-01&to=2024-05-31");
    assert_eq!(DateRange::from_location(&location), range);
}
