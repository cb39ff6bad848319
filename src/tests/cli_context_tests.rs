use tempfile::TempDir;

use crate::cli_context::CliContextBuilder;
use crate::config::load_config_from;
use crate::error::AdminError;
use crate::models::User;
use crate::session::{Role, Session};

#[test]
fn test_builder_uses_given_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("admin.json");

    let context = CliContextBuilder::new()
        .with_config_path(&path)
        .with_api_url("http://api.test")
        .build()
        .unwrap();

    assert_eq!(context.config_path(), path.as_path());
    assert_eq!(context.config().api_url.as_deref(), Some("http://api.test"));
    assert!(!context.session().is_authenticated());
}

#[test]
fn test_require_session_without_login() {
    let dir = TempDir::new().unwrap();
    let context = CliContextBuilder::new()
        .with_config_path(dir.path().join("admin.json"))
        .build()
        .unwrap();

    assert!(matches!(context.require_session(), Err(AdminError::NotAuthenticated)));
}

#[test]
fn test_controller_requires_a_session() {
    let dir = TempDir::new().unwrap();
    let mut context = CliContextBuilder::new()
        .with_config_path(dir.path().join("admin.json"))
        .build()
        .unwrap();

    assert!(matches!(
        context.controller::<User>(),
        Err(AdminError::NotAuthenticated)
    ));
}

#[test]
fn test_set_session_persists_marker() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("admin.json");
    let mut context = CliContextBuilder::new()
        .with_config_path(&path)
        .build()
        .unwrap();

    context
        .set_session(Session::authenticated(Role::Colaborador, None))
        .unwrap();
    assert_eq!(context.require_session().unwrap(), Role::Colaborador);

    let saved = load_config_from(&path).unwrap();
    assert_eq!(saved.session.role(), Some(Role::Colaborador));
}

#[tokio::test]
async fn test_controller_with_session() {
    let dir = TempDir::new().unwrap();
    let mut context = CliContextBuilder::new()
        .with_config_path(dir.path().join("admin.json"))
        .with_session(Session::authenticated(Role::Admin, Some("secret".to_string())))
        .with_api_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let controller = context.controller::<User>().unwrap();
    assert!(controller.records().is_empty());
    assert_eq!(controller.pagination().current, 1);
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_is_unreachable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("admin.json");
    let mut context = CliContextBuilder::new()
        .with_config_path(&path)
        .with_session(Session::authenticated(Role::Admin, None))
        .with_api_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    context.logout().await.unwrap();

    assert!(!context.session().is_authenticated());
    assert!(!load_config_from(&path).unwrap().session.is_authenticated());
}
