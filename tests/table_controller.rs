use std::sync::Arc;

use serde_json::{json, Map};
use tokio::time::{sleep, Duration, Instant};

use admin_console::client::MockEntityApi;
use admin_console::error::AdminError;
use admin_console::models::{Project, ProjectDraft};
use admin_console::table::{Activity, LoadingPolicy, TableController};

fn project(id: i64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        extra: Map::new(),
    }
}

fn projects(count: i64) -> Vec<Project> {
    (1..=count).map(|id| project(id, &format!("Project {}", id))).collect()
}

fn mock(records: Vec<Project>) -> MockEntityApi<Project> {
    MockEntityApi::new(records, |id, draft: &ProjectDraft| project(id, &draft.name))
}

fn controller(api: MockEntityApi<Project>) -> (TableController<Project, MockEntityApi<Project>>, Arc<MockEntityApi<Project>>) {
    let api = Arc::new(api);
    let controller = TableController::new(Arc::clone(&api), 10, LoadingPolicy::immediate());
    (controller, api)
}

fn names(controller: &TableController<Project, MockEntityApi<Project>>) -> Vec<String> {
    controller.records().iter().map(|p| p.name.clone()).collect()
}

#[tokio::test]
async fn test_load_replaces_list_and_counts_pages() {
    let (mut controller, _) = controller(mock(projects(12)).with_total(25));

    controller.load(1).await.unwrap();

    assert_eq!(controller.records().len(), 10);
    assert_eq!(controller.pagination().current, 1);
    assert_eq!(controller.pagination().total, 3);
    assert_eq!(controller.activity(), Activity::Idle);

    controller.load(2).await.unwrap();
    assert_eq!(names(&controller), vec!["Project 11", "Project 12"]);
    assert_eq!(controller.pagination().label(), "Page 2 of 3");
}

#[tokio::test]
async fn test_filter_matches_id_or_name_ignoring_case() {
    let records = vec![project(1, "Apollo"), project(12, "Gemini"), project(3, "Mercury")];
    let (mut controller, _) = controller(mock(records));
    controller.load(1).await.unwrap();

    let by_name: Vec<i64> = controller.filter("ERC").iter().map(|p| p.id).collect();
    assert_eq!(by_name, vec![3]);

    let by_id: Vec<i64> = controller.filter("1").iter().map(|p| p.id).collect();
    assert_eq!(by_id, vec![1, 12]);

    assert_eq!(controller.filter("").len(), 3);
    assert!(controller.filter("voyager").is_empty());
}

#[tokio::test]
async fn test_malformed_record_lists_load_as_empty() {
    for body in [
        json!({ "projects": null }),
        json!({ "projects": { "id": 1 } }),
        json!({ "projects": "oops" }),
        json!({ "total": 4 }),
    ] {
        let (mut controller, _) = controller(mock(vec![]).with_list_body(body.clone()));
        controller.load(1).await.unwrap();
        assert!(controller.records().is_empty(), "body: {}", body);
    }
}

#[tokio::test]
async fn test_records_with_missing_names_still_load() {
    let body = json!({
        "projects": [
            { "id": 1, "name": "Apollo" },
            { "id": 2, "name": null },
            { "name": "no id" },
            { "id": 3, "name": "Gemini" }
        ],
        "total": 4
    });
    let (mut controller, _) = controller(mock(vec![]).with_list_body(body));

    controller.load(1).await.unwrap();

    assert_eq!(names(&controller), vec!["Apollo", "", "Gemini"]);
    let ids: Vec<i64> = controller.filter("").iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_load_failure_clears_the_list() {
    let (mut controller, _) = controller(mock(projects(3)).with_transport_failure("connection refused"));

    let err = controller.load(1).await.unwrap_err();
    assert!(matches!(err, AdminError::ApiError(_)));
    assert!(controller.records().is_empty());
    assert_eq!(controller.activity(), Activity::Idle);
}

#[tokio::test]
async fn test_create_appends_server_record_and_resets_dialog() {
    let (mut controller, api) = controller(mock(projects(2)));
    controller.load(1).await.unwrap();

    controller.create_dialog_mut().open();
    controller.create_dialog_mut().draft_mut().name = "Nova".to_string();
    controller.submit_create().await.unwrap();

    assert_eq!(names(&controller), vec!["Project 1", "Project 2", "Nova"]);
    assert_eq!(controller.records()[2].id, 3);
    assert!(!controller.create_dialog().is_open());
    assert!(controller.create_dialog().draft().name.is_empty());
    assert_eq!(api.stored().len(), 3);
}

#[tokio::test]
async fn test_empty_name_sends_no_request() {
    let (mut controller, api) = controller(mock(projects(1)));

    assert!(!controller.create_dialog().can_submit(controller.is_busy()));
    let err = controller.create(ProjectDraft::default()).await.unwrap_err();

    assert!(matches!(err, AdminError::InvalidInput(_)));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_create_rejection_keeps_dialog_open_with_message() {
    let (mut controller, _) = controller(mock(projects(2)).with_rejection("duplicate name"));
    controller.load(1).await.unwrap();
    let before = names(&controller);

    controller.create_dialog_mut().open();
    controller.create_dialog_mut().draft_mut().name = "Project 1".to_string();
    let err = controller.submit_create().await.unwrap_err();

    assert!(matches!(err, AdminError::Rejected(ref msg) if msg == "duplicate name"));
    assert_eq!(names(&controller), before);
    assert!(controller.create_dialog().is_open());
    assert_eq!(controller.create_dialog().error(), Some("duplicate name"));
    assert_eq!(controller.create_dialog().draft().name, "Project 1");
}

#[tokio::test]
async fn test_create_transport_failure_uses_its_message() {
    let (mut controller, _) = controller(mock(vec![]).with_transport_failure("timeout"));

    controller.create_dialog_mut().open();
    controller.create_dialog_mut().draft_mut().name = "Nova".to_string();
    assert!(controller.submit_create().await.is_err());

    assert_eq!(
        controller.create_dialog().error(),
        Some("API request failed: timeout")
    );
}

#[tokio::test]
async fn test_update_replaces_only_the_matching_entry() {
    let (mut controller, _) = controller(mock(projects(3)));
    controller.load(1).await.unwrap();

    assert!(controller.select_id(2));
    assert!(controller.open_update());
    if let Some(selected) = controller.selected_mut() {
        selected.name = "Renamed".to_string();
    }
    // The edit is not visible until the server confirms it.
    assert_eq!(controller.records()[1].name, "Project 2");

    controller.submit_update().await.unwrap();

    assert_eq!(names(&controller), vec!["Project 1", "Renamed", "Project 3"]);
    assert!(!controller.update_dialog().is_open());
}

#[tokio::test]
async fn test_update_shows_the_server_version() {
    let api = mock(projects(2)).with_update_hook(|mut record: Project| {
        record.name = record.name.trim().to_uppercase();
        record.extra.insert("updatedAt".to_string(), json!("2024-05-01"));
        record
    });
    let (mut controller, api) = controller(api);
    controller.load(1).await.unwrap();

    assert!(controller.select_id(1));
    assert!(controller.open_update());
    if let Some(selected) = controller.selected_mut() {
        selected.name = "  apollo ".to_string();
    }
    controller.submit_update().await.unwrap();

    let entry = &controller.records()[0];
    assert_eq!(entry.name, "APOLLO");
    assert_eq!(entry.extra.get("updatedAt"), Some(&json!("2024-05-01")));
    assert_eq!(entry, &api.stored()[0]);
    assert_eq!(names(&controller), vec!["APOLLO", "Project 2"]);
}

#[tokio::test]
async fn test_update_failure_changes_nothing() {
    let (mut controller, _) = controller(mock(projects(2)).with_rejection("not allowed"));
    controller.load(1).await.unwrap();

    let mut edited = controller.records()[0].clone();
    edited.name = "Changed".to_string();
    assert!(controller.update(edited).await.is_err());

    assert_eq!(names(&controller), vec!["Project 1", "Project 2"]);
}

#[tokio::test]
async fn test_delete_removes_the_id_and_keeps_order() {
    let (mut controller, api) = controller(mock(projects(4)));
    controller.load(1).await.unwrap();

    controller.delete(2).await.unwrap();

    assert_eq!(names(&controller), vec!["Project 1", "Project 3", "Project 4"]);
    assert!(api.stored().iter().all(|p| p.id != 2));
}

#[tokio::test]
async fn test_delete_failure_keeps_the_row() {
    let (mut controller, _) = controller(mock(projects(2)));
    controller.load(1).await.unwrap();

    let err = controller.delete(99).await.unwrap_err();
    assert!(matches!(err, AdminError::Rejected(_)));
    assert_eq!(controller.records().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_loading_stays_visible_for_the_minimum_duration() {
    let api = Arc::new(mock(projects(1)));
    let mut controller = TableController::<Project, _>::new(
        api,
        10,
        LoadingPolicy::new(Duration::from_millis(1500)),
    );

    let started = Instant::now();
    controller.load(1).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(controller.activity(), Activity::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_operation_leaves_state_unchanged() {
    let (mut controller, api) = controller(mock(projects(3)).with_delay(Duration::from_millis(100)));
    controller.load(1).await.unwrap();

    let token = controller.cancel_handle();
    tokio::spawn(async move {
        sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = controller.delete(1).await.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(controller.records().len(), 3);
    assert_eq!(api.stored().len(), 3);
    assert_eq!(controller.activity(), Activity::Idle);

    // Nothing else goes out once cancelled.
    let calls = api.calls();
    assert!(controller.load(1).await.unwrap_err().is_cancelled());
    assert_eq!(api.calls(), calls);
}

#[tokio::test]
async fn test_dropping_the_controller_cancels_it() {
    let (controller, _) = controller(mock(vec![]));
    let token = controller.cancel_handle();
    assert!(!token.is_cancelled());

    drop(controller);
    assert!(token.is_cancelled());
}
