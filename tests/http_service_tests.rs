//! HTTP publication service tests against a local mock server

mod common;

use common::fixtures::{
    example_options, example_options_with_subset, export_state_body, preview_body,
};
use mockito::{Matcher, Server};
use staticpub_admin::config::ClientConfig;
use staticpub_admin::error::Error;
use staticpub_admin::publication::{HttpPublicationService, PublicationService};
use staticpub_admin::types::{ExportState, ItemRef, TaskState};

fn service_for(server: &Server) -> HttpPublicationService {
    let config = ClientConfig::new(&server.url()).unwrap();
    HttpPublicationService::new(config).unwrap()
}

#[tokio::test]
async fn test_preview_sends_get_with_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/x_staticpub_publication")
        .match_query(Matcher::Exact(
            "lang=en&destination=42&pending_only=true&include_descendants=false\
             &include_neutral_language=false&language_mode=all&selection=7&selection=9"
                .to_string(),
        ))
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(preview_body().to_string())
        .create_async()
        .await;

    let preview = service_for(&server)
        .preview(&example_options())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(preview.summary, "3 tasks will be published");
    assert_eq!(preview.tasks.len(), 2);
    assert_eq!(preview.task_count(), 3);
    assert_eq!(preview.tasks[0].publishable.label(), Some("Home"));
    assert!(preview.tasks[1].languages.contains_key(""));
    assert_eq!(preview.tasks[1].languages[""].export_url, None);
}

#[tokio::test]
async fn test_preview_sends_language_subset_for_restricted_modes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/x_staticpub_publication")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("language_mode".into(), "include".into()),
            Matcher::UrlEncoded("language_subset".into(), "en".into()),
            Matcher::UrlEncoded("language_subset".into(), "ca".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"summary": "", "tasks": []}"#)
        .create_async()
        .await;

    let preview = service_for(&server)
        .preview(&example_options_with_subset("include", &["en", "ca"]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(preview.task_count(), 0);
}

#[tokio::test]
async fn test_publish_sends_form_post() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/x_staticpub_publication")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lang".into(), "en".into()),
            Matcher::UrlEncoded("destination".into(), "42".into()),
            Matcher::UrlEncoded("pending_only".into(), "true".into()),
            Matcher::UrlEncoded("include_neutral_language".into(), "false".into()),
            Matcher::UrlEncoded("selection".into(), "7".into()),
            Matcher::UrlEncoded("selection".into(), "9".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"export_id": 17}"#)
        .create_async()
        .await;

    let response = service_for(&server)
        .publish(&example_options())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.export_id, 17);
}

#[tokio::test]
async fn test_session_cookie_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/x_staticpub_publication")
        .match_header("cookie", "session_id=abc")
        .with_status(200)
        .with_body(r#"{"export_id": 1}"#)
        .create_async()
        .await;

    let config = ClientConfig::new(&server.url())
        .unwrap()
        .with_session("session_id=abc");
    let service = HttpPublicationService::new(config).unwrap();
    service.publish(&example_options()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_returned() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/x_staticpub_publication")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let err = service_for(&server)
        .publish(&example_options())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_selection_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/x_staticpub_publication")
        .expect(0)
        .create_async()
        .await;

    let mut options = example_options();
    let unlabeled = serde_json::Map::from_iter([("_label".to_string(), "x".into())]);
    options.selection = Some(vec![ItemRef::Id(7), ItemRef::Object(unlabeled)]);

    let err = service_for(&server).publish(&options).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::MalformedItem(_)));
}

#[tokio::test]
async fn test_export_state() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/x_staticpub_publication/state")
        .match_query(Matcher::Exact("export_id=17&lang=ca".to_string()))
        .with_status(200)
        .with_body(export_state_body("completed").to_string())
        .create_async()
        .await;

    let config = ClientConfig::new(&server.url())
        .unwrap()
        .with_language("ca");
    let service = HttpPublicationService::new(config).unwrap();
    let state = service.export_state(17).await.unwrap();

    mock.assert_async().await;
    assert_eq!(state.state, ExportState::Completed);
    assert_eq!(state.count(TaskState::Success), 1);
    assert_eq!(state.count(TaskState::Failed), 1);
    assert_eq!(
        state.tasks[1].error_message.as_deref(),
        Some("upload rejected")
    );
}

#[tokio::test]
async fn test_mount_prefix_is_kept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/cms/x_staticpub_publication/state")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(export_state_body("running").to_string())
        .create_async()
        .await;

    let config = ClientConfig::new(&format!("{}/cms", server.url())).unwrap();
    let service = HttpPublicationService::new(config).unwrap();
    let state = service.export_state(3).await.unwrap();

    mock.assert_async().await;
    assert_eq!(state.state, ExportState::Running);
}
