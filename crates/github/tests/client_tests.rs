//! HTTP-level tests for `GitHubClient` against a wiremock server.

use github::{GitHubApi, GitHubClient, GitHubError};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new("alice", "hunter2")
        .expect("client construction")
        .with_base_url(&server.uri())
}

#[tokio::test]
async fn current_user_returns_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(basic_auth("alice", "hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "alice" })))
        .mount(&server)
        .await;

    let user = client_for(&server).await.current_user().await.unwrap();
    assert_eq!(user.login, "alice");
}

#[tokio::test]
async fn current_user_maps_401_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).await.current_user().await.unwrap_err();
    assert!(err.is_unauthorized(), "expected Unauthorized, got {err}");
}

#[tokio::test]
async fn create_repository_sends_private_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_json(json!({ "name": "ctf2026", "private": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "ctf2026",
            "full_name": "alice/ctf2026",
            "private": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = client_for(&server)
        .await
        .create_repository("ctf2026")
        .await
        .unwrap();
    assert_eq!(repo.full_name, "alice/ctf2026");
    assert!(repo.private);
}

#[tokio::test]
async fn list_labels_parses_name_and_color() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/alice/ctf2026/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "bug", "color": "ff0000" },
            { "name": "ctf", "color": "00ff00" }
        ])))
        .mount(&server)
        .await;

    let labels = client_for(&server)
        .await
        .list_labels("alice/ctf2026")
        .await
        .unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].name, "bug");
    assert_eq!(labels[1].color, "00ff00");
}

#[tokio::test]
async fn delete_label_percent_encodes_the_name() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/alice/ctf2026/labels/help%20wanted"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .delete_label("alice/ctf2026", "help wanted")
        .await
        .unwrap();
}

#[tokio::test]
async fn create_label_posts_name_and_color() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/alice/ctf2026/labels"))
        .and(body_json(json!({ "name": "pwn", "color": "d93f0b" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "name": "pwn", "color": "d93f0b" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let label = client_for(&server)
        .await
        .create_label("alice/ctf2026", "pwn", "d93f0b")
        .await
        .unwrap();
    assert_eq!(label.name, "pwn");
}

#[tokio::test]
async fn api_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/alice/ctf2026/labels"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Validation Failed" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .create_label("alice/ctf2026", "", "nope")
        .await
        .unwrap_err();
    match err {
        GitHubError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Validation Failed");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn create_project_uses_inertia_preview() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/alice/ctf2026/projects"))
        .and(header("accept", "application/vnd.github.inertia-preview+json"))
        .and(body_json(json!({ "name": "CTF 2026" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 77, "name": "CTF 2026" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let project = client_for(&server)
        .await
        .create_project("alice/ctf2026", "CTF 2026")
        .await
        .unwrap();
    assert_eq!(project.id, 77);
}

#[tokio::test]
async fn create_project_column_targets_the_project_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/77/columns"))
        .and(body_json(json!({ "name": "To Do" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 1, "name": "To Do" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let column = client_for(&server)
        .await
        .create_project_column(77, "To Do")
        .await
        .unwrap();
    assert_eq!(column.name, "To Do");
}
