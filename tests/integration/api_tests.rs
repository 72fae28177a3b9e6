use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use scrolly_tree::api::{AppState, MessageResponse, SessionResponse, create_router};

use crate::setup_services;

fn test_router() -> Router {
    let services = setup_services();
    create_router(AppState {
        session_service: Arc::new(services.sessions),
        fork_service: Arc::new(services.forks),
        layout_service: Arc::new(services.layout),
    })
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn create_sample_session(router: &Router) -> SessionResponse {
    let (status, body) = send(router, Method::POST, "/api/v1/sessions", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_get_session() {
    let router = test_router();
    let created = create_sample_session(&router).await;

    assert_eq!(created.total_messages, 15);
    assert_eq!(created.draft_messages, 0);

    let (status, body) = send(
        &router,
        Method::GET,
        &format!("/api/v1/sessions/{}", created.session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_chat_leaf_id"], 10);
    assert_eq!(body["current_view"], "scrollytell");
}

#[tokio::test]
async fn test_create_session_with_explicit_tree() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/v1/sessions",
        Some(json!({
            "message_tree": [
                { "id": 1, "parent_message_id": null, "message": { "role": "user", "content": "hi" } },
                { "id": 2, "parent_message_id": 1, "message": { "role": "assistant", "content": "hello" } }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_messages"], 2);
    assert_eq!(body["current_chat_leaf_id"], 2);
}

#[tokio::test]
async fn test_create_session_rejects_malformed_tree() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/v1/sessions",
        Some(json!({
            "message_tree": [
                { "id": 1, "parent_message_id": 5, "message": { "role": "user", "content": "" } }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("missing parent 5"));
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let router = test_router();

    let (status, _) = send(
        &router,
        Method::GET,
        "/api/v1/sessions/00000000-0000-0000-0000-000000000000/tree",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fork_then_path_and_layout() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    let (status, body) = send(
        &router,
        Method::POST,
        &format!("{}/messages/4/fork", base),
        Some(json!({ "role": "assistant" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let forked: MessageResponse = serde_json::from_value(body).unwrap();
    assert_eq!(forked.id, -1);
    assert_eq!(forked.display_id, "-1 (draft)");
    assert!(forked.is_draft);
    assert_eq!(forked.parent_message_id, Some(4));
    assert_eq!(forked.child_count, 0);

    let (_, path) = send(&router, Method::GET, &format!("{}/path", base), None).await;
    let ids: Vec<i64> = path
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, -1]);
    // 4 now has its original reply plus the draft.
    assert_eq!(path[3]["child_count"], 2);
    assert_eq!(path[4]["child_count"], 0);

    let (status, layout) = send(&router, Method::GET, &format!("{}/layout", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(layout["current_leaf_id"], -1);
    assert_eq!(layout["active_path"], json!([1, 2, 3, 4, -1]));
    // Fork at 6 took column 1 first, so the new draft lands in column 2.
    assert_eq!(layout["nodes"]["-1"]["column"], 2);
    assert_eq!(layout["nodes"]["11"]["column"], 1);
}

#[tokio::test]
async fn test_fork_missing_parent_returns_not_found() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    let (status, _) = send(
        &router,
        Method::POST,
        &format!("{}/messages/9999/fork", base),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, tree) = send(&router, Method::GET, &format!("{}/tree", base), None).await;
    assert_eq!(tree["total_messages"], 15);
}

#[tokio::test]
async fn test_fork_with_invalid_role() {
    let router = test_router();
    let session = create_sample_session(&router).await;

    let (status, body) = send(
        &router,
        Method::POST,
        &format!("/api/v1/sessions/{}/messages/1/fork", session.session_id),
        Some(json!({ "role": "narrator" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid role: narrator");
}

#[tokio::test]
async fn test_edit_draft_and_reject_persisted() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    send(&router, Method::POST, &format!("{}/messages/10/fork", base), Some(json!({}))).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("{}/messages/-1/content", base),
        Some(json!({ "content": "Will it rain tomorrow?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Will it rain tomorrow?");

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("{}/messages/2/content", base),
        Some(json!({ "content": "rewrite history" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_siblings_descendants_children() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    let (_, siblings) = send(&router, Method::GET, &format!("{}/messages/11/siblings", base), None).await;
    assert_eq!(siblings.as_array().unwrap().len(), 1);
    assert_eq!(siblings[0]["id"], 7);
    assert_eq!(siblings[0]["child_count"], 1);

    let (_, descendants) =
        send(&router, Method::GET, &format!("{}/messages/12/descendants", base), None).await;
    let ids: Vec<i64> = descendants
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![13, 14, 15]);
    assert_eq!(descendants[0]["child_count"], 1);
    assert_eq!(descendants[2]["child_count"], 0);

    let (_, children) = send(&router, Method::GET, &format!("{}/messages/6/children", base), None).await;
    assert_eq!(children["child_count"], 2);

    let (_, tree) = send(&router, Method::GET, &format!("{}/tree", base), None).await;
    let fork_point = tree["messages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == 6)
        .unwrap();
    assert_eq!(fork_point["child_count"], 2);

    let (status, unknown) =
        send(&router, Method::GET, &format!("{}/messages/999/siblings", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown, json!([]));
}

#[tokio::test]
async fn test_current_leaf_and_view() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("{}/current-leaf", base),
        Some(json!({ "leaf_id": 15 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_chat_leaf_id"], 15);

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("{}/current-leaf", base),
        Some(json!({ "leaf_id": 404 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("{}/view", base),
        Some(json!({ "view": "tree" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_view"], "tree");

    let (_, path) = send(&router, Method::GET, &format!("{}/path?leaf_id=3", base), None).await;
    assert_eq!(path.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_scrollytell_sections() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    let (_, summaries) =
        send(&router, Method::GET, &format!("{}/scrollytell/sections", base), None).await;
    assert_eq!(summaries.as_array().unwrap().len(), 5);
    assert_eq!(summaries[1]["section_type"], "pie");
    assert_eq!(summaries[1]["message_count"], 0);
    assert_eq!(summaries[0]["title"], "Model Overview");

    let (_, messages) = send(
        &router,
        Method::GET,
        &format!("{}/scrollytell/sections/3/messages", base),
        None,
    )
    .await;
    let ids: Vec<i64> = messages
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 7, 8, 9]);

    let (status, _) = send(
        &router,
        Method::GET,
        &format!("{}/scrollytell/sections/42/messages", base),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("{}/scrollytell", base),
        Some(json!({
            "scrolly_tell_sections": [
                { "message_ids": [1], "data": { "type": "text", "data": "plain" } }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, data) = send(&router, Method::GET, &format!("{}/scrollytell", base), None).await;
    assert_eq!(data["scrolly_tell_sections"][0]["data"]["type"], "text");
}

#[tokio::test]
async fn test_replace_tree_and_delete_session() {
    let router = test_router();
    let session = create_sample_session(&router).await;
    let base = format!("/api/v1/sessions/{}", session.session_id);

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("{}/tree", base),
        Some(json!({
            "message_tree": [
                { "id": 1, "parent_message_id": null, "message": { "role": "system", "content": "s" } },
                { "id": 1, "parent_message_id": null, "message": { "role": "user", "content": "dup" } }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&router, Method::DELETE, &base, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, Method::GET, &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
