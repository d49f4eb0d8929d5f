use crate::common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_create_chat_returns_201_with_derived_id() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/v1/chats",
            json!({ "participants": ["userB", "userA"], "createdAt": "2024-05-01T12:00:00Z" }),
        )
        .await;

    assert_eq!(response.status(), 201);
    assert_eq!(
        response.headers().get("location").unwrap().to_str().unwrap(),
        "/api/v1/chats/userA_userB"
    );

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["chat"]["id"], "userA_userB");
    assert_eq!(body["chat"]["participants"], json!(["userB", "userA"]));
    assert_eq!(body["chat"]["createdAt"], "2024-05-01T12:00:00Z");
}

#[tokio::test]
async fn test_create_chat_returns_409_for_same_participants() {
    let app = TestApp::new().await;
    let first = app
        .post_json("/api/v1/chats", json!({ "participants": ["alice", "bob"] }))
        .await;
    assert_eq!(first.status(), 201);

    let response = app
        .post_json("/api/v1/chats", json!({ "participants": ["bob", "alice"] }))
        .await;

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Chat with ID 'alice_bob' already exists.");
}

#[tokio::test]
async fn test_create_chat_returns_400_without_participants() {
    let app = TestApp::new().await;

    let response = app.post_json("/api/v1/chats", json!({})).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["fields"]["participants"], "Chat must have at least one participant.");
}

#[tokio::test]
async fn test_get_and_list_chats() {
    let app = TestApp::new().await;
    app.post_json("/api/v1/chats", json!({ "participants": ["a", "b"] }))
        .await;
    app.post_json("/api/v1/chats", json!({ "participants": ["c", "d"] }))
        .await;

    let response = app.get("/api/v1/chats/a_b").await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["chat"]["participants"], json!(["a", "b"]));

    let body: serde_json::Value = app.get("/api/v1/chats").await.json().await.unwrap();
    assert_eq!(body["count"], 2);

    let body: serde_json::Value = app
        .get("/api/v1/chats?skip=1")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["chats"][0]["id"], "c_d");

    let response = app.get("/api/v1/chats/nobody").await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_chat_returns_204_and_keeps_id() {
    let app = TestApp::new().await;
    app.post_json("/api/v1/chats", json!({ "participants": ["alice", "bob"] }))
        .await;

    let response = app
        .put_json("/api/v1/chats/alice_bob", json!({ "participants": ["alice", "carol"] }))
        .await;
    assert_eq!(response.status(), 204);

    let body: serde_json::Value = app
        .get("/api/v1/chats/alice_bob")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["chat"]["participants"], json!(["alice", "carol"]));

    let response = app
        .put_json("/api/v1/chats/ghost", json!({ "participants": ["x"] }))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_chat_returns_204_then_404() {
    let app = TestApp::new().await;
    app.post_json("/api/v1/chats", json!({ "participants": ["alice", "bob"] }))
        .await;

    assert_eq!(app.delete("/api/v1/chats/alice_bob").await.status(), 204);
    assert_eq!(app.delete("/api/v1/chats/alice_bob").await.status(), 404);
}
