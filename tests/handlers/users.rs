use crate::common::TestApp;
use serde_json::json;

async fn create_user(app: &TestApp, login: &str, first_name: &str) -> String {
    let response = app
        .post_json(
            "/api/v1/users",
            json!({
                "login": login,
                "password": "hashedPassword123",
                "email": format!("{}@example.com", login),
                "firstName": first_name,
                "lastName": "Doe"
            }),
        )
        .await;
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    body["user"]["id"].as_str().unwrap().to_string()
}

// ============================================================================
// CREATE USER
// ============================================================================

#[tokio::test]
async fn test_create_user_returns_201_with_location() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/v1/users",
            json!({ "login": "john_doe", "password": "pass", "firstName": "John" }),
        )
        .await;

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["user"]["id"].as_str().unwrap();
    assert_eq!(location, format!("/api/v1/users/{}", id));
    assert_eq!(body["user"]["login"], "john_doe");
    assert_eq!(body["user"]["firstName"], "John");
    assert!(body["user"]["lastName"].is_null());
}

#[tokio::test]
async fn test_create_user_returns_400_for_blank_fields() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/v1/users", json!({ "login": "  ", "password": "" }))
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["fields"]["login"], "Login is required.");
    assert_eq!(body["fields"]["password"], "Password is required.");
}

#[tokio::test]
async fn test_create_user_returns_409_for_duplicate_login() {
    let app = TestApp::new().await;
    create_user(&app, "john_doe", "John").await;

    let response = app
        .post_json("/api/v1/users", json!({ "login": "john_doe", "password": "other" }))
        .await;

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["error"], "User with login 'john_doe' already exists.");
}

#[tokio::test]
async fn test_create_user_returns_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .client
        .post(app.url("/api/v1/users"))
        .header("content-type", "application/json")
        .body("{\"login\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["fields"]["body"].is_string());
}

// ============================================================================
// GET / LIST USERS
// ============================================================================

#[tokio::test]
async fn test_get_user_returns_200() {
    let app = TestApp::new().await;
    let id = create_user(&app, "john_doe", "John").await;

    let response = app.get(&format!("/api/v1/users/{}", id)).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["email"], "john_doe@example.com");
}

#[tokio::test]
async fn test_get_user_accepts_uppercase_id() {
    let app = TestApp::new().await;
    let id = create_user(&app, "john_doe", "John").await;

    let response = app
        .get(&format!("/api/v1/users/{}", id.to_uppercase()))
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], id.as_str());
}

#[tokio::test]
async fn test_get_user_returns_400_for_malformed_id() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/users/not-an-object-id").await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_ID");
    assert_eq!(body["error"], "Invalid user ID format.");
}

#[tokio::test]
async fn test_get_user_returns_404_for_unknown_id() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/users/507f191e810c19729de860ea").await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_users_with_filter_and_paging() {
    let app = TestApp::new().await;
    create_user(&app, "pawel_1", "Pawel").await;
    create_user(&app, "john_doe", "John").await;
    create_user(&app, "pawel_2", "Pawel").await;

    let response = app.get("/api/v1/users").await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["count"], 3);
    assert_eq!(body["users"].as_array().unwrap().len(), 3);

    let response = app.get("/api/v1/users?firstName=Pawel").await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["users"][0]["login"], "pawel_1");
    assert_eq!(body["users"][1]["login"], "pawel_2");

    let response = app.get("/api/v1/users?skip=1&limit=1").await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["users"][0]["login"], "john_doe");
}

// ============================================================================
// UPDATE / DELETE USER
// ============================================================================

#[tokio::test]
async fn test_update_user_returns_204() {
    let app = TestApp::new().await;
    let id = create_user(&app, "john_doe", "John").await;

    let response = app
        .put_json(
            &format!("/api/v1/users/{}", id),
            json!({
                "login": "john_doe_updated",
                "password": "newHashedPassword",
                "email": "new.email@example.com"
            }),
        )
        .await;
    assert_eq!(response.status(), 204);

    let body: serde_json::Value = app
        .get(&format!("/api/v1/users/{}", id))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["user"]["login"], "john_doe_updated");
    assert_eq!(body["user"]["email"], "new.email@example.com");
    assert!(body["user"]["firstName"].is_null());
}

#[tokio::test]
async fn test_update_user_returns_409_for_taken_login() {
    let app = TestApp::new().await;
    let john = create_user(&app, "john_doe", "John").await;
    create_user(&app, "jane_doe", "Jane").await;

    let response = app
        .put_json(
            &format!("/api/v1/users/{}", john),
            json!({ "login": "jane_doe", "password": "pass" }),
        )
        .await;

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Login 'jane_doe' is already taken.");
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404() {
    let app = TestApp::new().await;
    let id = create_user(&app, "john_doe", "John").await;

    let response = app.delete(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(response.status(), 204);

    let response = app.get(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(response.status(), 404);

    let response = app.delete(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(response.status(), 404);
}
