mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// Log in with seeded credentials; None when no seeded database is behind
// the server, which downgrades the test to a no-op.
async fn login_token(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<Option<String>> {
    let res = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await?;

    if res.status() != StatusCode::OK {
        return Ok(None);
    }

    let body = res.json::<serde_json::Value>().await?;
    Ok(body["data"]["token"].as_str().map(|s| s.to_string()))
}

#[tokio::test]
async fn protected_routes_require_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/api/project", "/api/user/profile", "/api/user/employees"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        assert_eq!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "GET {} without token",
            path
        );

        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["success"], false, "error envelope for {}: {}", path, body);
        assert!(body.get("error").is_some(), "missing error field: {}", body);
    }

    Ok(())
}

#[tokio::test]
async fn garbage_token_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/project", server.base_url))
        .header("authorization", "Bearer not-a-real-token")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false, "error envelope: {}", body);

    Ok(())
}

#[tokio::test]
async fn employee_cannot_list_employees() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let Some(token) = login_token(&client, &server.base_url, "employee", "emp123").await? else {
        return Ok(());
    };

    let res = client
        .get(format!("{}/api/user/employees", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false, "error envelope: {}", body);

    Ok(())
}

#[tokio::test]
async fn profile_picture_upload_validates_and_stores() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let Some(token) = login_token(&client, &server.base_url, "admin", "admin123").await? else {
        return Ok(());
    };

    // Wrong extension is refused before anything is stored
    let form = reqwest::multipart::Form::new()
        .text("full_name", "Admin User")
        .part(
            "profile_picture",
            reqwest::multipart::Part::bytes(b"plain text".to_vec()).file_name("notes.txt"),
        );
    let res = client
        .put(format!("{}/api/user/profile", server.base_url))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Invalid file type.", "rejection envelope: {}", body);

    // A png goes through and the profile picks up an /uploads URL
    let form = reqwest::multipart::Form::new()
        .text("full_name", "Admin User")
        .part(
            "profile_picture",
            reqwest::multipart::Part::bytes(vec![0x89, b'P', b'N', b'G']).file_name("avatar.png"),
        );
    let res = client
        .put(format!("{}/api/user/profile", server.base_url))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true, "update envelope: {}", body);

    let res = client
        .get(format!("{}/api/user/profile", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let url = body["data"]["profile_picture_url"].as_str().unwrap_or_default();
    assert!(url.contains("/uploads/profile_"), "picture url: {}", body);

    Ok(())
}

#[tokio::test]
async fn project_lifecycle_with_seeded_admin() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let Some(token) = login_token(&client, &server.base_url, "admin", "admin123").await? else {
        return Ok(());
    };

    // Seeded users give us member ids to work with
    let res = client
        .get(format!("{}/api/user/employees", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let employees = body["data"].as_array().cloned().unwrap_or_default();
    assert!(employees.len() >= 2, "expected seeded users: {}", body);

    let admin_id = employees
        .iter()
        .find(|e| e["username"] == "admin")
        .and_then(|e| e["id"].as_str())
        .map(|s| s.to_string())
        .unwrap_or_default();
    assert!(!admin_id.is_empty(), "admin id missing: {}", body);

    // Create a project with the admin as sole member
    let res = client
        .post(format!("{}/api/project", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Lifecycle Project",
            "description": "created by integration test",
            "employee_ids": [admin_id]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true, "create envelope: {}", body);
    assert_eq!(body["data"]["name"], "Lifecycle Project", "create payload: {}", body);
    let project_id = body["data"]["id"].as_str().unwrap_or("").to_string();
    assert!(!project_id.is_empty(), "project id missing: {}", body);

    // The new project shows up in the member's listing
    let res = client
        .get(format!("{}/api/project", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let listed = body["data"]
        .as_array()
        .map(|projects| projects.iter().any(|p| p["id"] == project_id.as_str()))
        .unwrap_or(false);
    assert!(listed, "created project not listed: {}", body);

    // Adding an existing member is refused
    let res = client
        .post(format!(
            "{}/api/project/{}/add-member/{}",
            server.base_url, project_id, admin_id
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "User already in project.", "duplicate member: {}", body);

    // No open tasks, so the delete goes through
    let res = client
        .delete(format!("{}/api/project/{}", server.base_url, project_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    Ok(())
}
