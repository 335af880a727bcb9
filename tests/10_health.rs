mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    // OK or SERVICE_UNAVAILABLE both count as alive; the latter just means
    // no database behind the server
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("success").is_some(), "missing success field: {}", body);
    let status = body["data"]["status"].as_str().unwrap_or("");
    assert!(
        status == "healthy" || status == "degraded",
        "unexpected health status: {}",
        body
    );

    Ok(())
}

#[tokio::test]
async fn root_banner_lists_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true, "banner envelope: {}", body);
    assert_eq!(body["data"]["name"], "ProTrack API", "banner name: {}", body);
    assert!(
        body["data"]["endpoints"].is_object(),
        "banner should list endpoints: {}",
        body
    );

    Ok(())
}
