use wiremock::matchers::{method, path};
use wiremock::Mock;

use crate::{init, ok};

#[tokio::test]
async fn test_announcement_active_list() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("GET"))
        .and(path("/announcements"))
        .respond_with(ok(serde_json::json!([
            {
                "id": 4,
                "title": "New models available",
                "content": "details",
                "status": "active",
                "priority": 10,
                "created_at": "2026-04-01T00:00:00Z",
                "updated_at": "2026-04-02T00:00:00Z",
            },
            {
                "id": 2,
                "title": "Welcome",
                "status": "active",
                "created_at": "2026-03-01T00:00:00Z",
                "updated_at": "2026-03-01T00:00:00Z",
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let res = backend_api.announcement_active_list().await?;
    assert_eq!(res.len(), 2);
    assert!(res.iter().all(|a| a.is_active()));
    assert_eq!(res[0].priority, 10);
    // missing optional columns fall back to defaults
    assert_eq!(res[1].content, "");
    assert_eq!(res[1].priority, 0);
    Ok(())
}

#[tokio::test]
async fn test_announcement_active_list_empty() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("GET"))
        .and(path("/announcements"))
        .respond_with(ok(serde_json::json!([])))
        .mount(&server)
        .await;

    let res = backend_api.announcement_active_list().await?;
    assert!(res.is_empty());
    Ok(())
}
