use std::sync::{Arc, Mutex};

use sub2api_transport_backend::request::{CreateAnnouncementReq, UpdateAnnouncementReq};
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

use crate::{fail, init, ok, paginated, TOKEN};

const CREATED_AT: &str = "2026-01-02T03:04:05Z";

fn announcement_json(id: i64, title: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "content": "",
        "status": status,
        "priority": 0,
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT,
    })
}

/// In-memory `/admin/announcements` backend, enough to check that the client
/// round-trips create / list / update / delete against one store.
#[derive(Clone, Default)]
struct AnnouncementStore {
    items: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl AnnouncementStore {
    fn path_id(request: &Request) -> Option<i64> {
        request
            .url
            .path()
            .strip_prefix("/admin/announcements/")
            .and_then(|id| id.parse().ok())
    }

    fn query_i64(request: &Request, key: &str, default: i64) -> i64 {
        request
            .url
            .query_pairs()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(default)
    }
}

impl Respond for AnnouncementStore {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut items = self.items.lock().unwrap();
        match (request.method.as_str(), Self::path_id(request)) {
            ("GET", None) => {
                let page = Self::query_i64(request, "page", 1);
                let page_size = Self::query_i64(request, "page_size", 20);
                let skip = ((page - 1) * page_size) as usize;
                let slice = items
                    .iter()
                    .skip(skip)
                    .take(page_size as usize)
                    .cloned()
                    .collect();
                ok(paginated(slice, items.len() as i64, page, page_size))
            }
            ("POST", None) => {
                let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
                let id = items
                    .iter()
                    .filter_map(|a| a["id"].as_i64())
                    .max()
                    .unwrap_or(0)
                    + 1;
                let mut created = announcement_json(id, body["title"].as_str().unwrap(), "active");
                for key in ["content", "status", "priority"] {
                    if let Some(v) = body.get(key) {
                        created[key] = v.clone();
                    }
                }
                items.push(created.clone());
                ok(created)
            }
            ("PUT", Some(id)) => {
                let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
                let Some(existing) = items.iter_mut().find(|a| a["id"] == id) else {
                    return fail(404, 404, "announcement not found");
                };
                if let Some(fields) = body.as_object() {
                    for (key, v) in fields {
                        existing[key.as_str()] = v.clone();
                    }
                }
                ok(existing.clone())
            }
            ("DELETE", Some(id)) => {
                let before = items.len();
                items.retain(|a| a["id"] != id);
                if items.len() == before {
                    return fail(404, 404, "announcement not found");
                }
                ok(serde_json::Value::Null)
            }
            _ => fail(400, 400, "unsupported"),
        }
    }
}

#[tokio::test]
async fn test_admin_announcement_list() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("GET"))
        .and(path("/admin/announcements"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "20"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ok(paginated(
            vec![
                announcement_json(2, "Maintenance", "active"),
                announcement_json(1, "Welcome", "inactive"),
            ],
            2,
            1,
            20,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let res = backend_api.admin_announcement_list(1, 20).await?;

    assert_eq!(res.total, 2);
    assert_eq!(res.items.len(), 2);
    assert!(res.is_within_page_size());
    assert_eq!(res.items[0].title, "Maintenance");
    assert!(res.items[0].is_active());
    assert!(!res.items[1].is_active());
    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_create_sends_only_set_fields() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("POST"))
        .and(path("/admin/announcements"))
        .and(body_json(serde_json::json!({ "title": "X", "priority": 5 })))
        .respond_with(ok(serde_json::json!({
            "id": 7,
            "title": "X",
            "content": "",
            "status": "active",
            "priority": 5,
            "created_at": CREATED_AT,
            "updated_at": CREATED_AT,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = CreateAnnouncementReq::new("X").with_priority(5);
    let created = backend_api.admin_announcement_create(&req).await?;

    assert_eq!(created.id, 7);
    assert_eq!(created.status, "active");
    assert_eq!(created.priority, 5);
    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_lifecycle() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(path_regex(r"^/admin/announcements(/\d+)?$"))
        .respond_with(AnnouncementStore::default())
        .mount(&server)
        .await;

    // create then list
    let created = backend_api
        .admin_announcement_create(&CreateAnnouncementReq::new("X").with_content("hello"))
        .await?;
    let listed = backend_api.admin_announcement_list(1, 20).await?;
    assert!(listed.items.iter().any(|a| a.id == created.id && a.title == "X"));

    // partial update leaves the title alone
    let updated = backend_api
        .admin_announcement_update(created.id, &UpdateAnnouncementReq::default().status("archived"))
        .await?;
    assert_eq!(updated.status, "archived");
    assert_eq!(updated.title, "X");
    assert_eq!(updated.content, "hello");

    // delete then list
    backend_api.admin_announcement_delete(created.id).await?;
    let listed = backend_api.admin_announcement_list(1, 20).await?;
    assert!(listed.items.iter().all(|a| a.id != created.id));
    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_list_respects_page_size() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(path_regex(r"^/admin/announcements(/\d+)?$"))
        .respond_with(AnnouncementStore::default())
        .mount(&server)
        .await;

    for i in 0..5 {
        backend_api
            .admin_announcement_create(&CreateAnnouncementReq::new(&format!("notice {i}")))
            .await?;
    }

    for page_size in [1, 2, 3, 10] {
        let res = backend_api.admin_announcement_list(1, page_size).await?;
        assert!(res.items.len() as i64 <= page_size);
        assert!(res.is_within_page_size());
        assert_eq!(res.total, 5);
    }

    let last = backend_api.admin_announcement_list(3, 2).await?;
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_next());
    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_update_not_found() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("PUT"))
        .and(path("/admin/announcements/404"))
        .respond_with(fail(404, 404, "announcement not found"))
        .mount(&server)
        .await;

    let err = backend_api
        .admin_announcement_update(404, &UpdateAnnouncementReq::default().title("nope"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.is_network_error());
    assert_eq!(err.backend_message().as_deref(), Some("announcement not found"));
    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_delete() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("DELETE"))
        .and(path("/admin/announcements/3"))
        .respond_with(ok(serde_json::Value::Null))
        .expect(1)
        .mount(&server)
        .await;

    backend_api.admin_announcement_delete(3).await?;
    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_server_error() -> Result<(), sub2api_transport_backend::Error> {
    let (server, backend_api) = init().await?;

    Mock::given(method("GET"))
        .and(path("/admin/announcements"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = backend_api.admin_announcement_list(1, 20).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.backend_message(), None);
    Ok(())
}
