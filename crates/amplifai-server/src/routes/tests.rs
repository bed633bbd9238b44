use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use amplifai::{Notifier, NotificationKind};

use super::app;
use crate::application::testing::RecordingNotifier;
use crate::config::AppConfig;
use crate::AppState;

struct TestApp {
    _dir: tempfile::TempDir,
    router: Router,
    notifier: Arc<RecordingNotifier>,
}

fn test_app() -> TestApp {
    build(true)
}

fn build(with_notifier: bool) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        log_file: dir.path().join("logs/application.jsonl"),
        memory_file: dir.path().join("memory/memory_store.jsonl"),
        webhook_url: Some("https://hooks.example.com/services/T0/B0/SECRET".to_string()),
        ..AppConfig::default()
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let handle: Option<Arc<dyn Notifier>> = if with_notifier {
        Some(notifier.clone() as Arc<dyn Notifier>)
    } else {
        None
    };

    TestApp {
        router: app(AppState::new(config, handle)),
        _dir: dir,
        notifier,
    }
}

impl TestApp {
    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn post_form(&self, parts: &[FormPart<'_>]) -> (StatusCode, Value) {
        self.send(
            Request::post("/upload-playbook-file")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }
}

const BOUNDARY: &str = "amplifai-test-boundary";

enum FormPart<'a> {
    Text(&'a str, &'a str),
    File {
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            FormPart::File {
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn campaign_body() -> Value {
    json!({
        "campaign_id": "camp_001",
        "budget": 5000.0,
        "audience": ["young_professionals", "tech_enthusiasts"],
        "creatives": ["banner_ad_1", "video_ad_2"]
    })
}

#[tokio::test]
async fn test_root_and_status() {
    let t = test_app();

    let (status, body) = t.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "AmplifAI Execution Engine v1");
    assert_eq!(body["docs"], "/swagger-ui");

    let (status, body) = t.get("/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptime"].as_str().unwrap().ends_with('s'));
}

#[tokio::test]
async fn test_launch_campaign() {
    let t = test_app();

    let (status, body) = t.post_json("/launch-campaign", campaign_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "launched");
    assert_eq!(body["campaign_id"], "camp_001");
    assert_eq!(body["message"], "Campaign launched successfully");

    let (_, memory) = t.get("/memory/stats").await;
    assert_eq!(memory["total_memories"], 1);
    assert_eq!(memory["by_kind"]["campaign"], 1);

    let (_, logs) = t.get("/logs/stats").await;
    assert_eq!(logs["total_entries"], 1);
    assert_eq!(logs["by_level"]["INFO"], 1);

    let sent = t.notifier.wait_for(1).await;
    assert_eq!(sent[0].kind, NotificationKind::CampaignLaunched);
}

#[tokio::test]
async fn test_invalid_campaigns_rejected() {
    let t = test_app();

    let mut zero_budget = campaign_body();
    zero_budget["budget"] = json!(0);
    let mut no_audience = campaign_body();
    no_audience["audience"] = json!([]);
    let mut no_creatives = campaign_body();
    no_creatives["creatives"] = json!([]);
    let mut blank_id = campaign_body();
    blank_id["campaign_id"] = json!("");

    for bad in [zero_budget, no_audience, no_creatives, blank_id] {
        let (status, body) = t.post_json("/launch-campaign", bad).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status_code"], 422);
        assert!(body["error"].is_string());
    }

    let (_, memory) = t.get("/memory/stats").await;
    assert_eq!(memory["total_memories"], 0);

    let (_, logs) = t.get("/logs/stats").await;
    assert_eq!(logs["by_level"]["WARNING"], 4);
    assert!(t.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_bodies() {
    let t = test_app();

    // Missing required fields
    let (status, body) = t
        .post_json("/launch-campaign", json!({ "campaign_id": "camp_001" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status_code"], 422);

    // Not JSON at all
    let (status, body) = t
        .send(
            Request::post("/upload-playbook")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_upload_playbook_json() {
    let t = test_app();

    let (status, body) = t
        .post_json(
            "/upload-playbook",
            json!({ "playbook_name": "Test", "content": {}, "version": "1.0", "tags": [] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "received");
    assert!(body["playbook_id"].as_str().unwrap().starts_with("pb_"));

    let (status, _) = t
        .post_json("/upload-playbook", json!({ "playbook_name": "  " }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let sent = t.notifier.wait_for(1).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::PlaybookUploaded);
}

#[tokio::test]
async fn test_upload_playbook_file_any_type() {
    let t = test_app();

    let files: [(&str, &str, &[u8]); 3] = [
        ("plan.pdf", "application/pdf", b"%PDF-1.4 fake"),
        ("notes.txt", "text/plain", b"step one\nstep two"),
        ("empty.bin", "application/octet-stream", b""),
    ];

    for (filename, content_type, data) in files {
        let (status, body) = t
            .post_form(&[
                FormPart::File {
                    filename,
                    content_type,
                    data,
                },
                FormPart::Text("playbook_name", "Quarterly Plan"),
                FormPart::Text("tags", "q3, social,,"),
                FormPart::Text("unexpected", "ignored"),
            ])
            .await;
        assert_eq!(status, StatusCode::OK, "{filename}: {body}");
        assert_eq!(body["status"], "received");
        assert!(body["playbook_id"].as_str().unwrap().starts_with("pb_"));
    }

    let (_, recent) = t.get("/memory/recent?kind=playbook&limit=1").await;
    let recent = recent.as_array().unwrap();
    assert_eq!(recent.len(), 1);
    let data = &recent[0]["data"];
    assert_eq!(data["source"], "file");
    assert_eq!(data["version"], "1.0");
    assert_eq!(data["tags"], json!(["q3", "social"]));
    assert_eq!(data["content"]["file"]["size_bytes"], 0);
}

#[tokio::test]
async fn test_upload_playbook_file_rejections() {
    let t = test_app();

    let (status, body) = t
        .post_form(&[FormPart::Text("playbook_name", "No File")])
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status_code"], 422);

    let (status, _) = t
        .post_form(&[FormPart::File {
            filename: "a.txt",
            content_type: "text/plain",
            data: b"x",
        }])
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // No boundary in the content type
    let (status, body) = t
        .send(
            Request::post("/upload-playbook-file")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);

    let (_, memory) = t.get("/memory/stats").await;
    assert_eq!(memory["total_memories"], 0);
}

#[tokio::test]
async fn test_route_never_rejects_payload_shape() {
    let t = test_app();

    let (status, body) = t
        .post_json(
            "/route/analytics",
            json!({ "payload": { "action": "process_data" }, "metadata": { "priority": "high" } }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "routed");
    assert_eq!(body["module"], "analytics");
    assert_eq!(body["message"], "Request routed to analytics");

    let (status, _) = t
        .send(Request::post("/route/empty").body(Body::empty()).unwrap())
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = t
        .send(
            Request::post("/route/text")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("just some words"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["module"], "text");

    let (_, memory) = t.get("/memory/stats").await;
    assert_eq!(memory["by_kind"]["route"], 3);

    let (_, recent) = t.get("/memory/recent?kind=route").await;
    let modules: Vec<&str> = recent
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["data"]["module_name"].as_str().unwrap())
        .collect();
    assert!(modules.contains(&"analytics"));
    assert!(modules.contains(&"empty"));
}

#[tokio::test]
async fn test_stats_empty_then_counted() {
    let t = test_app();

    let (status, logs) = t.get("/logs/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logs["total_entries"], 0);
    assert_eq!(logs["file_exists"], false);
    assert_eq!(logs["file_size_bytes"], 0);
    assert!(logs["earliest"].is_null());

    let (_, memory) = t.get("/memory/stats").await;
    assert_eq!(memory["total_memories"], 0);
    assert_eq!(memory["by_kind"], json!({}));

    for module in ["a", "b", "c"] {
        t.post_json(&format!("/route/{module}"), json!({})).await;
    }

    let (_, first) = t.get("/memory/stats").await;
    let (_, second) = t.get("/memory/stats").await;
    assert_eq!(first["total_memories"], 3);
    assert_eq!(first["file_exists"], true);
    assert_eq!(first, second);

    let (_, logs) = t.get("/logs/stats").await;
    assert_eq!(logs["total_entries"], 3);
    assert!(logs["latest"].is_string());
}

#[tokio::test]
async fn test_recent_memories_limit_and_order() {
    let t = test_app();

    t.post_json("/launch-campaign", campaign_body()).await;
    for module in ["first", "second", "third"] {
        t.post_json(&format!("/route/{module}"), json!({})).await;
    }

    let (status, recent) = t.get("/memory/recent?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let recent = recent.as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["data"]["module_name"], "third");
    assert!(recent[0]["id"].as_str().unwrap().starts_with("mem_"));

    let (_, campaigns) = t.get("/memory/recent?kind=campaign").await;
    assert_eq!(campaigns.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_path_and_method_are_json_errors() {
    let t = test_app();

    let (status, body) = t.get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);
    assert_eq!(body["error"], "Not found: path /does-not-exist");

    let (status, body) = t.get("/launch-campaign").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status_code"], 405);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_bad_query_string_is_json_error() {
    let t = test_app();

    let (status, body) = t.get("/memory/recent?limit=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);
    assert!(body["error"].as_str().unwrap().contains("query string"));
}

#[tokio::test]
async fn test_playbook_content_must_be_object() {
    let t = test_app();

    for content in [json!(5), json!("x"), Value::Null, json!([1, 2])] {
        let (status, body) = t
            .post_json(
                "/upload-playbook",
                json!({ "playbook_name": "Test", "content": content.clone() }),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{content}");
        assert_eq!(body["status_code"], 422);
    }

    // Omitted content defaults to an empty object
    let (status, _) = t
        .post_json("/upload-playbook", json!({ "playbook_name": "Test" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, memory) = t.get("/memory/stats").await;
    assert_eq!(memory["total_memories"], 1);
}

#[tokio::test]
async fn test_large_playbook_file_accepted() {
    let t = test_app();
    let data = vec![b'%'; 3 * 1024 * 1024];

    let (status, body) = t
        .post_form(&[
            FormPart::Text("playbook_name", "Big"),
            FormPart::File {
                filename: "big.pdf",
                content_type: "application/pdf",
                data: &data,
            },
        ])
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "received");

    let (_, recent) = t.get("/memory/recent?kind=playbook").await;
    assert_eq!(
        recent[0]["data"]["content"]["file"]["size_bytes"],
        3 * 1024 * 1024
    );
}

#[tokio::test]
async fn test_large_route_body_accepted() {
    let t = test_app();
    let blob = "x".repeat(3 * 1024 * 1024);

    let (status, body) = t
        .post_json("/route/bulk", json!({ "payload": { "blob": blob } }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "routed");
    assert_eq!(body["module"], "bulk");
}

#[tokio::test]
async fn test_debug_config_masks_webhook() {
    let t = build(false);

    let (status, body) = t.get("/debug/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["webhook_configured"], false);
    assert!(!body.to_string().contains("SECRET"));
    assert!(body["log_file_path"]
        .as_str()
        .unwrap()
        .ends_with("application.jsonl"));
}

#[tokio::test]
async fn test_webhook_check() {
    let unconfigured = build(false);
    let (status, body) = unconfigured.get("/test/webhook").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["configured"], false);
    assert_eq!(body["test_passed"], false);

    let t = test_app();
    let (_, body) = t.get("/test/webhook").await;
    assert_eq!(body["configured"], true);
    assert_eq!(body["test_passed"], true);

    let sent = t.notifier.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::Test);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let t = test_app();

    let (status, doc) = t.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/launch-campaign"].is_object());
    assert!(doc["paths"]["/route/{module_name}"].is_object());
}
