mod support;

use axum::http::{Method, StatusCode};
use linkedgpt_core::content::prompts::system_prompt;
use linkedgpt_domain::{Config, Platform, ScheduledPostStatus};
use serde_json::json;
use support::{StaticCredentials, TestApp, USER};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn health_needs_no_session() {
    let app = TestApp::spawn().await;
    let (status, body) = app.call(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn api_routes_require_a_user() {
    let app = TestApp::spawn().await;
    let (status, body) = app.call(Method::GET, "/api/posts", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "unauthorized");
}

#[tokio::test]
async fn generated_text_is_returned_verbatim() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "Generated"}}]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/content/generate",
            Some(USER),
            Some(json!({"prompt": "Topic", "platform": "LinkedIn"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Generated");
    assert_eq!(body["variations"], json!(["Generated"]));
}

#[tokio::test]
async fn unknown_platform_generates_with_generic_prompt() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": system_prompt(None)},
                {"role": "user", "content": "Topic"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "Generic"}}]
        })))
        .expect(2)
        .mount(&app.upstream)
        .await;

    for tag in ["Instagram", ""] {
        let (status, body) = app
            .call(
                Method::POST,
                "/api/content/generate",
                Some(USER),
                Some(json!({"prompt": "Topic", "platform": tag})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], "Generic");
    }
}

#[tokio::test]
async fn content_upstream_error_maps_to_bad_gateway_with_status() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call(Method::POST, "/api/content/generate", Some(USER), Some(json!({"prompt": "Topic"})))
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "upstream");
    assert_eq!(body["status"], 429);
}

#[tokio::test]
async fn unsupported_platform_is_rejected_without_network() {
    let app = TestApp::with_credentials(StaticCredentials::default().with(Platform::LinkedIn, "t"))
        .await;

    for tag in ["MySpace", "Instagram", ""] {
        let (status, body) = app
            .call(
                Method::POST,
                "/api/posts/publish",
                Some(USER),
                Some(json!({"content": "Hello", "platform": tag})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "unsupported_platform");
    }

    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn missing_platform_credential_fails_before_network() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/posts/publish",
            Some(USER),
            Some(json!({"content": "Hello", "platform": "Twitter"})),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "configuration");
    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn linkedin_server_error_surfaces_status_and_writes_no_metrics() {
    let app = TestApp::with_credentials(StaticCredentials::default().with(Platform::LinkedIn, "li"))
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/posts/publish",
            Some(USER),
            Some(json!({"content": "Hello", "platform": "LinkedIn"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], 500);
    assert!(app.store.metrics.lock().await.is_empty());
    assert!(app.store.posts.lock().await.is_empty());
}

#[tokio::test]
async fn successful_publish_records_metrics_and_history() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(header("authorization", "Bearer body-token"))
        .and(body_partial_json(json!({"text": "Hello\n\n#rust #async"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "tw-42"}})))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/posts/publish",
            Some(USER),
            Some(json!({
                "content": "Hello",
                "platform": "twitter",
                "hashtags": ["rust", "#async"],
                "token": "body-token"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform_post_id"], "tw-42");

    let metrics = app.store.metrics.lock().await.clone();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].platform, Platform::Twitter);

    let (status, history) = app.call(Method::GET, "/api/posts", Some(USER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().map(Vec::len), Some(1));
    assert_eq!(history[0]["platform_post_id"], "tw-42");

    let (_, other) = app.call(Method::GET, "/api/posts", Some("someone-else"), None).await;
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn scheduled_post_is_published_by_the_worker_trigger() {
    let app = TestApp::with_credentials(StaticCredentials::default().with(Platform::LinkedIn, "li"))
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("authorization", "Bearer li"))
        .respond_with(
            ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:1"),
        )
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, scheduled) = app
        .call(
            Method::POST,
            "/api/posts/schedule",
            Some(USER),
            Some(json!({
                "content": "Hello",
                "platforms": ["LinkedIn"],
                "scheduled_at": "2025-01-01T10:00:00Z"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(scheduled["status"], "pending");
    let id: Uuid = scheduled["id"].as_str().unwrap().parse().unwrap();

    let (status, body) =
        app.call(Method::POST, "/functions/publish-scheduled-posts", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"processed": 1}));
    assert_eq!(app.store.scheduled_status(id).await, Some(ScheduledPostStatus::Published));

    // Already published: a second run finds nothing.
    let (_, body) = app.call(Method::POST, "/functions/publish-scheduled-posts", None, None).await;
    assert_eq!(body, json!({"processed": 0}));
}

#[tokio::test]
async fn schedule_rejects_unknown_platform_tags() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .call(
            Method::POST,
            "/api/posts/schedule",
            Some(USER),
            Some(json!({
                "content": "Hello",
                "platforms": ["LinkedIn", "MySpace"],
                "scheduled_at": "2025-01-01T10:00:00Z"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "unsupported_platform");
    assert!(app.store.scheduled.lock().await.is_empty());
}

#[tokio::test]
async fn worker_query_failure_answers_500_with_message() {
    let app = TestApp::spawn().await;
    app.store.fail_find_due.store(true, std::sync::atomic::Ordering::SeqCst);

    let (status, body) =
        app.call(Method::POST, "/functions/publish-scheduled-posts", None, None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("storage select failed"));
}

#[tokio::test]
async fn worker_trigger_requires_configured_secret() {
    let mut config = Config::default();
    config.worker.trigger_secret = Some("cron-secret".to_string());
    let app = TestApp::with_config(config).await;

    let rejected: [&[(&str, &str)]; 2] = [&[], &[("X-Worker-Secret", "wrong")]];
    for headers in rejected {
        let (status, body) = app
            .call_with_headers(Method::POST, "/functions/publish-scheduled-posts", None, headers, None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["kind"], "unauthorized");
    }

    let (status, body) = app
        .call_with_headers(
            Method::POST,
            "/functions/publish-scheduled-posts",
            None,
            &[("X-Worker-Secret", "cron-secret")],
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"processed": 0}));
}

#[tokio::test]
async fn linkedin_message_is_sent_and_recorded() {
    let app = TestApp::with_credentials(StaticCredentials::default().with(Platform::LinkedIn, "li"))
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/messages"))
        .and(body_partial_json(json!({
            "recipients": ["urn:li:person:abc"],
            "body": "Hi there"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/messages",
            Some(USER),
            Some(json!({
                "content": "Hi there",
                "recipient_urn": "urn:li:person:abc",
                "kind": "connection"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "sent");
    assert_eq!(app.store.messages.lock().await.len(), 1);
}

#[tokio::test]
async fn calendar_fetch_passes_provider_token_and_status() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/calendar/v3/calendars/primary/events"))
        .and(header("authorization", "Bearer g-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "e1", "summary": "Standup"}]
        })))
        .mount(&app.upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/me/events"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call_with_headers(
            Method::GET,
            "/api/calendar/google",
            Some(USER),
            &[("X-Provider-Token", "g-token")],
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": "e1", "summary": "Standup"}]));

    let (status, body) = app
        .call_with_headers(
            Method::GET,
            "/api/calendar/outlook",
            Some(USER),
            &[("X-Provider-Token", "o-token")],
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], 403);
}

#[tokio::test]
async fn calendar_fetch_without_token_is_a_configuration_error() {
    let app = TestApp::spawn().await;
    let (status, body) = app.call(Method::GET, "/api/calendar/linkedin", Some(USER), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "configuration");
    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn calendar_sync_normalises_connected_providers_only() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/calendar/v3/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "e1",
                "summary": "Standup",
                "start": {"dateTime": "2025-01-02T09:00:00Z"},
                "end": {"dateTime": "2025-01-02T09:15:00Z"}
            }]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, body) = app
        .call(Method::POST, "/api/calendar/sync", Some(USER), Some(json!({"google": "g"})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Standup");
    assert_eq!(body[0]["source"], "google");
    assert_eq!(app.upstream_request_count().await, 1);
}
