use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use music_passphrase::app::{router, AppState};
use music_passphrase::core::prompt::PromptMode;
use music_passphrase::core::random::SeededRandom;
use music_passphrase::domain::model::{CompletionRequest, RawCompletion};
use music_passphrase::domain::ports::CompletionClient;
use music_passphrase::{PassphraseEngine, PassphraseError, Result};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const GENERATE: &str = "/api/generate-passphrases";

const TAYLOR_SWIFT_REPLY: &str = "1. \"Love Story\"\n2. Shake It Off\n3. Blank Space\n4. All Too Well\n5. Cruel Summer";

/// 固定回覆的補全服務
struct ScriptedClient {
    reply: std::result::Result<&'static str, &'static str>,
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<RawCompletion> {
        match self.reply {
            Ok(text) => Ok(RawCompletion::new(text)),
            Err(message) => Err(PassphraseError::upstream(message)),
        }
    }
}

fn app(reply: std::result::Result<&'static str, &'static str>) -> Router {
    let engine = PassphraseEngine::new(
        Arc::new(ScriptedClient { reply }),
        PromptMode::SongTitles,
        PromptMode::SongTitles.default_sampling("test-model"),
    )
    .with_random(Arc::new(SeededRandom::new(42)));

    router(AppState::new(engine))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(GENERATE)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_returns_cleaned_song_titles() {
    let response = app(Ok(TAYLOR_SWIFT_REPLY))
        .oneshot(post_json(
            r#"{"keywords":"Taylor Swift","addNumber":false,"addSpecialChar":false,"includeSpaces":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({
            "passphrases": ["Love story", "Shake it off", "Blank space", "All too well", "Cruel summer"],
            "success": true
        })
    );
}

#[tokio::test]
async fn test_generate_applies_decorations() {
    let response = app(Ok(TAYLOR_SWIFT_REPLY))
        .oneshot(post_json(
            r#"{"keywords":"Taylor Swift","addNumber":true,"addSpecialChar":true,"includeSpaces":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let passphrases = body["passphrases"].as_array().unwrap();
    assert_eq!(passphrases.len(), 5);

    for phrase in passphrases {
        let phrase = phrase.as_str().unwrap();
        assert!(!phrase.contains(' '), "unexpected space in {phrase}");
        let symbol = phrase.chars().last().unwrap();
        assert!("!@#$%&*?".contains(symbol));
        let digits: String = phrase
            .chars()
            .rev()
            .skip(1)
            .take(2)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let number: u8 = digits.parse().unwrap();
        assert!((10..=99).contains(&number));
    }
    assert!(passphrases[0].as_str().unwrap().starts_with("Lovestory"));
}

#[tokio::test]
async fn test_missing_options_default_to_spaces_only() {
    let response = app(Ok("Uprising"))
        .oneshot(post_json(r#"{"keywords":"Muse"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["passphrases"], json!(["Uprising"]));
}

#[tokio::test]
async fn test_missing_keywords_is_bad_request() {
    for body in [r#"{"addNumber":true}"#, r#"{"keywords":"   "}"#, "not json"] {
        let response = app(Ok(TAYLOR_SWIFT_REPLY))
            .oneshot(post_json(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            json_body(response).await,
            json!({"error": "Keywords are required", "success": false})
        );
    }
}

#[tokio::test]
async fn test_upstream_failure_is_generic_server_error() {
    let response = app(Err("Groq API error 401: invalid key sk-secret"))
        .oneshot(post_json(r#"{"keywords":"Adele"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"error": "Failed to generate passphrases", "success": false})
    );
    assert!(!body.to_string().contains("sk-secret"));
}

#[tokio::test]
async fn test_empty_completion_is_server_error() {
    let response = app(Ok("\"\"\n1. \n''"))
        .oneshot(post_json(r#"{"keywords":"Adele"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = app(Ok(TAYLOR_SWIFT_REPLY))
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(GENERATE)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(
            json_body(response).await,
            json!({"error": "Method not allowed", "success": false})
        );
    }
}

#[tokio::test]
async fn test_options_returns_empty_ok() {
    let response = app(Ok(TAYLOR_SWIFT_REPLY))
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(GENERATE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let mut request = post_json(r#"{"keywords":"Adele"}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://example.com".parse().unwrap());

    let response = app(Ok(TAYLOR_SWIFT_REPLY)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health_reports_build() {
    let response = app(Ok(TAYLOR_SWIFT_REPLY))
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["build"]["buildVersion"], env!("CARGO_PKG_VERSION"));
    assert!(body["build"]["commitHash"].is_string());
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}
