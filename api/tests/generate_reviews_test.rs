use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use httpmock::prelude::*;
use scanreview_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

struct ApiContext {
    llm: MockServer,
    server: TestServer,
}

fn args_for(llm_base_url: &str, api_key: Option<&str>) -> Args {
    let mut args = Args::parse_from([
        "scanreview-api".to_string(),
        "--deepseek-base-url".to_string(),
        llm_base_url.to_string(),
        "--server-root-path".to_string(),
        "/api".to_string(),
    ]);
    args.llm.api_key = api_key.map(str::to_string);
    args
}

fn test_server(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).expect("state builds");
    TestServer::new(router(app_state).expect("router builds")).expect("test server starts")
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let llm = MockServer::start_async().await;
        let server = test_server(args_for(&llm.base_url(), Some("test-key")));

        Self { llm, server }
    }
}

fn completion(content: &str) -> Value {
    json!({
        "id": "cmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_returns_three_reviews(ctx: &mut ApiContext) {
    let mock = ctx
        .llm
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .body_contains("Restaurant: Happy Lamb Hot Pot")
                .body_contains("Cuisine: Chinese Hot Pot");
            then.status(200).json_body(completion(
                "The lamb was tender.\nStaff were friendly.\nGreat value overall.\nOne more line.",
            ));
        })
        .await;

    let response = ctx
        .server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "en" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "reviews": [
            "The lamb was tender.",
            "Staff were friendly.",
            "Great value overall."
        ]
    }));
    mock.assert_async().await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_with_numbered_paragraphs(ctx: &mut ApiContext) {
    ctx.llm
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(completion(
                "1. 这家火锅店的羊肉非常新鲜，汤底浓郁，每一口都很满足！\n\n2. 服务员很热情，上菜速度也很快，强烈推荐给大家！\n\n3. 环境干净整洁，性价比超高，下次还会带朋友再来。",
            ));
        })
        .await;

    let response = ctx
        .server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "cn" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0], "1. 这家火锅店的羊肉非常新鲜，汤底浓郁，每一口都很满足！");
    assert_eq!(reviews[2], "3. 环境干净整洁，性价比超高，下次还会带朋友再来。");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_empty_completion_yields_empty_reviews(ctx: &mut ApiContext) {
    ctx.llm
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let response = ctx
        .server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "en" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "reviews": ["", "", ""] }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_missing_fields_are_rejected(ctx: &mut ApiContext) {
    let mock = ctx
        .llm
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(completion("unused"));
        })
        .await;

    for body in [
        json!({ "shopId": "shop_001" }),
        json!({ "language": "en" }),
        json!({ "shopId": "", "language": "en" }),
        json!({ "shopId": "shop_001", "language": null }),
        json!({}),
    ] {
        let response = ctx.server.post("/api/generate").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Missing shopId or language" }));
    }

    mock.assert_hits_async(0).await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_malformed_body_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/generate")
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing shopId or language" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unknown_shop(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/generate")
        .json(&json!({ "shopId": "unknown_shop", "language": "en" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Shop not found" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unsupported_language(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "fr" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Language not supported" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_upstream_error_status_is_relayed(ctx: &mut ApiContext) {
    ctx.llm
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("rate limit reached for deepseek-chat");
        })
        .await;

    let response = ctx
        .server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "en" }))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    response.assert_json(&json!({ "error": "Failed to generate reviews" }));
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    let server = test_server(args_for("http://127.0.0.1:1", Some("test-key")));

    let response = server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "en" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_json(&json!({ "error": "Failed to generate reviews" }));
}

#[tokio::test]
async fn test_slow_upstream_is_gateway_timeout() {
    let llm = MockServer::start_async().await;
    llm.mock_async(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .json_body(completion("Too late.\nStill too late.\nWay too late."))
            .delay(Duration::from_secs(3));
    })
    .await;

    let mut args = args_for(&llm.base_url(), Some("test-key"));
    args.server.request_timeout_secs = 1;
    let server = test_server(args);

    let response = server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "en" }))
        .await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    response.assert_json(&json!({ "error": "Failed to generate reviews" }));
}

#[tokio::test]
async fn test_missing_api_key() {
    let llm = MockServer::start_async().await;
    let mock = llm
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(completion("unused"));
        })
        .await;
    let server = test_server(args_for(&llm.base_url(), None));

    let response = server
        .post("/api/generate")
        .json(&json!({ "shopId": "shop_001", "language": "en" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "API key not configured" }));
    mock.assert_hits_async(0).await;
}
