//! Integration tests for `OpenAIClient::summarize` against a local
//! `wiremock` server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use digest_pulse::{
    openai::{OpenAIClient, OpenAIError},
    Summarizer,
};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn summarize_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": "gpt-4o" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&completion_body("1. Overview: short.")),
        )
        .mount(&server)
        .await;

    let client = OpenAIClient::new("test-key").with_base_url(server.uri());
    let response = client
        .summarize("the transcript text")
        .await
        .expect("request should succeed");

    assert_eq!(response.summary, "1. Overview: short.");
}

#[tokio::test]
async fn summarize_embeds_transcript_in_user_prompt() {
    let server = MockServer::start().await;

    // the user message carries the instruction template plus the transcript
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_body("ok")))
        .mount(&server)
        .await;

    let client = OpenAIClient::new("test-key").with_base_url(server.uri());
    client
        .summarize("a very distinctive transcript marker")
        .await
        .expect("request should succeed");

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).expect("json body");
    let user_content = body["messages"][1]["content"].as_str().expect("user content");

    assert!(user_content.contains("a very distinctive transcript marker"));
    assert!(user_content.contains("Recommended Actions"));
    assert_eq!(body["temperature"], json!(0.7));
}

#[tokio::test]
async fn summarize_fails_on_missing_content() {
    let server = MockServer::start().await;

    let body = json!({ "id": "chatcmpl-123", "choices": [] });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = OpenAIClient::new("test-key").with_base_url(server.uri());
    let err = client
        .summarize("the transcript text")
        .await
        .expect_err("should fail");

    match err {
        OpenAIError::Api { message, .. } => assert!(message.contains("No content")),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn summarize_surfaces_rate_limit_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = OpenAIClient::new("test-key").with_base_url(server.uri());
    let err = client
        .summarize("the transcript text")
        .await
        .expect_err("should fail");

    match err {
        OpenAIError::Api { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("rate limited"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
