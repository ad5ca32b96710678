//! OpenAI adapter against a stubbed chat completions endpoint.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tapzilla::adapters::ai::{OpenAIConfig, OpenAIProvider};
use tapzilla::domain::foundation::{ChatSessionId, CompanyId};
use tapzilla::ports::{AIError, AIProvider, CompletionRequest, FinishReason, MessageRole, RequestMetadata};

fn provider(server: &MockServer, max_retries: u32) -> OpenAIProvider {
    OpenAIProvider::new(
        OpenAIConfig::new("sk-test")
            .with_base_url(format!("{}/v1", server.uri()))
            .with_max_retries(max_retries)
            .with_retry_base_delay(Duration::from_millis(5)),
    )
    .unwrap()
}

fn request() -> CompletionRequest {
    CompletionRequest::new(RequestMetadata::new(CompanyId::new(), ChatSessionId::new(), "trace-1"))
        .with_system_prompt("You are the AI assistant for Pro Carpet Care")
        .with_message(MessageRole::User, "I need my carpets cleaned")
        .with_max_tokens(300)
        .with_temperature(0.7)
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 12, "total_tokens": 54 }
    })
}

#[tokio::test]
async fn sends_prompt_and_parses_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 300,
            "messages": [
                { "role": "system", "content": "You are the AI assistant for Pro Carpet Care" },
                { "role": "user", "content": "I need my carpets cleaned" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Happy to help! How many rooms?")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider(&server, 0).complete(request()).await.unwrap();

    assert_eq!(response.content, "Happy to help! How many rooms?");
    assert_eq!(response.model, "gpt-4o-mini");
    assert_eq!(response.finish_reason, FinishReason::Stop);
    assert_eq!(response.usage.prompt_tokens, 42);
    assert_eq!(response.usage.completion_tokens, 12);
}

#[tokio::test]
async fn retries_server_errors_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider(&server, 2).complete(request()).await.unwrap();
    assert_eq!(response.content, "Hi there");
}

#[tokio::test]
async fn gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(3)
        .mount(&server)
        .await;

    let err = provider(&server, 2).complete(request()).await.unwrap_err();
    assert!(matches!(err, AIError::Unavailable { .. }));
}

#[tokio::test]
async fn bad_key_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server, 2).complete(request()).await.unwrap_err();
    assert!(matches!(err, AIError::AuthenticationFailed));
}

#[tokio::test]
async fn rate_limit_reads_retry_hint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached. Please try again in 7s." }
        })))
        .mount(&server)
        .await;

    let err = provider(&server, 0).complete(request()).await.unwrap_err();
    assert!(matches!(err, AIError::RateLimited { retry_after_secs: 7 }));
}

#[tokio::test]
async fn empty_choices_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-4o-mini",
            "choices": []
        })))
        .mount(&server)
        .await;

    let err = provider(&server, 0).complete(request()).await.unwrap_err();
    assert!(matches!(err, AIError::Parse(_)));
}
