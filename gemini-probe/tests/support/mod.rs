#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_probe::Client;

/// Stand-ins for the two credential variants; they only reach mock servers.
pub const FIXTURE_KEYS: [&str; 2] = ["fixture-key-listing", "fixture-key-prompt"];
pub const FIXTURE_MODEL: &str = "gemini-1.5-flash";

pub fn build_gemini_client(base_url: &str) -> Client {
    build_gemini_client_with_key(base_url, "test-key")
}

pub fn build_gemini_client_with_key(base_url: &str, api_key: &str) -> Client {
    Client::builder()
        .api_key(api_key)
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn model_json(name: &str, display_name: &str, methods: &[&str]) -> Value {
    json!({
        "name": name,
        "displayName": display_name,
        "supportedGenerationMethods": methods,
    })
}

/// Three models, two of which support `generateContent`.
pub fn three_models() -> Value {
    json!({
        "models": [
            model_json("models/gemini-1.5-flash", "Gemini 1.5 Flash", &["generateContent", "countTokens"]),
            model_json("models/text-embedding-004", "Text Embedding 004", &["embedContent"]),
            model_json("models/gemini-1.5-pro", "Gemini 1.5 Pro", &["generateContent"]),
        ]
    })
}

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}
        ]
    })
}

pub fn error_envelope(code: u16, message: &str) -> Value {
    json!({"error": {"code": code, "message": message, "status": "INTERNAL"}})
}

pub async fn mount_models(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_models_error(server: &MockServer, status: u16, message: &str) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(status).set_body_json(error_envelope(status, message)))
        .mount(server)
        .await;
}

pub async fn mount_generate(server: &MockServer, model: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{model}:generateContent")))
        .respond_with(response)
        .mount(server)
        .await;
}
