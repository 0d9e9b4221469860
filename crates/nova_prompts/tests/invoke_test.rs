use async_trait::async_trait;
use nova_error::{BedrockError, BedrockErrorKind};
use nova_prompts::{
    Catalog, ConverseDriver, ConverseRequest, ConverseResponse, DEFAULT_MODEL_ID, NovaErrorKind,
    NovaResult, invoke, load_catalog, parse_var, vars_from_pairs,
};
use serde_json::json;
use std::sync::Mutex;

/// Records every call and answers with a fixed body.
struct RecordingDriver {
    reply: serde_json::Value,
    calls: Mutex<Vec<(String, ConverseRequest)>>,
}

impl RecordingDriver {
    fn new(reply: serde_json::Value) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConverseDriver for RecordingDriver {
    async fn converse(
        &self,
        model_id: &str,
        request: &ConverseRequest,
    ) -> NovaResult<ConverseResponse> {
        self.calls
            .lock()
            .expect("lock")
            .push((model_id.to_string(), request.clone()));
        Ok(ConverseResponse::new(self.reply.clone()))
    }
}

struct ThrottledDriver;

#[async_trait]
impl ConverseDriver for ThrottledDriver {
    async fn converse(&self, _: &str, _: &ConverseRequest) -> NovaResult<ConverseResponse> {
        Err(BedrockError::new(BedrockErrorKind::Api {
            status: 429,
            message: "ThrottlingException".to_string(),
        })
        .into())
    }
}

#[tokio::test]
async fn test_invoke_sends_prompt_request_once() {
    let reply = json!({"output": {"message": {"role": "assistant", "content": [{"text": "ok"}]}}});
    let driver = RecordingDriver::new(reply.clone());
    let prompt = Catalog::builtin()
        .expect("builtin")
        .resolve("event_detection")
        .expect("known prompt");

    let response = invoke(&driver, DEFAULT_MODEL_ID, &prompt).await.expect("succeeds");

    assert_eq!(response.body(), &reply);
    let calls = driver.calls.lock().expect("lock");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, DEFAULT_MODEL_ID);
    assert_eq!(calls[0].1, prompt.to_request().expect("valid"));
}

#[tokio::test]
async fn test_rendered_prompt_reaches_driver() {
    let driver = RecordingDriver::new(json!({}));
    let prompt = Catalog::builtin()
        .expect("builtin")
        .resolve("long_context")
        .expect("known prompt")
        .render(&vars_from_pairs([parse_var("domain=securities law").expect("pair")]));

    invoke(&driver, DEFAULT_MODEL_ID, &prompt).await.expect("succeeds");

    let calls = driver.calls.lock().expect("lock");
    let body = serde_json::to_value(&calls[0].1).expect("serializable");
    let system = body["system"][0]["text"].as_str().expect("system text");
    assert!(system.contains("securities law"));
    assert!(!system.contains("{domain}"));
}

#[tokio::test]
async fn test_driver_errors_propagate() {
    let prompt = Catalog::builtin()
        .expect("builtin")
        .resolve("software_engineering/code_refactoring")
        .expect("known prompt");

    let err = invoke(&ThrottledDriver, DEFAULT_MODEL_ID, &prompt)
        .await
        .expect_err("throttled");
    match err.kind() {
        NovaErrorKind::Bedrock(e) => assert!(e.kind.is_throttled()),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_load_catalog_with_extra_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("haiku.toml"),
        r#"
[prompt]
name = "haiku"
category = "creative"
description = "Write a haiku."

[system]
text = "You are a poet."

[user]
text = "Write a haiku about {topic}."
"#,
    )
    .expect("write prompt");

    let builtin = load_catalog(None).expect("builtin");
    let extended = load_catalog(Some(dir.path())).expect("extended");

    assert_eq!(extended.len(), builtin.len() + 1);
    assert!(extended.get("creative/haiku").is_some());
}

#[test]
fn test_parse_var() {
    assert_eq!(
        parse_var("query=a=b").expect("pair"),
        ("query".to_string(), "a=b".to_string())
    );
    assert_eq!(
        parse_var("empty=").expect("pair"),
        ("empty".to_string(), String::new())
    );
    assert!(parse_var("=value").is_err());
    assert!(parse_var("novalue").is_err());
}

#[test]
fn test_later_vars_win() {
    let vars = vars_from_pairs([
        ("domain".to_string(), "law".to_string()),
        ("domain".to_string(), "finance".to_string()),
    ]);
    assert_eq!(vars["domain"], "finance");
}
