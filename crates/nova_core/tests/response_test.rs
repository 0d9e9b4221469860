use nova_core::ConverseResponse;
use serde_json::json;

fn synthetic_response() -> ConverseResponse {
    ConverseResponse::new(json!({
        "output": {
            "message": {
                "role": "assistant",
                "content": [
                    {"reasoningContent": {"reasoningText": {"text": "thinking"}}},
                    {"text": "Three brute force attempts were followed by a lockout."}
                ]
            }
        },
        "stopReason": "end_turn",
        "usage": {"inputTokens": 812, "outputTokens": 240, "totalTokens": 1052},
        "metrics": {"latencyMs": 5130}
    }))
}

#[test]
fn test_round_trip_changes_no_field() {
    let response = synthetic_response();

    let text = response.to_pretty_json().expect("serializable");
    let parsed: ConverseResponse = serde_json::from_str(&text).expect("parseable");

    assert_eq!(parsed, response);
}

#[test]
fn test_serializes_transparently() {
    let response = synthetic_response();
    let value = serde_json::to_value(&response).expect("serializable");
    assert_eq!(&value, response.body());
}

#[test]
fn test_pretty_output_is_indented() {
    let text = ConverseResponse::new(json!({"stopReason": "end_turn"}))
        .to_pretty_json()
        .expect("serializable");
    assert_eq!(text, "{\n  \"stopReason\": \"end_turn\"\n}");
}
