use std::sync::{Arc, Mutex};

use summary_engine::{CompletionBackend, CompletionRequest, CompletionResponse};

/// Completion backend double: records every request it receives and replays
/// a canned response (or a canned failure).
#[derive(Clone)]
pub struct MockBackend {
    pub response: serde_json::Value,
    pub calls: Arc<Mutex<Vec<CompletionRequest>>>,
    pub fail_with: Option<String>,
}

impl MockBackend {
    pub fn new(summary: &str) -> Self {
        Self::with_response(serde_json::json!({
            "id": "cmpl-mock",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": summary },
                "finish_reason": "stop"
            }]
        }))
    }

    pub fn with_response(response: serde_json::Value) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: serde_json::Value::Null,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl CompletionBackend for MockBackend {
    type Error = String;

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, Self::Error> {
        self.calls.lock().unwrap().push(request);
        if let Some(ref msg) = self.fail_with {
            return Err(msg.clone());
        }
        serde_json::from_value(self.response.clone()).map_err(|e| e.to_string())
    }
}
