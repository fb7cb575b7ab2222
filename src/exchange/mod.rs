pub mod publisher;
pub mod reaper;
pub mod waiter;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File names inside the exchange directory. The responder contract is
/// keyed on these: read `request.json`, write `response.json`, then
/// remove `.lock` last.
pub const REQUEST_FILE: &str = "request.json";
pub const RESPONSE_FILE: &str = "response.json";
pub const LOCK_FILE: &str = ".lock";

/// Paths of the single-slot exchange: one request, one response, one
/// lock marker. No queue and no request ids; at most one exchange is
/// outstanding at a time.
#[derive(Debug, Clone)]
pub struct ExchangePaths {
    dir: PathBuf,
}

impl ExchangePaths {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn request(&self) -> PathBuf {
        self.dir.join(REQUEST_FILE)
    }

    pub fn response(&self) -> PathBuf {
        self.dir.join(RESPONSE_FILE)
    }

    pub fn lock(&self) -> PathBuf {
        self.dir.join(LOCK_FILE)
    }

    /// Create the exchange directory idempotently. Failure is logged and
    /// swallowed; the artifact writes fail loudly if the directory truly
    /// cannot exist.
    pub fn ensure(&self) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!(
                dir = %self.dir.display(),
                error = %e,
                "failed to create exchange directory"
            );
        }
    }
}

/// Request document written for the responder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub tool: String,
    pub parameters: RequestParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParameters {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Extract the responder's answer from a response document, in priority
/// order: string field `result`, then string field `content`, else the
/// compact serialization of the whole document.
pub fn extract_result(response: &Value) -> String {
    if let Some(result) = response.get("result").and_then(Value::as_str) {
        return result.to_string();
    }
    if let Some(content) = response.get("content").and_then(Value::as_str) {
        return content.to_string();
    }
    response.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_prefers_result_field() {
        let doc = json!({"result": "fn main() {}", "content": "ignored"});
        assert_eq!(extract_result(&doc), "fn main() {}");
    }

    #[test]
    fn extract_falls_back_to_content() {
        let doc = json!({"content": "print('hi')"});
        assert_eq!(extract_result(&doc), "print('hi')");
    }

    #[test]
    fn extract_stringifies_unknown_shape() {
        let doc = json!({"answer": 42});
        assert_eq!(extract_result(&doc), doc.to_string());
    }

    #[test]
    fn non_string_result_is_not_extracted() {
        let doc = json!({"result": 7});
        assert_eq!(extract_result(&doc), doc.to_string());
    }

    #[test]
    fn request_serialization_skips_absent_fields() {
        let req = ExchangeRequest {
            tool: "generate_code".into(),
            parameters: RequestParameters {
                prompt: "sort a list".into(),
                language: None,
                context: None,
            },
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("language"));
        assert!(!json.contains("context"));
    }
}
