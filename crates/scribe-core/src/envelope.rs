//! In-band status handling for agent responses.
//!
//! The agents answer HTTP 200 even when they fail, reporting the problem as
//! `{"status": "error", "message": ...}` or `{"error": ...}`. Pages use
//! [`interpret`] so that such a body is shown as a failure.

use serde_json::Value;

/// Split a relayed response body into success payload or error text.
pub fn interpret(body: Value) -> Result<Value, String> {
    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        return Err(error_text(&body, error));
    }
    if body.get("status").and_then(Value::as_str) == Some("error") {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("An error occurred");
        return Err(message.to_string());
    }
    Ok(body)
}

/// The human-readable `message` of a successful response, if any.
pub fn message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str).filter(|m| !m.is_empty())
}

fn error_text(body: &Value, error: &Value) -> String {
    let headline = match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match body.get("details") {
        Some(Value::String(details)) if !details.is_empty() => format!("{}: {}", headline, details),
        Some(details) if !details.is_null() => format!("{}: {}", headline, details),
        _ => headline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_passes_through() {
        let body = json!({"status": "success", "article": "text"});
        assert_eq!(interpret(body.clone()), Ok(body));
    }

    #[test]
    fn test_status_error_uses_message() {
        let body = json!({"status": "error", "message": "quota exhausted"});
        assert_eq!(interpret(body), Err("quota exhausted".to_string()));
        assert_eq!(
            interpret(json!({"status": "error"})),
            Err("An error occurred".to_string())
        );
    }

    #[test]
    fn test_relay_error_includes_details() {
        let body = json!({"error": "Failed to run writing agent", "details": "boom"});
        assert_eq!(interpret(body), Err("Failed to run writing agent: boom".to_string()));
    }

    #[test]
    fn test_message_lookup() {
        assert_eq!(message(&json!({"message": "Done"})), Some("Done"));
        assert_eq!(message(&json!({"message": ""})), None);
    }
}
