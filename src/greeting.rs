//! Greeting template applied to inbound payloads

use serde_json::Value;

/// Wraps a message in a greeting of the form `Hello, message.`.
///
/// JSON strings contribute their contents without the surrounding quotes;
/// any other value, `null` included, contributes its JSON text.
pub fn greet(message: &Value) -> String {
    format!("Hello, {}.", as_text(message))
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::greet;
    use serde_json::{json, Value};

    #[test]
    fn greets_by_name() {
        for (input, expected) in &[
            (json!("Ryan"), "Hello, Ryan."),
            (json!("world"), "Hello, world."),
            (Value::Null, "Hello, null."),
        ] {
            assert_eq!(
                &greet(input),
                expected,
                "actual greeting did not match expected greeting"
            );
        }
    }

    #[test]
    fn renders_non_string_values_as_json() {
        assert_eq!(greet(&json!(42)), "Hello, 42.");
        assert_eq!(greet(&json!({"name": "Ryan"})), r#"Hello, {"name":"Ryan"}."#);
    }
}
