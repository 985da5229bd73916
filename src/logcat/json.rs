//! JSON pretty-printing for log output.

use serde_json::{Deserializer, Value};

/// Emitted in place of the body when JSON input cannot be parsed.
pub const PARSE_ERROR_PLACEHOLDER: &str = "Parse json error";

// Characters that end an unquoted literal, as read by lenient JSON tokenizers.
const LITERAL_DELIMITERS: &str = ",:]}/\\\"[{;=#";

/// Re-format `text` for logging.
///
/// Only the first JSON value is read; anything after it is ignored. Objects
/// and arrays are re-serialized with 2-space indentation, keeping key order,
/// and scalars are printed in their plain form. A bare word (unquoted
/// literal) is printed up to its first delimiter. Everything else becomes
/// [`PARSE_ERROR_PLACEHOLDER`].
pub fn format_json(text: &str) -> String {
    let trimmed = text.trim();
    let first = Deserializer::from_str(trimmed).into_iter::<Value>().next();

    match first {
        Some(Ok(value @ (Value::Object(_) | Value::Array(_)))) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| PARSE_ERROR_PLACEHOLDER.to_string()),
        Some(Ok(Value::String(s))) => s,
        Some(Ok(value)) => value.to_string(),
        Some(Err(e)) => bare_literal(trimmed).unwrap_or_else(|| {
            tracing::trace!(error = %e, "JSON log input did not parse");
            PARSE_ERROR_PLACEHOLDER.to_string()
        }),
        None => PARSE_ERROR_PLACEHOLDER.to_string(),
    }
}

/// Leading unquoted literal of `text`, or `None` if it starts with a
/// delimiter.
fn bare_literal(text: &str) -> Option<String> {
    let literal: &str = text
        .split(|c: char| c < ' ' || LITERAL_DELIMITERS.contains(c))
        .next()
        .unwrap_or_default()
        .trim_end();
    if literal.is_empty() {
        None
    } else {
        Some(literal.to_string())
    }
}
