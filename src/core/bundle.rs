//! Reading and writing localization bundles.
//!
//! Bundles keep their key order through a parse/render cycle (`serde_json`
//! is built with `preserve_order`). Output uses two-space indentation, keeps
//! non-ASCII characters literal and ends with a newline.

use crate::utils::error::{InjectError, Result};
use serde_json::Value;

pub fn parse_bundle(bytes: &[u8], path: &str) -> Result<Value> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| InjectError::ParseError {
        path: path.to_string(),
        source,
    })?;

    if !value.is_object() {
        return Err(InjectError::NotAnObject {
            path: path.to_string(),
        });
    }

    Ok(value)
}

pub fn render_bundle(bundle: &Value) -> Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(bundle)?;
    out.push(b'\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_bundle(b"{\"services\": ", "en.json").unwrap_err();
        assert!(matches!(err, InjectError::ParseError { ref path, .. } if path == "en.json"));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_bundle(b"[1, 2, 3]", "es.json").unwrap_err();
        assert!(matches!(err, InjectError::NotAnObject { .. }));
    }

    #[test]
    fn test_render_keeps_order_and_unicode() {
        let bundle = parse_bundle(
            "{\"zeta\": \"Sillón\", \"alpha\": {\"b\": \"1\", \"a\": \"2\"}}".as_bytes(),
            "es.json",
        )
        .unwrap();

        let rendered = String::from_utf8(render_bundle(&bundle).unwrap()).unwrap();
        let expected = "{\n  \"zeta\": \"Sillón\",\n  \"alpha\": {\n    \"b\": \"1\",\n    \"a\": \"2\"\n  }\n}\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_object() {
        let rendered = render_bundle(&serde_json::json!({})).unwrap();
        assert_eq!(rendered, b"{}\n");
    }
}
