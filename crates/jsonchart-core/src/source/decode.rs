use serde_json::Value;

use crate::source::SourceError;

/// Decode a payload with standard JSON rules. A UTF-8 byte order mark is tolerated.
pub fn decode_json(bytes: &[u8]) -> Result<Value, SourceError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    serde_json::from_slice(bytes).map_err(SourceError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_any_json_value() {
        assert_eq!(decode_json(b"[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(decode_json(b"null").unwrap(), json!(null));
        assert_eq!(decode_json(b" \"text\" ").unwrap(), json!("text"));
    }

    #[test]
    fn tolerates_byte_order_mark() {
        assert_eq!(decode_json(b"\xEF\xBB\xBF{}").unwrap(), json!({}));
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = decode_json(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn object_keys_keep_document_order() {
        let value = decode_json(br#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
