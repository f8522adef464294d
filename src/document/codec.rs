//! Packs leaf texts into one batch string and parses the translated batch.
//!
//! Batch layout: `0=="first"//1==["a","b"]//2=="third"`. Each token is the
//! record index, the record separator and the text as a JSON literal.

use serde_json::Value;

use super::LeafRecord;
use crate::error::{Error, Result};

/// Separates an index from its JSON payload inside a token.
pub const RECORD_SEPARATOR: &str = "==";

/// Separates tokens inside a batch.
pub const BATCH_SEPARATOR: &str = "//";

/// One entry recovered from a translated batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEntry {
    pub index: usize,
    pub value: Value,
}

/// Encodes `records` into a single batch string.
///
/// Slashes inside payloads are written as the JSON escape `\/`, so the batch
/// separator never appears inside a payload.
pub fn encode(records: &[LeafRecord]) -> Result<String> {
    let tokens = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let payload = serde_json::to_string(&record.text).map_err(Error::Encoding)?;
            Ok(format!(
                "{index}{RECORD_SEPARATOR}{}",
                payload.replace('/', "\\/")
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(tokens.join(BATCH_SEPARATOR))
}

/// Decodes a translated batch into its entries, in batch order.
///
/// All or nothing: the first malformed token fails the whole batch. A blank
/// batch decodes to no entries.
pub fn decode(batch: &str) -> Result<Vec<DecodedEntry>> {
    if batch.trim().is_empty() {
        return Ok(Vec::new());
    }

    batch.split(BATCH_SEPARATOR).map(decode_token).collect()
}

fn decode_token(token: &str) -> Result<DecodedEntry> {
    let token = token.trim();
    let (index, payload) = token.split_once(RECORD_SEPARATOR).ok_or_else(|| {
        Error::Decoding(format!("token {token:?} has no '{RECORD_SEPARATOR}'"))
    })?;

    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| Error::Decoding(format!("invalid index {:?}: {e}", index.trim())))?;

    let value = serde_json::from_str(payload.trim())
        .map_err(|e| Error::Decoding(format!("invalid payload for index {index}: {e}")))?;

    Ok(DecodedEntry { index, value })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::{KeyPath, LeafText};
    use serde_json::json;

    fn record(path: &str, text: LeafText) -> LeafRecord {
        LeafRecord {
            path: KeyPath::root().child(path),
            text,
        }
    }

    fn single(text: &str) -> LeafText {
        LeafText::Single(text.to_string())
    }

    #[test]
    fn test_encode_layout() {
        let records = vec![
            record("a", single("hello")),
            record("b", LeafText::Many(vec!["x".to_string(), "y".to_string()])),
        ];
        assert_eq!(encode(&records).unwrap(), r#"0=="hello"//1==["x","y"]"#);
    }

    #[test]
    fn test_encode_empty_records() {
        assert_eq!(encode(&[]).unwrap(), "");
    }

    #[test]
    fn test_encode_escapes_slashes_in_payload() {
        let batch = encode(&[record("url", single("see https://example.com"))]).unwrap();
        assert_eq!(batch, r#"0=="see https:\/\/example.com""#);
        assert!(!batch.contains(BATCH_SEPARATOR));
    }

    #[test]
    fn test_decode_restores_text_with_separators() {
        let text = "a // b == c \"quoted\"";
        let batch = encode(&[record("k", single(text)), record("j", single("next"))]).unwrap();
        let decoded = decode(&batch).unwrap();

        assert_eq!(
            decoded,
            vec![
                DecodedEntry {
                    index: 0,
                    value: json!(text)
                },
                DecodedEntry {
                    index: 1,
                    value: json!("next")
                },
            ]
        );
    }

    #[test]
    fn test_decode_tolerates_whitespace_around_tokens() {
        let decoded = decode(" 0 == \"hola\" // 1 ==[\"a\"]\n").unwrap();
        assert_eq!(decoded[0].index, 0);
        assert_eq!(decoded[0].value, json!("hola"));
        assert_eq!(decoded[1].value, json!(["a"]));
    }

    #[test]
    fn test_decode_splits_on_first_record_separator_only() {
        let decoded = decode(r#"0=="x == y""#).unwrap();
        assert_eq!(decoded[0].value, json!("x == y"));
    }

    #[test]
    fn test_decode_blank_batch_is_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_record_separator() {
        let err = decode(r#"0=="ok"//1:"broken""#).unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
    }

    #[test]
    fn test_decode_rejects_non_numeric_index() {
        let err = decode(r#"one=="ok""#).unwrap_err();
        assert!(matches!(err, Error::Decoding(ref m) if m.contains("invalid index")));
    }

    #[test]
    fn test_decode_rejects_negative_index() {
        assert!(matches!(decode(r#"-1=="ok""#), Err(Error::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode(r#"0=="ok"//1==not json"#).unwrap_err();
        assert!(matches!(err, Error::Decoding(ref m) if m.contains("index 1")));
    }
}
