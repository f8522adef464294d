use serde_json::Value;

use super::{DecodedEntry, Document, LeafRecord, LeafText, Node};
use crate::error::{Error, Result};

/// Builds a fresh document from translated entries.
///
/// `decoded` must hold exactly one entry per record of `original`, in any
/// order. The value at `entry.index` lands at the path of
/// `original[entry.index]` and must have the same shape as the source leaf:
/// a string for a single text, a list of strings for a list. Leaves are
/// written in record order, so the output keeps the source key order.
/// `original` is only read.
pub fn rebuild(original: &[LeafRecord], decoded: Vec<DecodedEntry>) -> Result<Document> {
    let mut slots: Vec<Option<Value>> = vec![None; original.len()];

    for DecodedEntry { index, value } in decoded {
        let slot = slots.get_mut(index).ok_or(Error::Rebuild {
            index,
            len: original.len(),
        })?;
        if slot.replace(value).is_some() {
            return Err(Error::Decoding(format!(
                "index {index} appears more than once"
            )));
        }
    }

    let mut document = Document::new();
    for (index, (record, slot)) in original.iter().zip(slots).enumerate() {
        let value =
            slot.ok_or_else(|| Error::Decoding(format!("no entry for index {index}")))?;
        document.set_path(&record.path, leaf_node(index, record, value)?);
    }

    Ok(document)
}

fn leaf_node(index: usize, record: &LeafRecord, value: Value) -> Result<Node> {
    match (&record.text, value) {
        (LeafText::Single(_), Value::String(text)) => Ok(Node::Text(text)),
        (LeafText::Many(_), Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                other => Err(shape_mismatch(index, record, &other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Node::List),
        (_, other) => Err(shape_mismatch(index, record, &other)),
    }
}

fn shape_mismatch(index: usize, record: &LeafRecord, value: &Value) -> Error {
    let expected = match record.text {
        LeafText::Single(_) => "a string",
        LeafText::Many(_) => "a list of strings",
    };
    Error::Decoding(format!(
        "entry {index} for '{}' should be {expected}, got {value}",
        record.path
    ))
}
