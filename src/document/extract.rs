use super::{Document, KeyPath, LeafRecord, LeafText, Node};

/// Collects every translatable leaf of `document` in key order.
///
/// Empty strings, empty lists and non-text values are skipped. The output
/// order only depends on the document's key order, so repeated calls yield
/// identical records.
pub fn extract(document: &Document) -> Vec<LeafRecord> {
    let mut records = Vec::new();
    collect(document, &KeyPath::root(), &mut records);
    records
}

fn collect(document: &Document, prefix: &KeyPath, records: &mut Vec<LeafRecord>) {
    for (key, node) in document.iter() {
        match node {
            Node::Text(text) if !text.is_empty() => records.push(LeafRecord {
                path: prefix.child(key),
                text: LeafText::Single(text.clone()),
            }),
            Node::List(items) if !items.is_empty() => records.push(LeafRecord {
                path: prefix.child(key),
                text: LeafText::Many(items.clone()),
            }),
            Node::Branch(child) => collect(child, &prefix.child(key), records),
            Node::Text(_) | Node::List(_) | Node::Empty => {}
        }
    }
}
