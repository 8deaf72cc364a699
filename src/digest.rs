//! Content Digest - SHA-256 over Canonical JSON
//!
//! Two assemblies of the same record must produce the same block sequence;
//! the digest makes that checkable and gives the CLI a stable provenance
//! line for each run.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::blocks::LayoutBlock;

/// SHA-256 of `data` as a lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Serialize with sorted object keys and no whitespace, so equal values
/// always hash equally.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::to_value(value)?;
    serde_json::to_string(&sort_value(&value))
}

fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sort_value(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        _ => value.clone(),
    }
}

/// Digest of an assembled block sequence, order-sensitive.
pub fn assembly_digest(blocks: &[LayoutBlock]) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(&blocks)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{TextBlock, TextClass};
    use serde_json::json;

    #[test]
    fn canonical_json_sorts_keys() {
        let object = json!({"z": 1, "a": 2, "m": 3});
        assert_eq!(canonical_json(&object).unwrap(), r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn digest_is_stable_across_runs() {
        let blocks = vec![
            LayoutBlock::Text(TextBlock::plain(TextClass::Body, "alpha")),
            LayoutBlock::Rule,
        ];
        assert_eq!(
            assembly_digest(&blocks).unwrap(),
            assembly_digest(&blocks).unwrap()
        );
    }

    #[test]
    fn digest_is_order_sensitive() {
        let a = LayoutBlock::Text(TextBlock::plain(TextClass::Body, "alpha"));
        let b = LayoutBlock::Text(TextBlock::plain(TextClass::Body, "beta"));
        let forward = assembly_digest(&[a.clone(), b.clone()]).unwrap();
        let reversed = assembly_digest(&[b, a]).unwrap();
        assert_ne!(forward, reversed);
    }
}
