//! Versioned wrapper for entry lists kept in a [`KeyValueStore`].
//!
//! Lists are written as `{"version": 1, "entries": [...]}`. A bare JSON array
//! is read as version 0, the unversioned format of earlier releases, and is
//! rewritten in the current format on the next save.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::KeyValueStore;

/// Format version written by [`encode`].
pub const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed stored data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("stored data is not an entry list")]
    NotAList,

    #[error("stored data has version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Entries recovered from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub entries: Vec<T>,
    /// Version found in storage (0 for a bare legacy array).
    pub version: u32,
    /// Records dropped because they did not deserialize.
    pub skipped: usize,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    entries: &'a [T],
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    #[serde(default)]
    entries: Vec<Value>,
}

pub fn encode<T: Serialize>(entries: &[T]) -> Result<String, EnvelopeError> {
    let envelope = EnvelopeRef {
        version: ENVELOPE_VERSION,
        entries,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a stored list, skipping individual records that fail to parse.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<Decoded<T>, EnvelopeError> {
    let (version, records) = match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => (0, records),
        value @ Value::Object(_) => {
            let envelope: RawEnvelope = serde_json::from_value(value)?;
            if envelope.version > ENVELOPE_VERSION {
                return Err(EnvelopeError::UnsupportedVersion {
                    found: envelope.version,
                    supported: ENVELOPE_VERSION,
                });
            }
            (envelope.version, envelope.entries)
        }
        _ => return Err(EnvelopeError::NotAList),
    };

    let total = records.len();
    let entries: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping stored record {}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(Decoded {
        skipped: total - entries.len(),
        entries,
        version,
    })
}

/// Read the list stored under `key`.
///
/// A missing key yields an empty list. So does undecodable data, which is
/// logged and left in place; only storage failures are returned as errors.
pub fn read_list<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Vec<T>> {
    let Some(raw) = store
        .get(key)
        .with_context(|| format!("Failed to read '{}' from storage", key))?
    else {
        return Ok(Vec::new());
    };

    match decode(&raw) {
        Ok(decoded) => {
            if decoded.version < ENVELOPE_VERSION {
                tracing::info!(
                    "Migrating '{}' from version {} to {}",
                    key,
                    decoded.version,
                    ENVELOPE_VERSION
                );
            }
            if decoded.skipped > 0 {
                tracing::warn!("Dropped {} unreadable records from '{}'", decoded.skipped, key);
            }
            Ok(decoded.entries)
        }
        Err(e) => {
            tracing::warn!("Ignoring stored '{}': {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Overwrite the list stored under `key`.
pub fn write_list<T: Serialize>(store: &impl KeyValueStore, key: &str, entries: &[T]) -> Result<()> {
    let encoded = encode(entries).with_context(|| format!("Failed to encode '{}'", key))?;
    store
        .set(key, &encoded)
        .with_context(|| format!("Failed to write '{}' to storage", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        score: u8,
    }

    fn record(name: &str, score: u8) -> Record {
        Record {
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_encode_wraps_entries_with_version() {
        let encoded = encode(&[record("a", 1)]).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["entries"][0]["name"], "a");
    }

    #[test]
    fn test_decode_reads_current_envelope() {
        let raw = encode(&[record("a", 1), record("b", 2)]).unwrap();
        let decoded: Decoded<Record> = decode(&raw).unwrap();
        assert_eq!(decoded.version, ENVELOPE_VERSION);
        assert_eq!(decoded.entries, vec![record("a", 1), record("b", 2)]);
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_decode_treats_bare_array_as_legacy() {
        let decoded: Decoded<Record> = decode(r#"[{"name":"old","score":4}]"#).unwrap();
        assert_eq!(decoded.version, 0);
        assert_eq!(decoded.entries, vec![record("old", 4)]);
    }

    #[test]
    fn test_decode_skips_bad_records() {
        let raw = r#"{"version":1,"entries":[{"name":"ok","score":3},{"name":"bad"},42]}"#;
        let decoded: Decoded<Record> = decode(raw).unwrap();
        assert_eq!(decoded.entries, vec![record("ok", 3)]);
        assert_eq!(decoded.skipped, 2);
    }

    #[test]
    fn test_decode_rejects_newer_version() {
        let err = decode::<Record>(r#"{"version":9,"entries":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            EnvelopeError::UnsupportedVersion {
                found: 9,
                supported: 1
            }
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode::<Record>("not json"),
            Err(EnvelopeError::Malformed(_))
        ));
        assert!(matches!(
            decode::<Record>("\"text\""),
            Err(EnvelopeError::NotAList)
        ));
    }

    #[test]
    fn test_read_list_falls_back_to_empty() {
        let store = MemoryStore::new();
        assert!(read_list::<Record>(&store, "k").unwrap().is_empty());

        store.set("k", "{{{").unwrap();
        assert!(read_list::<Record>(&store, "k").unwrap().is_empty());
        // Corrupt data is left alone until the next save.
        assert_eq!(store.get("k").unwrap().as_deref(), Some("{{{"));
    }

    #[test]
    fn test_write_then_read_list() {
        let store = MemoryStore::new();
        write_list(&store, "k", &[record("x", 7)]).unwrap();
        let entries: Vec<Record> = read_list(&store, "k").unwrap();
        assert_eq!(entries, vec![record("x", 7)]);
    }
}
