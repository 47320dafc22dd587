//! Durable message log: a JSON array file appended to across runs.
//!
//! Each append is a read-modify-rewrite: the existing array is parsed, the
//! new entry pushed, and the whole array written back pretty-printed. An
//! unreadable or malformed existing file is discarded with a warning and the
//! log restarts from an empty array — corruption is never fatal.
//!
//! # Limitations
//!
//! The log file has no locking discipline: two processes appending at once
//! can race the read-modify-rewrite and lose entries. The rewrite is not an
//! atomic rename-swap, so a crash mid-write can corrupt the file; the next
//! append recovers by starting a fresh array.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::messaging::record::MessageRecord;

/// Errors from the durable message log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The log file exists but could not be read.
    #[error("failed to read message log: {0}")]
    Read(#[source] std::io::Error),

    /// The rewritten log could not be written back.
    #[error("failed to write message log: {0}")]
    Write(#[source] std::io::Error),

    /// JSON serialization or parsing failed.
    #[error("message log serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One message as stored on disk.
///
/// Field names follow the on-disk wire format exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    /// The 10-digit message ID.
    #[serde(rename = "MessageID")]
    pub id: String,
    /// 1-based position of the message within its batch.
    #[serde(rename = "NumMessagesSent")]
    pub sequence_number: u32,
    /// Recipient address.
    #[serde(rename = "Recipient")]
    pub recipient: String,
    /// Message content.
    #[serde(rename = "Message")]
    pub content: String,
    /// Derived fingerprint; empty when never derived.
    #[serde(rename = "MessageHash")]
    pub fingerprint: String,
}

impl From<&MessageRecord> for StoredMessage {
    fn from(record: &MessageRecord) -> Self {
        Self {
            id: record.id().to_owned(),
            sequence_number: record.sequence_number(),
            recipient: record.recipient().to_owned(),
            content: record.content().to_owned(),
            fingerprint: record.fingerprint().unwrap_or_default().to_owned(),
        }
    }
}

/// Result of a successful append.
#[derive(Debug)]
pub struct AppendOutcome {
    /// Number of entries in the log after the append.
    pub entries: usize,
    /// True when the existing file was unreadable or malformed and its
    /// content was discarded before appending. A warning condition, not an
    /// error: the new entry was still written.
    pub recovered_from_corruption: bool,
}

/// Append one message to the JSON array log at `path`.
///
/// Existing entries are preserved as-is, including elements that do not
/// match the message shape. A missing or empty file starts a fresh array;
/// an unreadable or malformed file is discarded with a warning (see
/// [`AppendOutcome::recovered_from_corruption`]).
///
/// # Errors
///
/// Returns [`StoreError::Write`] when the rewritten log cannot be written
/// back, or [`StoreError::Serialization`] when the entry cannot be encoded.
/// Read-side failures never error.
pub fn append_message(record: &MessageRecord, path: &Path) -> Result<AppendOutcome, StoreError> {
    let (mut entries, recovered) = load_raw(path);

    let stored = StoredMessage::from(record);
    entries.push(serde_json::to_value(&stored)?);

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(path, json).map_err(StoreError::Write)?;

    debug!(
        path = %path.display(),
        entries = entries.len(),
        id = %stored.id,
        "message appended to log"
    );
    Ok(AppendOutcome {
        entries: entries.len(),
        recovered_from_corruption: recovered,
    })
}

/// Read the full log at `path` as typed messages.
///
/// A missing or empty file reads as an empty list.
///
/// # Errors
///
/// Returns [`StoreError::Read`] when the file exists but cannot be read,
/// or [`StoreError::Serialization`] when its content is not a valid message
/// array.
pub fn read_log(path: &Path) -> Result<Vec<StoredMessage>, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Read(e)),
    };
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&contents)?)
}

/// Load the existing log as raw JSON values, recovering from corruption.
///
/// Returns the entries plus a flag set when existing content was discarded
/// (read failure, parse failure, or non-array content).
fn load_raw(path: &Path) -> (Vec<serde_json::Value>, bool) {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return (Vec::new(), false),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "message log unreadable, starting new array");
            return (Vec::new(), true);
        }
    };
    if contents.trim().is_empty() {
        return (Vec::new(), false);
    }
    match serde_json::from_str::<serde_json::Value>(&contents) {
        Ok(serde_json::Value::Array(entries)) => (entries, false),
        Ok(_) => {
            warn!(path = %path.display(), "message log is not a JSON array, starting new array");
            (Vec::new(), true)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "message log malformed, starting new array");
            (Vec::new(), true)
        }
    }
}
