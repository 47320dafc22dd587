//! Coverage for the JSON array log: round trips, corruption recovery, and
//! failure reporting.

use std::fs;
use std::path::PathBuf;

use quickchat::messaging::record::MessageRecord;
use quickchat::store::{append_message, read_log};

fn composed(batch_index: usize, recipient: &str, content: &str) -> MessageRecord {
    let mut record = MessageRecord::new(batch_index);
    record.set_recipient(recipient);
    record.set_content(content);
    record.derive_fingerprint(batch_index);
    record
}

fn log_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("messages.json")
}

#[test]
fn round_trip_preserves_fields_and_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);

    let records: Vec<MessageRecord> = (0..3)
        .map(|i| composed(i, "+27111111", &format!("Message number {i} here.")))
        .collect();
    for record in &records {
        let outcome = append_message(record, &path).expect("append succeeds");
        assert!(!outcome.recovered_from_corruption);
    }

    let stored = read_log(&path).expect("log parses");
    assert_eq!(stored.len(), 3);
    for (record, entry) in records.iter().zip(&stored) {
        assert_eq!(entry.id, record.id());
        assert_eq!(entry.sequence_number, record.sequence_number());
        assert_eq!(entry.recipient, record.recipient());
        assert_eq!(entry.content, record.content());
        assert_eq!(entry.fingerprint.as_str(), record.fingerprint().expect("derived"));
    }
}

#[test]
fn file_content_is_a_json_array_with_wire_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);

    append_message(&composed(0, "+27111111", "On the wire."), &path).expect("append succeeds");

    let contents = fs::read_to_string(&path).expect("file readable");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let entries = value.as_array().expect("top level is an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["Message"], "On the wire.");
    assert_eq!(entries[0]["Recipient"], "+27111111");
    assert!(entries[0]["MessageID"].is_string());
    assert!(entries[0]["NumMessagesSent"].is_u64());
    assert!(entries[0]["MessageHash"].is_string());
}

#[test]
fn garbage_log_is_discarded_with_warning_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);
    fs::write(&path, "not json at all {{{").expect("seed garbage");

    let outcome =
        append_message(&composed(0, "+27111111", "After garbage."), &path).expect("append succeeds");
    assert!(outcome.recovered_from_corruption);
    assert_eq!(outcome.entries, 1);

    let stored = read_log(&path).expect("log parses after recovery");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].content, "After garbage.");
}

#[test]
fn non_array_json_is_discarded_with_warning_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);
    fs::write(&path, r#"{"MessageID": "not an array"}"#).expect("seed object");

    let outcome =
        append_message(&composed(0, "+27111111", "After object."), &path).expect("append succeeds");
    assert!(outcome.recovered_from_corruption);
    assert_eq!(outcome.entries, 1);
}

#[test]
fn empty_file_starts_fresh_without_warning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);
    fs::write(&path, "").expect("seed empty file");

    let outcome =
        append_message(&composed(0, "+27111111", "Into empty file."), &path).expect("append succeeds");
    assert!(!outcome.recovered_from_corruption);
    assert_eq!(outcome.entries, 1);
}

#[test]
fn missing_file_reads_as_empty_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stored = read_log(&log_path(&dir)).expect("missing file is empty");
    assert!(stored.is_empty());
}

#[test]
fn foreign_array_elements_survive_an_append() {
    // A valid array with entries that are not message-shaped is preserved
    // as-is; the new message lands after them.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);
    fs::write(&path, r#"[{"unrelated": true}]"#).expect("seed foreign array");

    let outcome =
        append_message(&composed(0, "+27111111", "Appended after."), &path).expect("append succeeds");
    assert!(!outcome.recovered_from_corruption);
    assert_eq!(outcome.entries, 2);

    let contents = fs::read_to_string(&path).expect("file readable");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let entries = value.as_array().expect("array");
    assert_eq!(entries[0]["unrelated"], true);
    assert_eq!(entries[1]["Message"], "Appended after.");
}

#[test]
fn storing_does_not_count_as_sending() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = log_path(&dir);
    let session = quickchat::session::Session::new();

    append_message(&composed(0, "+27111111", "Stored, not sent."), &path).expect("append succeeds");

    assert_eq!(session.total_sent(), 0);
    assert!(session.sent_records().is_empty());
}

#[test]
fn unwritable_path_reports_store_failure() {
    // Writing over a directory fails; the error is returned, not panicked.
    let dir = tempfile::tempdir().expect("tempdir");
    let result = append_message(&composed(0, "+27111111", "Will not land."), dir.path());
    assert!(result.is_err());
}
