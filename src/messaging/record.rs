//! The message record entity and its send operation.

use crate::session::Session;

use super::fingerprint::derive_fingerprint;
use super::ident::generate_message_id;

/// Fixed confirmation returned by a successful send.
pub const SEND_CONFIRMATION: &str = "Message sent";

/// A single candidate message being composed.
///
/// Created with a 0-based batch index, then filled in by the caller through
/// the unconditional setters. Validation is a separate pre-check step (see
/// [`super::validate`]); the setters accept whatever they are given so that
/// the caller stays in charge of rejection and re-prompting.
#[derive(Debug, Clone)]
pub struct MessageRecord {
    id: String,
    sequence_number: u32,
    recipient: String,
    content: String,
    fingerprint: Option<String>,
}

impl MessageRecord {
    /// Create a record for position `batch_index` (0-based) in the current
    /// batch.
    ///
    /// Generates a fresh random ID and sets the 1-based sequence number.
    pub fn new(batch_index: usize) -> Self {
        let sequence = u32::try_from(batch_index.saturating_add(1)).unwrap_or(u32::MAX);
        Self {
            id: generate_message_id(),
            sequence_number: sequence,
            recipient: String::new(),
            content: String::new(),
            fingerprint: None,
        }
    }

    /// The 10-digit message ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 1-based position of this record within the current batch.
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// The recipient address, empty until set.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// The message content, empty until set.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The cached fingerprint, `None` until [`Self::derive_fingerprint`]
    /// runs.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Set the recipient address. No validation is performed here.
    pub fn set_recipient(&mut self, recipient: &str) {
        self.recipient = recipient.to_owned();
    }

    /// Set the message content. No validation is performed here.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_owned();
    }

    /// Derive the fingerprint from this record's ID and content plus the
    /// caller-supplied index, cache it on the record, and return it.
    ///
    /// Deriving twice with the same inputs yields the same value; reads go
    /// through the cached copy in [`Self::fingerprint`].
    pub fn derive_fingerprint(&mut self, index: usize) -> String {
        let hash = derive_fingerprint(&self.id, index, &self.content);
        self.fingerprint = Some(hash.clone());
        hash
    }

    /// Send this message: count it against the session and return the fixed
    /// confirmation.
    ///
    /// Does not validate and does not append to the session list — the
    /// caller calls [`Session::record_send`] afterwards, so discarded or
    /// failed sends never appear in the sent list.
    pub fn send(&self, session: &mut Session) -> &'static str {
        session.increment_sent();
        SEND_CONFIRMATION
    }

    /// Multi-line details block for callers to display.
    pub fn summary(&self) -> String {
        format!(
            "Message ID: {}\nMessage Hash: {}\nRecipient: {}\nMessage: {}",
            self.id,
            self.fingerprint.as_deref().unwrap_or("(none)"),
            self.recipient,
            self.content
        )
    }
}
