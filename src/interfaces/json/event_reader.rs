use crate::application::event::DonationEvent;
use crate::error::{DonationError, Result};
use std::io::Read;

/// Reads donation events from a JSON event log.
///
/// The log is a stream of JSON documents (newline-delimited or simply
/// concatenated); each document is one `DonationEvent`. Events are
/// deserialized lazily so large logs can be replayed without loading
/// them into memory.
pub struct EventReader<R: Read> {
    source: R,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    ///
    /// A malformed document yields an `Err` item; the caller decides
    /// whether to skip it or abort the replay.
    pub fn events(self) -> impl Iterator<Item = Result<DonationEvent>> {
        serde_json::Deserializer::from_reader(self.source)
            .into_iter()
            .map(|result| result.map_err(DonationError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = concat!(
            r#"{"event":"registered","session_id":"donation_1","amount":1500,"email":"a@b.pl"}"#,
            "\n",
            r#"{"event":"notification","sessionId":"donation_1","status":"success"}"#,
            "\n",
        );
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<DonationEvent>> = reader.events().collect();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
        assert!(matches!(
            results[0].as_ref().unwrap(),
            DonationEvent::Registered { session_id, .. } if session_id == "donation_1"
        ));
    }

    #[test]
    fn test_reader_malformed_document() {
        let data = concat!(
            r#"{"event":"registered","session_id":"donation_1","amount":1500,"email":"a@b.pl"}"#,
            "\n",
            r#"{"event":"unknown_kind","session_id":"donation_2"}"#,
            "\n",
        );
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<DonationEvent>> = reader.events().collect();

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_reader_empty_source() {
        let reader = EventReader::new("".as_bytes());
        assert_eq!(reader.events().count(), 0);
    }
}
