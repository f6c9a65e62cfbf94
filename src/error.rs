use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("notification carries no sessionId")]
    MissingSessionId,
    #[error("no donation registered for session {0}")]
    UnknownSession(String),
    #[error("notification for session {session_id} rejected: {detail}")]
    NotificationMismatch { session_id: String, detail: String },
}

pub type Result<T> = std::result::Result<T, DonationError>;
