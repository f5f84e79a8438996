use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Cannot reach the booking service at {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Booking service responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    InvalidResponse(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Cannot read avatar file: {0}")]
    Avatar(#[from] std::io::Error),
}
