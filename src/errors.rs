use std::fmt;

/// Distinguished rate-limit signature from the Graph error convention.
///
/// The remote formats the full message as `(#4) Application request limit
/// reached`; matching on the unprefixed text survives that formatting.
pub const RATE_LIMIT_MESSAGE: &str = "Application request limit reached";

/// Numeric Graph error code for the rate-limit condition.
pub const RATE_LIMIT_CODE: i64 = 4;

/// Application-specific error types.
///
/// Every failure in the fetch → convert → store chain flattens into one of
/// these variants; the crawler logs them per uid and decides whether to
/// skip, retry, or abort.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure talking to the Graph.
    Network(String),
    /// Response body was not valid JSON for the expected shape.
    Decode(String),
    /// The remote answered with an embedded error payload for this uid.
    RemoteRejected {
        /// Human-readable message from the remote error object.
        message: String,
        /// Numeric code from the remote error object.
        code: i64,
    },
    /// The remote id field is not a canonical unsigned 64-bit decimal.
    InvalidIdentifier(String),
    /// Database-related errors.
    Storage(sqlx::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "network error: {}", msg),
            AppError::Decode(msg) => write!(f, "decode error: {}", msg),
            // The remote message already carries its own `(#code)` prefix.
            AppError::RemoteRejected { message, .. } => write!(f, "{}", message),
            AppError::InvalidIdentifier(id) => write!(f, "invalid id conversion: {:?}", id),
            AppError::Storage(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err)
    }
}

impl AppError {
    /// Returns true if this failure is the distinguished rate-limit
    /// condition, in which case the crawler pauses and retries the same uid
    /// instead of advancing.
    ///
    /// Matches on the numeric code as well as the message text; the code is
    /// the stable half of the contract, the text is what older payloads
    /// carried.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            AppError::RemoteRejected { message, code } => {
                *code == RATE_LIMIT_CODE || message.contains(RATE_LIMIT_MESSAGE)
            }
            _ => false,
        }
    }
}
