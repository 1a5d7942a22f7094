use std::error::Error;
use std::fmt;

/// Failure of a call against the candidate collection.
///
/// Every variant means the same thing to the cache: the mutation did not
/// apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never reached the server or no response came back.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The response body was not the expected shape.
    Decode(String),
    /// No candidate with this id.
    NotFound(String),
}

impl StoreError {
    /// HTTP-style status code for this error. Transport failures map to 0.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Transport(_) => 0,
            StoreError::Status { status, .. } => *status,
            StoreError::Decode(_) => 502,
            StoreError::NotFound(_) => 404,
        }
    }

    /// True when the request never got a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "transport error: {}", msg),
            StoreError::Status { status, body } if body.is_empty() => {
                write!(f, "server responded with status {}", status)
            }
            StoreError::Status { status, body } => {
                write!(f, "server responded with status {}: {}", status, body)
            }
            StoreError::Decode(msg) => write!(f, "invalid response body: {}", msg),
            StoreError::NotFound(id) => write!(f, "candidate not found: {}", id),
        }
    }
}

impl Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return StoreError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => StoreError::Status {
                status: status.as_u16(),
                body: String::new(),
            },
            None => StoreError::Transport(err.to_string()),
        }
    }
}

/// Error returned by the editing/deletion orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The store call failed; the cache is unchanged.
    Store(StoreError),
    /// The submitted payload failed validation or could not be routed.
    Invalid(String),
    /// A submission is already in flight.
    Busy,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Store(e) => write!(f, "{}", e),
            BoardError::Invalid(msg) => write!(f, "invalid submission: {}", msg),
            BoardError::Busy => write!(f, "a submission is already in flight"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoardError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for BoardError {
    fn from(err: StoreError) -> Self {
        BoardError::Store(err)
    }
}
