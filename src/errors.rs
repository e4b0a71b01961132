use reqwest::StatusCode;

/// Failure of a remote Puppy Bowl API operation. Callers get a value they can
/// match on instead of a swallowed exception: transport trouble, a non-success
/// status, or a body that did not decode as the expected envelope.
#[derive(Debug)]
pub enum ApiError {
    Request(reqwest::Error),
    UnexpectedStatus(StatusCode),
    Decode(reqwest::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(err) => write!(f, "request failed: {err}"),
            ApiError::UnexpectedStatus(status) => write!(f, "unexpected status: {status}"),
            ApiError::Decode(err) => write!(f, "failed to decode response body: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Request(err) | ApiError::Decode(err) => Some(err),
            ApiError::UnexpectedStatus(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Request(err)
        }
    }
}
