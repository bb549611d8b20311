use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("http status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("request aborted")]
    Aborted,
    #[error("Utils error: {0}")]
    Utils(#[from] sub2api_utils::error::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            TransportError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, TransportError::Aborted)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Utils(sub2api_utils::Error::Http(e.into()))
    }
}
