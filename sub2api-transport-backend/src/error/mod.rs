use sub2api_transport::errors::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Transport error: `{0}`")]
    Transport(#[from] TransportError),
    #[error("Backend error: code = {code}, message = `{message:?}`")]
    Backend { code: i64, message: Option<String> },
    #[error("Utils error: `{0}`")]
    Utils(#[from] sub2api_utils::error::Error),
    #[error("Config error: `{0}`")]
    Config(String),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_network_error(),
            Error::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }

    /// HTTP status of a non-success response, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_aborted())
    }

    /// Message the backend attached to the failure, read from the envelope of
    /// either a non-zero `code` or an error status body.
    pub fn backend_message(&self) -> Option<String> {
        match self {
            Error::Backend { message, .. } => message.clone(),
            Error::Transport(TransportError::HttpStatus { body, .. }) => {
                sub2api_utils::serde_func::serde_from_str::<crate::response::BackendResponse>(body)
                    .ok()
                    .and_then(|res| res.message)
            }
            _ => None,
        }
    }
}
