#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Client build failed: {0}")]
    ClientBuildFailed(String),
    #[error("Request timed out")]
    Timeout,
    #[error("request error {0}")]
    ReqError(reqwest::Error),
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::ReqError(e)
        }
    }
}
