#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Header name parse error: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),
    #[error("Header value parse error: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}
