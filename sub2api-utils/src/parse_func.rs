use std::str::FromStr as _;

use reqwest::header::{HeaderName, HeaderValue};

pub fn header_name_from_str(name: &str) -> Result<HeaderName, crate::Error> {
    HeaderName::from_str(name).map_err(|e| crate::Error::Parse(e.into()))
}

pub fn header_value_from_str(value: &str) -> Result<HeaderValue, crate::Error> {
    HeaderValue::from_str(value).map_err(|e| crate::Error::Parse(e.into()))
}

/// `Authorization` value for a bearer token, marked sensitive so it never shows up in debug output.
pub fn bearer_header_value(token: &str) -> Result<HeaderValue, crate::Error> {
    let mut value = header_value_from_str(&format!("Bearer {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}
