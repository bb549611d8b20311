use std::{collections::HashMap, time::Duration};

use crate::{errors::TransportError, request_builder::ReqBuilder};
use reqwest::header::{self, HeaderMap, HeaderValue};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared HTTP client: base url, default headers, bearer token and timeout.
///
/// Cloning is cheap; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    token: Option<HeaderValue>,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        headers_opt: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        if let Some(opt) = headers_opt {
            for (key, value) in opt {
                headers.append(
                    sub2api_utils::parse_func::header_name_from_str(&key)?,
                    sub2api_utils::parse_func::header_value_from_str(&value)?,
                );
            }
        };

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| {
                sub2api_utils::Error::Http(sub2api_utils::HttpError::ClientBuildFailed(
                    e.to_string(),
                ))
            })?;

        Ok(Self {
            base_url: normalize_base_url(base_url),
            token: None,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn replace_base_url(&mut self, base_url: &str) {
        self.base_url = normalize_base_url(base_url);
    }

    /// Sets or clears the bearer token sent as `Authorization` on every request.
    pub fn set_token(&mut self, token: Option<&str>) -> Result<(), TransportError> {
        self.token = match token {
            Some(token) => Some(sub2api_utils::parse_func::bearer_header_value(token)?),
            None => None,
        };
        Ok(())
    }

    pub fn with_token(mut self, token: &str) -> Result<Self, TransportError> {
        self.set_token(Some(token))?;
        Ok(self)
    }

    pub fn get(&self, endpoint: &str) -> ReqBuilder {
        self.request(reqwest::Method::GET, endpoint)
    }

    pub fn post(&self, endpoint: &str) -> ReqBuilder {
        self.request(reqwest::Method::POST, endpoint)
    }

    pub fn put(&self, endpoint: &str) -> ReqBuilder {
        self.request(reqwest::Method::PUT, endpoint)
    }

    pub fn delete(&self, endpoint: &str) -> ReqBuilder {
        self.request(reqwest::Method::DELETE, endpoint)
    }

    fn request(&self, method: reqwest::Method, endpoint: &str) -> ReqBuilder {
        let url = self.url(endpoint);
        tracing::info!("request {} url = {}", method, url);
        let mut build = self.client.request(method, url);
        if let Some(token) = &self.token {
            build = build.header(header::AUTHORIZATION, token.clone());
        }
        ReqBuilder(build)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn get_request<R>(&self, endpoint: &str) -> Result<R, TransportError>
    where
        R: serde::de::DeserializeOwned,
    {
        self.get(endpoint).send::<R>().await
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_owned()
}
