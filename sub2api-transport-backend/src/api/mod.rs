use std::collections::HashMap;

use sub2api_transport::client::HttpClient;

use crate::{config::BackendApiConfig, response::BackendResponse};

pub mod admin;
pub mod announcement;
pub mod referral;

/// Typed wrappers around the backend's REST endpoints.
///
/// Holds no state besides the shared [`HttpClient`]; every call is a single
/// round trip with no caching and no retries.
#[derive(Debug, Clone)]
pub struct BackendApi {
    pub base_url: String,
    pub client: HttpClient,
}

impl BackendApi {
    pub fn new(
        backend_url: Option<String>,
        headers_opt: Option<HashMap<String, String>>,
        token: Option<&str>,
    ) -> Result<Self, crate::Error> {
        let config = BackendApiConfig {
            base_url: backend_url,
            token: token.map(ToString::to_string),
            timeout_secs: None,
            headers: headers_opt.unwrap_or_default(),
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &BackendApiConfig) -> Result<Self, crate::Error> {
        let url = config.base_url();

        let mut headers = config.headers.clone();
        headers.insert("Accept-Encoding".to_string(), "identity".to_string());

        let mut client = HttpClient::new(url, Some(headers), config.timeout())?;
        client.set_token(config.token.as_deref())?;

        Ok(Self::with_client(client))
    }

    /// Wraps an already configured client.
    pub fn with_client(client: HttpClient) -> Self {
        Self {
            base_url: client.base_url().to_string(),
            client,
        }
    }

    pub fn replace_base_url(&mut self, base_url: &str) {
        self.client.replace_base_url(base_url);
        self.base_url = self.client.base_url().to_string();
    }

    pub fn set_token(&mut self, token: Option<&str>) -> Result<(), crate::Error> {
        Ok(self.client.set_token(token)?)
    }

    pub async fn get_request<Q, R>(&self, endpoint: &str, query: Option<Q>) -> Result<R, crate::Error>
    where
        Q: serde::Serialize + std::fmt::Debug,
        R: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let mut builder = self.client.get(endpoint);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let res = builder.send::<BackendResponse>().await?;
        res.process::<R>()
    }

    pub async fn post_request<T, R>(&self, endpoint: &str, req: T) -> Result<R, crate::Error>
    where
        T: serde::Serialize + std::fmt::Debug,
        R: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let res = self
            .client
            .post(endpoint)
            .json(req)
            .send::<BackendResponse>()
            .await?;
        res.process::<R>()
    }

    pub async fn put_request<T, R>(&self, endpoint: &str, req: T) -> Result<R, crate::Error>
    where
        T: serde::Serialize + std::fmt::Debug,
        R: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let res = self
            .client
            .put(endpoint)
            .json(req)
            .send::<BackendResponse>()
            .await?;
        res.process::<R>()
    }

    pub async fn delete_request<R>(&self, endpoint: &str) -> Result<R, crate::Error>
    where
        R: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let res = self
            .client
            .delete(endpoint)
            .send::<BackendResponse>()
            .await?;
        res.process::<R>()
    }
}
