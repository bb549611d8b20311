use crate::{abort::AbortSignal, TransportError};
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn json(mut self, v: impl Serialize + Debug) -> Self {
        match sub2api_utils::serde_func::serde_to_string(&v) {
            Ok(body) => tracing::info!("request params: {}", body),
            Err(_) => tracing::info!("request params: {:?}", v),
        }
        self.0 = self.0.json(&v);
        self
    }

    pub fn query(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request query: {:?}", v);
        self.0 = self.0.query(&v);
        self
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let response = self.send_string().await?;
        Ok(sub2api_utils::serde_func::serde_from_str(&response)?)
    }

    /// Like [`ReqBuilder::send`], but gives up as soon as `signal` is aborted.
    ///
    /// The in-flight request is dropped on abort, so the call never resolves with data.
    pub async fn send_with_signal<T: DeserializeOwned>(
        self,
        signal: Option<AbortSignal>,
    ) -> Result<T, TransportError> {
        let Some(signal) = signal else {
            return self.send().await;
        };

        if signal.is_aborted() {
            tracing::debug!("request aborted before sending");
            return Err(TransportError::Aborted);
        }

        tokio::select! {
            biased;
            _ = signal.aborted() => {
                tracing::info!("request aborted");
                Err(TransportError::Aborted)
            }
            res = self.send::<T>() => res,
        }
    }

    pub async fn send_string(self) -> Result<String, TransportError> {
        let res = self.0.send().await?;

        let status = res.status();
        let response = res.text().await?;
        if !status.is_success() {
            tracing::warn!("non-success status {}: {}", status, response);
            return Err(TransportError::HttpStatus {
                status,
                body: response,
            });
        }
        tracing::debug!("response = {}", response);

        Ok(response)
    }
}
