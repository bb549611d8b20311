use std::{collections::HashMap, time::Duration};

use serde::Deserialize;

/// Connection settings for [`crate::BackendApi`], usually loaded from YAML:
///
/// ```yaml
/// base_url: https://example.com/api/v1
/// token: eyJhbGciOi...
/// timeout_secs: 15
/// headers:
///   Accept-Language: en
/// ```
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BackendApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl BackendApiConfig {
    pub fn new(config_content: &str) -> Result<Self, crate::Error> {
        let config: BackendApiConfig =
            sub2api_utils::serde_func::serde_yaml_from_str(config_content)?;
        if let Some(base_url) = &config.base_url
            && base_url.trim().is_empty()
        {
            return Err(crate::Error::Config("base_url is empty".to_string()));
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(crate::consts::BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
