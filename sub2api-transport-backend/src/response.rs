use std::fmt::Debug;

use crate::consts::SUCCESS_CODE;

/// Envelope wrapping every backend reply: `{"code": 0, "message": "success", "data": ...}`.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct BackendResponse {
    pub code: i64,
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl BackendResponse {
    pub fn process<T: serde::de::DeserializeOwned + Debug>(self) -> Result<T, crate::Error> {
        if self.code != SUCCESS_CODE {
            tracing::error!(
                "backend response: code = {}, message = {:?}",
                self.code,
                self.message
            );
            return Err(crate::Error::Backend {
                code: self.code,
                message: self.message,
            });
        }

        let data = self.data.unwrap_or(serde_json::Value::Null);
        let res = sub2api_utils::serde_func::serde_from_value::<T>(data);
        if res.is_err() {
            tracing::error!("utils serde_from_value: {:?}", res);
        }
        let res = res?;
        tracing::debug!("backend response: {:?}", res);
        Ok(res)
    }
}
