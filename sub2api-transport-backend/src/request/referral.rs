use crate::consts::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Query for `GET /admin/referrals`. `search` is left out of the query string when blank.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminReferralListReq {
    pub page: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl AdminReferralListReq {
    pub fn new(page: i64, page_size: i64, search: Option<&str>) -> Self {
        Self {
            page,
            page_size,
            search: search.filter(|s| !s.is_empty()).map(ToString::to_string),
        }
    }
}

impl Default for AdminReferralListReq {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, None)
    }
}
