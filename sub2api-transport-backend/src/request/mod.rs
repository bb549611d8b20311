pub mod announcement;
pub mod referral;

pub use announcement::{CreateAnnouncementReq, UpdateAnnouncementReq};
pub use referral::AdminReferralListReq;

use crate::consts::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// `page` / `page_size` query. Values are passed through as-is; the backend clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageReq {
    pub page: i64,
    pub page_size: i64,
}

impl PageReq {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageReq {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}
