pub mod announcement;
pub mod referral;

/// Paginated list payload: `{"items": [...], "total": 42, "page": 1, "page_size": 20, "pages": 3}`.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(
        default = "Vec::new",
        deserialize_with = "sub2api_utils::serde_func::null_as_default"
    )]
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    #[serde(default)]
    pub pages: i64,
}

impl<T> Paginated<T> {
    /// A well-behaved backend never returns more items than `page_size`.
    pub fn is_within_page_size(&self) -> bool {
        i64::try_from(self.items.len()).is_ok_and(|len| len <= self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.total
    }
}
