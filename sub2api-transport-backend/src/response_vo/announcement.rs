use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// `active` / `inactive` on the stock backend; kept as free text.
    pub status: String,
    #[serde(default)]
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
