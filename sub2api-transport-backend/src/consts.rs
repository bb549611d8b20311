pub const BASE_URL: &str = "http://localhost:8080/api/v1";

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Backend envelope code for a successful call.
pub const SUCCESS_CODE: i64 = 0;

pub mod endpoint {
    pub mod admin {
        pub const ANNOUNCEMENTS: &str = "admin/announcements";

        pub const REFERRALS: &str = "admin/referrals";
        pub const REFERRALS_STATS: &str = "admin/referrals/stats";

        pub fn announcement(id: i64) -> String {
            format!("{ANNOUNCEMENTS}/{id}")
        }
    }

    // public, no admin role required
    pub const ANNOUNCEMENTS: &str = "announcements";

    pub const REFERRAL_CODE: &str = "referral/code";
    pub const REFERRAL_INVITEES: &str = "referral/invitees";
    pub const REFERRAL_STATS: &str = "referral/stats";
}
