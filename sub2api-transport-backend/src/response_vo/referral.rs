use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    Pending,
    Rewarded,
}

// untagged Go records arrive with field names like `InviterID`
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AdminReferral {
    #[serde(alias = "ID")]
    pub id: i64,
    #[serde(alias = "InviterID")]
    pub inviter_id: i64,
    #[serde(alias = "InviterEmail")]
    pub inviter_email: String,
    #[serde(alias = "InviteeID")]
    pub invitee_id: i64,
    #[serde(alias = "InviteeEmail")]
    pub invitee_email: String,
    #[serde(alias = "RewardStatus")]
    pub reward_status: RewardStatus,
    #[serde(alias = "RewardAmount")]
    pub reward_amount: f64,
    #[serde(default, alias = "RewardedAt")]
    pub rewarded_at: Option<DateTime<Utc>>,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

// older backends report `total_invites` / `total_rewarded`
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AdminReferralStats {
    #[serde(alias = "total_invites")]
    pub total_referrals: i64,
    pub rewarded_count: i64,
    pub pending_count: i64,
    #[serde(alias = "total_rewarded")]
    pub total_reward_amount: f64,
}

/// One of the current user's invitees.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReferralInvitee {
    #[serde(alias = "ID")]
    pub id: i64,
    #[serde(alias = "InviteeID")]
    pub invitee_id: i64,
    #[serde(alias = "InviteeEmail")]
    pub invitee_email: String,
    #[serde(alias = "RewardStatus")]
    pub reward_status: RewardStatus,
    #[serde(alias = "RewardAmount")]
    pub reward_amount: f64,
    #[serde(default, alias = "RewardedAt")]
    pub rewarded_at: Option<DateTime<Utc>>,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReferralStats {
    #[serde(alias = "total_invites")]
    pub total_invitees: i64,
    pub rewarded_count: i64,
    pub pending_count: i64,
    #[serde(alias = "total_rewarded")]
    pub total_reward_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct InviteCode {
    pub invite_code: String,
}
