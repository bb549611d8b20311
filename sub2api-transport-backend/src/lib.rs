pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod request;
pub mod response;
pub mod response_vo;

pub use api::BackendApi;
pub use config::BackendApiConfig;
pub use error::Error;
pub use response_vo::{
    announcement::Announcement,
    referral::{AdminReferral, AdminReferralStats, InviteCode, ReferralInvitee, ReferralStats, RewardStatus},
    Paginated,
};
pub use sub2api_transport::{AbortController, AbortSignal};
