use crate::{
    api::BackendApi,
    consts::endpoint,
    request::PageReq,
    response_vo::{
        Paginated,
        referral::{InviteCode, ReferralInvitee, ReferralStats},
    },
};

// Endpoints scoped to the user behind the client's bearer token.
impl BackendApi {
    pub async fn referral_invite_code(&self) -> Result<InviteCode, crate::Error> {
        self.get_request::<(), _>(endpoint::REFERRAL_CODE, None)
            .await
    }

    pub async fn referral_invitees(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Paginated<ReferralInvitee>, crate::Error> {
        let req = PageReq::new(page, page_size);
        self.get_request(endpoint::REFERRAL_INVITEES, Some(req))
            .await
    }

    pub async fn referral_stats(&self) -> Result<ReferralStats, crate::Error> {
        self.get_request::<(), _>(endpoint::REFERRAL_STATS, None)
            .await
    }
}
