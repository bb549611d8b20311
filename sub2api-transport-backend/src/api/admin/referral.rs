use sub2api_transport::AbortSignal;

use crate::{
    api::BackendApi,
    consts::endpoint::admin,
    request::AdminReferralListReq,
    response::BackendResponse,
    response_vo::{
        Paginated,
        referral::{AdminReferral, AdminReferralStats},
    },
};

impl BackendApi {
    /// Lists every referral relationship.
    ///
    /// When `signal` is given and gets aborted while the request is in flight,
    /// the request is dropped and the call fails with an aborted error.
    pub async fn admin_referral_list(
        &self,
        req: &AdminReferralListReq,
        signal: Option<AbortSignal>,
    ) -> Result<Paginated<AdminReferral>, crate::Error> {
        let res = self
            .client
            .get(admin::REFERRALS)
            .query(req)
            .send_with_signal::<BackendResponse>(signal)
            .await?;
        res.process()
    }

    pub async fn admin_referral_stats(&self) -> Result<AdminReferralStats, crate::Error> {
        self.get_request::<(), _>(admin::REFERRALS_STATS, None)
            .await
    }
}
