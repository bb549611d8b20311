use crate::{api::BackendApi, consts::endpoint, response_vo::announcement::Announcement};

impl BackendApi {
    /// Active announcements, highest priority first. Public endpoint.
    pub async fn announcement_active_list(&self) -> Result<Vec<Announcement>, crate::Error> {
        self.get_request::<(), _>(endpoint::ANNOUNCEMENTS, None)
            .await
    }
}
