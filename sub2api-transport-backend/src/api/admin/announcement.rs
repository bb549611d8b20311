use crate::{
    api::BackendApi,
    consts::endpoint::admin,
    request::{CreateAnnouncementReq, PageReq, UpdateAnnouncementReq},
    response_vo::{Paginated, announcement::Announcement},
};

impl BackendApi {
    pub async fn admin_announcement_list(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Paginated<Announcement>, crate::Error> {
        let req = PageReq::new(page, page_size);
        self.get_request(admin::ANNOUNCEMENTS, Some(req)).await
    }

    pub async fn admin_announcement_create(
        &self,
        req: &CreateAnnouncementReq,
    ) -> Result<Announcement, crate::Error> {
        self.post_request(admin::ANNOUNCEMENTS, req).await
    }

    /// Partial update. An unknown `id` comes back as an HTTP 404, see [`crate::Error::is_not_found`].
    pub async fn admin_announcement_update(
        &self,
        id: i64,
        req: &UpdateAnnouncementReq,
    ) -> Result<Announcement, crate::Error> {
        self.put_request(&admin::announcement(id), req).await
    }

    pub async fn admin_announcement_delete(&self, id: i64) -> Result<(), crate::Error> {
        self.delete_request(&admin::announcement(id)).await
    }
}
