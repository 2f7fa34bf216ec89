use super::ArticleLifecycle;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleImage,
};

impl ArticleLifecycle<'_> {
    /// Recompute the slug from the (possibly edited) title. The slug id is
    /// never touched.
    pub fn update(mut self) -> ApplicationResult<Self> {
        self.article()?;
        self.generate_slug().map_err(ApplicationError::update)?;
        Ok(self)
    }

    /// Resolve the image of an edited article.
    ///
    /// An edit submitted without a replacement file leaves the image `Unset`;
    /// `previous` (the file name stored before the edit) is restored in that
    /// case. A pending upload is stored exactly like on create.
    pub async fn update_image(mut self, previous: Option<String>) -> ApplicationResult<Self> {
        let article = self
            .article
            .as_mut()
            .ok_or(ApplicationError::NoCurrentArticle)?;

        if matches!(article.image, ArticleImage::Unset) {
            article.image = ArticleImage::from_stored(previous);
        } else if article.image.is_pending() {
            let stored = match self.store_pending_image().await {
                Ok(stored) => stored,
                Err(err) => {
                    self.cleanup_moved_image().await;
                    return Err(ApplicationError::image_update(err));
                }
            };
            // Same name as the previous image means the old file was
            // overwritten in place; it must survive a failed save.
            if stored.is_some() && stored == previous {
                self.moved_image = None;
            }
        }

        Ok(self)
    }
}
