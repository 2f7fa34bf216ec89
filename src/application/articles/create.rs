// src/application/articles/create.rs
use super::ArticleLifecycle;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ARTICLE_SLUG_ID_PREFIX, ArticleImage},
        errors::DomainError,
    },
};

impl ArticleLifecycle<'_> {
    /// Prepare a new article: reserve its slug id, store a pending image
    /// upload and derive the slug from the title. Call `save` afterwards.
    ///
    /// The slug id is reserved first because the image file name embeds it.
    pub async fn create(mut self) -> ApplicationResult<Self> {
        self.article()?;

        if let Err(err) = self.run_create().await {
            self.cleanup_moved_image().await;
            return Err(ApplicationError::creation(err));
        }

        if let Some(slug_id) = self.article.as_ref().and_then(|a| a.slug_id.as_ref()) {
            tracing::info!(slug_id = %slug_id, "article prepared for creation");
        }
        Ok(self)
    }

    async fn run_create(&mut self) -> ApplicationResult<()> {
        self.generate_slug_id().await?;
        self.store_pending_image().await?;
        self.generate_slug()?;
        Ok(())
    }

    /// Reserve the next `A<n>` identifier from the store and assign it.
    pub(super) async fn generate_slug_id(&mut self) -> ApplicationResult<()> {
        let article = self
            .article
            .as_mut()
            .ok_or(ApplicationError::NoCurrentArticle)?;
        if let Some(existing) = &article.slug_id {
            return Err(DomainError::validation(format!(
                "slug id {existing} is already assigned"
            ))
            .into());
        }

        let sequence = self
            .manager
            .write_repo
            .reserve_slug_sequence(ARTICLE_SLUG_ID_PREFIX)
            .await?;
        let slug_id = self.manager.slug_service.encode_slug_id(sequence)?;
        tracing::debug!(sequence, slug_id = %slug_id, "reserved article slug id");

        article.assign_slug_id(slug_id)?;
        Ok(())
    }

    pub(super) fn generate_slug(&mut self) -> ApplicationResult<()> {
        let article = self
            .article
            .as_mut()
            .ok_or(ApplicationError::NoCurrentArticle)?;
        let slug = self.manager.slug_service.generate_slug(&article.title)?;
        article.set_slug(slug);
        Ok(())
    }

    /// Move a pending upload into the image directory and record the stored
    /// file name. Drafts without a pending upload are left untouched.
    /// Returns the stored file name when a file was written.
    pub(super) async fn store_pending_image(&mut self) -> ApplicationResult<Option<String>> {
        let manager = self.manager;
        let article = self
            .article
            .as_mut()
            .ok_or(ApplicationError::NoCurrentArticle)?;

        let ArticleImage::PendingUpload(upload) = &article.image else {
            return Ok(None);
        };
        let slug_id = article.slug_id.as_ref().ok_or_else(|| {
            DomainError::validation("slug id must be assigned before the image is stored")
        })?;

        let file_name = manager
            .slug_service
            .image_file_name(slug_id, &article.title, upload)?;
        manager
            .image_store
            .move_uploaded_file(upload, manager.image_dir(), &file_name)
            .await?;
        tracing::info!(
            file = %file_name,
            bytes = upload.len(),
            "stored article image"
        );

        article.image = ArticleImage::Stored(file_name.clone());
        self.moved_image = Some(file_name.clone());
        Ok(Some(file_name))
    }
}
