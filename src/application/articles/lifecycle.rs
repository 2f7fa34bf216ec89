// src/application/articles/lifecycle.rs
use super::ArticleManager;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleDraft},
        errors::DomainResult,
    },
};
use chrono::{DateTime, Utc};

/// One create, edit or delete of a single article.
///
/// Operations consume the lifecycle and hand it back on success so they
/// chain, e.g. `manager.with_article(draft).create().await?.save().await?`.
/// Nothing reaches the store until [`save`](Self::save) or
/// [`remove`](Self::remove). Images moved by this lifecycle are removed
/// again when a later step fails or the lifecycle is
/// [`discard`](Self::discard)ed before saving.
pub struct ArticleLifecycle<'m> {
    pub(super) manager: &'m ArticleManager,
    pub(super) article: Option<ArticleDraft>,
    pub(super) moved_image: Option<String>,
}

impl<'m> ArticleLifecycle<'m> {
    pub(super) fn new(manager: &'m ArticleManager) -> Self {
        Self {
            manager,
            article: None,
            moved_image: None,
        }
    }

    pub fn set_article(mut self, article: ArticleDraft) -> Self {
        self.article = Some(article);
        self
    }

    pub fn article(&self) -> ApplicationResult<&ArticleDraft> {
        self.article.as_ref().ok_or(ApplicationError::NoCurrentArticle)
    }

    pub fn into_article(self) -> ApplicationResult<ArticleDraft> {
        self.article.ok_or(ApplicationError::NoCurrentArticle)
    }

    /// Insert the draft, or update it when it already has an id. On success
    /// the working draft is replaced by the stored row.
    pub async fn save(mut self) -> ApplicationResult<Self> {
        let draft = self.article()?;
        let now = self.manager.clock.now();

        match self.manager.persist(draft, now).await {
            Ok(article) => {
                tracing::info!(
                    article_id = %article.id,
                    slug_id = %article.slug_id,
                    slug = %article.slug,
                    "article saved"
                );
                self.moved_image = None;
                self.article = Some(article.into());
                Ok(self)
            }
            Err(source) => {
                tracing::warn!(error = %source, "failed to save article");
                self.cleanup_moved_image().await;
                Err(ApplicationError::persistence(
                    "an error occurred while saving the article",
                )(source))
            }
        }
    }

    /// Delete the stored row of the working draft. A draft that was never
    /// saved has nothing to delete and fails with `NoCurrentArticle`.
    pub async fn remove(self) -> ApplicationResult<Self> {
        let id = self.article()?.id.ok_or(ApplicationError::NoCurrentArticle)?;

        self.manager
            .write_repo
            .delete(id)
            .await
            .map_err(ApplicationError::persistence(
                "an error occurred while deleting the article",
            ))?;

        tracing::info!(article_id = %id, "article removed");
        Ok(self)
    }

    /// Drop the lifecycle without saving, removing any image it moved.
    pub async fn discard(mut self) {
        self.cleanup_moved_image().await;
    }

    pub(super) async fn cleanup_moved_image(&mut self) {
        let Some(file_name) = self.moved_image.take() else {
            return;
        };

        let dir = self.manager.image_dir();
        match self.manager.image_store.remove_file(dir, &file_name).await {
            Ok(()) => tracing::debug!(file = %file_name, "removed unsaved article image"),
            Err(err) => tracing::warn!(
                file = %file_name,
                error = %err,
                "failed to remove unsaved article image"
            ),
        }
    }
}

impl ArticleManager {
    async fn persist(&self, draft: &ArticleDraft, now: DateTime<Utc>) -> DomainResult<Article> {
        if draft.is_persisted() {
            self.write_repo.update(draft.to_update(now)?).await
        } else {
            self.write_repo.insert(draft.to_new_article(now)?).await
        }
    }
}
