// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugCodec;
use crate::domain::article::image::PendingUpload;
use crate::domain::article::value_objects::{
    ARTICLE_SLUG_ID_PREFIX, ArticleSlug, ArticleSlugId, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service producing the identifiers derived from an article: its
/// slug, its slug id and the file name of its stored image.
pub struct ArticleSlugService {
    codec: Arc<dyn SlugCodec>,
}

impl ArticleSlugService {
    pub fn new(codec: Arc<dyn SlugCodec>) -> Self {
        Self { codec }
    }

    /// Slugs are not suffixed on collision; a duplicate is rejected by the
    /// store when the article is saved.
    pub fn generate_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let slug = self.codec.slugify(title.as_str());
        if slug.is_empty() {
            return Err(DomainError::validation(format!(
                "title {title:?} does not produce a slug"
            )));
        }
        ArticleSlug::new(slug)
    }

    pub fn encode_slug_id(&self, sequence: u64) -> DomainResult<ArticleSlugId> {
        ArticleSlugId::new(self.codec.encode_sequence(sequence, ARTICLE_SLUG_ID_PREFIX))
    }

    /// `<slug id>-<slugified title>.<extension>`
    pub fn image_file_name(
        &self,
        slug_id: &ArticleSlugId,
        title: &ArticleTitle,
        upload: &PendingUpload,
    ) -> DomainResult<String> {
        let slug = self.generate_slug(title)?;
        Ok(format!("{slug_id}-{slug}.{}", upload.extension()))
    }
}
