// src/domain/article/entity.rs
use crate::domain::article::image::ArticleImage;
use crate::domain::article::value_objects::{
    ArticleDescription, ArticleId, ArticleSlug, ArticleSlugId, ArticleSummary, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// A persisted article row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub summary: ArticleSummary,
    pub image: Option<String>,
    pub slug: ArticleSlug,
    pub slug_id: ArticleSlugId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Working copy of an article while it moves through a lifecycle. New drafts
/// come from validated form input; existing ones from [`Article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub id: Option<ArticleId>,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub summary: ArticleSummary,
    pub image: ArticleImage,
    pub slug: Option<ArticleSlug>,
    pub slug_id: Option<ArticleSlugId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ArticleDraft {
    pub fn new(
        title: ArticleTitle,
        description: ArticleDescription,
        summary: ArticleSummary,
    ) -> Self {
        Self {
            id: None,
            title,
            description,
            summary,
            image: ArticleImage::Unset,
            slug: None,
            slug_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_image(mut self, image: ArticleImage) -> Self {
        self.image = image;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Apply edited form fields. An edit submitted without a replacement
    /// file passes `ArticleImage::Unset`.
    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        description: ArticleDescription,
        summary: ArticleSummary,
        image: ArticleImage,
    ) {
        self.title = title;
        self.description = description;
        self.summary = summary;
        self.image = image;
    }

    pub fn assign_slug_id(&mut self, slug_id: ArticleSlugId) -> DomainResult<()> {
        if let Some(existing) = &self.slug_id {
            return Err(DomainError::validation(format!(
                "slug id {existing} is already assigned"
            )));
        }
        self.slug_id = Some(slug_id);
        Ok(())
    }

    pub fn set_slug(&mut self, slug: ArticleSlug) {
        self.slug = Some(slug);
    }

    pub fn to_new_article(&self, now: DateTime<Utc>) -> DomainResult<NewArticle> {
        if self.id.is_some() {
            return Err(DomainError::validation("article is already persisted"));
        }
        Ok(NewArticle {
            title: self.title.clone(),
            description: self.description.clone(),
            summary: self.summary.clone(),
            image: self.resolved_image()?,
            slug: self.require_slug()?,
            slug_id: self
                .slug_id
                .clone()
                .ok_or_else(|| DomainError::validation("slug id has not been generated"))?,
            created_at: now,
        })
    }

    pub fn to_update(&self, now: DateTime<Utc>) -> DomainResult<ArticleUpdate> {
        let id = self
            .id
            .ok_or_else(|| DomainError::validation("article has not been persisted yet"))?;
        Ok(ArticleUpdate {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            summary: self.summary.clone(),
            image: self.resolved_image()?,
            slug: self.require_slug()?,
            updated_at: now,
        })
    }

    fn resolved_image(&self) -> DomainResult<Option<String>> {
        match &self.image {
            ArticleImage::Unset => Ok(None),
            ArticleImage::Stored(name) => Ok(Some(name.clone())),
            ArticleImage::PendingUpload(_) => Err(DomainError::validation(
                "image upload has not been stored yet",
            )),
        }
    }

    fn require_slug(&self) -> DomainResult<ArticleSlug> {
        self.slug
            .clone()
            .ok_or_else(|| DomainError::validation("slug has not been generated"))
    }
}

impl From<Article> for ArticleDraft {
    fn from(article: Article) -> Self {
        Self {
            id: Some(article.id),
            title: article.title,
            description: article.description,
            summary: article.summary,
            image: ArticleImage::from_stored(article.image),
            slug: Some(article.slug),
            slug_id: Some(article.slug_id),
            created_at: Some(article.created_at),
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub summary: ArticleSummary,
    pub image: Option<String>,
    pub slug: ArticleSlug,
    pub slug_id: ArticleSlugId,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the editable columns. `slug_id` and `created_at`
/// are deliberately absent.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub summary: ArticleSummary,
    pub image: Option<String>,
    pub slug: ArticleSlug,
    pub updated_at: DateTime<Utc>,
}
