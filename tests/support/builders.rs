// tests/support/builders.rs
use chrono::{DateTime, Utc};

use mokkan_articles::domain::article::*;

use super::mocks::fixed_now;

pub struct DraftBuilder {
    title: String,
    description: String,
    summary: String,
    image: ArticleImage,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self {
            title: "Hello World".into(),
            description: "A longer description of the article.".into(),
            summary: "A short summary.".into(),
            image: ArticleImage::Unset,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn upload(mut self, name: &str, content_type: &str, bytes: &'static [u8]) -> Self {
        let upload = PendingUpload::new(name, content_type, bytes).unwrap();
        self.image = ArticleImage::PendingUpload(upload);
        self
    }

    pub fn build(self) -> ArticleDraft {
        ArticleDraft::new(
            ArticleTitle::new(self.title).unwrap(),
            ArticleDescription::new(self.description).unwrap(),
            ArticleSummary::new(self.summary).unwrap(),
        )
        .with_image(self.image)
    }
}

pub fn png_upload(bytes: &'static [u8]) -> ArticleImage {
    ArticleImage::PendingUpload(PendingUpload::new("photo.png", "image/png", bytes).unwrap())
}

/// A stored row, for seeding stores directly.
pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    slug_id: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64, slug_id: &str) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            slug: format!("article-{id}"),
            slug_id: slug_id.into(),
            image: None,
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>, slug: impl Into<String>) -> Self {
        self.title = title.into();
        self.slug = slug.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            description: ArticleDescription::new("Seeded description").unwrap(),
            summary: ArticleSummary::new("Seeded summary").unwrap(),
            image: self.image,
            slug: ArticleSlug::new(self.slug).unwrap(),
            slug_id: ArticleSlugId::new(self.slug_id).unwrap(),
            created_at: self.created_at,
            updated_at: None,
        }
    }
}
