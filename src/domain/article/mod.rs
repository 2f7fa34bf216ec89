pub mod entity;
pub mod image;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, ArticleUpdate, NewArticle};
pub use image::{ArticleImage, PendingUpload};
pub use repository::{ArticleLookup, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ARTICLE_SLUG_ID_PREFIX, ArticleDescription, ArticleId, ArticleSlug, ArticleSlugId,
    ArticleSummary, ArticleTitle,
};
