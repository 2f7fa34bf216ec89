use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleSlugId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::fmt;

/// Unique keys an article can be looked up by.
#[derive(Debug, Clone, Copy)]
pub enum ArticleLookup<'a> {
    Id(ArticleId),
    Slug(&'a ArticleSlug),
    SlugId(&'a ArticleSlugId),
}

impl fmt::Display for ArticleLookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Slug(slug) => write!(f, "slug {slug}"),
            Self::SlugId(slug_id) => write!(f, "slug id {slug_id}"),
        }
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Atomically reserve the next slug id sequence value for `prefix`.
    /// Two concurrent callers never receive the same value.
    async fn reserve_slug_sequence(&self, prefix: &str) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_one_by(&self, lookup: ArticleLookup<'_>) -> DomainResult<Option<Article>>;
    /// Newest first. `None` returns every row.
    async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<Article>>;
    async fn count(&self) -> DomainResult<u64>;
    /// The article with the highest slug id sequence, ties broken by id.
    async fn find_most_recently_created(&self) -> DomainResult<Option<Article>>;
}
