use super::ArticleManager;
use crate::{
    application::{
        dto::ArticleExportDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleLookup, ArticleSlug, ArticleSlugId},
};

impl ArticleManager {
    pub async fn get_all(&self) -> ApplicationResult<Vec<Article>> {
        self.read_repo
            .list(None)
            .await
            .map_err(ApplicationError::query(
                "an error occurred while fetching all articles",
            ))
    }

    /// At most `limit` articles, newest first.
    pub async fn get_limit(&self, limit: u32) -> ApplicationResult<Vec<Article>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.read_repo
            .list(Some(limit))
            .await
            .map_err(ApplicationError::query(
                "an error occurred while fetching the latest articles",
            ))
    }

    pub async fn get_by_id(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.find_one(
            ArticleLookup::Id(id),
            "an error occurred while getting an article by id",
        )
        .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> ApplicationResult<Article> {
        let slug =
            ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.find_one(
            ArticleLookup::Slug(&slug),
            "an error occurred while getting an article by slug",
        )
        .await
    }

    pub async fn get_by_slug_id(&self, slug_id: &str) -> ApplicationResult<Article> {
        let slug_id = ArticleSlugId::new(slug_id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        self.find_one(
            ArticleLookup::SlugId(&slug_id),
            "an error occurred while getting an article by slug id",
        )
        .await
    }

    pub async fn entity_count(&self) -> ApplicationResult<u64> {
        self.read_repo
            .count()
            .await
            .map_err(ApplicationError::query(
                "an error occurred while retrieving the article count",
            ))
    }

    /// The article with the highest slug id sequence.
    pub async fn get_last_created(&self) -> ApplicationResult<Article> {
        self.read_repo
            .find_most_recently_created()
            .await
            .map_err(ApplicationError::query(
                "an error occurred while getting the last created article",
            ))?
            .ok_or_else(|| ApplicationError::not_found("no article has been created yet"))
    }

    /// Every article in the shape of the public JSON export.
    pub async fn export(&self) -> ApplicationResult<Vec<ArticleExportDto>> {
        let articles = self.get_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    async fn find_one(
        &self,
        lookup: ArticleLookup<'_>,
        message: &'static str,
    ) -> ApplicationResult<Article> {
        self.read_repo
            .find_one_by(lookup)
            .await
            .map_err(ApplicationError::query(message))?
            .ok_or_else(|| ApplicationError::not_found(format!("article with {lookup} not found")))
    }
}
