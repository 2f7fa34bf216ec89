use super::map_sqlx;
use crate::domain::article::{
    ARTICLE_SLUG_ID_PREFIX, Article, ArticleDescription, ArticleId, ArticleLookup,
    ArticleReadRepository, ArticleSlug, ArticleSlugId, ArticleSummary, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str =
    "id, title, description, summary, image, slug, slug_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    summary: String,
    image: Option<String>,
    slug: String,
    slug_id: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            summary: ArticleSummary::new(row.summary)?,
            image: row.image,
            slug: ArticleSlug::new(row.slug)?,
            slug_id: ArticleSlugId::new(row.slug_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn count_articles(pool: &SqlitePool) -> DomainResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM articles")
        .fetch_one(pool)
        .await
        .map_err(map_sqlx)?;
    Ok(u64::try_from(count).unwrap_or_default())
}

async fn most_recently_created(pool: &SqlitePool) -> DomainResult<Option<Article>> {
    // Numeric part of the slug id, so `A10` sorts after `A9`.
    let sql = format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles
         ORDER BY CAST(SUBSTR(slug_id, ?) AS INTEGER) DESC, id DESC
         LIMIT 1"
    );
    let digits_start = i64::try_from(ARTICLE_SLUG_ID_PREFIX.len() + 1)
        .map_err(|_| DomainError::persistence("slug id prefix is too long"))?;

    let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(digits_start)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            summary,
            image,
            slug,
            slug_id,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, description, summary, image, slug, slug_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(description.as_str())
            .bind(summary.as_str())
            .bind(image.as_deref())
            .bind(slug.as_str())
            .bind(slug_id.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            description,
            summary,
            image,
            slug,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE articles
             SET title = ?, description = ?, summary = ?, image = ?, slug = ?, updated_at = ?
             WHERE id = ?
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(description.as_str())
            .bind(summary.as_str())
            .bind(image.as_deref())
            .bind(slug.as_str())
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article not found"));
        }
        Ok(())
    }

    async fn reserve_slug_sequence(&self, prefix: &str) -> DomainResult<u64> {
        // The seed only matters for the first reservation of a prefix, or when
        // rows were imported past the counter. Afterwards the single UPSERT
        // below increments the counter atomically. The counter never moves
        // back, so numbers of deleted articles are not handed out again.
        let last = most_recently_created(&self.pool).await?;
        let seed = ArticleSlugId::next_after(last.as_ref().map(|a| &a.slug_id), prefix)?;
        let seed = i64::try_from(seed)
            .map_err(|_| DomainError::validation("slug id sequence overflow"))?;

        let value: i64 = sqlx::query_scalar(
            "INSERT INTO article_sequences (prefix, value) VALUES (?, ?)
             ON CONFLICT (prefix) DO UPDATE
             SET value = MAX(article_sequences.value + 1, excluded.value)
             RETURNING value",
        )
        .bind(prefix)
        .bind(seed)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        u64::try_from(value).map_err(|_| DomainError::persistence("negative slug id sequence"))
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_one_by(&self, lookup: ArticleLookup<'_>) -> DomainResult<Option<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE "));
        match lookup {
            ArticleLookup::Id(id) => {
                builder.push("id = ");
                builder.push_bind(i64::from(id));
            }
            ArticleLookup::Slug(slug) => {
                builder.push("slug = ");
                builder.push_bind(slug.as_str());
            }
            ArticleLookup::SlugId(slug_id) => {
                builder.push("slug_id = ");
                builder.push_bind(slug_id.as_str());
            }
        }

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC"
        ));
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn count(&self) -> DomainResult<u64> {
        count_articles(&self.pool).await
    }

    async fn find_most_recently_created(&self) -> DomainResult<Option<Article>> {
        most_recently_created(&self.pool).await
    }
}
