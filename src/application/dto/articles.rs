use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::serde_time;

/// One entry of the public JSON export of all articles.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleExportDto {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(rename = "date", serialize_with = "serde_time::export_date::serialize")]
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
}

impl From<Article> for ArticleExportDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            summary: article.summary.into_inner(),
            description: article.description.into_inner(),
            created_at: article.created_at,
            image: article.image,
        }
    }
}
