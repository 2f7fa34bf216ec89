// tests/support/helpers.rs
use std::sync::Arc;

use sqlx::SqlitePool;

use mokkan_articles::application::articles::ArticleManager;
use mokkan_articles::application::ports::{ImageStorePort, util::SlugCodec};
use mokkan_articles::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService,
};
use mokkan_articles::infrastructure::database;
use mokkan_articles::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteArticleWriteRepository,
};
use mokkan_articles::infrastructure::util::DefaultSlugCodec;

use super::mocks::{FixedClock, InMemoryArticleStore, RecordingImageStore};

pub const IMAGE_DIR: &str = "uploads/articles";

pub fn slug_service() -> Arc<ArticleSlugService> {
    let codec: Arc<dyn SlugCodec> = Arc::new(DefaultSlugCodec);
    Arc::new(ArticleSlugService::new(codec))
}

/// インメモリのストアを使うマネージャーを組み立てる
pub fn build_manager(
    store: Arc<InMemoryArticleStore>,
    images: Arc<RecordingImageStore>,
) -> ArticleManager {
    let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = store;
    ArticleManager::new(
        write_repo,
        read_repo,
        images,
        slug_service(),
        Arc::new(FixedClock::default()),
        IMAGE_DIR,
    )
}

/// SQLite リポジトリを使うマネージャーを組み立てる
pub fn sqlite_manager(pool: SqlitePool, images: Arc<ImageStorePort>) -> ArticleManager {
    ArticleManager::new(
        Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        Arc::new(SqliteArticleReadRepository::new(pool)),
        images,
        slug_service(),
        Arc::new(FixedClock::default()),
        IMAGE_DIR,
    )
}

/// マイグレーション済みのインメモリ SQLite プール
pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("failed to open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}
