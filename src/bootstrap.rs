// src/bootstrap.rs
//! Wiring shared by the binaries: tracing, database and the article manager.

use crate::application::{
    articles::ArticleManager,
    ports::{ClockPort, ImageStorePort, SlugCodecPort},
};
use crate::config::AppConfig;
use crate::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService,
};
use crate::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    storage::FilesystemImageStore,
    time::SystemClock,
    util::DefaultSlugCodec,
};
use anyhow::Result;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Open the pool and bring the schema up to date.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool> {
    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::debug!(url = %config.database_url(), "database ready");
    Ok(pool)
}

pub fn article_manager(config: &AppConfig, pool: SqlitePool) -> ArticleManager {
    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool));
    let image_store: Arc<ImageStorePort> = Arc::new(FilesystemImageStore);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let codec: Arc<SlugCodecPort> = Arc::new(DefaultSlugCodec);
    let slug_service = Arc::new(ArticleSlugService::new(codec));

    ArticleManager::new(
        write_repo,
        read_repo,
        image_store,
        slug_service,
        clock,
        config.article_files_dir().clone(),
    )
}
