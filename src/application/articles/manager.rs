// src/application/articles/manager.rs
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::ArticleLifecycle;
use crate::{
    application::ports::{ClockPort, ImageStorePort},
    domain::article::{
        ArticleDraft, ArticleReadRepository, ArticleWriteRepository,
        services::ArticleSlugService,
    },
};

/// Long-lived, shareable article service. It holds no per-request state;
/// every create, edit or delete runs through a fresh [`ArticleLifecycle`].
pub struct ArticleManager {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) image_store: Arc<ImageStorePort>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) image_dir: PathBuf,
}

impl ArticleManager {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        image_store: Arc<ImageStorePort>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<ClockPort>,
        image_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            image_store,
            slug_service,
            clock,
            image_dir: image_dir.into(),
        }
    }

    /// Directory uploaded article images are moved into.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Start an empty lifecycle; call [`ArticleLifecycle::set_article`] next.
    pub fn lifecycle(&self) -> ArticleLifecycle<'_> {
        ArticleLifecycle::new(self)
    }

    pub fn with_article(&self, article: ArticleDraft) -> ArticleLifecycle<'_> {
        self.lifecycle().set_article(article)
    }
}
