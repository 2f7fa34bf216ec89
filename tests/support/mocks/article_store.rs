// tests/support/mocks/article_store.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use mokkan_articles::domain::article::{
    ARTICLE_SLUG_ID_PREFIX, Article, ArticleId, ArticleLookup, ArticleReadRepository,
    ArticleSlugId, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use mokkan_articles::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct State {
    rows: Vec<Article>,
    next_id: i64,
    sequences: HashMap<String, u64>,
}

/// インメモリの記事ストア（読み取り・書き込みの両方を実装）
///
/// Enforces the same unique keys as the SQLite schema and can be told to
/// fail reads or writes.
#[derive(Default)]
pub struct InMemoryArticleStore {
    state: Mutex<State>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-existing rows as they are, e.g. to simulate imported data.
    pub fn with_rows(rows: Vec<Article>) -> Self {
        let next_id = rows.iter().map(|a| i64::from(a.id)).max().unwrap_or(0);
        Self {
            state: Mutex::new(State {
                rows,
                next_id,
                sequences: HashMap::new(),
            }),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<Article> {
        self.state.lock().unwrap().rows.clone()
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("read failure injected".into()));
        }
        Ok(())
    }

    fn check_writes(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("write failure injected".into()));
        }
        Ok(())
    }

    fn ensure_unique(state: &State, candidate: &Article) -> DomainResult<()> {
        for row in state.rows.iter().filter(|r| r.id != candidate.id) {
            if row.slug_id == candidate.slug_id {
                return Err(DomainError::Conflict("slug id already exists".into()));
            }
            if row.slug == candidate.slug {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        Ok(())
    }

    fn last_created(state: &State) -> Option<Article> {
        state
            .rows
            .iter()
            .max_by_key(|a| {
                (
                    a.slug_id.sequence(ARTICLE_SLUG_ID_PREFIX).unwrap_or(0),
                    i64::from(a.id),
                )
            })
            .cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.check_writes()?;
        let mut state = self.state.lock().unwrap();
        let article = Article {
            id: ArticleId::new(state.next_id + 1)?,
            title: new.title,
            description: new.description,
            summary: new.summary,
            image: new.image,
            slug: new.slug,
            slug_id: new.slug_id,
            created_at: new.created_at,
            updated_at: None,
        };
        Self::ensure_unique(&state, &article)?;
        state.next_id += 1;
        state.rows.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.check_writes()?;
        let mut state = self.state.lock().unwrap();
        let position = state
            .rows
            .iter()
            .position(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let mut article = state.rows[position].clone();
        article.title = update.title;
        article.description = update.description;
        article.summary = update.summary;
        article.image = update.image;
        article.slug = update.slug;
        article.updated_at = Some(update.updated_at);

        Self::ensure_unique(&state, &article)?;
        state.rows[position] = article.clone();
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.check_writes()?;
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|a| a.id != id);
        if state.rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn reserve_slug_sequence(&self, prefix: &str) -> DomainResult<u64> {
        self.check_writes()?;
        let mut state = self.state.lock().unwrap();
        let last = Self::last_created(&state);
        let seed = ArticleSlugId::next_sequence(
            state.rows.len() as u64,
            last.as_ref().map(|a| &a.slug_id),
            prefix,
        )?;
        let value = match state.sequences.get(prefix) {
            Some(current) => (current + 1).max(seed),
            None => seed,
        };
        state.sequences.insert(prefix.to_string(), value);
        Ok(value)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_one_by(&self, lookup: ArticleLookup<'_>) -> DomainResult<Option<Article>> {
        self.check_reads()?;
        let state = self.state.lock().unwrap();
        let found = state.rows.iter().find(|a| match lookup {
            ArticleLookup::Id(id) => a.id == id,
            ArticleLookup::Slug(slug) => &a.slug == slug,
            ArticleLookup::SlugId(slug_id) => &a.slug_id == slug_id,
        });
        Ok(found.cloned())
    }

    async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        self.check_reads()?;
        let mut rows = self.state.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn count(&self) -> DomainResult<u64> {
        self.check_reads()?;
        Ok(self.state.lock().unwrap().rows.len() as u64)
    }

    async fn find_most_recently_created(&self) -> DomainResult<Option<Article>> {
        self.check_reads()?;
        Ok(Self::last_created(&self.state.lock().unwrap()))
    }
}
