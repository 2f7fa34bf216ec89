use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const SUMMARY_MAX_CHARS: usize = 2000;

/// Prefix of every article slug id (`A1`, `A2`, ...).
pub const ARTICLE_SLUG_ID_PREFIX: &str = "A";
pub const SLUG_ID_MAX_CHARS: usize = 8;

fn bounded_text(value: String, field: &str, max: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{field} cannot exceed {max} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("article id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "title", TITLE_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "description", DESCRIPTION_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary(String);

impl ArticleSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "summary", SUMMARY_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short sequential identifier such as `A12`, assigned once when an article
/// is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlugId(String);

impl ArticleSlugId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug id cannot be empty"));
        }
        if value.chars().count() > SLUG_ID_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "slug id cannot exceed {SLUG_ID_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Numeric part of the id: the prefix and any zero padding are stripped.
    /// A bare prefix decodes to `0`.
    pub fn sequence(&self, prefix: &str) -> DomainResult<u64> {
        let digits = self
            .0
            .trim_start_matches(prefix)
            .trim_start_matches('0');
        if digits.is_empty() {
            return Ok(0);
        }
        digits.parse::<u64>().map_err(|_| {
            DomainError::validation(format!("slug id {} has no numeric sequence", self.0))
        })
    }

    /// Sequence value the next created article receives, derived from the
    /// current row count and the most recently created article.
    pub fn next_sequence(
        count: u64,
        last: Option<&ArticleSlugId>,
        prefix: &str,
    ) -> DomainResult<u64> {
        if count == 0 {
            return Ok(1);
        }
        let last = last.ok_or_else(|| {
            DomainError::not_found("articles exist but no last created article was returned")
        })?;
        Self::next_after(Some(last), prefix)
    }

    /// Sequence following `last`, or `1` without one. Needs no row count, so
    /// a single read of the last created article is enough.
    pub fn next_after(last: Option<&ArticleSlugId>, prefix: &str) -> DomainResult<u64> {
        let Some(last) = last else {
            return Ok(1);
        };
        last.sequence(prefix)?
            .checked_add(1)
            .ok_or_else(|| DomainError::validation("slug id sequence overflow"))
    }
}

impl fmt::Display for ArticleSlugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
