// src/domain/article/image.rs
use crate::domain::errors::{DomainError, DomainResult};
use bytes::Bytes;
use std::{fmt, path::Path};

/// Decimal `5M`, i.e. 5,000,000 bytes.
pub const MAX_UPLOAD_BYTES: usize = 5_000_000;

/// Image state of an article. Only `Stored` is ever written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArticleImage {
    #[default]
    Unset,
    PendingUpload(PendingUpload),
    Stored(String),
}

impl ArticleImage {
    pub fn from_stored(file_name: Option<String>) -> Self {
        match file_name {
            Some(name) if !name.trim().is_empty() => Self::Stored(name),
            _ => Self::Unset,
        }
    }

    pub fn stored(&self) -> Option<&str> {
        match self {
            Self::Stored(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingUpload(_))
    }
}

/// File bytes submitted with a create or edit request that have not been
/// written to image storage yet.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingUpload {
    original_name: String,
    content_type: String,
    bytes: Bytes,
}

impl PendingUpload {
    pub fn new(
        original_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> DomainResult<Self> {
        let content_type = content_type.into().trim().to_ascii_lowercase();
        let bytes = bytes.into();

        if extension_for(&content_type).is_none() {
            return Err(DomainError::validation(
                "please upload a valid PNG, JPEG or JPG file",
            ));
        }
        if bytes.is_empty() {
            return Err(DomainError::validation("uploaded file is empty"));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(DomainError::validation(format!(
                "uploaded file exceeds {MAX_UPLOAD_BYTES} bytes"
            )));
        }

        Ok(Self {
            original_name: original_name.into(),
            content_type,
            bytes,
        })
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File extension guessed from the content type, falling back to the
    /// extension of the original file name.
    pub fn extension(&self) -> &str {
        extension_for(&self.content_type)
            .or_else(|| {
                Path::new(&self.original_name)
                    .extension()
                    .and_then(std::ffi::OsStr::to_str)
                    .filter(|ext| {
                        !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
                    })
            })
            .unwrap_or("bin")
    }
}

impl fmt::Debug for PendingUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingUpload")
            .field("original_name", &self.original_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpeg"),
        _ => None,
    }
}
