// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("no article has been set on this lifecycle")]
    NoCurrentArticle,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("{message}")]
    QueryFailed {
        message: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{message}")]
    CreationFailed {
        message: &'static str,
        #[source]
        source: Box<ApplicationError>,
    },

    #[error("{message}")]
    UpdateFailed {
        message: &'static str,
        #[source]
        source: Box<ApplicationError>,
    },

    #[error("{message}")]
    ImageUpdateFailed {
        message: &'static str,
        #[source]
        source: Box<ApplicationError>,
    },

    #[error("{message}")]
    PersistenceFailed {
        message: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("image storage failure: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn query(message: &'static str) -> impl FnOnce(DomainError) -> Self {
        move |source| Self::QueryFailed { message, source }
    }

    pub fn persistence(message: &'static str) -> impl FnOnce(DomainError) -> Self {
        move |source| Self::PersistenceFailed { message, source }
    }

    pub fn creation(source: ApplicationError) -> Self {
        Self::CreationFailed {
            message: "there's an error in creating the article",
            source: Box::new(source),
        }
    }

    pub fn update(source: ApplicationError) -> Self {
        Self::UpdateFailed {
            message: "there's an error in updating the article",
            source: Box::new(source),
        }
    }

    pub fn image_update(source: ApplicationError) -> Self {
        Self::ImageUpdateFailed {
            message: "an error occurred while editing the image of the article",
            source: Box::new(source),
        }
    }

    /// True for lookups that found nothing, as opposed to store failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The innermost domain error, if the failure originated in the store or
    /// in a domain rule.
    pub fn domain_cause(&self) -> Option<&DomainError> {
        match self {
            Self::QueryFailed { source, .. } | Self::PersistenceFailed { source, .. } => {
                Some(source)
            }
            Self::Domain(source) => Some(source),
            Self::CreationFailed { source, .. }
            | Self::UpdateFailed { source, .. }
            | Self::ImageUpdateFailed { source, .. } => source.domain_cause(),
            _ => None,
        }
    }
}
