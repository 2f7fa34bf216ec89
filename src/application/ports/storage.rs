// src/application/ports/storage.rs
use crate::domain::article::PendingUpload;
use async_trait::async_trait;
use std::{io, path::Path};

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the upload as `directory/file_name`, replacing any file with
    /// the same name.
    async fn move_uploaded_file(
        &self,
        upload: &PendingUpload,
        directory: &Path,
        file_name: &str,
    ) -> io::Result<()>;

    /// Remove a stored file. Missing files are not an error.
    async fn remove_file(&self, directory: &Path, file_name: &str) -> io::Result<()>;
}
