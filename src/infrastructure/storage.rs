// src/infrastructure/storage.rs
use crate::application::ports::storage::ImageStore;
use crate::domain::article::PendingUpload;
use async_trait::async_trait;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Writes article images to the local filesystem.
#[derive(Default, Clone)]
pub struct FilesystemImageStore;

impl FilesystemImageStore {
    fn target_path(directory: &Path, file_name: &str) -> io::Result<PathBuf> {
        let is_plain_name = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains(['/', '\\']);
        if !is_plain_name {
            tracing::warn!(file = %file_name, "rejected image file name");
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid image file name: {file_name:?}"),
            ));
        }
        Ok(directory.join(file_name))
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn move_uploaded_file(
        &self,
        upload: &PendingUpload,
        directory: &Path,
        file_name: &str,
    ) -> io::Result<()> {
        let target = Self::target_path(directory, file_name)?;
        tokio::fs::create_dir_all(directory).await?;

        // Write next to the target and rename, so a reader never sees a
        // half-written image.
        let partial = directory.join(format!(".{file_name}.part"));
        let written = match tokio::fs::write(&partial, upload.bytes()).await {
            Ok(()) => tokio::fs::rename(&partial, &target).await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            match tokio::fs::remove_file(&partial).await {
                Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => tracing::warn!(
                    file = %partial.display(),
                    error = %cleanup,
                    "failed to remove partial image file"
                ),
                _ => {}
            }
            return Err(err);
        }
        Ok(())
    }

    async fn remove_file(&self, directory: &Path, file_name: &str) -> io::Result<()> {
        let target = Self::target_path(directory, file_name)?;
        match tokio::fs::remove_file(&target).await {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
