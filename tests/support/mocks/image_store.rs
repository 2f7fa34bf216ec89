// tests/support/mocks/image_store.rs
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use mokkan_articles::application::ports::storage::ImageStore;
use mokkan_articles::domain::article::PendingUpload;

/// 保存されたファイルをメモリに記録するダミーの画像ストア
#[derive(Default)]
pub struct RecordingImageStore {
    files: Mutex<BTreeMap<PathBuf, Bytes>>,
    fail_moves: AtomicBool,
}

impl RecordingImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_moves(&self, fail: bool) {
        self.fail_moves.store(fail, Ordering::SeqCst);
    }

    /// File names currently stored, in sorted order.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }

    pub fn contents(&self, directory: &Path, file_name: &str) -> Option<Bytes> {
        self.files
            .lock()
            .unwrap()
            .get(&directory.join(file_name))
            .cloned()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn move_uploaded_file(
        &self,
        upload: &PendingUpload,
        directory: &Path,
        file_name: &str,
    ) -> io::Result<()> {
        if self.fail_moves.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk is read-only"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(directory.join(file_name), upload.bytes().clone());
        Ok(())
    }

    async fn remove_file(&self, directory: &Path, file_name: &str) -> io::Result<()> {
        self.files.lock().unwrap().remove(&directory.join(file_name));
        Ok(())
    }
}
