// tests/common/temp.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

/// 一時ディレクトリ（Drop 時に削除）
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let inner = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// 親ディレクトリも含めてファイルを作成
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
