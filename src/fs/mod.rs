/// File system operations abstraction for testing
///
/// This module provides a trait-based abstraction over the file system
/// operations the bootstrap sequencer needs, so the idempotence check and
/// forced recreation can be unit tested with the `mockall` crate instead of
/// touching the real disk.
use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Trait for file system operations that can be mocked in tests
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileSystemOperations: Send + Sync {
    /// Check whether a path exists
    fn exists(&self, path: &str) -> bool;

    /// Remove a directory and everything under it
    async fn remove_dir_all(&self, path: &str) -> Result<()>;
}

/// Real implementation backed by tokio::fs
pub struct StandardFileSystem;

#[async_trait]
impl FileSystemOperations for StandardFileSystem {
    fn exists(&self, path: &str) -> bool {
        std::path::Path::new(path).exists()
    }

    async fn remove_dir_all(&self, path: &str) -> Result<()> {
        tokio::fs::remove_dir_all(path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_standard_filesystem_exists_and_remove() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("env");
        std::fs::create_dir(&dir).unwrap();
        let dir_str = dir.to_string_lossy().to_string();

        let fs_ops = StandardFileSystem;
        assert!(fs_ops.exists(&dir_str));

        fs_ops.remove_dir_all(&dir_str).await.unwrap();
        assert!(!fs_ops.exists(&dir_str));
    }

    #[tokio::test]
    async fn test_mock_filesystem_reports_configured_existence() {
        let mut mock_fs = MockFileSystemOperations::new();
        mock_fs
            .expect_exists()
            .with(mockall::predicate::eq(".venv"))
            .return_const(true);

        assert!(mock_fs.exists(".venv"));
    }
}
