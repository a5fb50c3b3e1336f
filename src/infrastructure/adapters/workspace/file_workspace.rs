//! File Workspace - 文件系统产物工作区实现
//!
//! 实现 WorkspacePort trait。目录按临时目录语义对待：
//! 宿主平台可能随时重置，clear_all 也会整体清空

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioFormat, ClearOutcome, WorkspaceError, WorkspacePort};

/// 文件系统工作区
pub struct FileWorkspace {
    /// 产物输出目录
    dir: PathBuf,
    /// 产物音频格式（决定扩展名）
    format: AudioFormat,
}

impl FileWorkspace {
    pub fn new(dir: impl AsRef<Path>, format: AudioFormat) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            format,
        }
    }

    /// 工作区目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 校验下载用文件名：只允许工作区内的裸文件名
    fn validate_file_name(file_name: &str) -> Result<(), WorkspaceError> {
        let suspicious = file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name.contains("..");
        if suspicious {
            return Err(WorkspaceError::InvalidName(file_name.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkspacePort for FileWorkspace {
    async fn ensure_dir(&self) -> Result<(), WorkspaceError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| WorkspaceError::IoError(e.to_string()))
    }

    fn artifact_file_name(&self, ordinal: usize, character: &str) -> String {
        format!("{:03}_{}.{}", ordinal, character, self.format.extension())
    }

    fn artifact_path(&self, ordinal: usize, character: &str) -> PathBuf {
        self.dir.join(self.artifact_file_name(ordinal, character))
    }

    async fn write_artifact(
        &self,
        ordinal: usize,
        character: &str,
        data: &[u8],
    ) -> Result<PathBuf, WorkspaceError> {
        self.ensure_dir().await?;

        let path = self.artifact_path(ordinal, character);
        fs::write(&path, data)
            .await
            .map_err(|e| WorkspaceError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            size = data.len(),
            "Artifact written"
        );

        Ok(path)
    }

    async fn read_artifact(&self, file_name: &str) -> Result<Vec<u8>, WorkspaceError> {
        Self::validate_file_name(file_name)?;

        let path = self.dir.join(file_name);
        if !path.exists() {
            return Err(WorkspaceError::NotFound(file_name.to_string()));
        }

        fs::read(&path)
            .await
            .map_err(|e| WorkspaceError::IoError(e.to_string()))
    }

    async fn clear_all(&self) -> Result<ClearOutcome, WorkspaceError> {
        if !self.dir.exists() {
            return Ok(ClearOutcome {
                directory_missing: true,
                ..Default::default()
            });
        }

        let mut outcome = ClearOutcome::default();
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| WorkspaceError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| WorkspaceError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match fs::remove_file(&path).await {
                Ok(()) => outcome.deleted += 1,
                Err(e) => {
                    // 单个文件删除失败不中止清理
                    tracing::warn!(path = %path.display(), error = %e, "Failed to delete artifact");
                    outcome.failed += 1;
                }
            }
        }

        tracing::info!(
            deleted = outcome.deleted,
            failed = outcome.failed,
            "Workspace swept"
        );

        Ok(outcome)
    }

    fn audio_format(&self) -> AudioFormat {
        self.format
    }
}
