//! Workspace Port - 产物工作区出站端口
//!
//! 管理临时输出目录：创建、按序号命名写入、批量清空

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// 工作区错误
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Invalid artifact name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 音频产物格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    Mp3,
    Ogg,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::Mp3
    }
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            _ => None,
        }
    }
}

/// 清空操作结果
///
/// 单个文件删除失败只计数，不中止清理；目录不存在可报告但非错误
#[derive(Debug, Clone, Default)]
pub struct ClearOutcome {
    /// 成功删除的文件数
    pub deleted: u64,
    /// 删除失败的文件数
    pub failed: u64,
    /// 工作区目录本身不存在
    pub directory_missing: bool,
}

/// Workspace Port
///
/// 产物文件名约定: `{序号:03}_{角色名}.{扩展名}`，
/// 序号为该行的处理序号，保证与脚本顺序一致
#[async_trait]
pub trait WorkspacePort: Send + Sync {
    /// 确保工作区目录存在（幂等，可重复调用）
    async fn ensure_dir(&self) -> Result<(), WorkspaceError>;

    /// 按约定生成产物文件名
    fn artifact_file_name(&self, ordinal: usize, character: &str) -> String;

    /// 产物的完整路径
    fn artifact_path(&self, ordinal: usize, character: &str) -> PathBuf;

    /// 完整写入一个产物，成功后返回路径
    async fn write_artifact(
        &self,
        ordinal: usize,
        character: &str,
        data: &[u8],
    ) -> Result<PathBuf, WorkspaceError>;

    /// 按文件名读取产物（供下载接口使用）
    async fn read_artifact(&self, file_name: &str) -> Result<Vec<u8>, WorkspaceError>;

    /// 清空工作区内所有文件
    async fn clear_all(&self) -> Result<ClearOutcome, WorkspaceError>;

    /// 产物音频格式
    fn audio_format(&self) -> AudioFormat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_format_extension_roundtrip() {
        assert_eq!(AudioFormat::from_extension("mp3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_extension("WAV"), Some(AudioFormat::Wav));
        assert_eq!(AudioFormat::from_extension("flac"), None);
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    }

    #[test]
    fn test_default_format_is_mp3() {
        assert_eq!(AudioFormat::default(), AudioFormat::Mp3);
    }
}
