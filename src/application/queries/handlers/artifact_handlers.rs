//! Artifact Query Handler - 读取生成的音频产物

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioFormat, WorkspacePort};
use crate::application::queries::GetArtifact;

/// 获取产物响应
#[derive(Debug, Clone)]
pub struct GetArtifactResponse {
    pub file_name: String,
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}

/// GetArtifact Handler - 按文件名读取产物
pub struct GetArtifactHandler {
    workspace: Arc<dyn WorkspacePort>,
}

impl GetArtifactHandler {
    pub fn new(workspace: Arc<dyn WorkspacePort>) -> Self {
        Self { workspace }
    }

    pub async fn handle(&self, query: GetArtifact) -> Result<GetArtifactResponse, ApplicationError> {
        let audio_data = self.workspace.read_artifact(&query.file_name).await?;

        // content type 优先按文件扩展名判断，否则退回工作区配置格式
        let content_type = query
            .file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| AudioFormat::from_extension(ext))
            .unwrap_or_else(|| self.workspace.audio_format())
            .content_type();

        Ok(GetArtifactResponse {
            file_name: query.file_name,
            audio_data,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::infrastructure::adapters::FileWorkspace;

    #[tokio::test]
    async fn test_reads_written_artifact() {
        let dir = tempdir().unwrap();
        let workspace = Arc::new(FileWorkspace::new(dir.path(), Default::default()));
        workspace
            .write_artifact(1, "Krishna", b"fake audio")
            .await
            .unwrap();

        let handler = GetArtifactHandler::new(workspace);
        let response = handler
            .handle(GetArtifact {
                file_name: "001_Krishna.mp3".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.audio_data, b"fake audio");
        assert_eq!(response.content_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_missing_artifact_is_not_found() {
        let dir = tempdir().unwrap();
        let workspace = Arc::new(FileWorkspace::new(dir.path(), Default::default()));

        let handler = GetArtifactHandler::new(workspace);
        let result = handler
            .handle(GetArtifact {
                file_name: "001_Krishna.mp3".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
