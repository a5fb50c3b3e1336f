//! Workspace Command Handler - 工作区清空

use std::sync::Arc;

use crate::application::commands::ClearWorkspace;
use crate::application::error::ApplicationError;
use crate::application::ports::WorkspacePort;

/// 清空结果报告
#[derive(Debug, Clone)]
pub struct ClearReport {
    pub deleted: u64,
    pub failed: u64,
    pub directory_missing: bool,
}

impl ClearReport {
    /// 渲染状态摘要
    pub fn summary(&self) -> String {
        if self.directory_missing {
            return "Output directory does not exist. Nothing to clear.".to_string();
        }
        let mut summary = format!("Cleared {} files.", self.deleted);
        if self.failed > 0 {
            summary.push_str(&format!(" {} could not be deleted.", self.failed));
        }
        summary
    }
}

/// ClearWorkspace Handler
pub struct ClearWorkspaceHandler {
    workspace: Arc<dyn WorkspacePort>,
}

impl ClearWorkspaceHandler {
    pub fn new(workspace: Arc<dyn WorkspacePort>) -> Self {
        Self { workspace }
    }

    pub async fn handle(&self, _command: ClearWorkspace) -> Result<ClearReport, ApplicationError> {
        let outcome = self.workspace.clear_all().await?;

        tracing::info!(
            deleted = outcome.deleted,
            failed = outcome.failed,
            directory_missing = outcome.directory_missing,
            "Workspace cleared"
        );

        Ok(ClearReport {
            deleted: outcome.deleted,
            failed: outcome.failed,
            directory_missing: outcome.directory_missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::infrastructure::adapters::FileWorkspace;

    #[tokio::test]
    async fn test_clear_missing_directory_reports_zero() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("never_created");
        let handler =
            ClearWorkspaceHandler::new(Arc::new(FileWorkspace::new(&missing, Default::default())));

        let report = handler.handle(ClearWorkspace).await.unwrap();

        assert_eq!(report.deleted, 0);
        assert!(report.directory_missing);
        assert!(report.summary().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_clear_counts_deletions() {
        let dir = tempdir().unwrap();
        let workspace = Arc::new(FileWorkspace::new(dir.path(), Default::default()));
        workspace.write_artifact(1, "Krishna", b"a").await.unwrap();
        workspace.write_artifact(2, "Radha", b"b").await.unwrap();

        let handler = ClearWorkspaceHandler::new(workspace);
        let report = handler.handle(ClearWorkspace).await.unwrap();

        assert_eq!(report.deleted, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(report.summary(), "Cleared 2 files.");
    }
}
