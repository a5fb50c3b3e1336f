//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：批次生成与工作区清理

pub mod handlers;

/// 生成配音批次命令
///
/// 一次命令对应一个批次：对上传脚本做一次完整遍历，产出一份报告
#[derive(Debug, Clone)]
pub struct GenerateVoiceOver {
    /// 上传文件名（用于扩展名校验）
    pub file_name: String,
    /// 脚本文本内容（UTF-8）
    pub content: String,
}

/// 清空工作区命令
#[derive(Debug, Clone, Copy)]
pub struct ClearWorkspace;

pub use handlers::{
    ArtifactRef, BatchPhase, BatchReport, ClearReport, ClearWorkspaceHandler,
    GenerateVoiceOverHandler, LineError,
};
