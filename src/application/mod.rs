//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（SpeechSynthesis、Workspace）
//! - commands: CQRS 命令及处理器（批次生成、工作区清空）
//! - queries: CQRS 查询及处理器（音色列表、产物读取）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    ArtifactRef, BatchPhase, BatchReport, ClearReport, ClearWorkspace, ClearWorkspaceHandler,
    GenerateVoiceOver, GenerateVoiceOverHandler, LineError,
};
pub use error::ApplicationError;
pub use queries::{
    CharacterVoice, GetArtifact, GetArtifactHandler, GetArtifactResponse, ListCharacterVoices,
    ListCharacterVoicesHandler,
};
