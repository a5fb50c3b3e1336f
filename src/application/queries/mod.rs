//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：音色配置与产物读取

pub mod handlers;

/// 列出已配置角色音色
#[derive(Debug, Clone, Copy)]
pub struct ListCharacterVoices;

/// 获取单个音频产物
#[derive(Debug, Clone)]
pub struct GetArtifact {
    pub file_name: String,
}

pub use handlers::{
    CharacterVoice, GetArtifactHandler, GetArtifactResponse, ListCharacterVoicesHandler,
};
