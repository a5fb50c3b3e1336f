//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。批次级致命错误在此层表达，
//! 行级可恢复错误不走该类型，而是收集进 BatchReport

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（缺少文件、扩展名不支持等）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 语音合成提供方初始化失败（缺少凭证/配置）
    #[error("Provider initialization failed: {0}")]
    ProviderInitError(String),

    /// 工作区错误
    #[error("Workspace error: {0}")]
    WorkspaceError(String),

    /// 资源未找到
    #[error("{resource_type} not found: {name}")]
    NotFound {
        resource_type: &'static str,
        name: String,
    },

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            name: name.into(),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::WorkspaceError> for ApplicationError {
    fn from(err: crate::application::ports::WorkspaceError) -> Self {
        match err {
            crate::application::ports::WorkspaceError::NotFound(name) => {
                Self::not_found("Artifact", name)
            }
            crate::application::ports::WorkspaceError::InvalidName(name) => {
                Self::ValidationError(format!("Invalid artifact name: {}", name))
            }
            other => Self::WorkspaceError(other.to_string()),
        }
    }
}
