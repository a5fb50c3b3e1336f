//! Speech Synthesis Port - 语音合成出站端口
//!
//! 定义远端语音合成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
///
/// 除 MissingConfig 外均为行级可恢复错误：记入报告后继续处理后续行
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 提供方必需配置缺失，批次级致命错误
    #[error("Configuration error: {0}")]
    MissingConfig(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 提供方侧异常（配额、无效音色、权限等），携带底层消息
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// 清理后无可朗读文本（端口实现需复查，即使编排层已过滤）
    #[error("No dialogue text remaining after removing director notes")]
    EmptyText,
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 角色名（用于错误上下文与日志）
    pub character: String,
    /// 提供方理解的音色标识
    pub voice_id: String,
    /// 清理后的台词文本，必须非空
    pub text: String,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 合成的音频数据
    pub audio_data: Vec<u8>,
    /// 音频时长（毫秒），提供方可能不返回
    pub duration_ms: Option<u64>,
    /// 采样率
    pub sample_rate: Option<u32>,
}

/// Speech Synthesis Port
///
/// 外部语音合成服务的抽象接口。实现必须无重试、不 panic：
/// 任何提供方侧失败都作为错误返回，由编排层决定如何记录
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// 每批次一次的就绪检查（认证/配置）
    ///
    /// 失败即中止整批，不进行任何行级尝试
    async fn ensure_ready(&self) -> Result<(), SynthesisError> {
        Ok(())
    }

    /// 合成一句台词
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError>;
}
