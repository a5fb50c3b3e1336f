//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::application::ports::AudioFormat;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 合成提供方配置
    #[serde(default)]
    pub provider: ProviderConfig,

    /// 角色音色注册表
    #[serde(default)]
    pub voices: VoicesConfig,

    /// 工作区配置
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 合成引擎选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderEngine {
    /// 托管语音合成服务
    #[default]
    Vertex,
    /// 生成静音的本地假引擎（离线/测试）
    Fake,
}

/// 合成提供方配置
///
/// project_id 由部署环境提供；缺失不是加载错误，
/// 而是在批次的提供方初始化阶段作为致命错误上报
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// 引擎选择
    #[serde(default)]
    pub engine: ProviderEngine,

    /// 服务基础 URL
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,

    /// 项目/租户标识
    #[serde(default)]
    pub project_id: String,

    /// 区域
    #[serde(default = "default_provider_location")]
    pub location: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

fn default_provider_base_url() -> String {
    "https://aiplatform.googleapis.com".to_string()
}

fn default_provider_location() -> String {
    "us-central1".to_string()
}

fn default_provider_timeout() -> u64 {
    120
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            engine: ProviderEngine::default(),
            base_url: default_provider_base_url(),
            project_id: String::new(),
            location: default_provider_location(),
            timeout_secs: default_provider_timeout(),
        }
    }
}

/// 角色音色注册表配置
///
/// 注意：角色名区分大小写，而环境变量键会被转为小写，
/// 因此注册表应通过配置文件（或代码默认值）提供
#[derive(Debug, Clone, Deserialize)]
pub struct VoicesConfig {
    /// 角色名 → 音色标识
    #[serde(default = "default_characters")]
    pub characters: BTreeMap<String, String>,
}

fn default_characters() -> BTreeMap<String, String> {
    [
        ("Krishna", "en-IN-Standard-C"),
        ("Radha", "en-IN-Wavenet-D"),
        ("Ganesha", "en-US-Wavenet-E"),
        ("Narrator", "en-US-Wavenet-F"),
        ("Friend1", "en-US-Standard-C"),
        ("Friend2", "en-AU-Wavenet-B"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            characters: default_characters(),
        }
    }
}

/// 工作区配置
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// 产物输出目录（临时语义，平台可能随时重置）
    #[serde(default = "default_workspace_dir")]
    pub dir: PathBuf,

    /// 产物音频格式
    #[serde(default)]
    pub audio_format: AudioFormat,

    /// 上传文件最大大小（字节），默认 10MB
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
}

fn default_workspace_dir() -> PathBuf {
    PathBuf::from("data/voice_overs")
}

fn default_max_upload_size() -> u64 {
    10 * 1024 * 1024 // 10 MB
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            dir: default_workspace_dir(),
            audio_format: AudioFormat::default(),
            max_upload_size: default_max_upload_size(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
