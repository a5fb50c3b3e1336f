//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOXOVER_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOXOVER_SERVER__PORT=8080`
/// - `VOXOVER_PROVIDER__PROJECT_ID=my-project`
/// - `VOXOVER_PROVIDER__LOCATION=asia-south1`
/// - `VOXOVER_WORKSPACE__DIR=/tmp/voice_overs`
///
/// 注意：环境变量键会被转为小写，因此区分大小写的
/// `voices.characters` 注册表只应来自配置文件或默认值
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 7860)?
        .set_default("provider.engine", "vertex")?
        .set_default("provider.base_url", "https://aiplatform.googleapis.com")?
        .set_default("provider.project_id", "")?
        .set_default("provider.location", "us-central1")?
        .set_default("provider.timeout_secs", 120)?
        .set_default("workspace.dir", "data/voice_overs")?
        .set_default("workspace.audio_format", "mp3")?
        .set_default("workspace.max_upload_size", 10 * 1024 * 1024)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: VOXOVER_
    // 层级分隔符: __ (双下划线)
    // 例如: VOXOVER_PROVIDER__PROJECT_ID=my-project
    builder = builder.add_source(
        Environment::with_prefix("VOXOVER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// provider.project_id 故意不在此校验：缺失是批次级错误，
/// 在提供方初始化阶段上报，而不是阻止服务启动
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.workspace.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Workspace directory cannot be empty".to_string(),
        ));
    }

    if config.workspace.max_upload_size == 0 {
        return Err(ConfigError::ValidationError(
            "Max upload size cannot be 0".to_string(),
        ));
    }

    if config.provider.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Provider base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Provider Engine: {:?}", config.provider.engine);
    tracing::info!("Provider Base URL: {}", config.provider.base_url);
    if config.provider.project_id.is_empty() {
        tracing::warn!("Provider Project ID: (not set - batches will fail until configured)");
    } else {
        tracing::info!("Provider Project ID: {}", config.provider.project_id);
    }
    tracing::info!("Provider Location: {}", config.provider.location);
    tracing::info!("Configured Characters: {}", config.voices.characters.len());
    tracing::info!("Workspace Directory: {:?}", config.workspace.dir);
    tracing::info!("Audio Format: {:?}", config.workspace.audio_format);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
