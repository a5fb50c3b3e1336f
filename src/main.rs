//! Voxover - 台词配音生产工具
//!
//! 装配流程: 配置 → 日志 → 适配器 → 应用状态 → HTTP 服务器

use std::sync::Arc;

use voxover::application::ports::{SpeechSynthesisPort, WorkspacePort};
use voxover::config::{load_config, print_config, ProviderEngine};
use voxover::domain::VoiceRegistry;
use voxover::infrastructure::adapters::{
    FakeTtsClient, FakeTtsConfig, FileWorkspace, VertexTtsClient, VertexTtsConfig,
};
use voxover::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxover={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Voxover - script voice-over production tool");
    print_config(&config);

    // 确保工作区目录存在
    let workspace = Arc::new(FileWorkspace::new(
        &config.workspace.dir,
        config.workspace.audio_format,
    ));
    workspace
        .ensure_dir()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to prepare workspace: {}", e))?;

    // 构建音色注册表
    let registry = Arc::new(VoiceRegistry::new(config.voices.characters.clone()));
    if registry.is_empty() {
        tracing::warn!("Voice registry is empty; every line will fail to resolve");
    }

    // 构建合成引擎（一次构建，跨批次复用）
    let synthesis: Arc<dyn SpeechSynthesisPort> = match config.provider.engine {
        ProviderEngine::Vertex => {
            let tts_config = VertexTtsConfig {
                base_url: config.provider.base_url.clone(),
                project_id: config.provider.project_id.clone(),
                location: config.provider.location.clone(),
                timeout_secs: config.provider.timeout_secs,
            };
            Arc::new(VertexTtsClient::new(tts_config)?)
        }
        ProviderEngine::Fake => Arc::new(FakeTtsClient::new(FakeTtsConfig::default())),
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.workspace.max_upload_size as usize);
    let state = AppState::new(registry, synthesis, workspace);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
