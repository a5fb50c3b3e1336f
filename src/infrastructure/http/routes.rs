//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/batch/generate        POST  上传脚本并同步执行配音批次
//! - /api/workspace/clear       POST  清空生成的产物
//! - /api/voices/list           GET   列出已配置的角色音色
//! - /api/artifact/{file_name}  GET   下载单个音频产物

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/batch", batch_routes())
        .nest("/workspace", workspace_routes())
        .nest("/voices", voice_routes())
        .route("/artifact/:file_name", get(handlers::get_artifact))
}

/// Batch 路由
fn batch_routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(handlers::generate_voice_over))
}

/// Workspace 路由
fn workspace_routes() -> Router<Arc<AppState>> {
    Router::new().route("/clear", post(handlers::clear_workspace))
}

/// Voice 路由
fn voice_routes() -> Router<Arc<AppState>> {
    Router::new().route("/list", get(handlers::list_voices))
}
