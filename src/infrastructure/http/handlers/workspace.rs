//! Workspace Handlers - 清空生成的产物

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ClearWorkspace;
use crate::infrastructure::http::dto::{ApiResponse, ClearResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 清空工作区内所有产物文件
pub async fn clear_workspace(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ClearResponse>>, ApiError> {
    let report = state.clear_handler.handle(ClearWorkspace).await?;
    Ok(Json(ApiResponse::success(ClearResponse::from(&report))))
}
