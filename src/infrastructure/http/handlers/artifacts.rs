//! Artifact Handlers - 下载生成的音频产物

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::application::GetArtifact;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 按文件名下载一个音频产物
pub async fn get_artifact(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    let query = GetArtifact { file_name };
    let result = state.get_artifact_handler.handle(query).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .body(Body::from(result.audio_data))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
