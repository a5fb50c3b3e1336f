//! Batch Handlers - 上传脚本并生成配音

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateVoiceOver;
use crate::infrastructure::http::dto::{ApiResponse, BatchReportResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 上传脚本并同步执行一个配音批次
///
/// multipart 字段:
/// - `file`: 脚本文件（.txt，UTF-8）
///
/// 批次级失败（缺文件、扩展名、提供方初始化）整体替代报告；
/// 行级失败包含在返回的报告里
pub async fn generate_voice_over(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<BatchReportResponse>>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut content: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        file_name = field.file_name().map(|s| s.to_string());

        // 扩展名与内容类型校验
        let content_type = field.content_type().unwrap_or("application/octet-stream");
        let is_txt = file_name
            .as_ref()
            .map(|f| f.to_lowercase().ends_with(".txt"))
            .unwrap_or(false);
        if !is_txt && !content_type.contains("text") {
            return Err(ApiError::BadRequest(
                "Invalid file type: please upload a .txt file.".to_string(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        content = Some(
            String::from_utf8(bytes.to_vec())
                .map_err(|_| ApiError::BadRequest("File must be valid UTF-8 text".to_string()))?,
        );
    }

    let file_name =
        file_name.ok_or_else(|| ApiError::BadRequest("Please upload a script file.".to_string()))?;
    let content =
        content.ok_or_else(|| ApiError::BadRequest("Please upload a script file.".to_string()))?;

    tracing::info!(file = %file_name, bytes = content.len(), "Script uploaded");

    let command = GenerateVoiceOver { file_name, content };
    let report = state.generate_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(BatchReportResponse::from(
        &report,
    ))))
}
