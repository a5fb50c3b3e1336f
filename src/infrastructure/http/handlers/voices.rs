//! Voice Handlers - 已配置角色音色

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListCharacterVoices;
use crate::infrastructure::http::dto::{ApiResponse, CharacterVoiceDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出已配置的 角色 → 音色 映射
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CharacterVoiceDto>>>, ApiError> {
    let voices = state.list_voices_handler.handle(ListCharacterVoices).await?;

    let response: Vec<CharacterVoiceDto> = voices
        .into_iter()
        .map(|v| CharacterVoiceDto {
            character: v.character,
            voice_id: v.voice_id,
        })
        .collect();

    Ok(Json(ApiResponse::success(response)))
}
