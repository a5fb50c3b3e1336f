//! Data Transfer Objects

use serde::Serialize;
use uuid::Uuid;

use crate::application::{ArtifactRef, BatchReport, ClearReport, LineError};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Batch DTOs
// ============================================================================

/// 行级错误条目
#[derive(Debug, Serialize)]
pub struct LineErrorDto {
    pub line_no: usize,
    pub character: Option<String>,
    pub message: String,
    /// 渲染好的单行描述，如 "Line 2 (Krishna): ..."
    pub description: String,
}

impl From<&LineError> for LineErrorDto {
    fn from(error: &LineError) -> Self {
        Self {
            line_no: error.line_no,
            character: error.character.clone(),
            message: error.message.clone(),
            description: error.describe(),
        }
    }
}

/// 音频产物条目：原始台词与产物下载地址成对返回，供前端并排渲染
#[derive(Debug, Serialize)]
pub struct ArtifactDto {
    pub ordinal: usize,
    pub line_no: usize,
    pub character: String,
    pub original_text: String,
    pub file_name: String,
    pub url: String,
}

impl ArtifactDto {
    fn from_ref(artifact: &ArtifactRef) -> Self {
        Self {
            ordinal: artifact.ordinal,
            line_no: artifact.line_no,
            character: artifact.character.clone(),
            original_text: artifact.original_text.clone(),
            file_name: artifact.file_name.clone(),
            url: format!("/api/artifact/{}", artifact.file_name),
        }
    }
}

/// 批次报告响应
#[derive(Debug, Serialize)]
pub struct BatchReportResponse {
    pub batch_id: Uuid,
    pub started_at: String,
    pub finished_at: String,
    pub lines_seen: usize,
    pub generated: usize,
    /// 人类可读摘要（计数 + 错误明细）
    pub summary: String,
    pub errors: Vec<LineErrorDto>,
    pub results: Vec<ArtifactDto>,
}

impl From<&BatchReport> for BatchReportResponse {
    fn from(report: &BatchReport) -> Self {
        Self {
            batch_id: report.batch_id,
            started_at: report.started_at.to_rfc3339(),
            finished_at: report.finished_at.to_rfc3339(),
            lines_seen: report.lines_seen,
            generated: report.generated,
            summary: report.summary(),
            errors: report.errors.iter().map(LineErrorDto::from).collect(),
            results: report.artifacts.iter().map(ArtifactDto::from_ref).collect(),
        }
    }
}

// ============================================================================
// Workspace DTOs
// ============================================================================

/// 清空响应
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub deleted: u64,
    pub failed: u64,
    pub directory_missing: bool,
    pub summary: String,
}

impl From<&ClearReport> for ClearResponse {
    fn from(report: &ClearReport) -> Self {
        Self {
            deleted: report.deleted,
            failed: report.failed,
            directory_missing: report.directory_missing,
            summary: report.summary(),
        }
    }
}

// ============================================================================
// Voice DTOs
// ============================================================================

/// 角色音色条目
#[derive(Debug, Serialize)]
pub struct CharacterVoiceDto {
    pub character: String,
    pub voice_id: String,
}
