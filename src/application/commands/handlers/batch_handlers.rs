//! Batch Command Handler - 配音批次编排
//!
//! 驱动 解析 → 清理 → 音色解析 → 合成 → 写产物 的逐行流水，
//! 行级失败记录后继续，批次级失败整体中止

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::GenerateVoiceOver;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesisPort, SynthesisRequest, WorkspacePort};
use crate::domain::{clean_dialogue, parse_script, VoiceRegistry};

// ============================================================================
// 批次状态与报告
// ============================================================================

/// 批次处理阶段
///
/// 一个批次严格按 Validating → InitializingProvider → ProcessingLines → Done 推进
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Validating,
    InitializingProvider,
    ProcessingLines,
    Done,
}

impl fmt::Display for BatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::InitializingProvider => "initializing_provider",
            Self::ProcessingLines => "processing_lines",
            Self::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// 行级错误条目
///
/// 按源行号排序收集；`character` 仅在已知时填写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line_no: usize,
    pub character: Option<String>,
    pub message: String,
}

impl LineError {
    /// 渲染为报告中的一行
    pub fn describe(&self) -> String {
        match &self.character {
            Some(character) => format!("Line {} ({}): {}", self.line_no, character, self.message),
            None => format!("Line {}: {}", self.line_no, self.message),
        }
    }
}

/// 生成的音频产物引用
#[derive(Debug, Clone)]
pub struct ArtifactRef {
    /// 处理序号（文件名中的索引）
    pub ordinal: usize,
    /// 源脚本行号
    pub line_no: usize,
    pub character: String,
    /// 原始台词（未清理，供前端与产物并排展示）
    pub original_text: String,
    pub file_name: String,
    pub path: PathBuf,
}

/// 批次处理结果
///
/// 生命周期为一次批次调用，不跨批次合并
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// 非空行总数（含失败行）
    pub lines_seen: usize,
    /// 成功生成的产物数
    pub generated: usize,
    /// 行级错误，按源行号排序
    pub errors: Vec<LineError>,
    /// 产物，按处理顺序
    pub artifacts: Vec<ArtifactRef>,
}

impl BatchReport {
    /// 渲染状态摘要：固定的计数行，错误非空时追加明细
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Processed {} lines. Generated {} files.",
            self.lines_seen, self.generated
        );
        if !self.errors.is_empty() {
            summary.push_str("\n\nErrors:\n");
            let items: Vec<String> = self.errors.iter().map(LineError::describe).collect();
            summary.push_str(&items.join("\n"));
        }
        summary
    }
}

// ============================================================================
// GenerateVoiceOver Handler
// ============================================================================

/// GenerateVoiceOver Handler - 批次编排器
///
/// 依赖以端口注入，合成提供方构建一次后跨批次复用
pub struct GenerateVoiceOverHandler {
    registry: Arc<VoiceRegistry>,
    synthesis: Arc<dyn SpeechSynthesisPort>,
    workspace: Arc<dyn WorkspacePort>,
}

impl GenerateVoiceOverHandler {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        synthesis: Arc<dyn SpeechSynthesisPort>,
        workspace: Arc<dyn WorkspacePort>,
    ) -> Self {
        Self {
            registry,
            synthesis,
            workspace,
        }
    }

    /// 执行一个完整批次
    ///
    /// 批次级失败（文件校验、提供方初始化）返回 Err 并替代整份报告；
    /// 行级失败收集进报告的 errors，处理继续
    pub async fn handle(
        &self,
        command: GenerateVoiceOver,
    ) -> Result<BatchReport, ApplicationError> {
        let batch_id = Uuid::new_v4();
        let started_at = Utc::now();

        tracing::debug!(batch_id = %batch_id, phase = %BatchPhase::Validating, "Batch phase");
        self.validate(&command)?;

        tracing::debug!(batch_id = %batch_id, phase = %BatchPhase::InitializingProvider, "Batch phase");
        self.synthesis
            .ensure_ready()
            .await
            .map_err(|e| ApplicationError::ProviderInitError(e.to_string()))?;
        self.workspace.ensure_dir().await?;

        tracing::debug!(batch_id = %batch_id, phase = %BatchPhase::ProcessingLines, "Batch phase");
        let parsed = parse_script(&command.content);

        let mut errors: Vec<LineError> = parsed
            .format_errors
            .iter()
            .map(|e| LineError {
                line_no: e.line_no,
                character: None,
                message: format!("Format Error: '{}'", e.raw),
            })
            .collect();
        let mut artifacts: Vec<ArtifactRef> = Vec::new();

        for record in &parsed.records {
            match self.process_line(record).await {
                Ok(artifact) => {
                    tracing::debug!(
                        batch_id = %batch_id,
                        line_no = record.line_no,
                        character = %record.character,
                        file = %artifact.file_name,
                        "Line synthesized"
                    );
                    artifacts.push(artifact);
                }
                Err(error) => {
                    tracing::warn!(
                        batch_id = %batch_id,
                        line_no = error.line_no,
                        error = %error.message,
                        "Line failed, continuing"
                    );
                    errors.push(error);
                }
            }
        }

        // 格式错误与处理错误合并后按源行号排序
        errors.sort_by_key(|e| e.line_no);

        let report = BatchReport {
            batch_id,
            started_at,
            finished_at: Utc::now(),
            lines_seen: parsed.lines_seen,
            generated: artifacts.len(),
            errors,
            artifacts,
        };

        tracing::info!(
            batch_id = %batch_id,
            phase = %BatchPhase::Done,
            lines_seen = report.lines_seen,
            generated = report.generated,
            errors = report.errors.len(),
            "Batch completed"
        );

        Ok(report)
    }

    /// 输入校验：必须提供 .txt 文件
    fn validate(&self, command: &GenerateVoiceOver) -> Result<(), ApplicationError> {
        if command.file_name.trim().is_empty() {
            return Err(ApplicationError::validation("Please upload a script file."));
        }
        if !command.file_name.to_lowercase().ends_with(".txt") {
            return Err(ApplicationError::validation(
                "Invalid file type: please upload a .txt file.",
            ));
        }
        Ok(())
    }

    /// 处理一条台词记录：清理 → 音色解析 → 合成 → 写产物
    async fn process_line(
        &self,
        record: &crate::domain::DialogueLine,
    ) -> Result<ArtifactRef, LineError> {
        let line_error = |character: Option<&str>, message: String| LineError {
            line_no: record.line_no,
            character: character.map(str::to_string),
            message,
        };

        let cleaned = clean_dialogue(&record.text);
        if cleaned.is_empty() {
            return Err(line_error(
                Some(&record.character),
                "No speakable text after removing director notes".to_string(),
            ));
        }

        let voice_id = self
            .registry
            .resolve(&record.character)
            .map_err(|e| line_error(None, e.to_string()))?;

        let response = self
            .synthesis
            .synthesize(SynthesisRequest {
                character: record.character.clone(),
                voice_id: voice_id.to_string(),
                text: cleaned,
            })
            .await
            .map_err(|e| line_error(Some(&record.character), e.to_string()))?;

        let path = self
            .workspace
            .write_artifact(record.ordinal, &record.character, &response.audio_data)
            .await
            .map_err(|e| line_error(Some(&record.character), e.to_string()))?;

        Ok(ArtifactRef {
            ordinal: record.ordinal,
            line_no: record.line_no,
            character: record.character.clone(),
            original_text: record.text.clone(),
            file_name: self
                .workspace
                .artifact_file_name(record.ordinal, &record.character),
            path,
        })
    }
}
