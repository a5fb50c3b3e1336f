//! Vertex TTS Client - 调用托管语音合成服务
//!
//! 实现 SpeechSynthesisPort trait，通过 HTTP 调用外部合成服务
//!
//! 外部 API:
//! POST {base_url}/v1/projects/{project}/locations/{location}/voices/{voice_id}:synthesize
//! Request: {"text": "..."}  (JSON)
//! Response: 音频二进制，元数据在 headers

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{
    SpeechSynthesisPort, SynthesisError, SynthesisRequest, SynthesisResponse,
};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesizeHttpRequest {
    /// 要合成的台词文本
    text: String,
}

/// Vertex TTS 客户端配置
///
/// project_id 必须通过部署环境提供；location 缺省为 us-central1
#[derive(Debug, Clone)]
pub struct VertexTtsConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 项目/租户标识，必填
    pub project_id: String,
    /// 区域
    pub location: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for VertexTtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aiplatform.googleapis.com".to_string(),
            project_id: String::new(),
            location: "us-central1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl VertexTtsConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Vertex TTS 客户端
///
/// 构建一次后跨批次复用；ensure_ready 在每批开始时校验配置
pub struct VertexTtsClient {
    client: Client,
    config: VertexTtsConfig,
}

impl VertexTtsClient {
    /// 创建新的客户端
    pub fn new(config: VertexTtsConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 合成接口 URL
    fn synthesize_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/voices/{}:synthesize",
            self.config.base_url, self.config.project_id, self.config.location, voice_id
        )
    }
}

#[async_trait]
impl SpeechSynthesisPort for VertexTtsClient {
    async fn ensure_ready(&self) -> Result<(), SynthesisError> {
        if self.config.project_id.trim().is_empty() {
            return Err(SynthesisError::MissingConfig(
                "provider project id is not set; set VOXOVER_PROVIDER__PROJECT_ID in the \
                 deployment environment"
                    .to_string(),
            ));
        }

        tracing::info!(
            project_id = %self.config.project_id,
            location = %self.config.location,
            "Synthesis provider initialized"
        );
        Ok(())
    }

    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        if request.text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let url = self.synthesize_url(&request.voice_id);
        let body = SynthesizeHttpRequest {
            text: request.text.clone(),
        };

        tracing::debug!(
            url = %url,
            character = %request.character,
            voice_id = %request.voice_id,
            text_len = body.text.len(),
            "Sending synthesis request"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!(
                        "Cannot connect to synthesis service: {}",
                        e
                    ))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ProviderError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 从 headers 提取元数据
        let headers = response.headers();
        let duration_ms = headers
            .get("X-Synthesis-Duration-Ms")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let sample_rate = headers
            .get("X-Synthesis-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ProviderError(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            character = %request.character,
            voice_id = %request.voice_id,
            audio_size = audio_data.len(),
            duration_ms = ?duration_ms,
            "Synthesis completed"
        );

        Ok(SynthesisResponse {
            audio_data,
            duration_ms,
            sample_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = VertexTtsConfig::default();
        assert_eq!(config.base_url, "https://aiplatform.googleapis.com");
        assert_eq!(config.location, "us-central1");
        assert!(config.project_id.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = VertexTtsConfig::new("my-project").with_location("asia-south1");
        assert_eq!(config.project_id, "my-project");
        assert_eq!(config.location, "asia-south1");
    }

    #[test]
    fn test_synthesize_url_layout() {
        let client = VertexTtsClient::new(VertexTtsConfig::new("proj")).unwrap();
        assert_eq!(
            client.synthesize_url("en-IN-Standard-C"),
            "https://aiplatform.googleapis.com/v1/projects/proj/locations/us-central1/voices/en-IN-Standard-C:synthesize"
        );
    }

    #[tokio::test]
    async fn test_ensure_ready_requires_project_id() {
        let client = VertexTtsClient::new(VertexTtsConfig::default()).unwrap();
        let err = client.ensure_ready().await.unwrap_err();
        assert!(matches!(err, SynthesisError::MissingConfig(_)));
        assert!(err.to_string().contains("project id"));
    }

    #[tokio::test]
    async fn test_synthesize_rejects_empty_text() {
        let client = VertexTtsClient::new(VertexTtsConfig::new("proj")).unwrap();
        let err = client
            .synthesize(SynthesisRequest {
                character: "Krishna".to_string(),
                voice_id: "en-IN-Standard-C".to_string(),
                text: "   ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyText));
    }
}
