//! Fake TTS Client - 用于测试与离线运行的合成客户端
//!
//! 始终返回一段生成的静音 WAV，不调用任何外部服务

use async_trait::async_trait;

use crate::application::ports::{
    SpeechSynthesisPort, SynthesisError, SynthesisRequest, SynthesisResponse,
};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsConfig {
    /// 固定返回的音频时长（毫秒）
    pub duration_ms: u64,
    /// 采样率
    pub sample_rate: u32,
}

impl Default for FakeTtsConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            sample_rate: 22050,
        }
    }
}

/// Fake TTS Client
///
/// 音频数据在构建时生成一次并缓存
pub struct FakeTtsClient {
    config: FakeTtsConfig,
    audio_data: Vec<u8>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsConfig) -> Self {
        let audio_data = silence_wav(config.duration_ms, config.sample_rate);
        tracing::info!(
            duration_ms = config.duration_ms,
            sample_rate = config.sample_rate,
            "FakeTtsClient initialized"
        );
        Self { config, audio_data }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTtsConfig::default())
    }
}

#[async_trait]
impl SpeechSynthesisPort for FakeTtsClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        if request.text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        tracing::debug!(
            character = %request.character,
            voice_id = %request.voice_id,
            text_len = request.text.len(),
            "FakeTtsClient: returning generated silence"
        );

        // 模拟合成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(SynthesisResponse {
            audio_data: self.audio_data.clone(),
            duration_ms: Some(self.config.duration_ms),
            sample_rate: Some(self.config.sample_rate),
        })
    }
}

/// 生成 16-bit 单声道 PCM 静音 WAV
fn silence_wav(duration_ms: u64, sample_rate: u32) -> Vec<u8> {
    let sample_count = (sample_rate as u64 * duration_ms / 1000) as u32;
    let data_len = sample_count * 2;
    let byte_rate = sample_rate * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk 大小
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // 单声道
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_wav_header() {
        let wav = silence_wav(100, 22050);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 100ms @ 22050Hz 16-bit 单声道 = 2205 采样 * 2 字节 + 44 字节头
        assert_eq!(wav.len(), 44 + 2205 * 2);
    }

    #[tokio::test]
    async fn test_returns_cached_audio() {
        let client = FakeTtsClient::with_defaults();
        let response = client
            .synthesize(SynthesisRequest {
                character: "Narrator".to_string(),
                voice_id: "en-US-Wavenet-F".to_string(),
                text: "Once upon a time.".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.audio_data.is_empty());
        assert_eq!(response.sample_rate, Some(22050));
    }

    #[tokio::test]
    async fn test_rejects_empty_text() {
        let client = FakeTtsClient::with_defaults();
        let err = client
            .synthesize(SynthesisRequest {
                character: "Narrator".to_string(),
                voice_id: "en-US-Wavenet-F".to_string(),
                text: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyText));
    }
}
