//! Voice Query Handler - 已配置角色音色列表

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::ListCharacterVoices;
use crate::domain::VoiceRegistry;

/// 角色音色条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterVoice {
    pub character: String,
    pub voice_id: String,
}

/// ListCharacterVoices Handler
pub struct ListCharacterVoicesHandler {
    registry: Arc<VoiceRegistry>,
}

impl ListCharacterVoicesHandler {
    pub fn new(registry: Arc<VoiceRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        _query: ListCharacterVoices,
    ) -> Result<Vec<CharacterVoice>, ApplicationError> {
        Ok(self
            .registry
            .entries()
            .map(|(character, voice_id)| CharacterVoice {
                character: character.to_string(),
                voice_id: voice_id.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_configured_voices() {
        let registry = Arc::new(VoiceRegistry::new([
            ("Narrator".to_string(), "en-US-Wavenet-F".to_string()),
            ("Krishna".to_string(), "en-IN-Standard-C".to_string()),
        ]));

        let handler = ListCharacterVoicesHandler::new(registry);
        let voices = handler.handle(ListCharacterVoices).await.unwrap();

        assert_eq!(voices.len(), 2);
        // 按角色名排序
        assert_eq!(voices[0].character, "Krishna");
        assert_eq!(voices[1].character, "Narrator");
    }
}
