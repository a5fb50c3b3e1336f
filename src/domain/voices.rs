//! 角色音色注册表
//!
//! 角色名 → 音色标识的静态映射，进程启动时从配置构建一次，之后不可变

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    /// 角色未配置音色，仅中止当前行，不中止整个批次
    #[error("Character '{0}' not configured")]
    NotConfigured(String),
}

/// 音色注册表
///
/// 不变量:
/// - 角色名区分大小写且唯一
/// - 构建后只读
#[derive(Debug, Clone, Default)]
pub struct VoiceRegistry {
    voices: BTreeMap<String, String>,
}

impl VoiceRegistry {
    /// 从配置的 角色名 → 音色标识 映射构建
    pub fn new(voices: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            voices: voices.into_iter().collect(),
        }
    }

    /// 精确匹配角色名，返回音色标识
    pub fn resolve(&self, character: &str) -> Result<&str, VoiceError> {
        self.voices
            .get(character)
            .map(String::as_str)
            .ok_or_else(|| VoiceError::NotConfigured(character.to_string()))
    }

    /// 已配置的 (角色名, 音色标识) 对，按角色名排序
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.voices.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> VoiceRegistry {
        VoiceRegistry::new([
            ("Krishna".to_string(), "en-IN-Standard-C".to_string()),
            ("Radha".to_string(), "en-IN-Wavenet-D".to_string()),
        ])
    }

    #[test]
    fn test_resolve_known_character() {
        let registry = registry();
        assert_eq!(registry.resolve("Krishna").unwrap(), "en-IN-Standard-C");
    }

    #[test]
    fn test_resolve_unknown_character() {
        let registry = registry();
        let err = registry.resolve("Zed").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Zed"));
        assert!(message.contains("not configured"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = registry();
        assert!(registry.resolve("krishna").is_err());
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let registry = registry();
        let names: Vec<&str> = registry.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Krishna", "Radha"]);
    }
}
