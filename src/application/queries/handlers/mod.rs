//! 查询处理器

mod artifact_handlers;
mod voice_handlers;

pub use artifact_handlers::{GetArtifactHandler, GetArtifactResponse};
pub use voice_handlers::{CharacterVoice, ListCharacterVoicesHandler};
