//! TTS Adapters - 语音合成端口实现

mod fake_tts_client;
mod vertex_tts_client;

pub use fake_tts_client::{FakeTtsClient, FakeTtsConfig};
pub use vertex_tts_client::{VertexTtsClient, VertexTtsConfig};
