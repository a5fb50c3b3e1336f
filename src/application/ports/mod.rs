//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod synthesis;
mod workspace;

pub use synthesis::{SpeechSynthesisPort, SynthesisError, SynthesisRequest, SynthesisResponse};
pub use workspace::{AudioFormat, ClearOutcome, WorkspaceError, WorkspacePort};
