//! 命令处理器

mod batch_handlers;
mod workspace_handlers;

pub use batch_handlers::{
    ArtifactRef, BatchPhase, BatchReport, GenerateVoiceOverHandler, LineError,
};
pub use workspace_handlers::{ClearReport, ClearWorkspaceHandler};
