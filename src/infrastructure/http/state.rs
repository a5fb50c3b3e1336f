//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    ClearWorkspaceHandler, GenerateVoiceOverHandler, GetArtifactHandler,
    ListCharacterVoicesHandler,
};
use crate::application::ports::{SpeechSynthesisPort, WorkspacePort};
use crate::domain::VoiceRegistry;

/// 应用状态
///
/// 端口实现构建一次后注入；音色注册表全局只读
pub struct AppState {
    // ========== Ports ==========
    pub registry: Arc<VoiceRegistry>,
    pub synthesis: Arc<dyn SpeechSynthesisPort>,
    pub workspace: Arc<dyn WorkspacePort>,

    // ========== Command Handlers ==========
    pub generate_handler: GenerateVoiceOverHandler,
    pub clear_handler: ClearWorkspaceHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListCharacterVoicesHandler,
    pub get_artifact_handler: GetArtifactHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        registry: Arc<VoiceRegistry>,
        synthesis: Arc<dyn SpeechSynthesisPort>,
        workspace: Arc<dyn WorkspacePort>,
    ) -> Self {
        Self {
            registry: registry.clone(),
            synthesis: synthesis.clone(),
            workspace: workspace.clone(),

            // Command handlers
            generate_handler: GenerateVoiceOverHandler::new(
                registry.clone(),
                synthesis.clone(),
                workspace.clone(),
            ),
            clear_handler: ClearWorkspaceHandler::new(workspace.clone()),

            // Query handlers
            list_voices_handler: ListCharacterVoicesHandler::new(registry),
            get_artifact_handler: GetArtifactHandler::new(workspace),
        }
    }
}
