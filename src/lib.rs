//! Voxover - 台词配音生产工具
//!
//! 解析 `角色名: 台词` 格式的脚本，为每个角色匹配配置的合成音色，
//! 逐行调用远端语音合成服务，产物与状态报告经 HTTP API 提供给前端
//!
//! 领域层 (domain/):
//! - script: 脚本行解析
//! - dialogue: 台词清理（导演备注移除）
//! - voices: 角色音色注册表
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechSynthesis, Workspace）
//! - Commands: 批次生成、工作区清空
//! - Queries: 音色列表、产物读取
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: Vertex/Fake TTS Client, File Workspace

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
