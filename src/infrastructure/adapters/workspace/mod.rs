//! Workspace Adapters - 产物工作区端口实现

mod file_workspace;

pub use file_workspace::FileWorkspace;
