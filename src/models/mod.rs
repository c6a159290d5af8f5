//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `repository`: RepositorySummary, RepositoryListResult
//! - `files`: FileNode, FileListResult
//! - `assistant`: ChatRequest, AnalyzeFilesRequest, AssistantResponse

pub mod assistant;
pub mod files;
pub mod repository;

pub use assistant::*;
pub use files::*;
pub use repository::*;
