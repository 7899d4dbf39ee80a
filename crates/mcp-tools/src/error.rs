//! Error types for mcp-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] mcp_fs::Error),

    #[error("Tool '{name}' is declared more than once")]
    DuplicateTool { name: String },

    #[error("Tool '{tool}' declares fallback '{fallback}' which is not registered")]
    DanglingFallback { tool: String, fallback: String },
}
