//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Scaffolding or table generation error
    #[error("{0}")]
    Codegen(#[from] aoc_codegen::CodegenError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
