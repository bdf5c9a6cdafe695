//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Failed to turn the puzzle page into a description
    #[error(transparent)]
    Description(#[from] DescriptionError),

    /// Session cookie cannot be sent as a header value
    #[error("Invalid session cookie format")]
    InvalidSession,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

/// Errors raised while extracting the puzzle description from a page
#[derive(Error, Debug)]
pub enum DescriptionError {
    /// The page could not be parsed as an HTML document
    #[error("Failed to parse HTML: {0}")]
    Parse(#[from] std::str::Utf8Error),

    /// A description block could not be rendered to Markdown
    #[error("Failed to convert description block {index} to Markdown: {source}")]
    Conversion {
        /// Position of the block among all description blocks
        index: usize,
        #[source]
        source: ConversionError,
    },

    /// The page contains no description block
    #[error("No puzzle description found in page")]
    Empty,
}

/// Errors raised by the Markdown renderer
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The element has no text worth rendering
    #[error("element <{0}> rendered to empty Markdown")]
    EmptyElement(String),

    /// Writing the rendered Markdown failed
    #[error("failed to write Markdown")]
    Write(#[from] std::fmt::Error),
}
