//! AOC HTTP Client Library
//!
//! Fetches puzzle inputs and puzzle descriptions from the Advent of Code
//! website.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Puzzle description extraction, rendered as Markdown
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2024, 1, session)?;
//! let markdown = client.get_description(2024, 1, session)?;
//! # Ok(())
//! # }
//! ```
//!
//! The extraction is usable on its own, for example on a saved page:
//!
//! ```
//! use aoc_http_client::{extract_description, parse_page};
//!
//! let page = parse_page(br#"<article class="day-desc"><h2>Day 1</h2></article>"#).unwrap();
//! assert_eq!(extract_description(&page).unwrap(), "# Day 1");
//! ```

mod client;
mod description;
mod error;
mod markdown;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use description::{
    DESCRIPTION_CLASS, description_blocks, extract_description, is_description_block,
    parse_page, promote_first_heading, strip_trailing_separator,
};
pub use error::{AocError, ConversionError, DescriptionError};
pub use markdown::to_markdown;
