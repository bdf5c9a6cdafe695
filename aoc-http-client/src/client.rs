//! AOC HTTP client implementation

use crate::description::{extract_description, parse_page};
use crate::error::AocError;
use reqwest::header::HeaderValue;
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroize;

/// Site the client talks to unless a base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Timeout applied to every request of the default client
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The main AOC HTTP client
///
/// Fetches puzzle inputs and puzzle pages on behalf of a logged-in user.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2024, 1, session)?;
/// let description = client.get_description(2024, 1, session)?;
/// println!("{}\n\n{}", description, input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls and a 10 second timeout
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::InvalidSession);
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// URL of a puzzle day, with optional trailing segments
    fn day_url(&self, year: u16, day: u8, rest: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string()])
            .extend(rest);
        Ok(url)
    }

    /// GET a URL with the session cookie, failing on non-2xx
    fn fetch(
        &self,
        url: reqwest::Url,
        session: &str,
    ) -> Result<reqwest::blocking::Response, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }
        Ok(response)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// # Arguments
    ///
    /// * `year` - The puzzle year (e.g., 2024)
    /// * `day` - The puzzle day (1-25)
    /// * `session` - The session cookie value (without "session=" prefix)
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error occurred
    /// * `AocError::InvalidStatus` - Non-2xx status code received
    /// * `AocError::Encoding` - Response could not be decoded as UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.day_url(year, day, &["input"])?;
        self.fetch(url, session)?
            .text()
            .map_err(|_| AocError::Encoding)
    }

    /// Fetch the raw HTML of a puzzle page
    ///
    /// Part two is only present in the page once part one is solved for the
    /// session's account.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error occurred
    /// * `AocError::InvalidStatus` - Non-2xx status code received
    pub fn get_puzzle_page(&self, year: u16, day: u8, session: &str) -> Result<Vec<u8>, AocError> {
        let url = self.day_url(year, day, &[])?;
        let body = self.fetch(url, session)?.bytes()?;
        Ok(body.to_vec())
    }

    /// Fetch a puzzle page and convert its description to Markdown
    ///
    /// # Errors
    ///
    /// Everything [`AocClient::get_puzzle_page`] returns, plus
    /// `AocError::Description` when the page holds no usable description.
    pub fn get_description(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let body = self.get_puzzle_page(year, day, session)?;
        let document = parse_page(&body)?;
        let markdown = extract_description(&document)?;
        debug!(year, day, bytes = markdown.len(), "Extracted puzzle description");
        Ok(markdown)
    }
}

/// Builder for configuring an AOC client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let custom_builder = reqwest::blocking::Client::builder()
///     .timeout(Duration::from_secs(30));
///
/// let client = AocClient::builder()
///     .base_url("https://adventofcode.com")?
///     .client_builder(custom_builder)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL, mostly useful against a mock server
    ///
    /// # Errors
    ///
    /// Returns `AocError::Request` if the URL is invalid.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Replace the default reqwest client builder
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be built.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self.client_builder.unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .use_rustls_tls()
                .timeout(REQUEST_TIMEOUT)
        });

        let client = builder
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
