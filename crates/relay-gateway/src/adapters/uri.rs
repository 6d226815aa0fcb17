//! # URL Adapters
//!
//! `url` crate implementations of the address parser and request URI
//! builder ports.

use crate::domain::entities::Location;
use crate::domain::uri::join_request_uri;
use crate::ports::outbound::{AddressParseError, AddressParser, RequestUriBuilder};
use url::Url;

/// WHATWG URL parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlAddressParser;

impl UrlAddressParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl AddressParser for UrlAddressParser {
    fn parse_address(&self, address: &str) -> Result<Url, AddressParseError> {
        Url::parse(address).map_err(|e| AddressParseError {
            reason: e.to_string(),
        })
    }
}

/// Request URI builder that swaps the path of a parsed location.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlRequestUriBuilder;

impl UrlRequestUriBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self
    }
}

impl RequestUriBuilder for UrlRequestUriBuilder {
    fn build_uri(&self, base: &Location, path: &str) -> String {
        join_request_uri(base, path)
    }
}
