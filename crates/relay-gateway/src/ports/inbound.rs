//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the relay address parser.

use crate::domain::entities::Gateway;
use crate::domain::errors::GatewayError;

/// Relay Gateway Parser API.
///
/// Parsing is a pure, single-pass function: implementations hold no
/// state between calls and must be thread-safe (`Send + Sync`).
pub trait GatewayParserApi: Send + Sync {
    /// Parse a relay address into a validated gateway.
    ///
    /// Accepts `host[:port]`, `pubkey@host[:port]` and full
    /// `scheme://pubkey@host[:port][/path]` forms.
    ///
    /// # Errors
    /// * `MalformedAddress` - not a valid URI after scheme normalization
    /// * `MissingPublicKey` - no `pubkey@` credential segment
    /// * `InvalidPublicKeyEncoding` - credential is not a compressed G1 key
    /// * `PointAtInfinityPublicKey` - credential is the identity element
    fn parse(&self, input: &str) -> Result<Gateway, GatewayError>;

    /// Render a gateway's location for logging and display.
    fn render(&self, gateway: &Gateway) -> String;

    /// Build the full request URI for `path` on the gateway's host.
    fn build_request_uri(&self, gateway: &Gateway, path: &str) -> String;
}
