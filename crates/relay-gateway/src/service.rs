//! # Gateway Parser Service
//!
//! Application service layer that implements the `GatewayParserApi` trait.
//!
//! ## Pipeline
//!
//! ```text
//! input ──normalize──→ scheme://... ──AddressParser──→ Url
//!                           │                          │
//!                    written host[:port]     percent-decoded username
//!                           │                          │
//!                           │        PublicKeyCodec::decode + infinity check
//!                           │                          │
//!                           ↓                          ↓
//!                         Gateway { key, Location { url, authority } }
//! ```
//!
//! Each step either hands a fully valid value to the next or returns the
//! matching `GatewayError`. Nothing partially built leaves the service.

use std::str::FromStr;

use percent_encoding::percent_decode_str;
use tracing::{debug, warn};

use crate::adapters::key_codec::BlstKeyCodec;
use crate::adapters::uri::{UrlAddressParser, UrlRequestUriBuilder};
use crate::domain::address::{normalize_address, written_authority};
use crate::domain::bls::strip_hex_prefix;
use crate::domain::config::GatewayParserConfig;
use crate::domain::entities::{Gateway, Location, RelayPublicKey};
use crate::domain::errors::{ConfigError, GatewayError, KeyCodecError};
use crate::ports::inbound::GatewayParserApi;
use crate::ports::outbound::{AddressParser, PublicKeyCodec, RequestUriBuilder};

/// Gateway Parser Service.
///
/// Stateless apart from its immutable configuration, so one instance can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct GatewayParserService<
    P = UrlAddressParser,
    C = BlstKeyCodec,
    B = UrlRequestUriBuilder,
> {
    config: GatewayParserConfig,
    address_parser: P,
    key_codec: C,
    uri_builder: B,
}

impl GatewayParserService {
    /// Create a service with the default configuration and adapters.
    pub fn new() -> Self {
        Self {
            config: GatewayParserConfig::default(),
            address_parser: UrlAddressParser::new(),
            key_codec: BlstKeyCodec::new(),
            uri_builder: UrlRequestUriBuilder::new(),
        }
    }

    /// Create a service with the default adapters and a custom configuration.
    ///
    /// # Errors
    /// * `UnsupportedScheme` if the default scheme is not http or https
    pub fn with_config(config: GatewayParserConfig) -> Result<Self, ConfigError> {
        Self::with_adapters(
            config,
            UrlAddressParser::new(),
            BlstKeyCodec::new(),
            UrlRequestUriBuilder::new(),
        )
    }
}

impl Default for GatewayParserService {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C, B> GatewayParserService<P, C, B>
where
    P: AddressParser,
    C: PublicKeyCodec,
    B: RequestUriBuilder,
{
    /// Create a service from explicit adapters.
    ///
    /// # Arguments
    /// * `config` - Parser configuration, validated before use
    /// * `address_parser` - URI parser
    /// * `key_codec` - Public key codec
    /// * `uri_builder` - Request URI builder
    pub fn with_adapters(
        config: GatewayParserConfig,
        address_parser: P,
        key_codec: C,
        uri_builder: B,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            address_parser,
            key_codec,
            uri_builder,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &GatewayParserConfig {
        &self.config
    }

    fn parse_location(&self, input: &str) -> Result<Location, GatewayError> {
        let address = normalize_address(input, &self.config.default_scheme)?;
        let url = self
            .address_parser
            .parse_address(&address)
            .map_err(|e| GatewayError::MalformedAddress(e.reason))?;
        Ok(Location::new(url, written_authority(&address)))
    }

    fn decode_public_key(&self, location: &Location) -> Result<RelayPublicKey, GatewayError> {
        // The password half of the credential is ignored.
        let username = percent_decode_str(location.url().username())
            .decode_utf8()
            .map_err(|e| KeyCodecError::InvalidHex(e.to_string()))?;
        if username.is_empty() {
            return Err(GatewayError::MissingPublicKey);
        }

        let hex = if self.config.accept_hex_prefix {
            strip_hex_prefix(&username)
        } else {
            &*username
        };

        let public_key = self.key_codec.decode(hex)?;
        if self.key_codec.is_point_at_infinity(&public_key) {
            return Err(GatewayError::PointAtInfinityPublicKey);
        }

        Ok(public_key)
    }
}

impl<P, C, B> GatewayParserApi for GatewayParserService<P, C, B>
where
    P: AddressParser,
    C: PublicKeyCodec,
    B: RequestUriBuilder,
{
    fn parse(&self, input: &str) -> Result<Gateway, GatewayError> {
        let result = self.parse_location(input).and_then(|location| {
            let public_key = self.decode_public_key(&location)?;
            Ok(Gateway::new(public_key, location))
        });

        match &result {
            Ok(gateway) => debug!(
                host = %gateway.host(),
                scheme = gateway.scheme(),
                "Relay address parsed"
            ),
            Err(e) => warn!(reason = %e, "Relay address rejected"),
        }

        result
    }

    fn render(&self, gateway: &Gateway) -> String {
        gateway.to_string()
    }

    fn build_request_uri(&self, gateway: &Gateway, path: &str) -> String {
        self.uri_builder.build_uri(gateway.location(), path)
    }
}

impl FromStr for Gateway {
    type Err = GatewayError;

    /// Parse with the default configuration and adapters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GatewayParserService::new().parse(s)
    }
}
