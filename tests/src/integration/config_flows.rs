//! # Configuration Flows
//!
//! Parser configuration loaded from TOML, and gateways embedded in a
//! caller's own configuration structure.

#[cfg(test)]
mod tests {
    use relay_gateway::{
        ConfigError, Gateway, GatewayError, GatewayParserApi, GatewayParserConfig,
        GatewayParserService,
    };
    use serde::{Deserialize, Serialize};

    use crate::fixtures::{init_test_logging, public_key_hex};

    /// Stand-in for a client configuration that lists relays.
    #[derive(Debug, Serialize, Deserialize)]
    struct ClientConfig {
        relays: Vec<Gateway>,
    }

    #[test]
    fn test_https_default_from_toml() {
        init_test_logging();
        let config = GatewayParserConfig::from_toml_str(
            r#"
            [parser]
            default_scheme = "https"
            "#,
        )
        .unwrap();
        let service = GatewayParserService::with_config(config).unwrap();

        let gateway = service
            .parse(&format!("{}@relay.example.com", public_key_hex(10)))
            .unwrap();

        assert_eq!(gateway.scheme(), "https");
        assert_eq!(
            service.build_request_uri(&gateway, "/eth/v1/builder/status"),
            "https://relay.example.com/eth/v1/builder/status"
        );
    }

    #[test]
    fn test_invalid_default_scheme_in_toml() {
        let result = GatewayParserConfig::from_toml_str("[parser]\ndefault_scheme = \"wss\"");
        assert_eq!(result, Err(ConfigError::UnsupportedScheme("wss".into())));
    }

    #[test]
    fn test_gateways_deserialize_from_client_config() {
        init_test_logging();
        let (a, b) = (public_key_hex(11), public_key_hex(12));
        let text = format!(
            r#"relays = ["{a}@localhost:18550", "https://{b}@relay.example.com"]"#
        );

        let config: ClientConfig = toml::from_str(&text).unwrap();

        assert_eq!(config.relays.len(), 2);
        assert_eq!(config.relays[0].to_string(), format!("http://{a}@localhost:18550"));
        assert_eq!(config.relays[1].scheme(), "https");
    }

    #[test]
    fn test_invalid_gateway_fails_deserialization() {
        let err = toml::from_str::<ClientConfig>(r#"relays = ["localhost:18550"]"#).unwrap_err();
        assert!(
            err.to_string().contains(&GatewayError::MissingPublicKey.to_string()),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_gateways_serialize_as_rendered_strings() {
        let key = public_key_hex(13);
        let gateway: Gateway = format!("{key}@localhost:18550").parse().unwrap();
        let config = ClientConfig {
            relays: vec![gateway.clone()],
        };

        let text = toml::to_string(&config).unwrap();
        let restored: ClientConfig = toml::from_str(&text).unwrap();

        assert!(text.contains(&format!("http://{key}@localhost:18550")));
        assert_eq!(restored.relays, vec![gateway]);
    }
}
