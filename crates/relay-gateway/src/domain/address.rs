//! # Address Normalization
//!
//! Relay addresses arrive as `host:port`, `pubkey@host:port` or full
//! URLs. Anything without an HTTP-family scheme gets the configured
//! default scheme prepended before URI parsing.

use std::borrow::Cow;

use super::errors::GatewayError;

const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];

/// True if `input` already starts with `http://` or `https://`
/// (ASCII case-insensitive).
pub fn has_http_scheme(input: &str) -> bool {
    HTTP_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Trim surrounding whitespace and prepend `default_scheme://` when the
/// address carries no HTTP-family scheme.
///
/// # Errors
/// * `MalformedAddress` if the address is empty after trimming
pub fn normalize_address<'a>(
    input: &'a str,
    default_scheme: &str,
) -> Result<Cow<'a, str>, GatewayError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::MalformedAddress("empty address".into()));
    }

    if has_http_scheme(trimmed) {
        Ok(Cow::Borrowed(trimmed))
    } else {
        Ok(Cow::Owned(format!("{default_scheme}://{trimmed}")))
    }
}

/// The `host[:port]` part of a scheme-qualified address, as written.
///
/// The authority ends at the first `/`, `\`, `?` or `#`; a credential
/// segment ends at the last `@` inside it.
pub fn written_authority(address: &str) -> &str {
    let rest = address.split_once("://").map_or(address, |(_, rest)| rest);
    let end = rest
        .find(|c: char| matches!(c, '/' | '\\' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    authority.rsplit_once('@').map_or(authority, |(_, host)| host)
}
