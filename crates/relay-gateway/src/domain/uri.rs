//! # Location Rendering and Request URIs
//!
//! Pure string-level operations on parsed relay locations. Both keep the
//! authority exactly as the caller wrote it.

use url::Position;

use super::entities::Location;

/// Render a location as a string, scheme and credential included.
///
/// A bare root path is dropped so `pubkey@host:port` inputs round-trip
/// without gaining a trailing slash.
pub fn render_location(location: &Location) -> String {
    let url = location.url();
    let mut rendered = format!("{}://", url.scheme());

    if !url.username().is_empty() || url.password().is_some() {
        rendered.push_str(url.username());
        if let Some(password) = url.password() {
            rendered.push(':');
            rendered.push_str(password);
        }
        rendered.push('@');
    }

    rendered.push_str(location.authority());

    let tail = &url[Position::BeforePath..];
    if tail != "/" {
        rendered.push_str(tail);
    }
    rendered
}

/// Build a request URI from a relay location and an API path.
///
/// Scheme, authority, query and fragment come from `location`; the
/// credential segment is dropped and the path is replaced by `path`.
pub fn join_request_uri(location: &Location, path: &str) -> String {
    let mut uri = location.url().clone();

    if path.starts_with('/') {
        uri.set_path(path);
    } else {
        uri.set_path(&format!("/{path}"));
    }

    format!(
        "{}://{}{}",
        uri.scheme(),
        location.authority(),
        &uri[Position::BeforePath..]
    )
}
