//! HTTP status text resolution.
//!
//! A built-in table maps registered status codes to their reason
//! phrases. On top of it a [`StatusTextResolver`] carries a global
//! overlay that replaces text for a code everywhere, and a custom overlay
//! reached through shifted codes (`code - 20`, then `code - 240`).
//!
//! The free functions in this crate operate on a process wide resolver
//! created on first use. Build your own [`StatusTextResolver`] when the
//! overlays should not be shared.
pub mod logging;

use std::sync::OnceLock;

pub use reason_phrase_core::table;
pub use reason_phrase_core::{
    ReasonSource,
    Resolution,
    ResolverSettings,
    Settings,
    StatusLineError,
    StatusLineWriter,
    StatusTextResolver,
};

/// The resolver shared by the free functions of this crate.
pub fn default_resolver() -> &'static StatusTextResolver {
    static RESOLVER: OnceLock<StatusTextResolver> = OnceLock::new();
    RESOLVER.get_or_init(StatusTextResolver::new)
}

/// Gets the built-in phrase for a code, empty if the code is unknown.
pub fn lookup(code: i32) -> &'static str {
    default_resolver().lookup(code)
}

/// The unshifted text for a code, global overlay first.
pub fn status_text(code: i32) -> String {
    default_resolver().status_text(code)
}

/// See [`StatusTextResolver::set_global_status`].
pub fn set_global_status(code: i32, text: impl Into<String>) {
    default_resolver().set_global_status(code, text)
}

/// See [`StatusTextResolver::set_enabled`].
pub fn set_enabled(enabled: bool) {
    default_resolver().set_enabled(enabled)
}

/// See [`StatusTextResolver::set_custom_status`].
pub fn set_custom_status(code: i32, text: impl Into<String>) {
    default_resolver().set_custom_status(code, text)
}

/// See [`StatusTextResolver::resolve`].
pub fn resolve(code: i32) -> Resolution {
    default_resolver().resolve(code)
}

/// See [`StatusTextResolver::response_text`].
pub fn response_text(code: i32) -> Resolution {
    default_resolver().response_text(code)
}

/// Renders an HTTP/1.1 status line for `code` from the shared resolver.
pub fn status_line(code: i32) -> Result<String, StatusLineError> {
    StatusLineWriter::new(default_resolver()).render(code)
}
