use bytes::{BufMut, BytesMut};
use http::{StatusCode, Version};

use crate::settings::ResolverSettings;
use crate::traits::ReasonSource;

const LINE_SEPARATOR: &[u8] = b"\r\n";

/// Whether the text fits the reason-phrase grammar of RFC 7230:
/// HTAB, SP, VCHAR and obs-text only.
fn is_valid_reason(text: &str) -> bool {
    text.bytes()
        .all(|b| b == b'\t' || b == b' ' || (0x21..=0x7e).contains(&b) || b >= 0x80)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatusLineError {
    #[error("status code {0} is not a three digit code")]
    InvalidStatus(i32),

    #[error("cannot write a status line for {0:?}")]
    UnsupportedVersion(Version),
}

/// Writes HTTP/1.x status lines using the text from a [`ReasonSource`].
pub struct StatusLineWriter<S: ReasonSource> {
    source: S,
    version: Version,
}

impl<S: ReasonSource> StatusLineWriter<S> {
    /// Creates a writer producing HTTP/1.1 status lines.
    pub fn new(source: S) -> Self {
        Self {
            source,
            version: Version::HTTP_11,
        }
    }

    /// Creates a writer using the protocol version from the settings.
    pub fn with_settings(source: S, settings: &ResolverSettings) -> Self {
        Self {
            source,
            version: settings.version,
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Writes the status line for `code` onto the end of the buffer,
    /// including the trailing CRLF.
    ///
    /// The numeric code on the line is always `code` itself even when its
    /// text was found under a shifted custom code. If no text resolves
    /// the canonical reason is used, and failing that the phrase is left
    /// empty. Resolved text containing control characters such as CR or
    /// LF is treated the same as a miss.
    pub fn write_into(&self, code: i32, buffer: &mut BytesMut) -> Result<(), StatusLineError> {
        let version: &[u8] = if self.version == Version::HTTP_11 {
            b"HTTP/1.1"
        } else if self.version == Version::HTTP_10 {
            b"HTTP/1.0"
        } else {
            return Err(StatusLineError::UnsupportedVersion(self.version));
        };

        let status = u16::try_from(code)
            .ok()
            .and_then(|c| StatusCode::from_u16(c).ok())
            .ok_or(StatusLineError::InvalidStatus(code))?;

        let resolved = self.source.response_text(code);
        let text: &str = if resolved.found && is_valid_reason(&resolved.text) {
            &resolved.text
        } else {
            if resolved.found {
                warn!(
                    "status {} text {:?} is not a valid reason phrase, using canonical reason",
                    code, resolved.text
                );
            }
            status.canonical_reason().unwrap_or("")
        };

        buffer.reserve(version.len() + text.len() + 7);
        buffer.put_slice(version);
        buffer.put_u8(b' ');
        buffer.put_slice(status.as_str().as_bytes());
        buffer.put_u8(b' ');
        buffer.put_slice(text.as_bytes());
        buffer.put_slice(LINE_SEPARATOR);

        Ok(())
    }

    /// Renders the status line for `code` as a string.
    pub fn render(&self, code: i32) -> Result<String, StatusLineError> {
        let mut buffer = BytesMut::new();
        self.write_into(code, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::StatusTextResolver;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn builtin_status_line() {
        let resolver = StatusTextResolver::new();
        let writer = StatusLineWriter::new(&resolver);

        assert_eq!(writer.render(200).unwrap(), "HTTP/1.1 200 OK\r\n");
        assert_eq!(writer.render(404).unwrap(), "HTTP/1.1 404 Not Found\r\n");
    }

    #[test]
    fn http_10_status_line() {
        let resolver = StatusTextResolver::new();
        let writer = StatusLineWriter::new(&resolver).with_version(Version::HTTP_10);

        assert_eq!(writer.render(503).unwrap(), "HTTP/1.0 503 Service Unavailable\r\n");
    }

    #[test]
    fn version_from_settings() {
        let settings = ResolverSettings::default()
            .with_version(Version::HTTP_10)
            .with_global_status(299, "Mostly OK");
        let resolver = StatusTextResolver::with_settings(&settings);
        let writer = StatusLineWriter::with_settings(&resolver, &settings);

        assert_eq!(writer.render(299).unwrap(), "HTTP/1.0 299 Mostly OK\r\n");
    }

    #[test]
    fn shifted_text_keeps_requested_code() {
        let resolver = Arc::new(StatusTextResolver::new());
        resolver.set_custom_status(500, "Upstream Melted");
        resolver.set_enabled(true);

        let writer = StatusLineWriter::new(resolver.clone());
        assert_eq!(writer.render(520).unwrap(), "HTTP/1.1 520 Upstream Melted\r\n");

        resolver.set_enabled(false);
        assert_eq!(writer.render(520).unwrap(), "HTTP/1.1 520 \r\n");
    }

    #[test]
    fn global_text_on_status_line() {
        let resolver = StatusTextResolver::new();
        resolver.set_global_status(200, "All Good");

        let writer = StatusLineWriter::new(&resolver);
        assert_eq!(writer.render(200).unwrap(), "HTTP/1.1 200 All Good\r\n");
    }

    #[test]
    fn appends_to_existing_buffer() {
        let resolver = StatusTextResolver::new();
        let writer = StatusLineWriter::new(&resolver);

        let mut buffer = BytesMut::from(&b"prefix;"[..]);
        writer.write_into(204, &mut buffer).unwrap();
        assert_eq!(&buffer[..], &b"prefix;HTTP/1.1 204 No Content\r\n"[..]);
    }

    #[test]
    fn rejects_invalid_codes() {
        let resolver = StatusTextResolver::new();
        let writer = StatusLineWriter::new(&resolver);

        for code in [-1, 0, 99, 1000, i32::MAX] {
            assert_eq!(writer.render(code), Err(StatusLineError::InvalidStatus(code)));
        }
    }

    #[test]
    fn control_characters_fall_back_to_canonical_reason() {
        let resolver = StatusTextResolver::new();
        resolver.set_global_status(200, "OK\r\nSet-Cookie: evil=1");
        resolver.set_global_status(299, "Split\nLine");
        resolver.set_global_status(202, "Tab\tand \u{e9}");

        let writer = StatusLineWriter::new(&resolver);
        assert_eq!(writer.render(200).unwrap(), "HTTP/1.1 200 OK\r\n");
        assert_eq!(writer.render(299).unwrap(), "HTTP/1.1 299 \r\n");
        assert_eq!(writer.render(202).unwrap(), "HTTP/1.1 202 Tab\tand \u{e9}\r\n");
    }

    #[test]
    fn reason_grammar() {
        assert!(is_valid_reason(""));
        assert!(is_valid_reason("I'm a teapot"));
        assert!(!is_valid_reason("a\rb"));
        assert!(!is_valid_reason("a\0b"));
        assert!(!is_valid_reason("a\x7fb"));
    }

    #[test]
    fn rejects_unsupported_versions() {
        let resolver = StatusTextResolver::new();
        let writer = StatusLineWriter::new(&resolver).with_version(Version::HTTP_2);

        assert_eq!(
            writer.render(200),
            Err(StatusLineError::UnsupportedVersion(Version::HTTP_2))
        );
    }
}
