//! The built-in status code table.
//!
//! Codes and phrases follow the IANA HTTP status code registry, with the
//! addition of `418 I'm a teapot`. The table is a static, sorted slice so
//! lookups never need synchronisation.

// 1xx codes
pub const CONTINUE: i32 = 100;
pub const SWITCHING_PROTOCOLS: i32 = 101;
pub const PROCESSING: i32 = 102;
pub const EARLY_HINTS: i32 = 103;

// 2xx codes
pub const OK: i32 = 200;
pub const CREATED: i32 = 201;
pub const ACCEPTED: i32 = 202;
pub const NON_AUTHORITATIVE_INFO: i32 = 203;
pub const NO_CONTENT: i32 = 204;
pub const RESET_CONTENT: i32 = 205;
pub const PARTIAL_CONTENT: i32 = 206;
pub const MULTI_STATUS: i32 = 207;
pub const ALREADY_REPORTED: i32 = 208;
pub const IM_USED: i32 = 226;

// 3xx codes
pub const MULTIPLE_CHOICES: i32 = 300;
pub const MOVED_PERMANENTLY: i32 = 301;
pub const FOUND: i32 = 302;
pub const SEE_OTHER: i32 = 303;
pub const NOT_MODIFIED: i32 = 304;
pub const USE_PROXY: i32 = 305;
// 306 is reserved and unused.
pub const TEMPORARY_REDIRECT: i32 = 307;
pub const PERMANENT_REDIRECT: i32 = 308;

// 4xx codes
pub const BAD_REQUEST: i32 = 400;
pub const UNAUTHORIZED: i32 = 401;
pub const PAYMENT_REQUIRED: i32 = 402;
pub const FORBIDDEN: i32 = 403;
pub const NOT_FOUND: i32 = 404;
pub const METHOD_NOT_ALLOWED: i32 = 405;
pub const NOT_ACCEPTABLE: i32 = 406;
pub const PROXY_AUTH_REQUIRED: i32 = 407;
pub const REQUEST_TIMEOUT: i32 = 408;
pub const CONFLICT: i32 = 409;
pub const GONE: i32 = 410;
pub const LENGTH_REQUIRED: i32 = 411;
pub const PRECONDITION_FAILED: i32 = 412;
pub const REQUEST_ENTITY_TOO_LARGE: i32 = 413;
pub const REQUEST_URI_TOO_LONG: i32 = 414;
pub const UNSUPPORTED_MEDIA_TYPE: i32 = 415;
pub const REQUESTED_RANGE_NOT_SATISFIABLE: i32 = 416;
pub const EXPECTATION_FAILED: i32 = 417;
pub const IM_A_TEAPOT: i32 = 418;
pub const MISDIRECTED_REQUEST: i32 = 421;
pub const UNPROCESSABLE_ENTITY: i32 = 422;
pub const LOCKED: i32 = 423;
pub const FAILED_DEPENDENCY: i32 = 424;
pub const TOO_EARLY: i32 = 425;
pub const UPGRADE_REQUIRED: i32 = 426;
pub const PRECONDITION_REQUIRED: i32 = 428;
pub const TOO_MANY_REQUESTS: i32 = 429;
pub const REQUEST_HEADER_FIELDS_TOO_LARGE: i32 = 431;
pub const UNAVAILABLE_FOR_LEGAL_REASONS: i32 = 451;

// 5xx codes
pub const INTERNAL_SERVER_ERROR: i32 = 500;
pub const NOT_IMPLEMENTED: i32 = 501;
pub const BAD_GATEWAY: i32 = 502;
pub const SERVICE_UNAVAILABLE: i32 = 503;
pub const GATEWAY_TIMEOUT: i32 = 504;
pub const HTTP_VERSION_NOT_SUPPORTED: i32 = 505;
pub const VARIANT_ALSO_NEGOTIATES: i32 = 506;
pub const INSUFFICIENT_STORAGE: i32 = 507;
pub const LOOP_DETECTED: i32 = 508;
pub const NOT_EXTENDED: i32 = 510;
pub const NETWORK_AUTHENTICATION_REQUIRED: i32 = 511;

/// Every registered code with its phrase, sorted by code.
static STATUS_TEXT: &[(i32, &str)] = &[
    (CONTINUE, "Continue"),
    (SWITCHING_PROTOCOLS, "Switching Protocols"),
    (PROCESSING, "Processing"),
    (EARLY_HINTS, "Early Hints"),
    (OK, "OK"),
    (CREATED, "Created"),
    (ACCEPTED, "Accepted"),
    (NON_AUTHORITATIVE_INFO, "Non-Authoritative Information"),
    (NO_CONTENT, "No Content"),
    (RESET_CONTENT, "Reset Content"),
    (PARTIAL_CONTENT, "Partial Content"),
    (MULTI_STATUS, "Multi-Status"),
    (ALREADY_REPORTED, "Already Reported"),
    (IM_USED, "IM Used"),
    (MULTIPLE_CHOICES, "Multiple Choices"),
    (MOVED_PERMANENTLY, "Moved Permanently"),
    (FOUND, "Found"),
    (SEE_OTHER, "See Other"),
    (NOT_MODIFIED, "Not Modified"),
    (USE_PROXY, "Use Proxy"),
    (TEMPORARY_REDIRECT, "Temporary Redirect"),
    (PERMANENT_REDIRECT, "Permanent Redirect"),
    (BAD_REQUEST, "Bad Request"),
    (UNAUTHORIZED, "Unauthorized"),
    (PAYMENT_REQUIRED, "Payment Required"),
    (FORBIDDEN, "Forbidden"),
    (NOT_FOUND, "Not Found"),
    (METHOD_NOT_ALLOWED, "Method Not Allowed"),
    (NOT_ACCEPTABLE, "Not Acceptable"),
    (PROXY_AUTH_REQUIRED, "Proxy Authentication Required"),
    (REQUEST_TIMEOUT, "Request Timeout"),
    (CONFLICT, "Conflict"),
    (GONE, "Gone"),
    (LENGTH_REQUIRED, "Length Required"),
    (PRECONDITION_FAILED, "Precondition Failed"),
    (REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large"),
    (REQUEST_URI_TOO_LONG, "Request URI Too Long"),
    (UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type"),
    (REQUESTED_RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable"),
    (EXPECTATION_FAILED, "Expectation Failed"),
    (IM_A_TEAPOT, "I'm a teapot"),
    (MISDIRECTED_REQUEST, "Misdirected Request"),
    (UNPROCESSABLE_ENTITY, "Unprocessable Entity"),
    (LOCKED, "Locked"),
    (FAILED_DEPENDENCY, "Failed Dependency"),
    (TOO_EARLY, "Too Early"),
    (UPGRADE_REQUIRED, "Upgrade Required"),
    (PRECONDITION_REQUIRED, "Precondition Required"),
    (TOO_MANY_REQUESTS, "Too Many Requests"),
    (REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large"),
    (UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons"),
    (INTERNAL_SERVER_ERROR, "Internal Server Error"),
    (NOT_IMPLEMENTED, "Not Implemented"),
    (BAD_GATEWAY, "Bad Gateway"),
    (SERVICE_UNAVAILABLE, "Service Unavailable"),
    (GATEWAY_TIMEOUT, "Gateway Timeout"),
    (HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported"),
    (VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates"),
    (INSUFFICIENT_STORAGE, "Insufficient Storage"),
    (LOOP_DETECTED, "Loop Detected"),
    (NOT_EXTENDED, "Not Extended"),
    (NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required"),
];

/// Gets the registered reason phrase for a given code if there is one.
pub fn lookup(code: i32) -> Option<&'static str> {
    STATUS_TEXT
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| STATUS_TEXT[idx].1)
}

/// Same as [`lookup`] but taking an already validated status code.
pub fn lookup_status(status: http::StatusCode) -> Option<&'static str> {
    lookup(i32::from(status.as_u16()))
}

/// All registered codes in ascending order.
pub fn codes() -> impl Iterator<Item = i32> {
    STATUS_TEXT.iter().map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_phrases() {
        assert_eq!(lookup(OK), Some("OK"));
        assert_eq!(lookup(NOT_FOUND), Some("Not Found"));
        assert_eq!(lookup(IM_A_TEAPOT), Some("I'm a teapot"));
        assert_eq!(lookup(INTERNAL_SERVER_ERROR), Some("Internal Server Error"));
        assert_eq!(lookup(NON_AUTHORITATIVE_INFO), Some("Non-Authoritative Information"));
        assert_eq!(
            lookup(NETWORK_AUTHENTICATION_REQUIRED),
            Some("Network Authentication Required")
        );
    }

    #[test]
    fn unregistered_codes_are_absent() {
        for code in [-1, 0, 99, 306, 419, 509, 600, 999] {
            assert_eq!(lookup(code), None, "code {}", code);
        }
    }

    #[test]
    fn table_is_sorted_and_complete() {
        let all: Vec<i32> = codes().collect();
        let mut sorted = all.clone();
        sorted.sort_unstable();
        sorted.dedup();

        assert_eq!(all, sorted);
        assert_eq!(all.len(), 62);
        assert!(all.iter().all(|c| (100..600).contains(c)));
    }

    #[test]
    fn no_empty_phrases() {
        for code in codes() {
            let text = lookup(code).unwrap();
            assert!(!text.is_empty(), "code {} has an empty phrase", code);
        }
    }

    #[test]
    fn lookup_by_status_code() {
        assert_eq!(lookup_status(http::StatusCode::CREATED), Some("Created"));
        assert_eq!(lookup_status(http::StatusCode::from_u16(299).unwrap()), None);
    }
}
