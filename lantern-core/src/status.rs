//! Status code vocabulary.

use crate::error::StatusError;
use std::fmt;

/// An HTTP status code with a known reason phrase.
///
/// Only codes in the supported vocabulary can be constructed, so rendering a
/// response never has to deal with an unknown code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u16);

impl Status {
    /// 200 OK
    pub const OK: Status = Status(200);
    /// 301 Moved Permanently
    pub const MOVED_PERMANENTLY: Status = Status(301);
    /// 302 Moved Temporarily
    pub const FOUND: Status = Status(302);
    /// 304 Not Modified
    pub const NOT_MODIFIED: Status = Status(304);
    /// 307 Temporary Redirect
    pub const TEMPORARY_REDIRECT: Status = Status(307);
    /// 400 Bad Request
    pub const BAD_REQUEST: Status = Status(400);
    /// 401 Unauthorized
    pub const UNAUTHORIZED: Status = Status(401);
    /// 403 Forbidden
    pub const FORBIDDEN: Status = Status(403);
    /// 404 Not Found
    pub const NOT_FOUND: Status = Status(404);
    /// 405 Method Not Allowed
    pub const METHOD_NOT_ALLOWED: Status = Status(405);
    /// 406 Not Acceptable
    pub const NOT_ACCEPTABLE: Status = Status(406);
    /// 407 Proxy Authentication Required
    pub const PROXY_AUTHENTICATION_REQUIRED: Status = Status(407);
    /// 408 Request Timeout
    pub const REQUEST_TIMEOUT: Status = Status(408);
    /// 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: Status = Status(500);
    /// 501 Not Implemented
    pub const NOT_IMPLEMENTED: Status = Status(501);
    /// 502 Bad Gateway
    pub const BAD_GATEWAY: Status = Status(502);
    /// 503 Service Unavailable
    pub const SERVICE_UNAVAILABLE: Status = Status(503);
    /// 504 Gateway Timeout
    pub const GATEWAY_TIMEOUT: Status = Status(504);

    /// The numeric code.
    pub const fn code(self) -> u16 {
        self.0
    }

    /// The standard reason phrase.
    pub fn reason(self) -> &'static str {
        // Every constructible status is in the table.
        phrase(self.0).unwrap_or_default()
    }

    /// Whether this is a 2xx code.
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

const fn phrase(code: u16) -> Option<&'static str> {
    Some(match code {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Moved Temporarily",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return None,
    })
}

/// Look up the reason phrase for a raw code.
pub fn reason_phrase(code: u16) -> Result<&'static str, StatusError> {
    phrase(code).ok_or(StatusError::Unsupported(code))
}

impl TryFrom<u16> for Status {
    type Error = StatusError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        reason_phrase(code).map(|_| Status(code))
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::OK
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for code in [
            200, 301, 302, 304, 307, 400, 401, 403, 404, 405, 406, 407, 408, 500, 501, 502, 503,
            504,
        ] {
            let status = Status::try_from(code).unwrap();
            assert_eq!(status.code(), code);
            assert!(!status.reason().is_empty());
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(Status::try_from(418), Err(StatusError::Unsupported(418)));
        assert_eq!(reason_phrase(299), Err(StatusError::Unsupported(299)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::FOUND.to_string(), "302 Moved Temporarily");
        assert_eq!(Status::BAD_REQUEST.to_string(), "400 Bad Request");
    }
}
