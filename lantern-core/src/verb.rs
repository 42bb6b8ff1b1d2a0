//! Request verbs a handler can be registered for.

use std::{convert::Infallible, fmt, str::FromStr};

/// The verb half of a handler's match specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace,
    /// Any other method token. `From<&str>` stores it
    /// uppercase; matching ignores ASCII case either way.
    Other(String),
    /// `*`: matches every verb. Handlers registered with it are filters.
    Any,
}

impl Verb {
    /// The method token.
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
            Verb::Trace => "TRACE",
            Verb::Other(token) => token,
            Verb::Any => "*",
        }
    }

    /// Whether a request with this verb token matches.
    pub fn matches(&self, verb: &str) -> bool {
        match self {
            Verb::Any => true,
            Verb::Other(token) => token.eq_ignore_ascii_case(verb),
            known => known.as_str() == verb,
        }
    }

    /// Whether this is the filter wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Verb::Any)
    }
}

impl From<&str> for Verb {
    fn from(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Verb::Get,
            "POST" => Verb::Post,
            "PUT" => Verb::Put,
            "DELETE" => Verb::Delete,
            "HEAD" => Verb::Head,
            "OPTIONS" => Verb::Options,
            "TRACE" => Verb::Trace,
            "*" => Verb::Any,
            other => Verb::Other(other.to_string()),
        }
    }
}

impl FromStr for Verb {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Verb::from(s))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
