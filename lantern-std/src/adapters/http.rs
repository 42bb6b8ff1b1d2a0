//! Conversion to and from the `http` crate types.

use super::AdapterError;
use ::http::{Version, header::HOST};
use lantern_core::{Request, Response};

/// Convert an `http::Request` into a dispatch [`Request`].
///
/// The query string is dropped. A missing `Host` header is filled in from the
/// URI authority when there is one.
pub fn from_http<B>(request: ::http::Request<B>) -> Result<Request, AdapterError>
where
    B: AsRef<[u8]>,
{
    let (parts, body) = request.into_parts();

    let mut builder = Request::builder()
        .verb(parts.method.as_str())
        .resource(parts.uri.path());
    if let Some(version) = version_str(parts.version) {
        builder = builder.http_version(version);
    }

    for (name, value) in parts.headers.iter() {
        let value = value
            .to_str()
            .map_err(|_| AdapterError::InvalidHeader(name.to_string()))?;
        builder = builder.header(name.as_str(), value);
    }
    if !parts.headers.contains_key(HOST) {
        if let Some(authority) = parts.uri.authority() {
            builder = builder.header("Host", authority.as_str());
        }
    }

    let body = body.as_ref();
    if !body.is_empty() {
        builder = builder.payload(body.to_vec());
    }
    Ok(builder.build()?)
}

/// Convert a dispatch [`Response`] into an `http::Response`.
pub fn into_http(response: Response) -> Result<::http::Response<String>, AdapterError> {
    let mut builder = ::http::Response::builder()
        .status(response.status().code())
        .version(parse_version(response.http_version()));
    for (name, value) in response.headers().iter() {
        builder = builder.header(name, value);
    }
    Ok(builder.body(response.into_body())?)
}

fn version_str(version: Version) -> Option<&'static str> {
    if version == Version::HTTP_09 {
        Some("0.9")
    } else if version == Version::HTTP_10 {
        Some("1.0")
    } else if version == Version::HTTP_11 {
        Some("1.1")
    } else if version == Version::HTTP_2 {
        Some("2.0")
    } else if version == Version::HTTP_3 {
        Some("3.0")
    } else {
        None
    }
}

fn parse_version(version: &str) -> Version {
    match version {
        "0.9" => Version::HTTP_09,
        "1.0" => Version::HTTP_10,
        "2" | "2.0" => Version::HTTP_2,
        "3" | "3.0" => Version::HTTP_3,
        _ => Version::HTTP_11,
    }
}
