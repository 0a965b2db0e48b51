//! URI decomposition.

use crate::{
    authority::parse_authority,
    enc::{self, table},
    error::Result,
    scheme::scan_scheme,
};
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects the components [`decode_uri`] should produce.
///
/// # Examples
///
/// ```
/// use uri_locator::{decode_uri, Want};
///
/// let c = decode_uri("sftp://me@example.com/home", Want { host: true, ..Want::NONE }).unwrap();
/// assert_eq!(c.host.as_deref(), Some("example.com"));
/// assert_eq!(c.user, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Want {
    /// Produce the lower-cased scheme.
    pub scheme: bool,
    /// Produce the percent-decoded userinfo.
    pub user: bool,
    /// Produce the raw host.
    pub host: bool,
    /// Produce the raw port.
    pub port: bool,
    /// Produce the percent-decoded path.
    pub path: bool,
}

impl Want {
    /// Every component.
    pub const ALL: Want = Want {
        scheme: true,
        user: true,
        host: true,
        port: true,
        path: true,
    };

    /// No component; only check that the URI decodes.
    pub const NONE: Want = Want {
        scheme: false,
        user: false,
        host: false,
        port: false,
        path: false,
    };
}

/// The components of a decoded URI.
///
/// A field is `Some` only if it was requested and present in the URI.
/// The path is always present, if requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UriComponents {
    /// The scheme, lower-cased.
    pub scheme: Option<String>,
    /// The userinfo, percent-decoded.
    pub user: Option<String>,
    /// The host, as it appears in the URI.
    pub host: Option<String>,
    /// The port, as it appears in the URI. May be empty.
    pub port: Option<String>,
    /// The path, percent-decoded except for octets decoding to `"/"`.
    pub path: Option<String>,
}

impl UriComponents {
    /// Reassembles a URI string from the components.
    ///
    /// The userinfo and path are percent-encoded again. A `%2F` left encoded
    /// in the path is kept as it is and every other `%` becomes `%25`, so
    /// decoding the result gives back the same components. The result is
    /// equivalent to the decoded URI up to percent-encoding normalization,
    /// except that `%252F` in the original path comes back as `%2F`: both
    /// decode to the same path.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_locator::{decode_uri, Want};
    ///
    /// let c = decode_uri("HTTP://a%20b@host:80/x%20y%2Fz", Want::ALL).unwrap();
    /// assert_eq!(c.to_uri_string(), "http://a%20b@host:80/x%20y%2Fz");
    /// ```
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        let mut buf = String::new();
        if let Some(scheme) = &self.scheme {
            buf.push_str(scheme);
            buf.push(':');
        }
        if self.user.is_some() || self.host.is_some() || self.port.is_some() {
            buf.push_str("//");
            if let Some(user) = &self.user {
                buf.push_str(&enc::encode(user, table::USERINFO));
                buf.push('@');
            }
            if let Some(host) = &self.host {
                buf.push_str(host);
            }
            if let Some(port) = &self.port {
                buf.push(':');
                buf.push_str(port);
            }
        }
        if let Some(path) = &self.path {
            buf.push_str(&enc::encode_preserving(path, table::PATH, table::SLASH));
        }
        buf
    }
}

/// Decodes a URI into the components selected by `want`.
///
/// Only `scheme ":" [ "//" authority ] path` is recognized: a `"?"` or `"#"`
/// is part of the path.
///
/// The userinfo is only decoded if requested, and likewise the path.
/// Any failure discards every component, the scheme included.
///
/// # Errors
///
/// - [`MalformedScheme`] if `uri` does not start with a valid scheme.
/// - [`MalformedPercentEscape`] or [`InvalidUtf8`] if a requested userinfo
///   or path fails to decode. Decoded components are `String`s, so a path
///   such as `file:///%FF` that decodes to bytes that are not UTF-8 fails
///   the whole decode. Helpers built on the decoder, such as
///   [`dirname_for_display`] and [`basename_for_display`], then fall back
///   to the undecoded string.
///
/// [`MalformedScheme`]: crate::ParseErrorKind::MalformedScheme
/// [`MalformedPercentEscape`]: crate::ParseErrorKind::MalformedPercentEscape
/// [`InvalidUtf8`]: crate::ParseErrorKind::InvalidUtf8
/// [`dirname_for_display`]: crate::display::dirname_for_display
/// [`basename_for_display`]: crate::display::basename_for_display
pub fn try_decode_uri(uri: &str, want: Want) -> Result<UriComponents> {
    let (scheme, rest_start) = scan_scheme(uri)?;

    let mut out = UriComponents::default();
    if want.scheme {
        out.scheme = Some(scheme.to_lowercase());
    }

    let mut hier_start = rest_start;
    if let Some((auth, end)) = parse_authority(&uri[rest_start..]) {
        let auth_start = rest_start + 2;
        if let (true, Some(userinfo)) = (want.user, auth.userinfo()) {
            let user = enc::decode(userinfo, table::NONE).map_err(|e| e.offset(auth_start))?;
            out.user = Some(user.into_owned());
        }
        if want.host {
            out.host = Some(auth.host().into());
        }
        if want.port {
            out.port = auth.port().map(Into::into);
        }
        hier_start += end;
    }

    if want.path {
        let path = enc::decode(&uri[hier_start..], table::SLASH).map_err(|e| e.offset(hier_start))?;
        out.path = Some(path.into_owned());
    }

    Ok(out)
}

/// Decodes a URI into the components selected by `want`, returning `None`
/// on failure.
///
/// See [`try_decode_uri`] for details.
///
/// # Examples
///
/// ```
/// use uri_locator::{decode_uri, Want};
///
/// let c = decode_uri("http://user:pw@host.com:8080/a/b", Want::ALL).unwrap();
/// assert_eq!(c.scheme.as_deref(), Some("http"));
/// assert_eq!(c.user.as_deref(), Some("user:pw"));
/// assert_eq!(c.host.as_deref(), Some("host.com"));
/// assert_eq!(c.port.as_deref(), Some("8080"));
/// assert_eq!(c.path.as_deref(), Some("/a/b"));
///
/// assert_eq!(decode_uri("http://%zz@host/", Want::ALL), None);
/// ```
#[must_use]
pub fn decode_uri(uri: &str, want: Want) -> Option<UriComponents> {
    match try_decode_uri(uri, want) {
        Ok(components) => Some(components),
        Err(e) => {
            tracing::trace!(uri, error = %e, "failed to decode URI");
            None
        }
    }
}
