//! Authority splitting.

/// An [authority] component split into its raw parts.
///
/// Nothing here is validated or percent-decoded.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Authority<'a> {
    val: &'a str,
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
}

impl<'a> Authority<'a> {
    /// Returns the whole authority, without the leading `"//"`.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the raw userinfo subcomponent: everything before the first `"@"`.
    #[inline]
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the raw host subcomponent.
    #[inline]
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// Returns the raw port subcomponent, which may be empty or non-numeric.
    #[inline]
    pub fn port(&self) -> Option<&'a str> {
        self.port
    }
}

/// Parses the authority at the start of `rest`, the part of a URI after `"scheme:"`.
///
/// Returns `None` if `rest` does not begin with `"//"`. Otherwise returns
/// the authority and the index in `rest` where it ends, that is, the index
/// of the `"/"` starting the path, or `rest.len()`.
///
/// The userinfo is split off at the first `"@"` before the host and port
/// are split at the first following `":"`, so a colon inside the userinfo
/// never starts a port.
///
/// # Examples
///
/// ```
/// use uri_locator::parse_authority;
///
/// let (auth, end) = parse_authority("//user:pw@host.com:8080/a/b").unwrap();
/// assert_eq!(auth.userinfo(), Some("user:pw"));
/// assert_eq!(auth.host(), "host.com");
/// assert_eq!(auth.port(), Some("8080"));
/// assert_eq!(end, 23);
///
/// assert!(parse_authority("foo@bar.com").is_none());
/// ```
pub fn parse_authority(rest: &str) -> Option<(Authority<'_>, usize)> {
    let block = rest.strip_prefix("//")?;
    let block = match block.find('/') {
        Some(end) => &block[..end],
        None => block,
    };

    let (userinfo, host_port) = match block.split_once('@') {
        Some((userinfo, host_port)) => (Some(userinfo), host_port),
        None => (None, block),
    };
    let (host, port) = match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    };

    let auth = Authority {
        val: block,
        userinfo,
        host,
        port,
    };
    Some((auth, block.len() + 2))
}
