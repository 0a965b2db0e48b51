//! Scheme scanning.
//!
//! Two rules coexist here. [`scan_scheme`] follows RFC 3986 and requires the
//! scheme to start with a letter; [`has_valid_scheme`] only requires the
//! first character to be *some* scheme character, so `"1http:"` passes it.
//! Callers rely on either behavior, so the two are kept apart.

use crate::{
    enc::table::{ALPHA, SCHEME},
    error::{err, Result},
};
use alloc::string::String;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use uri_locator::{scan_scheme, Scheme};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let (scheme, rest) = scan_scheme("HTTP://EXAMPLE.COM/")?;
/// assert_eq!(scheme, SCHEME_HTTP);
/// assert_eq!(scheme.as_str(), "HTTP");
/// assert_eq!(rest, 5);
/// # Ok::<_, uri_locator::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && SCHEME.allows_all(rem))
        {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice, in its original case.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the scheme lower-cased.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.inner.to_ascii_lowercase()
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// Scans the scheme at the start of `uri`.
///
/// The scheme must match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` and be
/// immediately followed by `":"`. On success, returns the scheme and the
/// index just past the `":"`.
///
/// # Errors
///
/// Returns [`MalformedScheme`] pointing to the first byte that can neither
/// continue nor terminate the scheme.
///
/// [`MalformedScheme`]: crate::ParseErrorKind::MalformedScheme
pub fn scan_scheme(uri: &str) -> Result<(&Scheme, usize)> {
    let bytes = uri.as_bytes();
    match bytes.first() {
        Some(&x) if ALPHA.allows(x) => {}
        _ => err!(0, MalformedScheme),
    }

    let mut i = 1;
    loop {
        match bytes.get(i) {
            Some(b':') => break,
            Some(&x) if SCHEME.allows(x) => i += 1,
            _ => err!(i, MalformedScheme),
        }
    }
    Ok((Scheme::new_validated(&uri[..i]), i + 1))
}

/// Checks whether `uri` starts with a run of scheme characters ended by `":"`.
///
/// Unlike [`scan_scheme`], the first character only needs to be a scheme
/// character (`ALPHA / DIGIT / "+" / "-" / "."`), not a letter.
///
/// # Examples
///
/// ```
/// use uri_locator::has_valid_scheme;
///
/// assert!(has_valid_scheme("http:"));
/// assert!(has_valid_scheme("1http:"));
/// assert!(!has_valid_scheme(":missing"));
/// assert!(!has_valid_scheme("http"));
/// ```
#[must_use]
pub fn has_valid_scheme(uri: &str) -> bool {
    let bytes = uri.as_bytes();
    let len = bytes.iter().take_while(|&&x| SCHEME.allows(x)).count();
    len > 0 && bytes.get(len) == Some(&b':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    #[test]
    fn strict_scan() {
        let (scheme, rest) = scan_scheme("svn+ssh://host/").unwrap();
        assert_eq!(scheme.as_str(), "svn+ssh");
        assert_eq!(rest, 8);

        let (scheme, rest) = scan_scheme("a:").unwrap();
        assert_eq!(scheme.as_str(), "a");
        assert_eq!(rest, 2);

        let e = scan_scheme("1http:").unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::MalformedScheme);
        assert_eq!(e.index(), 0);

        assert_eq!(scan_scheme("ht tp:").unwrap_err().index(), 2);
        assert_eq!(scan_scheme("http").unwrap_err().index(), 4);
        assert_eq!(scan_scheme("").unwrap_err().index(), 0);
        assert_eq!(scan_scheme(":x").unwrap_err().index(), 0);
    }

    #[test]
    fn relaxed_check() {
        assert!(has_valid_scheme("+x:"));
        assert!(has_valid_scheme("a.b-c+d:rest"));
        assert!(!has_valid_scheme(""));
        assert!(!has_valid_scheme("/tmp/a:b"));
        assert!(!has_valid_scheme("a b:"));
    }

    #[test]
    fn lowercase_and_compare() {
        let a = Scheme::new_or_panic("HTTP");
        assert_eq!(a.to_lowercase(), "http");
        assert_eq!(a, Scheme::new_or_panic("http"));
        assert!(Scheme::new("1http").is_none());
        assert!(Scheme::new("").is_none());
    }
}
