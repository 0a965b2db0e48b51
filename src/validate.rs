//! Resource-locator validation.

use crate::{
    enc::{self, table},
    error::{err, Result},
    scheme::has_valid_scheme,
};

/// Checks that `uri` is a displayable, well-formed resource locator.
///
/// The URI must pass [`has_valid_scheme`], every `%` must start a
/// well-formed octet, and every other byte must be printable ASCII other
/// than space (`%x21-7E`).
///
/// # Errors
///
/// - [`EmptyOrNullInput`] if `uri` is empty.
/// - [`MalformedScheme`] if the scheme check fails.
/// - [`MalformedPercentEscape`] or [`InvalidCharacter`] pointing to the
///   first offending byte.
///
/// [`EmptyOrNullInput`]: crate::ParseErrorKind::EmptyOrNullInput
/// [`MalformedScheme`]: crate::ParseErrorKind::MalformedScheme
/// [`MalformedPercentEscape`]: crate::ParseErrorKind::MalformedPercentEscape
/// [`InvalidCharacter`]: crate::ParseErrorKind::InvalidCharacter
pub fn check_location(uri: &str) -> Result<()> {
    if uri.is_empty() {
        err!(0, EmptyOrNullInput);
    }
    if !has_valid_scheme(uri) {
        let len = uri
            .bytes()
            .take_while(|&x| table::SCHEME.allows(x))
            .count();
        err!(len, MalformedScheme);
    }
    enc::validate(uri, table::LOCATION)
}

/// Returns `true` if `uri` is present and passes [`check_location`].
///
/// # Examples
///
/// ```
/// use uri_locator::is_valid_location;
///
/// assert!(is_valid_location(Some("file:///tmp/a%20file.txt")));
/// assert!(!is_valid_location(Some("file:///tmp/a file.txt")));
/// assert!(!is_valid_location(Some("http://ex.com/%zz")));
/// assert!(!is_valid_location(None));
/// ```
#[must_use]
pub fn is_valid_location(uri: Option<&str>) -> bool {
    uri.map_or(false, |uri| check_location(uri).is_ok())
}
