use crate::{
    error::{ParseError, ParseErrorKind},
    scheme::Scheme,
};
use core::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::MalformedScheme => "malformed scheme at index ",
            ParseErrorKind::MalformedPercentEscape => "malformed percent-escape at index ",
            ParseErrorKind::InvalidCharacter => "invalid character at index ",
            ParseErrorKind::EmptyOrNullInput => "empty input at index ",
            ParseErrorKind::InvalidUtf8 => "invalid UTF-8 after decoding at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
