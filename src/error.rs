//! Error types.

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No valid scheme token, or the scheme is not terminated by ":".
    ///
    /// The error index points to the first character that could not be
    /// consumed as part of the scheme.
    MalformedScheme,
    /// Percent-encoded octet that is either non-hexadecimal or incomplete,
    /// or that decodes to a zero byte.
    ///
    /// The error index points to the percent character "%" of the octet.
    MalformedPercentEscape,
    /// Byte outside of printable ASCII (`33..127`).
    ///
    /// The error index points to the byte.
    InvalidCharacter,
    /// Empty input where a non-empty string is required.
    ///
    /// The error index is always `0`.
    EmptyOrNullInput,
    /// Percent-decoded bytes that do not form valid UTF-8.
    ///
    /// The error index points to the start of the decoded component.
    InvalidUtf8,
}

/// An error occurred when decoding or validating a URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Shifts the error index by the position of a component within its URI.
    #[inline]
    pub(crate) fn offset(self, start: usize) -> ParseError {
        ParseError {
            index: self.index + start,
            kind: self.kind,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

pub(crate) type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(crate::error::ParseError {
            index: $index,
            kind: crate::error::ParseErrorKind::$kind,
        })
    };
}

pub(crate) use err;
