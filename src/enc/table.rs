//! Byte pattern tables.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234] where the table comes from RFC 3986.
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

/// A table determining the byte patterns allowed in a string.
///
/// It is guaranteed that the unencoded bytes allowed are ASCII and that
/// an unencoded `%` is not allowed.
///
/// When passed to [`decode`] as the *preserve* table, the table instead
/// lists the decoded bytes whose percent-encoded octets are left untouched.
///
/// [`decode`]: super::decode
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [u8; 256],
    allows_enc: bool,
}

impl Table {
    /// Generates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or is `%`.
    pub const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [0; 256];
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii() && *cur != b'%', "non-ASCII or %");
            arr[*cur as usize] = 1;
            bytes = rem;
        }
        Table {
            arr,
            allows_enc: false,
        }
    }

    /// Generates a table that allows the unencoded bytes in `start..end`,
    /// except for `%`.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds `128`.
    pub const fn range(start: u8, end: u8) -> Table {
        assert!(end <= 128, "non-ASCII");
        let mut arr = [0; 256];
        let mut i = start;
        while i < end {
            if i != b'%' {
                arr[i as usize] = 1;
            }
            i += 1;
        }
        Table {
            arr,
            allows_enc: false,
        }
    }

    /// Marks this table as allowing percent-encoded octets.
    pub const fn enc(mut self) -> Table {
        self.allows_enc = true;
        self
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the byte patterns allowed
    /// either by `self` or by `other`.
    pub const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 128 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self.allows_enc |= other.allows_enc;
        self
    }

    /// Returns `true` if an unencoded byte is allowed by the table.
    #[inline]
    pub const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize] != 0
    }

    /// Returns `true` if percent-encoded octets are allowed by the table.
    #[inline]
    pub const fn allows_enc(&self) -> bool {
        self.allows_enc
    }

    /// Returns `true` if every byte of `s` is allowed unencoded.
    pub(crate) const fn allows_all(&self, mut s: &[u8]) -> bool {
        while let [cur, rem @ ..] = s {
            if !self.allows(*cur) {
                return false;
            }
            s = rem;
        }
        true
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// Allows nothing.
pub const NONE: &Table = &gen(b"");

/// "/"
pub const SLASH: &Table = &gen(b"/");

/// ALPHA = A-Z / a-z
pub const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub const DIGIT: &Table = &gen(b"0123456789");

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///                / "a" / "b" / "c" / "d" / "e" / "f"
pub const HEXDIG: &Table = &DIGIT.or(&gen(b"ABCDEFabcdef"));

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
///
/// The table itself allows every scheme character, including
/// the ones that may not start a scheme.
pub const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// userinfo = *( unreserved / pct-encoded / sub-delims / ":" ), minus pct-encoded
///
/// Used to re-escape a decoded userinfo, where a "%" is always literal.
pub const USERINFO: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// path = *( pchar / "/" )
///
/// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
pub const PATH: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@/")).enc();

/// Same as [`PATH`] but without percent-encoded octets, for escaping
/// local file names in which a "%" is always literal.
pub const FILE_PATH: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@/"));

/// Printable ASCII without space and DEL (`%x21-7E`), plus percent-encoded octets.
///
/// The byte set a resource locator must stay within.
pub const LOCATION: &Table = &Table::range(0x21, 0x7f).enc();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_range() {
        assert!(!LOCATION.allows(b' '));
        assert!(LOCATION.allows(b'!'));
        assert!(LOCATION.allows(b'~'));
        assert!(!LOCATION.allows(0x7f));
        assert!(!LOCATION.allows(b'%'));
        assert!(!LOCATION.allows(0xc3));
        assert!(LOCATION.allows_enc());
    }

    #[test]
    fn scheme_table() {
        assert!(SCHEME.allows_all(b"svn+ssh"));
        assert!(SCHEME.allows_all(b"1a.b-c"));
        assert!(!SCHEME.allows_all(b"a_b"));
        assert!(SCHEME.allows_all(b""));
    }
}
