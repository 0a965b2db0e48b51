use super::table::{Table, HEXDIG};
use crate::error::{err, Result};
use alloc::{borrow::Cow, string::String, vec::Vec};

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 15];
        i += 1;
    }
    out
}

static HEX_TABLE: &[u8; 512] = &gen_hex_table();

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Reads the octet whose "%" is at index `i`.
fn read_octet(bytes: &[u8], i: usize) -> Option<u8> {
    match bytes.get(i + 1..i + 3) {
        Some(&[hi, lo]) => decode_octet(hi, lo),
        _ => None,
    }
}

fn push_pct_encoded(buf: &mut Vec<u8>, x: u8) {
    let i = x as usize * 2;
    buf.extend_from_slice(&[b'%', HEX_TABLE[i], HEX_TABLE[i + 1]]);
}

/// Percent-encodes every byte of `s` not allowed by `table`.
///
/// If the table [allows percent-encoded octets], well-formed octets
/// already in `s` are kept as they are. Otherwise every `%` is encoded.
///
/// [allows percent-encoded octets]: Table::allows_enc
pub fn encode<'a>(s: &'a str, table: &Table) -> Cow<'a, str> {
    encode_with(s, table, |_| table.allows_enc())
}

/// Percent-encodes every byte of `s` not allowed by `table`, keeping the
/// octets that decode to a byte allowed by `preserve`.
///
/// This undoes [`decode`] with the same `preserve` table: every other `%`
/// is encoded as `%25`, whether or not [`Table::allows_enc`] holds. The
/// table must allow hexadecimal digits for kept octets to stay intact.
///
/// An octet kept by `decode` and a literal octet of the same spelling
/// are indistinguishable once decoded, so `%252F` comes back as `%2F`.
///
/// # Examples
///
/// ```
/// use uri_locator::enc::{decode, encode_preserving, table};
///
/// let path = decode("/100%2541/a%2Fb", table::SLASH)?;
/// assert_eq!(path, "/100%41/a%2Fb");
/// assert_eq!(encode_preserving(&path, table::PATH, table::SLASH), "/100%2541/a%2Fb");
/// # Ok::<_, uri_locator::ParseError>(())
/// ```
pub fn encode_preserving<'a>(s: &'a str, table: &Table, preserve: &Table) -> Cow<'a, str> {
    encode_with(s, table, |octet| preserve.allows(octet))
}

fn encode_with<'a>(s: &'a str, table: &Table, keep_octet: impl Fn(u8) -> bool) -> Cow<'a, str> {
    let bytes = s.as_bytes();
    let mut buf: Option<Vec<u8>> = None;

    for (i, &x) in bytes.iter().enumerate() {
        let keep = table.allows(x) || (x == b'%' && read_octet(bytes, i).map_or(false, &keep_octet));
        match (&mut buf, keep) {
            (None, true) => {}
            (Some(buf), true) => buf.push(x),
            (buf, false) => {
                let buf = buf.get_or_insert_with(|| {
                    let mut v = Vec::with_capacity(bytes.len() * 3);
                    v.extend_from_slice(&bytes[..i]);
                    v
                });
                push_pct_encoded(buf, x);
            }
        }
    }

    match buf {
        None => Cow::Borrowed(s),
        // Only ASCII bytes were pushed in place of a whole UTF-8 sequence
        // or copied from `s`, so the buffer stays valid UTF-8.
        Some(buf) => match String::from_utf8(buf) {
            Ok(s) => Cow::Owned(s),
            Err(_) => unreachable!("encoding produced invalid UTF-8"),
        },
    }
}

/// Percent-decodes `s`, leaving the octets that decode to a byte allowed
/// by `preserve` encoded.
///
/// # Errors
///
/// - [`MalformedPercentEscape`] if a `%` is not followed by two hexadecimal
///   digits, or if an octet decodes to a zero byte.
/// - [`InvalidUtf8`] if the decoded bytes are not valid UTF-8.
///
/// [`MalformedPercentEscape`]: crate::ParseErrorKind::MalformedPercentEscape
/// [`InvalidUtf8`]: crate::ParseErrorKind::InvalidUtf8
pub fn decode<'a>(s: &'a str, preserve: &Table) -> Result<Cow<'a, str>> {
    let bytes = s.as_bytes();
    let mut buf: Option<Vec<u8>> = None;

    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x != b'%' {
            if let Some(buf) = &mut buf {
                buf.push(x);
            }
            i += 1;
            continue;
        }

        let octet = match read_octet(bytes, i) {
            Some(0) | None => err!(i, MalformedPercentEscape),
            Some(octet) => octet,
        };
        if preserve.allows(octet) {
            if let Some(buf) = &mut buf {
                buf.extend_from_slice(&bytes[i..i + 3]);
            }
        } else {
            buf.get_or_insert_with(|| {
                let mut v = Vec::with_capacity(bytes.len());
                v.extend_from_slice(&bytes[..i]);
                v
            })
            .push(octet);
        }
        i += 3;
    }

    match buf {
        None => Ok(Cow::Borrowed(s)),
        Some(buf) => match String::from_utf8(buf) {
            Ok(s) => Ok(Cow::Owned(s)),
            Err(_) => err!(0, InvalidUtf8),
        },
    }
}

/// Checks that `s` only contains byte patterns allowed by `table`.
///
/// # Errors
///
/// - [`MalformedPercentEscape`] if a `%` is not followed by two hexadecimal
///   digits, or if the table does not allow percent-encoded octets.
/// - [`InvalidCharacter`] if any other byte is not allowed.
///
/// [`MalformedPercentEscape`]: crate::ParseErrorKind::MalformedPercentEscape
/// [`InvalidCharacter`]: crate::ParseErrorKind::InvalidCharacter
pub fn validate(s: &str, table: &Table) -> Result<()> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' {
            if !table.allows_enc() {
                err!(i, MalformedPercentEscape);
            }
            match bytes.get(i + 1..i + 3) {
                Some(&[hi, lo]) if HEXDIG.allows(hi) && HEXDIG.allows(lo) => i += 3,
                _ => err!(i, MalformedPercentEscape),
            }
        } else if table.allows(x) {
            i += 1;
        } else {
            err!(i, InvalidCharacter);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enc::table::*, ParseErrorKind};

    #[test]
    fn decode_borrows_when_untouched() {
        assert!(matches!(decode("a/b/c", NONE), Ok(Cow::Borrowed("a/b/c"))));
        assert!(matches!(decode("a%2Fb", SLASH), Ok(Cow::Borrowed("a%2Fb"))));
    }

    #[test]
    fn decode_preserves_after_first_decode() {
        assert_eq!(decode("%20%2f%41", SLASH).unwrap(), " %2fA");
        assert_eq!(decode("%2F%20", SLASH).unwrap(), "%2F ");
    }

    #[test]
    fn decode_rejects_nul() {
        let e = decode("ab%00", NONE).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::MalformedPercentEscape);
        assert_eq!(e.index(), 2);
    }

    #[test]
    fn encode_keeps_octets_only_when_allowed() {
        assert_eq!(encode("a%20b c", PATH), "a%20b%20c");
        assert_eq!(encode("a%20b c", FILE_PATH), "a%2520b%20c");
        assert_eq!(encode("100%", PATH), "100%25");
        assert!(matches!(encode("/tmp/x", FILE_PATH), Cow::Borrowed(_)));
    }

    #[test]
    fn encode_preserving_keeps_only_preserved_octets() {
        assert_eq!(encode_preserving("a%41%2f%2F%", PATH, SLASH), "a%2541%2f%2F%25");
        assert_eq!(encode_preserving("%00 ", PATH, SLASH), "%2500%20");
        assert!(matches!(encode_preserving("/a%2Fb", PATH, SLASH), Cow::Borrowed(_)));
    }
}
