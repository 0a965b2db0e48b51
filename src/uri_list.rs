//! Turning dropped URI lists and command-line arguments into canonical URIs.

use crate::{
    enc::{self, table},
    scheme::scan_scheme,
    validate::check_location,
};
use std::{
    env, io,
    path::{Path, PathBuf},
};

/// Splits a `text/uri-list` payload ([RFC 2483]) into its entries.
///
/// Lines may end with CRLF or LF. Surrounding whitespace is trimmed,
/// and blank lines and comment lines starting with `#` are skipped.
///
/// [RFC 2483]: https://datatracker.ietf.org/doc/html/rfc2483#section-5
///
/// # Examples
///
/// ```
/// use uri_locator::extract_uris;
///
/// let payload = "# dropped\r\nfile:///tmp/a\r\n\r\n  http://example.com/  \r\n";
/// assert_eq!(extract_uris(payload), ["file:///tmp/a", "http://example.com/"]);
/// ```
#[must_use]
pub fn extract_uris(payload: &str) -> Vec<&str> {
    payload
        .lines()
        .map(|line| line.trim_matches(|c: char| c.is_ascii_whitespace()))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Converts command-line style arguments to canonical URIs.
///
/// An argument shaped like a URI is kept as it is. An absolute path becomes
/// a `file://` URI after lexical normalization and percent-encoding. A
/// relative path is resolved against the base directory, or rejected when
/// there is none. Either way, the result must pass [`check_location`].
///
/// Paths are treated as `/`-separated; no filesystem access is made.
///
/// # Examples
///
/// ```
/// use uri_locator::Canonicalizer;
///
/// let c = Canonicalizer::new().with_base_dir("/home/me");
/// assert_eq!(c.canonicalize("notes/../a b.txt").as_deref(), Some("file:///home/me/a%20b.txt"));
/// assert_eq!(c.canonicalize("http://example.com/x").as_deref(), Some("http://example.com/x"));
/// assert_eq!(c.canonicalize("http://example.com/a b"), None);
///
/// assert_eq!(Canonicalizer::new().canonicalize("a.txt"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Canonicalizer {
    base_dir: Option<PathBuf>,
}

impl Canonicalizer {
    /// Creates a canonicalizer without a base directory.
    #[must_use]
    pub fn new() -> Canonicalizer {
        Canonicalizer::default()
    }

    /// Sets the directory relative paths are resolved against.
    ///
    /// A base directory that is not an absolute `/`-separated UTF-8 path
    /// makes every relative path fail to canonicalize.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Canonicalizer {
        self.base_dir = Some(dir.into());
        self
    }

    /// Resolves relative paths against the current working directory.
    ///
    /// # Errors
    ///
    /// Returns the error of [`env::current_dir`].
    pub fn with_current_dir(self) -> io::Result<Canonicalizer> {
        Ok(self.with_base_dir(env::current_dir()?))
    }

    /// Returns the base directory, if any.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Converts a single argument to a canonical URI, returning `None` if
    /// it cannot be made into a valid location.
    #[must_use]
    pub fn canonicalize(&self, arg: &str) -> Option<String> {
        if arg.is_empty() {
            return None;
        }
        let uri = if looks_like_uri(arg) {
            arg.to_owned()
        } else {
            self.file_uri(arg)?
        };
        match check_location(&uri) {
            Ok(()) => Some(uri),
            Err(e) => {
                tracing::debug!(uri = %uri, error = %e, "rejected invalid location");
                None
            }
        }
    }

    /// Canonicalizes every entry of `raw`, silently dropping the ones that
    /// fail, and returns `None` if none is left.
    ///
    /// The order of the kept entries is preserved.
    #[must_use]
    pub fn filter_uri_list<S: AsRef<str>>(&self, raw: &[S]) -> Option<Vec<String>> {
        let list: Vec<String> = raw
            .iter()
            .filter_map(|entry| {
                let entry = entry.as_ref();
                let uri = self.canonicalize(entry);
                if uri.is_none() {
                    tracing::debug!(entry, "dropped malformed URI or file name");
                }
                uri
            })
            .collect();
        if list.is_empty() {
            None
        } else {
            Some(list)
        }
    }

    fn file_uri(&self, arg: &str) -> Option<String> {
        let joined;
        let path = if arg.starts_with('/') {
            arg
        } else {
            let base = self.base_dir.as_deref()?.to_str()?;
            if !base.starts_with('/') {
                return None;
            }
            joined = format!("{base}/{arg}");
            &joined
        };
        let path = normalize_path(path);
        Some(format!("file://{}", enc::encode(&path, table::FILE_PATH)))
    }
}

/// On Windows, a scheme of a single letter is taken for a drive letter,
/// not a URI.
fn looks_like_uri(arg: &str) -> bool {
    match scan_scheme(arg) {
        Ok((scheme, _)) => !cfg!(windows) || scheme.as_str().len() > 1,
        Err(_) => false,
    }
}

/// Lexically normalizes an absolute `/`-separated path.
fn normalize_path(path: &str) -> String {
    let mut segs: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segs.pop();
            }
            seg => segs.push(seg),
        }
    }
    if segs.is_empty() {
        return "/".into();
    }
    let mut out = String::with_capacity(path.len());
    for seg in segs {
        out.push('/');
        out.push_str(seg);
    }
    out
}

/// Canonicalizes a batch of dropped URIs or file names.
///
/// Entries that fail are dropped silently and the order of the rest is kept.
/// Returns `None` if no entry is left. Relative paths are rejected since a
/// drop carries no working directory; use [`Canonicalizer::filter_uri_list`]
/// with a base directory to accept them.
///
/// # Examples
///
/// ```
/// use uri_locator::canonicalize_and_filter_uri_list;
///
/// let raw = ["/local/path", "not a uri", "http://ok.com/x"].map(String::from);
/// assert_eq!(
///     canonicalize_and_filter_uri_list(&raw),
///     Some(vec!["file:///local/path".to_owned(), "http://ok.com/x".to_owned()]),
/// );
/// ```
#[must_use]
pub fn canonicalize_and_filter_uri_list<S: AsRef<str>>(raw: &[S]) -> Option<Vec<String>> {
    Canonicalizer::new().filter_uri_list(raw)
}

/// Extracts the entries of a `text/uri-list` payload and canonicalizes them
/// as [`canonicalize_and_filter_uri_list`] does.
#[must_use]
pub fn drop_get_uris(payload: &str) -> Option<Vec<String>> {
    canonicalize_and_filter_uri_list(&extract_uris(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//a///b/"), "/a/b");
        assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
        assert_eq!(normalize_path("/../../a"), "/a");
        assert_eq!(normalize_path("/a/.."), "/");
    }

    #[test]
    fn uri_shapes() {
        assert!(looks_like_uri("ab:/x"));
        assert!(!looks_like_uri("/x:y"));
        assert!(!looks_like_uri("1a:/x"));
    }

    #[test]
    #[cfg(windows)]
    fn drive_letters_are_paths() {
        assert!(!looks_like_uri("c:/x"));
        assert!(!looks_like_uri("C:\\x"));
    }

    #[test]
    #[cfg(not(windows))]
    fn single_letter_schemes_are_uris() {
        assert!(looks_like_uri("c:/x"));
        assert!(looks_like_uri("C:x"));
    }
}
