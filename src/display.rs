//! Short human-readable forms of locations.
//!
//! The home directory is passed in by the caller rather than looked up.

use crate::{
    authority::parse_authority,
    decode::{decode_uri, Want},
    enc::{self, table},
    scheme::scan_scheme,
};
use alloc::{borrow::ToOwned, format, string::String};

/// Replaces a leading home directory in `path` with `~`.
///
/// `path` equal to `home` becomes `"~"`, and a path below it becomes
/// `"~/rest"`. Anything else, including any path when `home` is empty,
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use uri_locator::display::replace_home_dir_with_tilde;
///
/// assert_eq!(replace_home_dir_with_tilde("/home/me/src", "/home/me"), "~/src");
/// assert_eq!(replace_home_dir_with_tilde("/home/me", "/home/me/"), "~");
/// assert_eq!(replace_home_dir_with_tilde("/home/meta", "/home/me"), "/home/meta");
/// ```
#[must_use]
pub fn replace_home_dir_with_tilde(path: &str, home: &str) -> String {
    let home = home.trim_end_matches('/');
    if home.is_empty() {
        return path.to_owned();
    }
    match path.strip_prefix(home) {
        Some("") => "~".to_owned(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_owned(),
    }
}

/// Returns the part of `path` before its last `"/"`, as `dirname(3)` does,
/// but without stripping trailing separators first.
fn path_dirname(path: &str) -> &str {
    let Some(last) = path.rfind('/') else {
        return ".";
    };
    match path[..last].trim_end_matches('/') {
        "" => "/",
        dir => dir,
    }
}

/// Returns the last component of `path`, as `basename(3)` does.
fn path_basename(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" if path.is_empty() => ".",
        "" => "/",
        trimmed => trimmed.rsplit('/').next().unwrap_or(trimmed),
    }
}

/// Returns the directory of a path or URI, with the home directory
/// replaced by `~`.
///
/// Returns `None` if there is no directory part.
///
/// # Examples
///
/// ```
/// use uri_locator::display::uri_dirname;
///
/// assert_eq!(uri_dirname("/home/me/a.txt", Some("/home/me")).as_deref(), Some("~"));
/// assert_eq!(uri_dirname("sftp://host/srv/a.txt", None).as_deref(), Some("sftp://host/srv"));
/// assert_eq!(uri_dirname("/a.txt", None).as_deref(), Some("/"));
/// assert_eq!(uri_dirname("a.txt", None), None);
/// ```
#[must_use]
pub fn uri_dirname(uri: &str, home: Option<&str>) -> Option<String> {
    match path_dirname(uri) {
        "." => None,
        dir => Some(match home {
            Some(home) => replace_home_dir_with_tilde(dir, home),
            None => dir.to_owned(),
        }),
    }
}

/// Returns a string naming the directory a location is in.
///
/// `parse_name` is the local path or URI of the location. When the location
/// lives on a mount named `mount_name`, the result is the mount name followed
/// by the directory of the URI's path, or the mount name alone if that path
/// has no directory part. Without a mount, the result is [`uri_dirname`].
///
/// # Examples
///
/// ```
/// use uri_locator::display::dirname_for_display;
///
/// assert_eq!(
///     dirname_for_display("sftp://host/srv/www/index.html", Some("host"), None).as_deref(),
///     Some("host /srv/www"),
/// );
/// assert_eq!(
///     dirname_for_display("/home/me/a.txt", None, Some("/home/me")).as_deref(),
///     Some("~"),
/// );
/// ```
#[must_use]
pub fn dirname_for_display(
    parse_name: &str,
    mount_name: Option<&str>,
    home: Option<&str>,
) -> Option<String> {
    let Some(mount_name) = mount_name else {
        return uri_dirname(parse_name, home);
    };

    let path = decode_uri(parse_name, Want { path: true, ..Want::NONE }).and_then(|c| c.path);
    let dirname = uri_dirname(path.as_deref().unwrap_or(parse_name), home);

    Some(match dirname {
        Some(dir) if dir != "." => format!("{mount_name} {dir}"),
        _ => mount_name.to_owned(),
    })
}

/// Returns `"/ on <host>"` for a URI pointing to the root of a remote host,
/// such as `smb://server/`.
///
/// Returns `None` if the URI has a non-root path, has no host, or fails
/// to decode.
///
/// # Examples
///
/// ```
/// use uri_locator::display::remote_root_display_name;
///
/// assert_eq!(remote_root_display_name("smb://server/").as_deref(), Some("/ on server"));
/// assert_eq!(remote_root_display_name("smb://server/share"), None);
/// ```
#[must_use]
pub fn remote_root_display_name(uri: &str) -> Option<String> {
    let want = Want {
        host: true,
        path: true,
        ..Want::NONE
    };
    let c = decode_uri(uri, want)?;
    match (c.host, c.path.as_deref()) {
        (Some(host), Some("" | "/")) if !host.is_empty() => Some(format!("/ on {host}")),
        _ => None,
    }
}

/// Returns a short name for a location: the last component of its path.
///
/// For a URI, the last segment of the path is percent-decoded, falling back
/// to the segment as it appears in the URI if it does not decode. The root
/// of a remote host is named as by [`remote_root_display_name`]. Anything
/// that is not a URI is taken for a local path and its last component is
/// returned as it is.
///
/// # Examples
///
/// ```
/// use uri_locator::display::basename_for_display;
///
/// assert_eq!(basename_for_display("sftp://host/srv/a%20b.txt"), "a b.txt");
/// assert_eq!(basename_for_display("sftp://host/srv/"), "srv");
/// assert_eq!(basename_for_display("smb://server/"), "/ on server");
/// assert_eq!(basename_for_display("/home/me/a%20b"), "a%20b");
/// ```
#[must_use]
pub fn basename_for_display(location: &str) -> String {
    let Ok((_, rest_start)) = scan_scheme(location) else {
        return path_basename(location).to_owned();
    };
    if let Some(name) = remote_root_display_name(location) {
        return name;
    }

    let rest = &location[rest_start..];
    let path = match parse_authority(rest) {
        Some((_, end)) => &rest[end..],
        None => rest,
    };
    let base = path_basename(path);
    match enc::decode(base, table::NONE) {
        Ok(name) => name.into_owned(),
        Err(e) => {
            tracing::trace!(location, error = %e, "failed to decode basename");
            base.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirname_like_glib() {
        assert_eq!(path_dirname("foo"), ".");
        assert_eq!(path_dirname("/foo"), "/");
        assert_eq!(path_dirname("//foo"), "/");
        assert_eq!(path_dirname("/foo/bar/"), "/foo/bar");
        assert_eq!(path_dirname("foo//bar"), "foo");
        assert_eq!(path_dirname("a/"), "a");
    }

    #[test]
    fn basename_like_glib() {
        assert_eq!(path_basename(""), ".");
        assert_eq!(path_basename("///"), "/");
        assert_eq!(path_basename("foo"), "foo");
        assert_eq!(path_basename("/foo/bar//"), "bar");
        assert_eq!(path_basename("/foo"), "foo");
    }
}
