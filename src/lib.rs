#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Byte-precise URI decomposition and resource-locator validation.
//!
//! This crate splits a URI into scheme, userinfo, host, port and path
//! following the `scheme ":" [ "//" authority ] path` shape of [RFC 3986],
//! and decides whether a string is a well-formed URI that is safe to treat
//! as a resource locator. Queries, fragments and IP literals are not
//! recognized: they are carried along as part of the path or host.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! # Examples
//!
//! ```
//! use uri_locator::{decode_uri, is_valid_location, Want};
//!
//! let c = decode_uri("mailto:foo@bar.com", Want::ALL).unwrap();
//! assert_eq!(c.scheme.as_deref(), Some("mailto"));
//! assert_eq!(c.host, None);
//! assert_eq!(c.path.as_deref(), Some("foo@bar.com"));
//!
//! assert!(is_valid_location(Some("file:///tmp/a%20file.txt")));
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Enables [`std::error::Error`] for [`ParseError`] and
//!   the URI list utilities, which need [`std::path`] and [`std::env`].
//!
//! - `serde`: Enables serialization of [`UriComponents`] and [`Want`].
//!
//! # Logging
//!
//! Failures that are mapped to `None` or dropped silently are reported
//! through [`tracing`] events at the `trace` and `debug` levels.

extern crate alloc;

pub mod enc;

mod authority;
mod decode;
pub mod display;
mod error;
mod fmt;
mod scheme;
mod validate;

#[cfg(feature = "std")]
mod uri_list;

pub use authority::{parse_authority, Authority};
pub use decode::{decode_uri, try_decode_uri, UriComponents, Want};
pub use error::{ParseError, ParseErrorKind};
pub use scheme::{has_valid_scheme, scan_scheme, Scheme};
pub use validate::{check_location, is_valid_location};

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use uri_list::{canonicalize_and_filter_uri_list, drop_get_uris, extract_uris, Canonicalizer};
