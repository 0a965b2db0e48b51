//! Percent-encoding utilities.
//!
//! Decoding is parameterized by a *preserve* [`Table`]: octets decoding to a
//! byte allowed by that table stay encoded. Paths are decoded with
//! [`table::SLASH`] so that an encoded `/` never turns into a separator,
//! while userinfo is decoded with [`table::NONE`].
//!
//! # Examples
//!
//! ```
//! use uri_locator::enc::{decode, encode, table};
//!
//! assert_eq!(decode("a%20b%2Fc", table::SLASH)?, "a b%2Fc");
//! assert_eq!(decode("a%20b%2Fc", table::NONE)?, "a b/c");
//! assert_eq!(encode("/tmp/a file", table::FILE_PATH), "/tmp/a%20file");
//! # Ok::<_, uri_locator::ParseError>(())
//! ```

pub mod table;

mod imp;

pub use imp::{decode, encode, encode_preserving, validate};
pub use table::Table;
