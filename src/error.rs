//! Types for working with errors produced by this crate.

use std::result::Result as StdResult;

/// A specialized `Result` type for this crate.
pub type Result<T> = StdResult<T, Error>;

/// Represents all the ways a method can fail within this crate.
///
/// A string that does not parse as a date is *not* an error; it produces a
/// [`DateString`](crate::DateString) that reports itself as null.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input could not be decoded from JSON as either `null` or a string.
    #[cfg(feature = "json")]
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    #[error("couldn't deserialize date string from JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The pattern given to [`DateLayout::new`](crate::DateLayout::new) contains an
    /// unknown or malformed strftime specifier.
    #[error("invalid date layout {layout:?}")]
    InvalidLayout { layout: String },

    /// [`install_default_layout`](crate::install_default_layout) was called more than once.
    #[error("a default date layout has already been installed")]
    LayoutAlreadyInstalled,
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    #[inline]
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
