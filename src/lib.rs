#![cfg_attr(docsrs, feature(doc_cfg))]
//! A nullable date carried as a string.
//!
//! [`DateString`] lets application code move an absent date through a database and a
//! JSON or text round trip without sentinel values:
//!
//! | State | SQL         | JSON                | Text        |
//! |-------|-------------|---------------------|-------------|
//! | null  | `NULL`      | `null`              | empty       |
//! | valid | stored text | date part, a string | date part   |
//!
//! The "date part" is the stored text up to the first `T`, so a value that was given a
//! timestamp by a trusting path is still written as a date.
//!
//! Text is validated against a [`DateLayout`], a `chrono` strftime pattern that defaults
//! to `%Y-%m-%d`. Text that does not parse never produces an error: it produces a null
//! `DateString`. The only error when decoding is input that is neither `null` nor a string.
//!
//! ```rust
//! use sqlx_datestring::DateString;
//!
//! let date = DateString::from_value("2023-02-14");
//! assert_eq!(date.as_option(), Some("2023-02-14"));
//!
//! let not_a_date = DateString::from_value("2023-02-30");
//! assert!(not_a_date.is_null());
//! assert_eq!(not_a_date.to_string(), "");
//! ```
//!
//! # Optional features
//!
//!  * `json` (default): `serde_json` helpers such as [`DateString::from_json`].
//!  * `sql` (default): `sqlx` `Type`, `Encode` and `Decode` for every database whose
//!    `String` supports them.

mod date_string;
pub mod error;
mod json;
pub mod layout;
mod text;

#[cfg(feature = "sql")]
#[cfg_attr(docsrs, doc(cfg(feature = "sql")))]
mod types;

pub use date_string::DateString;
pub use error::{Error, Result};
pub use layout::{install_default_layout, DateLayout};
