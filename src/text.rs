//! Plain text: blank for a null value, the date otherwise.

use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::date_string::DateString;
use crate::layout::DateLayout;

impl DateString {
    /// The text form: empty for null values, otherwise the stored text up to the first `T`.
    pub fn as_text(&self) -> &str {
        if self.is_null() {
            return "";
        }

        self.date_prefix()
    }

    /// [`as_text`][Self::as_text] as owned bytes.
    pub fn to_text_bytes(&self) -> Vec<u8> {
        self.as_text().as_bytes().to_vec()
    }

    /// Store `text` verbatim and mark it valid if it parses under `layout`.
    ///
    /// Blank text therefore decodes to a null value.
    pub fn from_text_with(text: &str, layout: &DateLayout) -> Self {
        Self::from_decoded(Some(text.to_owned()), layout)
    }

    /// Like [`from_text_with`][Self::from_text_with] under the process-wide layout.
    ///
    /// Bytes that are not UTF-8 are replaced with `U+FFFD`; such text never parses as a
    /// date, so the result is null.
    pub fn from_text_bytes(text: &[u8]) -> Self {
        Self::from_text_with(&String::from_utf8_lossy(text), DateLayout::global())
    }
}

impl Display for DateString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Never fails; text that is not a date under [`DateLayout::global`] yields a null value.
impl FromStr for DateString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_text_with(s, DateLayout::global()))
    }
}
