//! The date layout every [`DateString`](crate::DateString) is validated against.
//!
//! A [`DateLayout`] is a `chrono` strftime pattern. Every validating entry point has a
//! `*_with` variant taking a layout explicitly; the plain variants, and the trait
//! implementations that cannot take extra arguments (`Deserialize`, `FromStr`), read the
//! process-wide default returned by [`DateLayout::global`].
//!
//! The process-wide default is `"%Y-%m-%d"` unless the application installs another one
//! with [`install_default_layout`], which may only happen once.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter, Write};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use once_cell::sync::OnceCell;

use crate::error::{Error, Result};

static DEFAULT_LAYOUT: OnceCell<DateLayout> = OnceCell::new();

static ISO_8601_LAYOUT: DateLayout = DateLayout::ISO_8601;

/// A strftime pattern describing how a date is written as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateLayout {
    pattern: Cow<'static, str>,
}

impl DateLayout {
    /// `YYYY-MM-DD`: four-digit year, two-digit month and two-digit day.
    pub const ISO_8601: DateLayout = DateLayout {
        pattern: Cow::Borrowed("%Y-%m-%d"),
    };

    /// Create a layout from a strftime pattern such as `"%d/%m/%Y"`.
    ///
    /// Returns [`Error::InvalidLayout`] if the pattern contains a specifier `chrono`
    /// does not understand.
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Result<Self> {
        let pattern = pattern.into();

        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidLayout {
                layout: pattern.into_owned(),
            });
        }

        Ok(Self { pattern })
    }

    /// The layout currently in effect for the whole process.
    pub fn global() -> &'static DateLayout {
        DEFAULT_LAYOUT.get().unwrap_or(&ISO_8601_LAYOUT)
    }

    /// The strftime pattern this layout was created from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse `text` as a date under this layout.
    ///
    /// The input must be exactly what [`format`][Self::format] writes for the parsed date:
    /// calendar-invalid dates, trailing text, unpadded fields, surrounding whitespace and
    /// signed years are all rejected.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(text, &self.pattern).ok()?;

        // chrono accepts `2023-2-4`, ` 2023-02-14` and `+2023-02-14`
        (self.format(&date).as_deref() == Some(text)).then_some(date)
    }

    /// Write `date` using this layout.
    ///
    /// Returns `None` if the pattern asks for fields a bare date does not have
    /// (e.g. `%H`).
    pub fn format(&self, date: &NaiveDate) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.pattern)).ok()?;
        Some(out)
    }

}

impl Default for DateLayout {
    fn default() -> Self {
        Self::ISO_8601
    }
}

impl Display for DateLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Install the layout returned by [`DateLayout::global`] for the rest of the process.
///
/// Intended to be called once at startup, before any value is parsed. Values created
/// earlier keep the validity they were given.
///
/// ### Errors
/// [`Error::LayoutAlreadyInstalled`] if a layout was already installed.
pub fn install_default_layout(layout: DateLayout) -> Result<()> {
    let pattern = layout.pattern.clone();

    DEFAULT_LAYOUT
        .set(layout)
        .map_err(|_| Error::LayoutAlreadyInstalled)?;

    log::debug!("installed process-wide date layout {pattern:?}");

    Ok(())
}
