use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use crate::layout::DateLayout;

/// A date carried as a string, or the absence of one.
///
/// `DateString` pairs the text of a date with a validity flag. An invalid (null)
/// `DateString` maps to SQL `NULL`, JSON `null` and blank text; a valid one to the date
/// text itself. See the crate documentation for the exact conversion rules.
///
/// There are two ways to build a value:
///
///  * **validating**: [`from_value`][Self::from_value], [`from_option`][Self::from_option],
///    [`FromStr`](std::str::FromStr) and `Deserialize` parse the text against a
///    [`DateLayout`]. Text that does not parse produces a null `DateString` holding
///    the original text, never an error.
///  * **trusting**: [`new`][Self::new], [`set_valid`][Self::set_valid] and decoding
///    from the database take the value and flag as given.
///
/// Validity is established when a value is set and never re-checked afterwards, so a
/// trusted value may be valid without parsing under the current layout.
/// [`check_valid`][Self::check_valid] tells you whether it does.
///
/// Equality only looks at the text of valid values: all null `DateString`s are equal.
#[derive(Clone, Debug, Default)]
pub struct DateString {
    pub(crate) value: String,
    pub(crate) valid: bool,
}

impl DateString {
    /// Create a value from the text and validity flag exactly as given, with no parsing.
    pub fn new(value: impl Into<String>, valid: bool) -> Self {
        Self {
            value: value.into(),
            valid,
        }
    }

    /// A null value with empty text.
    pub fn null() -> Self {
        Self::default()
    }

    /// Parse `value` under the process-wide [`DateLayout::global`].
    pub fn from_value(value: impl Into<String>) -> Self {
        Self::from_value_with(value, DateLayout::global())
    }

    /// Parse `value` under `layout`.
    ///
    /// The value is stored unchanged and marked valid only if it is written exactly as
    /// `layout` would write it.
    pub fn from_value_with(value: impl Into<String>, layout: &DateLayout) -> Self {
        Self::from_decoded(Some(value.into()), layout)
    }

    /// `None` gives a null value; `Some` behaves as [`from_value`][Self::from_value].
    pub fn from_option(value: Option<&str>) -> Self {
        Self::from_option_with(value, DateLayout::global())
    }

    pub fn from_option_with(value: Option<&str>, layout: &DateLayout) -> Self {
        value.map_or_else(Self::null, |value| Self::from_value_with(value, layout))
    }

    /// Format `date` under the process-wide layout.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_date_with(date, DateLayout::global())
    }

    /// Format `date` under `layout`.
    ///
    /// If `layout` needs fields a bare date does not have, the result is null.
    pub fn from_date_with(date: NaiveDate, layout: &DateLayout) -> Self {
        layout
            .format(&date)
            .map_or_else(Self::null, |value| Self::new(value, true))
    }

    /// Whether the stored text currently parses under `layout`.
    ///
    /// This does not look at, or change, the validity flag.
    pub fn check_valid(&self, layout: &DateLayout) -> bool {
        layout.parse(&self.value).is_some()
    }

    /// The stored date if valid and parseable under `layout`.
    pub fn to_date(&self, layout: &DateLayout) -> Option<NaiveDate> {
        if !self.valid {
            return None;
        }

        layout.parse(self.date_prefix())
    }

    /// The stored text, whether or not the value is valid.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `true` for values holding a date.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `true` for null values.
    ///
    /// Suitable for `#[serde(skip_serializing_if = "DateString::is_null")]`.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// The stored text if valid, otherwise an empty string.
    pub fn value_or_default(&self) -> &str {
        if self.valid {
            &self.value
        } else {
            ""
        }
    }

    pub fn as_option(&self) -> Option<&str> {
        self.valid.then_some(self.value.as_str())
    }

    /// An owned copy of the stored text if valid.
    pub fn to_option(&self) -> Option<String> {
        self.as_option().map(str::to_owned)
    }

    /// Replace the stored text and mark the value valid, without parsing.
    pub fn set_valid(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.valid = true;
    }

    /// Store decoded text verbatim and take validity from whether it parses under
    /// `layout`. `None` is a null value.
    pub(crate) fn from_decoded(value: Option<String>, layout: &DateLayout) -> Self {
        let Some(value) = value else {
            return Self::null();
        };

        let mut date = Self::new(value, false);
        date.valid = date.check_valid(layout);

        if !date.valid {
            log::trace!(
                "{:?} does not match date layout {layout}; storing as null",
                date.value
            );
        }

        date
    }

    /// The stored text up to the first `T`, dropping any time of day.
    pub(crate) fn date_prefix(&self) -> &str {
        self.value
            .split_once('T')
            .map_or(self.value.as_str(), |(date, _)| date)
    }
}

impl PartialEq for DateString {
    fn eq(&self, other: &Self) -> bool {
        self.valid == other.valid && (!self.valid || self.value == other.value)
    }
}

impl Eq for DateString {}

impl Hash for DateString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl From<DateString> for Option<String> {
    fn from(value: DateString) -> Self {
        value.valid.then_some(value.value)
    }
}

impl From<NaiveDate> for DateString {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
