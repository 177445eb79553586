//! JSON (and any other `serde` format): `null` for a null value, the date as a string
//! otherwise.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date_string::DateString;
use crate::layout::DateLayout;

impl Serialize for DateString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_null() {
            return serializer.serialize_none();
        }

        serializer.serialize_str(self.date_prefix())
    }
}

/// Accepts `null` or a string; any other input is an error.
///
/// A string that does not parse under [`DateLayout::global`] is not an error: it yields a
/// null `DateString` that still holds the text.
impl<'de> Deserialize<'de> for DateString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer).map_err(|e| {
            D::Error::custom(format_args!("couldn't deserialize date string: {e}"))
        })?;

        Ok(DateString::from_decoded(value, DateLayout::global()))
    }
}

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl DateString {
    /// Decode a JSON document holding `null` or a string, validating under the
    /// process-wide layout.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        Self::from_json_with(input, DateLayout::global())
    }

    /// Decode a JSON document holding `null` or a string, validating under `layout`.
    pub fn from_json_with(input: &str, layout: &DateLayout) -> crate::Result<Self> {
        let value: Option<String> = serde_json::from_str(input)?;
        Ok(Self::from_decoded(value, layout))
    }

    /// Decode an already parsed JSON value, validating under the process-wide layout.
    pub fn from_json_value(value: serde_json::Value) -> crate::Result<Self> {
        let value: Option<String> = serde_json::from_value(value)?;
        Ok(Self::from_decoded(value, DateLayout::global()))
    }

    /// Encode as a JSON document: `null`, or the date prefix as a string.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
