//! SQL: `NULL` for a null value, the stored text otherwise.
//!
//! [`DateString`] maps to whatever SQL type `String` maps to for a given database, so it
//! can be bound to and read from any text column (`TEXT`, `VARCHAR`, ...).
//!
//! Decoding trusts the database: any non-`NULL` text is taken as a valid date without
//! consulting the [`DateLayout`](crate::DateLayout). Use
//! [`DateString::check_valid`] if the column may hold text that is not a date.

use sqlx_core::database::Database;
use sqlx_core::decode::Decode;
use sqlx_core::encode::{Encode, IsNull};
use sqlx_core::error::BoxDynError;
use sqlx_core::types::Type;
use sqlx_core::value::ValueRef;

use crate::date_string::DateString;

impl<DB> Type<DB> for DateString
where
    DB: Database,
    String: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <String as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <String as Type<DB>>::compatible(ty)
    }
}

impl<'q, DB> Encode<'q, DB> for DateString
where
    DB: Database,
    String: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        if self.is_null() {
            return Ok(IsNull::Yes);
        }

        <String as Encode<'q, DB>>::encode_by_ref(&self.value, buf)
    }

    fn size_hint(&self) -> usize {
        self.as_option().map_or(0, str::len)
    }
}

impl<'r, DB> Decode<'r, DB> for DateString
where
    DB: Database,
    String: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(DateString::null());
        }

        let text = <String as Decode<'r, DB>>::decode(value)?;

        Ok(DateString::new(text, true))
    }
}
