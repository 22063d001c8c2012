//! Mapping of loosely-typed response objects onto resource records.
//!
//! Each resource is declared once with [`record!`], which fixes its field
//! list. Projection keeps declared fields, drops everything else, and parses
//! timestamp fields with [`DATETIME_FORMAT`].

use crate::core::errors::ComagicError;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Wire format of every date-time the API sends or accepts
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_datetime(text: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).map(Some)
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Name of a field declared on record `R`.
///
/// Only [`record!`] creates these, so a handle always names a real field of
/// its record type.
pub struct Field<R> {
    name: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> Field<R> {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            name,
            _record: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R> Eq for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({})", self.name)
    }
}

impl<R> Serialize for Field<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// A resource type with a closed set of fields
pub trait Record: Sized {
    /// Declared fields, in request order
    const FIELDS: &'static [&'static str];

    /// Project a response object onto the declared fields.
    ///
    /// Unknown keys are dropped and missing or `null` keys become `None`.
    fn from_raw(raw: &Value) -> Result<Self, ComagicError>;

    /// Declared fields that hold a value, timestamps back in wire format
    fn to_map(&self) -> Map<String, Value>;

    /// Strict constructor: any key outside [`Record::FIELDS`] is rejected
    fn from_map(map: Map<String, Value>) -> Result<Self, ComagicError> {
        if let Some(unknown) = map.keys().find(|key| !Self::FIELDS.contains(&key.as_str())) {
            return Err(ComagicError::params(format!(
                "unknown field '{}' for {}",
                unknown,
                std::any::type_name::<Self>()
                    .rsplit("::")
                    .next()
                    .unwrap_or_default()
            )));
        }
        Self::from_raw(&Value::Object(map))
    }

    fn all_fields() -> Vec<Field<Self>> {
        Self::FIELDS.iter().map(|name| Field::new(*name)).collect()
    }
}

#[doc(hidden)]
pub fn expect_object<'a>(raw: &'a Value, record: &str) -> Result<&'a Map<String, Value>, ComagicError> {
    raw.as_object()
        .ok_or_else(|| ComagicError::transport(format!("expected an object for {}, got {}", record, raw)))
}

#[doc(hidden)]
pub fn read_value(object: &Map<String, Value>, name: &str) -> Result<Option<Value>, ComagicError> {
    Ok(object.get(name).filter(|value| !value.is_null()).cloned())
}

#[doc(hidden)]
pub fn read_timestamp(
    object: &Map<String, Value>,
    name: &str,
) -> Result<Option<NaiveDateTime>, ComagicError> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => parse_datetime(text).map_err(|e| {
            ComagicError::transport(format!("field '{}': bad timestamp '{}': {}", name, text, e))
        }),
        Some(other) => Err(ComagicError::transport(format!(
            "field '{}': expected timestamp text, got {}",
            name, other
        ))),
    }
}

#[doc(hidden)]
pub fn write_timestamp(value: &NaiveDateTime) -> Value {
    Value::String(format_datetime(value))
}

/// Declares a record type and its field handles.
///
/// ```ignore
/// record! {
///     pub struct Tag(TagFields) {
///         id,
///         name,
///         r#type as "type",
///         created_at: timestamp,
///     }
/// }
/// ```
///
/// Plain fields hold the JSON value as received; `timestamp` fields hold a
/// `NaiveDateTime`. `as "..."` sets the wire name when it differs from the
/// Rust identifier.
macro_rules! record {
    (@wire $field:ident) => { stringify!($field) };
    (@wire $field:ident $wire:literal) => { $wire };

    (@ty) => { serde_json::Value };
    (@ty timestamp) => { chrono::NaiveDateTime };

    (@read timestamp $object:ident $wire:expr) => {
        $crate::core::record::read_timestamp($object, $wire)
    };
    (@read $object:ident $wire:expr) => {
        $crate::core::record::read_value($object, $wire)
    };

    (@write timestamp $value:ident) => { $crate::core::record::write_timestamp($value) };
    (@write $value:ident) => { $value.clone() };

    (
        $(#[$meta:meta])*
        pub struct $name:ident($fields:ident) {
            $( $field:ident $(: $kind:ident)? $(as $wire:literal)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( pub $field: Option<record!(@ty $($kind)?)>, )*
        }

        #[doc = concat!("Field handles of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $( pub $field: $crate::core::record::Field<$name>, )*
        }

        impl $name {
            pub const FIELD: $fields = $fields {
                $( $field: $crate::core::record::Field::new(record!(@wire $field $($wire)?)), )*
            };
        }

        impl $crate::core::record::Record for $name {
            const FIELDS: &'static [&'static str] = &[$( record!(@wire $field $($wire)?) ),*];

            fn from_raw(
                raw: &serde_json::Value,
            ) -> Result<Self, $crate::core::errors::ComagicError> {
                let object = $crate::core::record::expect_object(raw, stringify!($name))?;
                Ok(Self {
                    $( $field: record!(@read $($kind)? object record!(@wire $field $($wire)?))?, )*
                })
            }

            fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
                let mut map = serde_json::Map::new();
                $(
                    if let Some(value) = &self.$field {
                        map.insert(
                            record!(@wire $field $($wire)?).to_string(),
                            record!(@write $($kind)? value),
                        );
                    }
                )*
                map
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&$crate::core::record::Record::to_map(self), serializer)
            }
        }
    };
}

pub(crate) use record;

/// Lazily mapped records of one list response, in server order.
///
/// Each element is projected only when pulled. To read the list again, call
/// the endpoint again.
pub struct Records<R> {
    items: std::vec::IntoIter<Value>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Records<R> {
    /// Wrap an unwrapped list result
    pub fn from_result(result: Value) -> Result<Self, ComagicError> {
        let items = match result {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => {
                return Err(ComagicError::transport(format!(
                    "expected a list result, got {}",
                    other
                )))
            }
        };

        Ok(Self {
            items: items.into_iter(),
            _record: PhantomData,
        })
    }
}

impl<R> fmt::Debug for Records<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Records")
            .field("remaining", &self.items.len())
            .finish()
    }
}

impl<R: Record> Iterator for Records<R> {
    type Item = Result<R, ComagicError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|raw| R::from_raw(&raw))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<R: Record> ExactSizeIterator for Records<R> {}
