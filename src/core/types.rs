use crate::core::errors::ComagicError;
use crate::core::kernel::envelope::RequestBuilder;
use crate::core::record::{format_datetime, Field, Record};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One sort key, serialized as `{"field": ..., "order": ...}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct Sort<R> {
    pub field: Field<R>,
    pub order: SortOrder,
}

impl<R> Sort<R> {
    pub const fn asc(field: Field<R>) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    pub const fn desc(field: Field<R>) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }
}

/// Paging, filtering, field selection and sorting for a list read.
///
/// Every member left as `None` is omitted from the request. `fields: None`
/// requests the record's full declared field list; `Some(vec![])` is sent as
/// an explicit empty list.
#[derive(Debug, Clone)]
pub struct ListOptions<R> {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub filter: Option<Value>,
    pub fields: Option<Vec<Field<R>>>,
    pub sort: Option<Vec<Sort<R>>>,
    pub user_id: Option<i64>,
}

impl<R> Default for ListOptions<R> {
    fn default() -> Self {
        Self {
            limit: None,
            offset: None,
            filter: None,
            fields: None,
            sort: None,
            user_id: None,
        }
    }
}

impl<R: Record> ListOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Structured predicate, passed through as-is
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field<R>>) -> Self {
        self.fields = Some(fields.into_iter().collect());
        self
    }

    pub fn sort(mut self, sort: impl IntoIterator<Item = Sort<R>>) -> Self {
        self.sort = Some(sort.into_iter().collect());
        self
    }

    /// Act on behalf of a sub-account user
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub(crate) fn apply(mut self, builder: RequestBuilder) -> RequestBuilder {
        let fields = self.fields.take().unwrap_or_else(R::all_fields);
        self.apply_without_fields(builder).require("fields", fields)
    }

    /// Same as `apply`, but leaves `fields` out unless the caller chose some
    pub(crate) fn apply_without_fields(self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .user_id(self.user_id)
            .param("limit", self.limit)
            .param("offset", self.offset)
            .param("filter", self.filter)
            .param("sort", self.sort)
            .param("fields", self.fields)
    }
}

/// A report read: a mandatory date range plus list options
#[derive(Debug, Clone)]
pub struct ReportOptions<R> {
    pub date_from: NaiveDateTime,
    pub date_till: NaiveDateTime,
    pub list: ListOptions<R>,
}

impl<R: Record> ReportOptions<R> {
    pub fn new(date_from: NaiveDateTime, date_till: NaiveDateTime) -> Self {
        Self {
            date_from,
            date_till,
            list: ListOptions::default(),
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.list = self.list.limit(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.list = self.list.offset(offset);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.list = self.list.filter(filter);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field<R>>) -> Self {
        self.list = self.list.fields(fields);
        self
    }

    pub fn sort(mut self, sort: impl IntoIterator<Item = Sort<R>>) -> Self {
        self.list = self.list.sort(sort);
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.list = self.list.user_id(user_id);
        self
    }

    pub(crate) fn apply(self, builder: RequestBuilder) -> RequestBuilder {
        self.list
            .apply(builder)
            .require("date_from", format_datetime(&self.date_from))
            .require("date_till", format_datetime(&self.date_till))
    }
}

/// Text enumerations the API accepts from a closed set of values.
///
/// Parsing unknown text fails with `ComagicError::Params`, so bad input never
/// reaches the network.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($param:literal) {
            $( $variant:ident => $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $text)] $variant, )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$( Self::$variant ),*];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ComagicError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )*
                    _ => Err(ComagicError::params(format!(
                        "invalid {}, {} must be in [{}]",
                        $param,
                        $param,
                        [$( $text ),*].join(", ")
                    ))),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ComagicError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

closed_enum! {
    /// Availability of an employee
    pub enum EmployeeStatus("status") {
        Available => "available",
        Break => "break",
        DoNotDisturb => "do_not_disturb",
        NotAtWorkplace => "not_at_workplace",
        NotAtWork => "not_at_work",
        Unknown => "unknown",
    }
}

closed_enum! {
    /// Which calls of an employee are recorded
    pub enum CallRecording("call_recording") {
        All => "all",
        In => "in",
        Out => "out",
        Off => "off",
    }
}

closed_enum! {
    pub enum BillingState("billing_state") {
        Active => "active",
        ManualLock => "manual_lock",
    }
}

closed_enum! {
    pub enum CampaignStatus("status") {
        Active => "active",
        Inactive => "inactive",
    }
}
