// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use std::sync::Arc;

use crate::{Field, FieldRef, Fields, UnionFields};

/// Logical type of a column.
///
/// The set is closed on purpose: an encoder matches every variant, so a new
/// variant fails to compile until each encoder decides what to do with it.
///
/// ```
/// # use typewire_schema::{DataType, TimeUnit};
/// let ids = DataType::Int64;
/// let tags = DataType::new_list(DataType::Utf8, true);
/// let seen = DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into()));
/// let city = DataType::Dictionary(Box::new(DataType::UInt16), Box::new(DataType::Utf8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// No values, every slot is null
    Null,
    /// `true` / `false`
    Boolean,
    /// Signed 8-bit integer
    Int8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 8-bit integer
    UInt8,
    /// Unsigned 16-bit integer
    UInt16,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unsigned 64-bit integer
    UInt64,
    /// Half precision float
    Float16,
    /// Single precision float
    Float32,
    /// Double precision float
    Float64,
    /// Instant since the Unix epoch in the given unit, with an optional
    /// timezone name (`"Europe/Paris"`) or offset (`"+07:30"`).
    ///
    /// A missing, empty or whitespace-only timezone is written to the wire
    /// as a naive timestamp.
    Timestamp(TimeUnit, Option<Arc<str>>),
    /// Days since the Unix epoch
    Date32,
    /// Milliseconds since the Unix epoch
    Date64,
    /// 32-bit time of day
    Time32(TimeUnit),
    /// 64-bit time of day
    Time64(TimeUnit),
    /// Elapsed time
    Duration(TimeUnit),
    /// Calendar interval
    Interval(IntervalUnit),
    /// Variable length bytes
    Binary,
    /// Bytes of the given fixed width
    FixedSizeBinary(i32),
    /// Variable length bytes with 64-bit offsets
    LargeBinary,
    /// UTF-8 string
    Utf8,
    /// UTF-8 string with 64-bit offsets
    LargeUtf8,
    /// Variable length list of the child field
    List(FieldRef),
    /// List of the child field with the given number of elements
    FixedSizeList(FieldRef, i32),
    /// Variable length list with 64-bit offsets
    LargeList(FieldRef),
    /// Named child fields
    Struct(Fields),
    /// One of several child fields per slot
    Union(UnionFields, UnionMode),
    /// Values of the second type looked up through indices of the first
    Dictionary(Box<DataType>, Box<DataType>),
    /// 128-bit decimal with precision and scale
    Decimal128(u8, i8),
    /// 256-bit decimal with precision and scale
    Decimal256(u8, i8),
    /// Key/value entries, the flag tells whether keys are sorted
    Map(FieldRef, bool),
}

/// Resolution of temporal types.
///
/// Non-exhaustive: translators to other vocabularies must handle units they
/// do not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TimeUnit {
    #[allow(missing_docs)]
    Second,
    #[allow(missing_docs)]
    Millisecond,
    #[allow(missing_docs)]
    Microsecond,
    #[allow(missing_docs)]
    Nanosecond,
}

/// Layout of [`DataType::Interval`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalUnit {
    /// Months
    YearMonth,
    /// Days and milliseconds
    DayTime,
    /// Months, days and nanoseconds
    MonthDayNano,
}

/// Layout of [`DataType::Union`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnionMode {
    #[allow(missing_docs)]
    Sparse,
    #[allow(missing_docs)]
    Dense,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl DataType {
    /// Returns true for `Int8` through `Int64`
    #[inline]
    pub fn is_signed_integer(&self) -> bool {
        use DataType::*;
        matches!(self, Int8 | Int16 | Int32 | Int64)
    }

    /// Returns true for any signed or unsigned integer, the only types
    /// allowed as dictionary indices
    #[inline]
    pub fn is_dictionary_key_type(&self) -> bool {
        use DataType::*;
        self.is_signed_integer() || matches!(self, UInt8 | UInt16 | UInt32 | UInt64)
    }

    /// A [`DataType::List`] whose child is named `"item"`
    pub fn new_list(data_type: DataType, nullable: bool) -> Self {
        DataType::List(Arc::new(Field::new_list_field(data_type, nullable)))
    }

    /// A [`DataType::FixedSizeList`] of `size` elements whose child is named `"item"`
    pub fn new_fixed_size_list(data_type: DataType, size: i32, nullable: bool) -> Self {
        DataType::FixedSizeList(Arc::new(Field::new_list_field(data_type, nullable)), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_key_types() {
        for dt in [DataType::Int8, DataType::Int16, DataType::Int32, DataType::Int64] {
            assert!(dt.is_signed_integer());
            assert!(dt.is_dictionary_key_type());
        }
        for dt in [DataType::UInt8, DataType::UInt16, DataType::UInt32, DataType::UInt64] {
            assert!(!dt.is_signed_integer());
            assert!(dt.is_dictionary_key_type());
        }
        assert!(!DataType::Float32.is_dictionary_key_type());
        assert!(!DataType::Utf8.is_dictionary_key_type());
        assert!(!DataType::Decimal128(10, 2).is_dictionary_key_type());
    }

    #[test]
    fn test_list_constructors() {
        let list = DataType::new_fixed_size_list(DataType::Float64, 3, false);
        match list {
            DataType::FixedSizeList(field, size) => {
                assert_eq!(size, 3);
                assert_eq!(field.name(), "item");
                assert_eq!(field.data_type(), &DataType::Float64);
                assert!(!field.is_nullable());
            }
            other => panic!("unexpected type {other}"),
        }
        assert_eq!(
            DataType::new_list(DataType::Int32, true),
            DataType::List(Arc::new(Field::new("item", DataType::Int32, true)))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::Date32.to_string(), "Date32");
        assert_eq!(
            DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into())).to_string(),
            "Timestamp(Millisecond, Some(\"UTC\"))"
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_struct_type() {
        let metadata = std::collections::HashMap::from([("k".to_string(), "v".to_string())]);
        let person = DataType::Struct(Fields::from(vec![
            Field::new("first_name", DataType::Utf8, false).with_metadata(metadata),
            Field::new("last_name", DataType::Utf8, false),
        ]));

        let serialized = serde_json::to_string(&person).unwrap();
        let deserialized: DataType = serde_json::from_str(&serialized).unwrap();

        assert_eq!(person, deserialized);
    }
}
