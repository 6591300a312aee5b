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

//! Wire types produced for each logical type

use std::sync::Arc;

use flatbuffers::FlatBufferBuilder;
use typewire_ipc::convert::{build_field_type, get_fb_field_type};
use typewire_ipc::Type;
use typewire_schema::{
    DataType, Field, Fields, IntervalUnit, TimeUnit, UnionFields, UnionMode, WireError,
};

const TIME_UNITS: [TimeUnit; 4] = [
    TimeUnit::Second,
    TimeUnit::Millisecond,
    TimeUnit::Microsecond,
    TimeUnit::Nanosecond,
];

/// Encode `data_type` and finish the builder with its parameter table as root
fn encode(data_type: DataType) -> (Type, Vec<u8>) {
    let field = Field::new("c", data_type, true);
    let mut fbb = FlatBufferBuilder::new();
    let field_type = build_field_type(&field, &mut fbb).unwrap();
    fbb.finish(field_type.type_, None);
    (field_type.type_type, fbb.finished_data().to_vec())
}

fn wire_time_unit(unit: TimeUnit) -> typewire_ipc::TimeUnit {
    match unit {
        TimeUnit::Second => typewire_ipc::TimeUnit::SECOND,
        TimeUnit::Millisecond => typewire_ipc::TimeUnit::MILLISECOND,
        TimeUnit::Microsecond => typewire_ipc::TimeUnit::MICROSECOND,
        _ => typewire_ipc::TimeUnit::NANOSECOND,
    }
}

fn union_type() -> DataType {
    DataType::Union(
        UnionFields::new(
            vec![0, 1],
            vec![
                Field::new("a", DataType::Int32, true),
                Field::new("b", DataType::Utf8, true),
            ],
        ),
        UnionMode::Dense,
    )
}

#[test]
fn test_parameterless_types() {
    let cases = [
        (DataType::Null, Type::Null),
        (DataType::Boolean, Type::Bool),
        (DataType::Utf8, Type::Utf8),
        (DataType::Binary, Type::Binary),
        (DataType::new_list(DataType::Int32, true), Type::List),
        (
            DataType::Struct(Fields::from(vec![Field::new("a", DataType::Int8, true)])),
            Type::Struct_,
        ),
    ];
    for (data_type, expected) in cases {
        let (type_type, bytes) = encode(data_type.clone());
        assert_eq!(type_type, expected, "{data_type}");
        // an empty table is still a valid table
        assert!(!bytes.is_empty());
    }

    let (_, bytes) = encode(DataType::Null);
    flatbuffers::root::<typewire_ipc::Null>(&bytes).unwrap();
    let (_, bytes) = encode(DataType::new_list(DataType::Int32, true));
    flatbuffers::root::<typewire_ipc::List>(&bytes).unwrap();
}

#[test]
fn test_integers() {
    let cases = [
        (DataType::Int8, 8, true),
        (DataType::Int16, 16, true),
        (DataType::Int32, 32, true),
        (DataType::Int64, 64, true),
        (DataType::UInt8, 8, false),
        (DataType::UInt16, 16, false),
        (DataType::UInt32, 32, false),
        (DataType::UInt64, 64, false),
    ];
    for (data_type, bit_width, is_signed) in cases {
        let (type_type, bytes) = encode(data_type.clone());
        assert_eq!(type_type, Type::Int);
        let int = flatbuffers::root::<typewire_ipc::Int>(&bytes).unwrap();
        assert_eq!(int.bitWidth(), bit_width, "{data_type}");
        assert_eq!(int.is_signed(), is_signed, "{data_type}");
    }
}

#[test]
fn test_floating_point() {
    let (type_type, bytes) = encode(DataType::Float32);
    assert_eq!(type_type, Type::FloatingPoint);
    let float = flatbuffers::root::<typewire_ipc::FloatingPoint>(&bytes).unwrap();
    assert_eq!(float.precision(), typewire_ipc::Precision::SINGLE);

    let (type_type, bytes) = encode(DataType::Float64);
    assert_eq!(type_type, Type::FloatingPoint);
    let float = flatbuffers::root::<typewire_ipc::FloatingPoint>(&bytes).unwrap();
    assert_eq!(float.precision(), typewire_ipc::Precision::DOUBLE);
}

#[test]
fn test_fixed_size_types() {
    let (type_type, bytes) = encode(DataType::FixedSizeBinary(16));
    assert_eq!(type_type, Type::FixedSizeBinary);
    let fsb = flatbuffers::root::<typewire_ipc::FixedSizeBinary>(&bytes).unwrap();
    assert_eq!(fsb.byteWidth(), 16);

    let (type_type, bytes) = encode(DataType::new_fixed_size_list(DataType::Float32, 5, false));
    assert_eq!(type_type, Type::FixedSizeList);
    let fsl = flatbuffers::root::<typewire_ipc::FixedSizeList>(&bytes).unwrap();
    assert_eq!(fsl.listSize(), 5);
}

#[test]
fn test_decimal_widths() {
    let (type_type, bytes) = encode(DataType::Decimal128(38, 10));
    assert_eq!(type_type, Type::Decimal);
    let d128 = flatbuffers::root::<typewire_ipc::Decimal>(&bytes).unwrap();

    let (type_type, bytes) = encode(DataType::Decimal256(38, 10));
    assert_eq!(type_type, Type::Decimal);
    let d256 = flatbuffers::root::<typewire_ipc::Decimal>(&bytes).unwrap();

    assert_eq!(d128.precision(), 38);
    assert_eq!(d128.scale(), 10);
    assert_eq!(d128.bitWidth(), 128);
    assert_eq!(d256.precision(), d128.precision());
    assert_eq!(d256.scale(), d128.scale());
    assert_eq!(d256.bitWidth(), 256);

    let (_, bytes) = encode(DataType::Decimal128(5, -2));
    let negative = flatbuffers::root::<typewire_ipc::Decimal>(&bytes).unwrap();
    assert_eq!(negative.scale(), -2);
}

#[test]
fn test_dates() {
    let (type_type, bytes) = encode(DataType::Date32);
    assert_eq!(type_type, Type::Date);
    let date = flatbuffers::root::<typewire_ipc::Date>(&bytes).unwrap();
    assert_eq!(date.unit(), typewire_ipc::DateUnit::DAY);

    let (type_type, bytes) = encode(DataType::Date64);
    assert_eq!(type_type, Type::Date);
    let date = flatbuffers::root::<typewire_ipc::Date>(&bytes).unwrap();
    assert_eq!(date.unit(), typewire_ipc::DateUnit::MILLISECOND);
}

#[test]
fn test_time_width_follows_variant() {
    for unit in TIME_UNITS {
        let (type_type, bytes) = encode(DataType::Time32(unit));
        assert_eq!(type_type, Type::Time);
        let time = flatbuffers::root::<typewire_ipc::Time>(&bytes).unwrap();
        assert_eq!(time.bitWidth(), 32, "{unit:?}");
        assert_eq!(time.unit(), wire_time_unit(unit));

        let (type_type, bytes) = encode(DataType::Time64(unit));
        assert_eq!(type_type, Type::Time);
        let time = flatbuffers::root::<typewire_ipc::Time>(&bytes).unwrap();
        assert_eq!(time.bitWidth(), 64, "{unit:?}");
        assert_eq!(time.unit(), wire_time_unit(unit));
    }
}

#[test]
fn test_timestamp_units() {
    for unit in TIME_UNITS {
        let (type_type, bytes) = encode(DataType::Timestamp(unit, Some("UTC".into())));
        assert_eq!(type_type, Type::Timestamp);
        let timestamp = flatbuffers::root::<typewire_ipc::Timestamp>(&bytes).unwrap();
        assert_eq!(timestamp.unit(), wire_time_unit(unit));
        assert_eq!(timestamp.timezone(), Some("UTC"));
    }
}

#[test]
fn test_blank_timezone_is_omitted() {
    let (_, without) = encode(DataType::Timestamp(TimeUnit::Millisecond, None));
    let timestamp = flatbuffers::root::<typewire_ipc::Timestamp>(&without).unwrap();
    assert_eq!(timestamp.timezone(), None);

    for tz in ["", " ", "\t", " \n\r "] {
        let (_, bytes) = encode(DataType::Timestamp(TimeUnit::Millisecond, Some(tz.into())));
        let timestamp = flatbuffers::root::<typewire_ipc::Timestamp>(&bytes).unwrap();
        assert_eq!(timestamp.timezone(), None, "{tz:?}");
        // no string is interned either
        assert_eq!(bytes, without, "{tz:?}");
    }
}

#[test]
fn test_timezone_is_kept_verbatim() {
    for tz in ["+08:00", "America/New_York", " Asia/Tokyo "] {
        let (_, bytes) = encode(DataType::Timestamp(TimeUnit::Nanosecond, Some(tz.into())));
        let timestamp = flatbuffers::root::<typewire_ipc::Timestamp>(&bytes).unwrap();
        assert_eq!(timestamp.timezone(), Some(tz));
    }
}

#[test]
fn test_dictionary_encodes_as_value_type() {
    let value_types = [
        DataType::Null,
        DataType::Boolean,
        DataType::Int16,
        DataType::UInt64,
        DataType::Float64,
        DataType::Utf8,
        DataType::Binary,
        DataType::FixedSizeBinary(3),
        DataType::Date64,
        DataType::Time64(TimeUnit::Nanosecond),
        DataType::Timestamp(TimeUnit::Second, Some("UTC".into())),
        DataType::Decimal256(40, 4),
        DataType::new_list(DataType::Utf8, true),
        DataType::new_fixed_size_list(DataType::Int8, 2, true),
        DataType::Struct(Fields::from(vec![Field::new("a", DataType::Int32, true)])),
    ];
    for value_type in value_types {
        for index_type in [DataType::Int8, DataType::UInt32] {
            let dictionary =
                DataType::Dictionary(Box::new(index_type), Box::new(value_type.clone()));
            let (dict_tag, dict_bytes) = encode(dictionary);
            let (value_tag, value_bytes) = encode(value_type.clone());
            assert_eq!(dict_tag, value_tag, "{value_type}");
            assert_eq!(dict_bytes, value_bytes, "{value_type}");
        }
    }
}

#[test]
fn test_union_is_unsupported() {
    let mut fbb = FlatBufferBuilder::new();
    let _ = fbb.create_string("already written");
    let before = fbb.unfinished_data().to_vec();

    let field = Field::new("u", union_type(), true);
    let err = build_field_type(&field, &mut fbb).unwrap_err();
    assert_eq!(
        err,
        WireError::UnsupportedType("union types are not supported by this encoder".to_string())
    );
    assert_eq!(
        err.to_string(),
        "Unsupported type: union types are not supported by this encoder"
    );
    assert_eq!(fbb.unfinished_data(), before.as_slice());

    let dictionary = DataType::Dictionary(Box::new(DataType::Int32), Box::new(union_type()));
    let err = get_fb_field_type(&dictionary, &mut fbb).unwrap_err();
    assert!(matches!(err, WireError::UnsupportedType(_)));
    assert_eq!(fbb.unfinished_data(), before.as_slice());
}

#[test]
fn test_types_outside_wire_vocabulary() {
    let map_entries = Field::new(
        "entries",
        DataType::Struct(Fields::from(vec![
            Field::new("key", DataType::Utf8, false),
            Field::new("value", DataType::Int32, true),
        ])),
        false,
    );
    let unsupported = [
        DataType::Float16,
        DataType::Duration(TimeUnit::Millisecond),
        DataType::Interval(IntervalUnit::MonthDayNano),
        DataType::LargeBinary,
        DataType::LargeUtf8,
        DataType::LargeList(Arc::new(Field::new_list_field(DataType::Int32, true))),
        DataType::Map(Arc::new(map_entries), false),
    ];

    let mut fbb = FlatBufferBuilder::new();
    for data_type in unsupported {
        let err = get_fb_field_type(&data_type, &mut fbb).unwrap_err();
        assert!(
            matches!(err, WireError::UnsupportedType(_)),
            "{data_type}: {err}"
        );
        assert!(fbb.unfinished_data().is_empty(), "{data_type}");
    }
}

#[test]
fn test_offsets_share_one_builder() {
    let mut fbb = FlatBufferBuilder::new();
    let int = get_fb_field_type(&DataType::Int32, &mut fbb).unwrap();
    let ts = get_fb_field_type(
        &DataType::Timestamp(TimeUnit::Second, Some("UTC".into())),
        &mut fbb,
    )
    .unwrap();
    assert_eq!(int.type_type, Type::Int);
    assert_eq!(ts.type_type, Type::Timestamp);
    assert_ne!(int.type_.value(), ts.type_.value());
}
