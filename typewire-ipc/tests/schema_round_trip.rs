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

//! Schemas written as IPC messages and read back

use std::collections::HashMap;

use typewire_ipc::convert::try_schema_from_flatbuffer_bytes;
use typewire_ipc::writer::{IpcDataGenerator, IpcWriteOptions};
use typewire_ipc::MetadataVersion;
use typewire_schema::{DataType, Field, Fields, Schema, TimeUnit, WireError};

fn round_trip(schema: &Schema, options: &IpcWriteOptions) -> Schema {
    let encoded = IpcDataGenerator::default()
        .schema_to_bytes(schema, options)
        .unwrap();
    try_schema_from_flatbuffer_bytes(&encoded.ipc_message).unwrap()
}

fn events_schema() -> Schema {
    let metadata = HashMap::from([("origin".to_string(), "sensor-7".to_string())]);
    Schema::new_with_metadata(
        vec![
            Field::new("id", DataType::UInt64, false),
            Field::new(
                "observed_at",
                DataType::Timestamp(TimeUnit::Microsecond, Some("+00:00".into())),
                false,
            ),
            Field::new("day", DataType::Date32, true),
            Field::new("window", DataType::Time64(TimeUnit::Nanosecond), true),
            Field::new("reading", DataType::Decimal128(18, 4), true),
            Field::new_dict(
                "station",
                DataType::Dictionary(Box::new(DataType::Int16), Box::new(DataType::Utf8)),
                true,
                1,
                false,
            ),
            Field::new(
                "samples",
                DataType::new_fixed_size_list(DataType::Float32, 3, false),
                true,
            ),
            Field::new(
                "tags",
                DataType::Struct(Fields::from(vec![
                    Field::new("name", DataType::Utf8, false),
                    Field::new("value", DataType::Binary, true),
                ])),
                true,
            )
            .with_metadata(HashMap::from([("k".to_string(), "v".to_string())])),
        ],
        metadata,
    )
}

#[test]
fn test_round_trip_v5() {
    let schema = events_schema();
    assert_eq!(round_trip(&schema, &IpcWriteOptions::default()), schema);
}

#[test]
fn test_round_trip_v4() {
    let schema = events_schema();
    let options = IpcWriteOptions::try_new(MetadataVersion::V4).unwrap();
    assert_eq!(round_trip(&schema, &options), schema);
}

#[test]
fn test_empty_schema() {
    let schema = Schema::empty();
    assert_eq!(round_trip(&schema, &IpcWriteOptions::default()), schema);
}

#[test]
fn test_blank_timezone_reads_back_as_none() {
    let schema = Schema::new(vec![Field::new(
        "ts",
        DataType::Timestamp(TimeUnit::Second, Some("  ".into())),
        true,
    )]);
    let decoded = round_trip(&schema, &IpcWriteOptions::default());
    assert_eq!(
        decoded.field(0).data_type(),
        &DataType::Timestamp(TimeUnit::Second, None)
    );
}

#[test]
fn test_message_without_schema_header() {
    let mut fbb = flatbuffers::FlatBufferBuilder::new();
    let mut message = typewire_ipc::MessageBuilder::new(&mut fbb);
    message.add_version(MetadataVersion::V5);
    let message = message.finish();
    fbb.finish(message, None);

    let err = try_schema_from_flatbuffer_bytes(fbb.finished_data()).unwrap_err();
    assert_eq!(
        err,
        WireError::ParseError("Unable to get head as schema".to_string())
    );
}
