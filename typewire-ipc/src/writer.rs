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

//! Wraps encoded schemas in IPC messages
//!
//! Only the flatbuffer `Message` is produced. Framing (continuation markers,
//! length prefixes, padding) is left to the caller.

use flatbuffers::FlatBufferBuilder;

use typewire_schema::*;

/// IPC write options used to control the behaviour of the [`IpcDataGenerator`]
#[derive(Debug, Clone)]
pub struct IpcWriteOptions {
    /// The metadata version to write. V4 and V5 are supported, defaults to V5
    metadata_version: crate::MetadataVersion,
}

impl IpcWriteOptions {
    /// Try to create IpcWriteOptions, checking for unsupported versions
    pub fn try_new(metadata_version: crate::MetadataVersion) -> Result<Self, WireError> {
        match metadata_version {
            crate::MetadataVersion::V1
            | crate::MetadataVersion::V2
            | crate::MetadataVersion::V3 => Err(WireError::InvalidArgumentError(
                "Writing IPC metadata version 3 and lower not supported".to_string(),
            )),
            crate::MetadataVersion::V4 | crate::MetadataVersion::V5 => {
                Ok(Self { metadata_version })
            }
            z => Err(WireError::InvalidArgumentError(format!(
                "Unsupported MetadataVersion {z:?}"
            ))),
        }
    }

    /// The metadata version written into each message
    pub fn metadata_version(&self) -> crate::MetadataVersion {
        self.metadata_version
    }

    /// Replace the metadata version, with the same checks as [`Self::try_new`]
    pub fn try_with_metadata_version(
        mut self,
        metadata_version: crate::MetadataVersion,
    ) -> Result<Self, WireError> {
        self.metadata_version = Self::try_new(metadata_version)?.metadata_version;
        Ok(self)
    }
}

impl Default for IpcWriteOptions {
    fn default() -> Self {
        Self {
            metadata_version: crate::MetadataVersion::V5,
        }
    }
}

/// Handles low level details of encoding a [`Schema`] into the
/// [Arrow IPC Format].
///
/// # Example:
/// ```
/// # use typewire_schema::{DataType, Field, Schema};
/// # use typewire_ipc::convert::try_schema_from_flatbuffer_bytes;
/// # use typewire_ipc::writer::{IpcDataGenerator, IpcWriteOptions};
/// let schema = Schema::new(vec![Field::new("id", DataType::Int64, false)]);
///
/// let encoded = IpcDataGenerator::default()
///     .schema_to_bytes(&schema, &IpcWriteOptions::default())
///     .unwrap();
///
/// let decoded = try_schema_from_flatbuffer_bytes(&encoded.ipc_message).unwrap();
/// assert_eq!(decoded, schema);
/// ```
///
/// [Arrow IPC Format]: https://arrow.apache.org/docs/format/Columnar.html#serialization-and-interprocess-communication-ipc
#[derive(Debug, Default)]
pub struct IpcDataGenerator {}

impl IpcDataGenerator {
    /// Converts a schema to an IPC message and returns it encoded inside [EncodedData] as a flatbuffer
    pub fn schema_to_bytes(
        &self,
        schema: &Schema,
        write_options: &IpcWriteOptions,
    ) -> Result<EncodedData, WireError> {
        let mut fbb = FlatBufferBuilder::new();
        let schema_offset = crate::convert::schema_to_fb_offset(&mut fbb, schema)?.as_union_value();

        let mut message = crate::MessageBuilder::new(&mut fbb);
        message.add_version(write_options.metadata_version);
        message.add_header_type(crate::MessageHeader::Schema);
        message.add_bodyLength(0);
        message.add_header(schema_offset);
        let data = message.finish();
        fbb.finish(data, None);

        let data = fbb.finished_data();
        log::debug!(
            "encoded schema with {} fields into a {} byte message",
            schema.fields().len(),
            data.len()
        );
        Ok(EncodedData {
            ipc_message: data.to_vec(),
        })
    }
}

/// Stores the encoded data, which is a crate::Message
#[derive(Debug)]
pub struct EncodedData {
    /// An encoded crate::Message
    pub ipc_message: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_options_versions() {
        for version in [
            crate::MetadataVersion::V1,
            crate::MetadataVersion::V2,
            crate::MetadataVersion::V3,
        ] {
            let err = IpcWriteOptions::try_new(version).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid argument error: Writing IPC metadata version 3 and lower not supported"
            );
        }

        let options = IpcWriteOptions::try_new(crate::MetadataVersion::V4).unwrap();
        assert_eq!(options.metadata_version(), crate::MetadataVersion::V4);

        let err = IpcWriteOptions::try_new(crate::MetadataVersion(9)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument error: Unsupported MetadataVersion <UNKNOWN 9>"
        );

        let options = IpcWriteOptions::default();
        assert_eq!(options.metadata_version(), crate::MetadataVersion::V5);
        assert!(options
            .try_with_metadata_version(crate::MetadataVersion::V2)
            .is_err());
    }

    #[test]
    fn test_schema_message_header() {
        let schema = Schema::new(vec![
            Field::new("a", DataType::Utf8, true),
            Field::new("b", DataType::Date32, false),
        ]);
        let options = IpcWriteOptions::try_new(crate::MetadataVersion::V4).unwrap();
        let encoded = IpcDataGenerator::default()
            .schema_to_bytes(&schema, &options)
            .unwrap();

        let message = crate::root_as_message(&encoded.ipc_message).unwrap();
        assert_eq!(message.version(), crate::MetadataVersion::V4);
        assert_eq!(message.header_type(), crate::MessageHeader::Schema);
        assert_eq!(message.bodyLength(), 0);
        let fb_schema = message.header_as_schema().unwrap();
        assert_eq!(fb_schema.fields().unwrap().len(), 2);
    }

    #[test]
    fn test_unsupported_schema_is_not_encoded() {
        let schema = Schema::new(vec![Field::new(
            "d",
            DataType::Duration(TimeUnit::Second),
            true,
        )]);
        let err = IpcDataGenerator::default()
            .schema_to_bytes(&schema, &IpcWriteOptions::default())
            .unwrap_err();
        assert!(matches!(err, WireError::UnsupportedType(_)));
    }
}
