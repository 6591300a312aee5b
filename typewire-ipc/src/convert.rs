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

//! Utilities for converting between IPC types and logical types

use flatbuffers::{FlatBufferBuilder, ForwardsUOffset, UnionWIPOffset, Vector, WIPOffset};
use std::collections::HashMap;
use std::sync::Arc;
use typewire_schema::*;

use DataType::*;

/// The wire type of a field: the tag of the `Type` union and the offset of
/// the parameter table it selects.
///
/// The tag decides how the table behind `type_` is laid out, so the two are
/// only meaningful together.
#[derive(Clone, Copy)]
pub struct FieldType {
    /// Tag of the `Type` union
    pub type_type: crate::Type,
    /// Offset of the parameter table, an empty table for parameterless types
    pub type_: WIPOffset<UnionWIPOffset>,
}

impl std::fmt::Debug for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldType")
            .field("type_type", &self.type_type)
            .field("type_", &self.type_.value())
            .finish()
    }
}

/// Serialize a schema in IPC format
///
/// On error the builder is dropped, so a partially written schema never
/// escapes.
pub fn schema_to_fb(schema: &Schema) -> Result<FlatBufferBuilder<'static>, WireError> {
    let mut fbb = FlatBufferBuilder::new();

    let root = schema_to_fb_offset(&mut fbb, schema)?;

    fbb.finish(root, None);

    Ok(fbb)
}

/// Write `schema` into a caller supplied builder and return the offset of
/// the `Schema` table
///
/// The builder must be discarded if this returns an error.
pub fn schema_to_fb_offset<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    schema: &Schema,
) -> Result<WIPOffset<crate::Schema<'a>>, WireError> {
    let fields = schema
        .fields()
        .iter()
        .map(|field| build_field(fbb, field))
        .collect::<Result<Vec<_>, _>>()?;
    let fb_field_list = fbb.create_vector(&fields);

    let fb_metadata_list = metadata_to_fb(fbb, schema.metadata());

    let mut builder = crate::SchemaBuilder::new(fbb);
    builder.add_fields(fb_field_list);
    if let Some(fb_metadata_list) = fb_metadata_list {
        builder.add_custom_metadata(fb_metadata_list);
    }
    Ok(builder.finish())
}

/// Convert an IPC Field to a logical Field
impl TryFrom<crate::Field<'_>> for Field {
    type Error = WireError;

    fn try_from(field: crate::Field) -> Result<Self, Self::Error> {
        let name = field
            .name()
            .ok_or_else(|| WireError::ParseError("Field is missing its name".to_string()))?;
        let data_type = get_data_type(field, true)?;

        let logical_field = match field.dictionary() {
            Some(dictionary) => Field::new_dict(
                name,
                data_type,
                field.nullable(),
                dictionary.id(),
                dictionary.isOrdered(),
            ),
            None => Field::new(name, data_type, field.nullable()),
        };

        Ok(logical_field.with_metadata(metadata_from_fb(field.custom_metadata())))
    }
}

/// Deserialize a Schema table from flat buffer format to Schema data type
pub fn fb_to_schema(fb: crate::Schema) -> Result<Schema, WireError> {
    let mut fields: Vec<Field> = vec![];
    if let Some(c_fields) = fb.fields() {
        for c_field in c_fields {
            if c_field.type_type() == crate::Type::Decimal
                && fb.endianness() == crate::Endianness::Big
            {
                return Err(WireError::ParseError(
                    "Big Endian is not supported for Decimal!".to_string(),
                ));
            }
            fields.push(Field::try_from(c_field)?);
        }
    }

    Ok(Schema::new_with_metadata(
        fields,
        metadata_from_fb(fb.custom_metadata()),
    ))
}

/// Try deserialize flat buffer format bytes into a schema
///
/// `bytes` must hold a `Message` table whose header is a `Schema`, as
/// produced by [`IpcDataGenerator::schema_to_bytes`](crate::writer::IpcDataGenerator::schema_to_bytes).
pub fn try_schema_from_flatbuffer_bytes(bytes: &[u8]) -> Result<Schema, WireError> {
    let message = crate::root_as_message(bytes)
        .map_err(|err| WireError::ParseError(format!("Unable to get root as message: {err}")))?;
    let schema = message
        .header_as_schema()
        .ok_or_else(|| WireError::ParseError("Unable to get head as schema".to_string()))?;
    fb_to_schema(schema)
}

/// Get the logical data type from the type of an IPC field
///
/// With `may_be_dictionary` set, a field carrying a `DictionaryEncoding`
/// becomes a [`DataType::Dictionary`] of its index type and value type.
pub fn get_data_type(field: crate::Field, may_be_dictionary: bool) -> Result<DataType, WireError> {
    if let Some(dictionary) = field.dictionary() {
        if may_be_dictionary {
            let int = dictionary.indexType().ok_or_else(|| {
                WireError::ParseError("Dictionary encoding is missing its index type".to_string())
            })?;
            let index_type = int_from_fb(int)?;
            return Ok(Dictionary(
                Box::new(index_type),
                Box::new(get_data_type(field, false)?),
            ));
        }
    }

    let data_type = match field.type_type() {
        crate::Type::Null => Null,
        crate::Type::Bool => Boolean,
        crate::Type::Int => int_from_fb(required(field.type_as_int(), "Int")?)?,
        crate::Type::Binary => Binary,
        crate::Type::Utf8 => Utf8,
        crate::Type::FixedSizeBinary => {
            let fsb = required(field.type_as_fixed_size_binary(), "FixedSizeBinary")?;
            FixedSizeBinary(fsb.byteWidth())
        }
        crate::Type::FloatingPoint => {
            let float = required(field.type_as_floating_point(), "FloatingPoint")?;
            match float.precision() {
                crate::Precision::SINGLE => Float32,
                crate::Precision::DOUBLE => Float64,
                crate::Precision::HALF => {
                    return Err(WireError::UnsupportedType(
                        "half precision floats are not supported by this decoder".to_string(),
                    ))
                }
                z => {
                    return Err(WireError::ParseError(format!(
                        "FloatingPoint type with precision of {z:?} not supported"
                    )))
                }
            }
        }
        crate::Type::Date => date_type_from_fb(required(field.type_as_date(), "Date")?.unit())?,
        crate::Type::Time => {
            let time = required(field.type_as_time(), "Time")?;
            let unit = time_unit_from_fb(time.unit())?;
            match time.bitWidth() {
                32 => Time32(unit),
                64 => Time64(unit),
                z => {
                    return Err(WireError::ParseError(format!(
                        "Time type with bit width of {z} not supported"
                    )))
                }
            }
        }
        crate::Type::Timestamp => {
            let timestamp = required(field.type_as_timestamp(), "Timestamp")?;
            let unit = time_unit_from_fb(timestamp.unit())?;
            Timestamp(unit, timestamp.timezone().map(Into::into))
        }
        crate::Type::List => {
            let mut children = child_fields(field)?;
            if children.len() != 1 {
                return Err(WireError::ParseError(format!(
                    "List type should have exactly one child, found {}",
                    children.len()
                )));
            }
            List(Arc::new(children.remove(0)))
        }
        crate::Type::FixedSizeList => {
            let fsl = required(field.type_as_fixed_size_list(), "FixedSizeList")?;
            let mut children = child_fields(field)?;
            if children.len() != 1 {
                return Err(WireError::ParseError(format!(
                    "FixedSizeList type should have exactly one child, found {}",
                    children.len()
                )));
            }
            FixedSizeList(Arc::new(children.remove(0)), fsl.listSize())
        }
        crate::Type::Struct_ => Struct(child_fields(field)?.into()),
        crate::Type::Decimal => {
            let decimal = required(field.type_as_decimal(), "Decimal")?;
            let precision = u8::try_from(decimal.precision()).map_err(|_| {
                WireError::ParseError(format!(
                    "Decimal precision {} does not fit in u8",
                    decimal.precision()
                ))
            })?;
            let scale = i8::try_from(decimal.scale()).map_err(|_| {
                WireError::ParseError(format!(
                    "Decimal scale {} does not fit in i8",
                    decimal.scale()
                ))
            })?;
            match decimal.bitWidth() {
                128 => Decimal128(precision, scale),
                256 => Decimal256(precision, scale),
                z => {
                    return Err(WireError::ParseError(format!(
                        "Decimal type with bit width of {z} not supported"
                    )))
                }
            }
        }
        crate::Type::Union => {
            return Err(WireError::UnsupportedType(
                "union types are not supported by this encoder".to_string(),
            ))
        }
        t => {
            return Err(WireError::UnsupportedType(format!(
                "Type {t:?} not supported by this decoder"
            )))
        }
    };

    Ok(data_type)
}

fn required<T>(table: Option<T>, name: &str) -> Result<T, WireError> {
    table.ok_or_else(|| WireError::ParseError(format!("Field is missing its {name} type table")))
}

fn int_from_fb(int: crate::Int) -> Result<DataType, WireError> {
    Ok(match (int.bitWidth(), int.is_signed()) {
        (8, true) => Int8,
        (8, false) => UInt8,
        (16, true) => Int16,
        (16, false) => UInt16,
        (32, true) => Int32,
        (32, false) => UInt32,
        (64, true) => Int64,
        (64, false) => UInt64,
        z => {
            return Err(WireError::ParseError(format!(
                "Int type with bit width of {} and signed of {} not supported",
                z.0, z.1
            )))
        }
    })
}

fn child_fields(field: crate::Field) -> Result<Vec<Field>, WireError> {
    match field.children() {
        Some(children) => children.iter().map(Field::try_from).collect(),
        None => Ok(vec![]),
    }
}

fn metadata_from_fb(
    list: Option<Vector<'_, ForwardsUOffset<crate::KeyValue<'_>>>>,
) -> HashMap<String, String> {
    let mut metadata = HashMap::default();
    if let Some(list) = list {
        for kv in list {
            if let (Some(k), Some(v)) = (kv.key(), kv.value()) {
                metadata.insert(k.to_string(), v.to_string());
            }
        }
    }
    metadata
}

/// Write custom metadata as a vector of `KeyValue` tables, sorted by key so
/// that equal maps always produce equal bytes
fn metadata_to_fb<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    metadata: &HashMap<String, String>,
) -> Option<WIPOffset<Vector<'a, ForwardsUOffset<crate::KeyValue<'a>>>>> {
    if metadata.is_empty() {
        return None;
    }
    let mut entries: Vec<_> = metadata.iter().collect();
    entries.sort();

    let custom_metadata = entries
        .into_iter()
        .map(|(k, v)| {
            let fb_key_name = fbb.create_string(k);
            let fb_val_name = fbb.create_string(v);

            let mut kv_builder = crate::KeyValueBuilder::new(fbb);
            kv_builder.add_key(fb_key_name);
            kv_builder.add_value(fb_val_name);
            kv_builder.finish()
        })
        .collect::<Vec<_>>();
    Some(fbb.create_vector(&custom_metadata))
}

/// Create an IPC Field from a logical Field
pub fn build_field<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    field: &Field,
) -> Result<WIPOffset<crate::Field<'a>>, WireError> {
    let field_type = build_field_type(field, fbb)?;
    log::trace!(
        "encoded field {:?} as {:?}",
        field.name(),
        field_type.type_type
    );

    let children = build_children(fbb, field.data_type())?;
    let fb_metadata = metadata_to_fb(fbb, field.metadata());
    let fb_field_name = fbb.create_string(field.name().as_str());

    let fb_dictionary = match (field.data_type(), field.dict_id(), field.dict_is_ordered()) {
        (Dictionary(index_type, _), Some(dict_id), Some(dict_is_ordered)) => Some(
            get_fb_dictionary(index_type, dict_id, dict_is_ordered, fbb)?,
        ),
        _ => None,
    };

    let mut field_builder = crate::FieldBuilder::new(fbb);
    field_builder.add_name(fb_field_name);
    if let Some(dictionary) = fb_dictionary {
        field_builder.add_dictionary(dictionary)
    }
    field_builder.add_type_type(field_type.type_type);
    field_builder.add_nullable(field.is_nullable());
    field_builder.add_children(children);
    field_builder.add_type_(field_type.type_);

    if let Some(fb_metadata) = fb_metadata {
        field_builder.add_custom_metadata(fb_metadata);
    }

    Ok(field_builder.finish())
}

/// Build the child fields of `data_type`
///
/// Some IPC implementations expect an empty list for child data instead of
/// a null value, so types without children get an empty vector.
fn build_children<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    data_type: &DataType,
) -> Result<WIPOffset<Vector<'a, ForwardsUOffset<crate::Field<'a>>>>, WireError> {
    let children = match data_type {
        List(child) | FixedSizeList(child, _) => vec![build_field(fbb, child)?],
        Struct(fields) => fields
            .iter()
            .map(|field| build_field(fbb, field))
            .collect::<Result<Vec<_>, _>>()?,
        Dictionary(_, value_type) => return build_children(fbb, value_type),
        _ => vec![],
    };
    Ok(fbb.create_vector(&children))
}

/// Encode the data type of `field` into `fbb`
///
/// Only the type is encoded: name, nullability, children and dictionary
/// information are left to [`build_field`].
pub fn build_field_type<'a>(
    field: &Field,
    fbb: &mut FlatBufferBuilder<'a>,
) -> Result<FieldType, WireError> {
    get_fb_field_type(field.data_type(), fbb)
}

/// Get the IPC type of a data type
///
/// Every supported type writes exactly one parameter table, empty for
/// parameterless types. A dictionary is encoded as its value type.
/// Unsupported types return [`WireError::UnsupportedType`] before anything
/// is written to `fbb`.
pub fn get_fb_field_type<'a>(
    data_type: &DataType,
    fbb: &mut FlatBufferBuilder<'a>,
) -> Result<FieldType, WireError> {
    let (type_type, type_) = match data_type {
        Null => (
            crate::Type::Null,
            crate::NullBuilder::new(fbb).finish().as_union_value(),
        ),
        Boolean => (
            crate::Type::Bool,
            crate::BoolBuilder::new(fbb).finish().as_union_value(),
        ),
        Int8 | Int16 | Int32 | Int64 | UInt8 | UInt16 | UInt32 | UInt64 => {
            (crate::Type::Int, fb_int(data_type, fbb)?.as_union_value())
        }
        Float32 | Float64 => {
            let mut builder = crate::FloatingPointBuilder::new(fbb);
            match data_type {
                Float32 => builder.add_precision(crate::Precision::SINGLE),
                _ => builder.add_precision(crate::Precision::DOUBLE),
            };
            (crate::Type::FloatingPoint, builder.finish().as_union_value())
        }
        Binary => (
            crate::Type::Binary,
            crate::BinaryBuilder::new(fbb).finish().as_union_value(),
        ),
        Utf8 => (
            crate::Type::Utf8,
            crate::Utf8Builder::new(fbb).finish().as_union_value(),
        ),
        FixedSizeBinary(len) => {
            let mut builder = crate::FixedSizeBinaryBuilder::new(fbb);
            builder.add_byteWidth(*len);
            (
                crate::Type::FixedSizeBinary,
                builder.finish().as_union_value(),
            )
        }
        Date32 | Date64 => {
            let mut builder = crate::DateBuilder::new(fbb);
            if let Some(unit) = date_unit_for(data_type) {
                builder.add_unit(unit);
            }
            (crate::Type::Date, builder.finish().as_union_value())
        }
        Time32(unit) | Time64(unit) => {
            let time_unit = time_unit_to_fb(*unit)?;
            let mut builder = crate::TimeBuilder::new(fbb);
            builder.add_unit(time_unit);
            match data_type {
                Time32(_) => builder.add_bitWidth(32),
                _ => builder.add_bitWidth(64),
            };
            (crate::Type::Time, builder.finish().as_union_value())
        }
        Timestamp(unit, tz) => {
            let time_unit = time_unit_to_fb(*unit)?;
            // A blank timezone is the same as no timezone
            let tz = tz.as_deref().filter(|tz| !tz.trim().is_empty());
            let tz_str = tz.map(|tz| fbb.create_string(tz));
            let mut builder = crate::TimestampBuilder::new(fbb);
            builder.add_unit(time_unit);
            if let Some(tz) = tz_str {
                builder.add_timezone(tz);
            }
            (crate::Type::Timestamp, builder.finish().as_union_value())
        }
        List(_) => (
            crate::Type::List,
            crate::ListBuilder::new(fbb).finish().as_union_value(),
        ),
        FixedSizeList(_, len) => {
            let mut builder = crate::FixedSizeListBuilder::new(fbb);
            builder.add_listSize(*len);
            (crate::Type::FixedSizeList, builder.finish().as_union_value())
        }
        Struct(_) => (
            crate::Type::Struct_,
            crate::Struct_Builder::new(fbb).finish().as_union_value(),
        ),
        Decimal128(precision, scale) | Decimal256(precision, scale) => {
            let mut builder = crate::DecimalBuilder::new(fbb);
            builder.add_precision(*precision as i32);
            builder.add_scale(*scale as i32);
            match data_type {
                Decimal128(_, _) => builder.add_bitWidth(128),
                _ => builder.add_bitWidth(256),
            };
            (crate::Type::Decimal, builder.finish().as_union_value())
        }
        Dictionary(_, value_type) => {
            // In this library, the dictionary "type" is a logical construct. Here we
            // pass through to the value type, as we've already captured the index
            // type in the DictionaryEncoding metadata in the parent field
            return get_fb_field_type(value_type, fbb);
        }
        Union(_, _) => {
            return Err(WireError::UnsupportedType(
                "union types are not supported by this encoder".to_string(),
            ))
        }
        Float16 | Duration(_) | Interval(_) | LargeBinary | LargeUtf8 | LargeList(_)
        | Map(_, _) => {
            return Err(WireError::UnsupportedType(format!(
                "{data_type} is not supported by this encoder"
            )))
        }
    };

    Ok(FieldType { type_type, type_ })
}

/// Write an `Int` table for an integer data type
fn fb_int<'a>(
    data_type: &DataType,
    fbb: &mut FlatBufferBuilder<'a>,
) -> Result<WIPOffset<crate::Int<'a>>, WireError> {
    let bit_width = match data_type {
        Int8 | UInt8 => 8,
        Int16 | UInt16 => 16,
        Int32 | UInt32 => 32,
        Int64 | UInt64 => 64,
        other => {
            return Err(WireError::InvalidArgumentError(format!(
                "expected an integer type, got {other}"
            )))
        }
    };
    let mut builder = crate::IntBuilder::new(fbb);
    builder.add_bitWidth(bit_width);
    builder.add_is_signed(data_type.is_signed_integer());
    Ok(builder.finish())
}

/// Create an IPC dictionary encoding
pub fn get_fb_dictionary<'a>(
    index_type: &DataType,
    dict_id: i64,
    dict_is_ordered: bool,
    fbb: &mut FlatBufferBuilder<'a>,
) -> Result<WIPOffset<crate::DictionaryEncoding<'a>>, WireError> {
    if !index_type.is_dictionary_key_type() {
        return Err(WireError::InvalidArgumentError(format!(
            "Dictionary index type must be an integer, got {index_type}"
        )));
    }
    let index = fb_int(index_type, fbb)?;

    let mut builder = crate::DictionaryEncodingBuilder::new(fbb);
    builder.add_id(dict_id);
    builder.add_indexType(index);
    builder.add_isOrdered(dict_is_ordered);

    Ok(builder.finish())
}

/// Convert a logical time unit to its wire value
pub fn time_unit_to_fb(unit: TimeUnit) -> Result<crate::TimeUnit, WireError> {
    match unit {
        TimeUnit::Second => Ok(crate::TimeUnit::SECOND),
        TimeUnit::Millisecond => Ok(crate::TimeUnit::MILLISECOND),
        TimeUnit::Microsecond => Ok(crate::TimeUnit::MICROSECOND),
        TimeUnit::Nanosecond => Ok(crate::TimeUnit::NANOSECOND),
        other => Err(WireError::InvalidArgumentError(format!(
            "time unit {other:?} has no wire representation"
        ))),
    }
}

/// Convert a wire time unit to its logical value
pub fn time_unit_from_fb(unit: crate::TimeUnit) -> Result<TimeUnit, WireError> {
    match unit {
        crate::TimeUnit::SECOND => Ok(TimeUnit::Second),
        crate::TimeUnit::MILLISECOND => Ok(TimeUnit::Millisecond),
        crate::TimeUnit::MICROSECOND => Ok(TimeUnit::Microsecond),
        crate::TimeUnit::NANOSECOND => Ok(TimeUnit::Nanosecond),
        z => Err(WireError::InvalidArgumentError(format!(
            "unknown time unit {}",
            z.0
        ))),
    }
}

/// The wire date unit of a date type, `None` for anything else
pub fn date_unit_for(data_type: &DataType) -> Option<crate::DateUnit> {
    match data_type {
        Date32 => Some(crate::DateUnit::DAY),
        Date64 => Some(crate::DateUnit::MILLISECOND),
        _ => None,
    }
}

/// The date type stored with a wire date unit
pub fn date_type_from_fb(unit: crate::DateUnit) -> Result<DataType, WireError> {
    match unit {
        crate::DateUnit::DAY => Ok(Date32),
        crate::DateUnit::MILLISECOND => Ok(Date64),
        z => Err(WireError::InvalidArgumentError(format!(
            "unknown date unit {}",
            z.0
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_schema_round_trip() {
        let md: HashMap<String, String> = [("Key".to_string(), "value".to_string())]
            .iter()
            .cloned()
            .collect();
        let field_md: HashMap<String, String> = [("k".to_string(), "v".to_string())]
            .iter()
            .cloned()
            .collect();
        let schema = Schema::new_with_metadata(
            vec![
                Field::new("uint8", DataType::UInt8, false).with_metadata(field_md),
                Field::new("uint16", DataType::UInt16, true),
                Field::new("uint32", DataType::UInt32, false),
                Field::new("uint64", DataType::UInt64, true),
                Field::new("int8", DataType::Int8, true),
                Field::new("int16", DataType::Int16, false),
                Field::new("int32", DataType::Int32, true),
                Field::new("int64", DataType::Int64, false),
                Field::new("float32", DataType::Float32, false),
                Field::new("float64", DataType::Float64, true),
                Field::new("null", DataType::Null, true),
                Field::new("bool", DataType::Boolean, false),
                Field::new("date32", DataType::Date32, false),
                Field::new("date64", DataType::Date64, true),
                Field::new("time32[s]", DataType::Time32(TimeUnit::Second), true),
                Field::new("time32[ms]", DataType::Time32(TimeUnit::Millisecond), false),
                Field::new("time64[us]", DataType::Time64(TimeUnit::Microsecond), false),
                Field::new("time64[ns]", DataType::Time64(TimeUnit::Nanosecond), true),
                Field::new(
                    "timestamp[s]",
                    DataType::Timestamp(TimeUnit::Second, None),
                    false,
                ),
                Field::new(
                    "timestamp[ms]",
                    DataType::Timestamp(TimeUnit::Millisecond, None),
                    true,
                ),
                Field::new(
                    "timestamp[us]",
                    DataType::Timestamp(TimeUnit::Microsecond, Some("Africa/Johannesburg".into())),
                    false,
                ),
                Field::new(
                    "timestamp[ns]",
                    DataType::Timestamp(TimeUnit::Nanosecond, None),
                    true,
                ),
                Field::new("utf8", DataType::Utf8, false),
                Field::new("binary", DataType::Binary, false),
                Field::new("fixed_size_binary", DataType::FixedSizeBinary(16), false),
                Field::new("list[u8]", DataType::new_list(DataType::UInt8, false), true),
                Field::new(
                    "fixed_size_list[u8]",
                    DataType::new_fixed_size_list(DataType::UInt8, 2, false),
                    true,
                ),
                Field::new(
                    "list[struct<float32, int32, bool>]",
                    DataType::new_list(
                        DataType::Struct(Fields::from(vec![
                            Field::new("float32", DataType::Float32, false),
                            Field::new("int32", DataType::Int32, true),
                            Field::new("bool", DataType::Boolean, true),
                        ])),
                        true,
                    ),
                    false,
                ),
                Field::new(
                    "struct<dictionary<int32, utf8>>",
                    DataType::Struct(Fields::from(vec![Field::new_dict(
                        "dictionary<int32, utf8>",
                        DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8)),
                        false,
                        123,
                        true,
                    )])),
                    false,
                ),
                Field::new_dict(
                    "dictionary<uint8, list<utf8>>",
                    DataType::Dictionary(
                        Box::new(DataType::UInt8),
                        Box::new(DataType::new_list(DataType::Utf8, true)),
                    ),
                    true,
                    7,
                    false,
                ),
                Field::new("decimal<usize, usize>", DataType::Decimal128(10, 6), false),
                Field::new("decimal256<usize, usize>", DataType::Decimal256(76, -3), true),
            ],
            md,
        );

        let fb = schema_to_fb(&schema).unwrap();

        // read back fields
        let ipc = crate::root_as_schema(fb.finished_data()).unwrap();
        let schema2 = fb_to_schema(ipc).unwrap();
        assert_eq!(schema, schema2);
    }

    #[test]
    fn schema_is_little_endian() {
        let schema = Schema::new(vec![Field::new("a", DataType::Int32, false)]);
        let fb = schema_to_fb(&schema).unwrap();
        let ipc = crate::root_as_schema(fb.finished_data()).unwrap();
        assert_eq!(ipc.endianness(), crate::Endianness::Little);
    }

    #[test]
    fn metadata_bytes_are_deterministic() {
        let metadata: HashMap<String, String> = (0..16)
            .map(|i| (format!("key{i}"), format!("value{i}")))
            .collect();
        let reversed: HashMap<String, String> = (0..16)
            .rev()
            .map(|i| (format!("key{i}"), format!("value{i}")))
            .collect();
        let schema =
            Schema::new(vec![Field::new("a", DataType::Utf8, true)]).with_metadata(metadata);
        let reordered =
            Schema::new(vec![Field::new("a", DataType::Utf8, true)]).with_metadata(reversed);

        let a = schema_to_fb(&schema).unwrap();
        let b = schema_to_fb(&reordered).unwrap();
        assert_eq!(a.finished_data(), b.finished_data());
    }

    #[test]
    fn checked_and_unchecked_roots_agree() {
        let schema = Schema::new(vec![Field::new("a", DataType::Int16, true)]);
        let fb = schema_to_fb(&schema).unwrap();
        let checked = crate::root_as_schema(fb.finished_data()).unwrap();
        let unchecked = unsafe { crate::root_as_schema_unchecked(fb.finished_data()) };
        assert_eq!(fb_to_schema(checked).unwrap(), schema);
        assert_eq!(fb_to_schema(unchecked).unwrap(), schema);
    }

    #[test]
    fn primitive_fields_have_empty_children() {
        let mut fbb = FlatBufferBuilder::new();
        let field = build_field(&mut fbb, &Field::new("a", DataType::Float64, true)).unwrap();
        fbb.finish(field, None);

        let field = flatbuffers::root::<crate::Field>(fbb.finished_data()).unwrap();
        assert_eq!(field.name(), Some("a"));
        assert!(field.nullable());
        assert_eq!(field.children().map(|c| c.len()), Some(0));
        assert!(field.dictionary().is_none());
    }

    #[test]
    fn dictionary_field_carries_encoding() {
        let mut fbb = FlatBufferBuilder::new();
        let field = Field::new_dict(
            "dict",
            DataType::Dictionary(Box::new(DataType::UInt16), Box::new(DataType::Utf8)),
            false,
            42,
            true,
        );
        let offset = build_field(&mut fbb, &field).unwrap();
        fbb.finish(offset, None);

        let ipc = flatbuffers::root::<crate::Field>(fbb.finished_data()).unwrap();
        assert_eq!(ipc.type_type(), crate::Type::Utf8);
        let dictionary = ipc.dictionary().unwrap();
        assert_eq!(dictionary.id(), 42);
        assert!(dictionary.isOrdered());
        let index = dictionary.indexType().unwrap();
        assert_eq!(index.bitWidth(), 16);
        assert!(!index.is_signed());
    }

    #[test]
    fn dictionary_index_must_be_integer() {
        let mut fbb = FlatBufferBuilder::new();
        let err = get_fb_dictionary(&DataType::Utf8, 0, false, &mut fbb).unwrap_err();
        assert!(matches!(err, WireError::InvalidArgumentError(_)));
        assert!(fbb.unfinished_data().is_empty());

        let field = Field::new_dict(
            "dict",
            DataType::Dictionary(Box::new(DataType::Float32), Box::new(DataType::Utf8)),
            false,
            0,
            false,
        );
        let err = schema_to_fb(&Schema::new(vec![field])).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid argument error: Dictionary index type must be an integer, got Float32"
        );
    }

    #[test]
    fn unsupported_nested_child_fails_schema() {
        let schema = Schema::new(vec![Field::new(
            "s",
            DataType::Struct(Fields::from(vec![Field::new(
                "m",
                DataType::LargeUtf8,
                true,
            )])),
            true,
        )]);
        let err = schema_to_fb(&schema).err().unwrap();
        assert!(matches!(err, WireError::UnsupportedType(_)));
    }

    #[test]
    fn time_unit_translation_is_bijective() {
        let units = [
            TimeUnit::Second,
            TimeUnit::Millisecond,
            TimeUnit::Microsecond,
            TimeUnit::Nanosecond,
        ];
        let wire: Vec<_> = units
            .iter()
            .map(|unit| time_unit_to_fb(*unit).unwrap())
            .collect();
        assert_eq!(
            wire,
            vec![
                crate::TimeUnit::SECOND,
                crate::TimeUnit::MILLISECOND,
                crate::TimeUnit::MICROSECOND,
                crate::TimeUnit::NANOSECOND,
            ]
        );
        for (unit, fb) in units.iter().zip(wire) {
            assert_eq!(time_unit_from_fb(fb).unwrap(), *unit);
        }
    }

    #[test]
    fn unknown_wire_units_are_invalid_arguments() {
        for raw in [-1, 4, 42, i16::MAX] {
            let err = time_unit_from_fb(crate::TimeUnit(raw)).unwrap_err();
            assert_eq!(
                err,
                WireError::InvalidArgumentError(format!("unknown time unit {raw}"))
            );
        }
        let err = date_type_from_fb(crate::DateUnit(2)).unwrap_err();
        assert!(matches!(err, WireError::InvalidArgumentError(_)));
    }

    #[test]
    fn date_units() {
        assert_eq!(date_unit_for(&DataType::Date32), Some(crate::DateUnit::DAY));
        assert_eq!(
            date_unit_for(&DataType::Date64),
            Some(crate::DateUnit::MILLISECOND)
        );
        assert_eq!(date_unit_for(&DataType::Int32), None);
        assert_eq!(
            date_type_from_fb(crate::DateUnit::DAY).unwrap(),
            DataType::Date32
        );
        assert_eq!(
            date_type_from_fb(crate::DateUnit::MILLISECOND).unwrap(),
            DataType::Date64
        );
    }

    /// Build a single wire field around an `Int` table, bypassing the encoder
    fn int_field(bit_width: i32) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::new();
        let int = crate::Int::create(
            &mut fbb,
            &crate::IntArgs {
                bitWidth: bit_width,
                is_signed: true,
            },
        );
        let name = fbb.create_string("c");
        let field = crate::Field::create(
            &mut fbb,
            &crate::FieldArgs {
                name: Some(name),
                nullable: true,
                type_type: crate::Type::Int,
                type_: Some(int.as_union_value()),
                ..Default::default()
            },
        );
        fbb.finish(field, None);
        fbb.finished_data().to_vec()
    }

    #[test]
    fn decode_rejects_unknown_int_width() {
        let bytes = int_field(12);
        let field = flatbuffers::root::<crate::Field>(&bytes).unwrap();
        let err = Field::try_from(field).unwrap_err();
        assert_eq!(
            err,
            WireError::ParseError(
                "Int type with bit width of 12 and signed of true not supported".to_string()
            )
        );

        let bytes = int_field(64);
        let field = flatbuffers::root::<crate::Field>(&bytes).unwrap();
        let field = Field::try_from(field).unwrap();
        assert_eq!(field, Field::new("c", DataType::Int64, true));
    }

    #[test]
    fn decode_rejects_big_endian_decimal() {
        let mut fbb = FlatBufferBuilder::new();
        let decimal = crate::Decimal::create(
            &mut fbb,
            &crate::DecimalArgs {
                precision: 10,
                scale: 2,
                bitWidth: 128,
            },
        );
        let name = fbb.create_string("d");
        let field = crate::Field::create(
            &mut fbb,
            &crate::FieldArgs {
                name: Some(name),
                type_type: crate::Type::Decimal,
                type_: Some(decimal.as_union_value()),
                ..Default::default()
            },
        );
        let fields = fbb.create_vector(&[field]);
        let schema = crate::Schema::create(
            &mut fbb,
            &crate::SchemaArgs {
                endianness: crate::Endianness::Big,
                fields: Some(fields),
                ..Default::default()
            },
        );
        fbb.finish(schema, None);

        let ipc = crate::root_as_schema(fbb.finished_data()).unwrap();
        let err = fb_to_schema(ipc).unwrap_err();
        assert!(matches!(err, WireError::ParseError(_)));
    }

    #[test]
    fn decode_rejects_union() {
        let mut fbb = FlatBufferBuilder::new();
        // no Union table binding exists, any table satisfies the verifier
        let table = crate::NullBuilder::new(&mut fbb).finish();
        let name = fbb.create_string("u");
        let field = crate::Field::create(
            &mut fbb,
            &crate::FieldArgs {
                name: Some(name),
                type_type: crate::Type::Union,
                type_: Some(table.as_union_value()),
                ..Default::default()
            },
        );
        fbb.finish(field, None);

        let field = flatbuffers::root::<crate::Field>(fbb.finished_data()).unwrap();
        let err = get_data_type(field, true).unwrap_err();
        assert_eq!(
            err,
            WireError::UnsupportedType("union types are not supported by this encoder".to_string())
        );
    }

    #[test]
    fn schema_from_garbage_bytes() {
        let err = try_schema_from_flatbuffer_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, WireError::ParseError(_)));
    }
}
