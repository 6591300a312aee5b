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

//! Maps logical column types onto the [Arrow IPC] flatbuffer `Type` union.
//!
//! The entry point is [`convert::build_field_type`], which turns the
//! [`DataType`](typewire_schema::DataType) of a field into a wire tag plus
//! the offset of its parameter table inside a caller supplied
//! [`FlatBufferBuilder`](flatbuffers::FlatBufferBuilder).
//!
//! ```
//! # use flatbuffers::FlatBufferBuilder;
//! # use typewire_schema::{DataType, Field, TimeUnit};
//! # use typewire_ipc::convert::build_field_type;
//! let field = Field::new("ts", DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into())), true);
//! let mut fbb = FlatBufferBuilder::new();
//! let field_type = build_field_type(&field, &mut fbb).unwrap();
//! assert_eq!(field_type.type_type, typewire_ipc::Type::Timestamp);
//! ```
//!
//! [Arrow IPC]: https://arrow.apache.org/docs/format/Columnar.html#serialization-and-interprocess-communication-ipc

#![warn(missing_docs)]
pub mod convert;
pub mod writer;

#[allow(clippy::redundant_closure)]
#[allow(clippy::needless_lifetimes)]
#[allow(clippy::extra_unused_lifetimes)]
#[allow(clippy::redundant_static_lifetimes)]
#[allow(clippy::redundant_field_names)]
#[allow(non_camel_case_types)]
#[allow(missing_docs)]
pub mod gen;

pub use self::gen::Message::*;
pub use self::gen::Schema::*;
