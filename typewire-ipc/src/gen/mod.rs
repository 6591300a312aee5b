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

//! Flatbuffer bindings for the parts of the Arrow IPC format used by this crate.
//!
//! The code follows the layout `flatc --rust` emits for `Schema.fbs` and
//! `Message.fbs`. Vtable slots and enum values must stay identical to the
//! upstream format definitions.

#![allow(non_snake_case)]

pub mod Message;
pub mod Schema;
