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

use criterion::{criterion_group, criterion_main, Criterion};
use flatbuffers::FlatBufferBuilder;
use std::hint::black_box;
use typewire_ipc::convert::{build_field_type, schema_to_fb};
use typewire_ipc::writer::{IpcDataGenerator, IpcWriteOptions};
use typewire_schema::{DataType, Field, Fields, Schema, TimeUnit};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("typewire_ipc_schema_encode");

    group.bench_function("build_field_type/timestamp", |b| {
        let field = Field::new(
            "ts",
            DataType::Timestamp(TimeUnit::Microsecond, Some("Europe/Paris".into())),
            true,
        );
        let mut fbb = FlatBufferBuilder::with_capacity(1024);
        b.iter(|| {
            fbb.reset();
            black_box(build_field_type(&field, &mut fbb).unwrap());
        })
    });

    group.bench_function("schema_to_fb/wide_100", |b| {
        let schema = create_schema(100);
        b.iter(|| black_box(schema_to_fb(&schema).unwrap()))
    });

    group.bench_function("schema_to_bytes/wide_100", |b| {
        let schema = create_schema(100);
        let options = IpcWriteOptions::default();
        let generator = IpcDataGenerator::default();
        b.iter(|| black_box(generator.schema_to_bytes(&schema, &options).unwrap()))
    });

    group.finish();
}

fn create_schema(num_columns: usize) -> Schema {
    let fields = (0..num_columns).map(|i| {
        let data_type = match i % 6 {
            0 => DataType::Int32,
            1 => DataType::Utf8,
            2 => DataType::Date32,
            3 => DataType::Decimal128(11, 2),
            4 => DataType::new_list(DataType::Float64, true),
            _ => DataType::Struct(Fields::from(vec![
                Field::new("x", DataType::Int64, false),
                Field::new("y", DataType::Boolean, true),
            ])),
        };
        Field::new(format!("c{i}"), data_type, true)
    });
    Schema::new(fields.collect::<Vec<_>>())
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
