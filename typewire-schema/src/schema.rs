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

use std::collections::HashMap;
use std::fmt;

use crate::field::Field;
use crate::Fields;

/// Ordered fields plus schema-level custom metadata
///
/// ```
/// # use typewire_schema::*;
/// let schema = Schema::new(vec![
///     Field::new("id", DataType::Int64, false),
///     Field::new("active", DataType::Boolean, true),
/// ]);
/// assert_eq!(schema.field(1).name(), "active");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    /// Top-level fields, in wire order
    pub fields: Fields,
    /// Custom key/value metadata
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: HashMap<String, String>,
}

impl Schema {
    /// A schema with no fields and no metadata
    pub fn empty() -> Self {
        Self::new(Fields::empty())
    }

    /// A schema over `fields` with no metadata
    pub fn new(fields: impl Into<Fields>) -> Self {
        Self::new_with_metadata(fields, HashMap::new())
    }

    /// A schema over `fields` carrying `metadata`
    #[inline]
    pub fn new_with_metadata(fields: impl Into<Fields>, metadata: HashMap<String, String>) -> Self {
        Self {
            fields: fields.into(),
            metadata,
        }
    }

    /// Replaces the metadata and returns self
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    #[inline]
    #[allow(missing_docs)]
    pub const fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    #[inline]
    #[allow(missing_docs)]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The field at position `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds
    pub fn field(&self, i: usize) -> &Field {
        &self.fields[i]
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields: Vec<String> = self.fields.iter().map(|c| c.to_string()).collect();
        f.write_str(&fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::datatype::DataType;

    use super::*;

    #[test]
    fn test_accessors() {
        let metadata = HashMap::from([("k".to_string(), "v".to_string())]);
        let schema = Schema::new_with_metadata(
            vec![
                Field::new("first_name", DataType::Utf8, false),
                Field::new("age", DataType::UInt8, true),
            ],
            metadata,
        );
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.field(1).data_type(), &DataType::UInt8);
        assert_eq!(schema.metadata().get("k").map(String::as_str), Some("v"));
        assert!(schema.to_string().starts_with("Field { name: \"first_name\""));
    }

    #[test]
    fn test_empty() {
        let schema = Schema::empty();
        assert!(schema.fields().is_empty());
        assert!(schema.metadata().is_empty());
        assert_eq!(schema, Schema::new(Vec::<Field>::new()));
    }
}
