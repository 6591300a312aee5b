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
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::datatype::DataType;

/// A shared [`Field`]
pub type FieldRef = Arc<Field>;

/// A named, typed column of a [`Schema`](super::Schema)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    name: String,
    data_type: DataType,
    nullable: bool,
    dict_id: i64,
    dict_is_ordered: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: HashMap<String, String>,
}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.data_type.hash(state);
        self.nullable.hash(state);

        // HashMap iteration order is unspecified
        let mut entries: Vec<(&String, &String)> = self.metadata.iter().collect();
        entries.sort();
        entries.hash(state);
    }
}

impl Field {
    /// Child name used by [`DataType::new_list`] and [`DataType::new_fixed_size_list`]
    pub const LIST_FIELD_DEFAULT_NAME: &'static str = "item";

    /// A field without dictionary encoding or metadata
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self::new_dict(name, data_type, nullable, 0, false)
    }

    /// A list child named `"item"`
    ///
    /// ```
    /// # use typewire_schema::{Field, DataType};
    /// assert_eq!(
    ///   Field::new_list_field(DataType::Int32, true),
    ///   Field::new("item", DataType::Int32, true)
    /// );
    /// ```
    pub fn new_list_field(data_type: DataType, nullable: bool) -> Self {
        Self::new(Self::LIST_FIELD_DEFAULT_NAME, data_type, nullable)
    }

    /// A field with dictionary id and ordering
    ///
    /// Both are written to the wire as a `DictionaryEncoding` next to the
    /// field's type and only apply to [`DataType::Dictionary`] fields.
    pub fn new_dict(
        name: impl Into<String>,
        data_type: DataType,
        nullable: bool,
        dict_id: i64,
        dict_is_ordered: bool,
    ) -> Self {
        Field {
            name: name.into(),
            data_type,
            nullable,
            dict_id,
            dict_is_ordered,
            metadata: HashMap::default(),
        }
    }

    /// Replaces the custom metadata and returns self
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
    pub const fn name(&self) -> &String {
        &self.name
    }

    #[inline]
    #[allow(missing_docs)]
    pub const fn data_type(&self) -> &DataType {
        &self.data_type
    }

    #[inline]
    #[allow(missing_docs)]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The dictionary id, `None` unless the type is a dictionary
    #[inline]
    pub const fn dict_id(&self) -> Option<i64> {
        match self.data_type {
            DataType::Dictionary(_, _) => Some(self.dict_id),
            _ => None,
        }
    }

    /// Whether dictionary values are ordered, `None` unless the type is a dictionary
    #[inline]
    pub const fn dict_is_ordered(&self) -> Option<bool> {
        match self.data_type {
            DataType::Dictionary(_, _) => Some(self.dict_is_ordered),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn get_field_hash(field: &Field) -> u64 {
        let mut s = DefaultHasher::new();
        field.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_dict_accessors() {
        let plain = Field::new("plain", DataType::Utf8, true);
        assert_eq!(plain.dict_id(), None);
        assert_eq!(plain.dict_is_ordered(), None);
        assert!(plain.metadata().is_empty());

        let dict = Field::new_dict(
            "dict",
            DataType::Dictionary(Box::new(DataType::Int16), Box::new(DataType::Utf8)),
            false,
            42,
            true,
        );
        assert_eq!(dict.dict_id(), Some(42));
        assert_eq!(dict.dict_is_ordered(), Some(true));
        assert!(!dict.is_nullable());
    }

    #[test]
    fn test_hash_ignores_metadata_order() {
        let mut a = HashMap::new();
        a.insert("k1".to_string(), "v1".to_string());
        a.insert("k2".to_string(), "v2".to_string());
        let mut b = HashMap::new();
        b.insert("k2".to_string(), "v2".to_string());
        b.insert("k1".to_string(), "v1".to_string());

        let f1 = Field::new("f", DataType::Binary, true).with_metadata(a);
        let f2 = Field::new("f", DataType::Binary, true).with_metadata(b);
        assert_eq!(f1, f2);
        assert_eq!(get_field_hash(&f1), get_field_hash(&f2));
    }
}
