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

//! Defines `WireError` for representing failures while mapping schemas to and from the wire

use std::error::Error;

/// Many different operations in the `typewire` crates return this error type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// The logical type has no counterpart in the wire vocabulary.
    ///
    /// This is a structural defect of the schema, retrying will not help.
    UnsupportedType(String),
    /// An argument, such as an enumeration value or a writer option, is out of range.
    InvalidArgumentError(String),
    /// The wire representation could not be decoded.
    ParseError(String),
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::UnsupportedType(source) => {
                write!(f, "Unsupported type: {source}")
            }
            WireError::InvalidArgumentError(desc) => {
                write!(f, "Invalid argument error: {desc}")
            }
            WireError::ParseError(desc) => write!(f, "Parser error: {desc}"),
        }
    }
}

impl Error for WireError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        let err = WireError::UnsupportedType("union types are not supported".to_string());
        assert_eq!(err.to_string(), "Unsupported type: union types are not supported");

        let err = WireError::InvalidArgumentError("bad unit".to_string());
        assert_eq!(err.to_string(), "Invalid argument error: bad unit");
    }

    #[test]
    fn error_source() {
        let err: Box<dyn Error> = Box::new(WireError::ParseError("truncated".to_string()));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Parser error: truncated");
    }
}
