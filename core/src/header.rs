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

use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;

/// Headers produced by a signer, to be merged into the outbound request.
///
/// Every name holds exactly one value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderSet {
    headers: HeaderMap,
}

impl HeaderSet {
    /// Create an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any previous value.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Get the value of a header.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Iterate all headers.
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter()
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if the set holds no header.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Merge into `target`, overwriting every existing value of the same name.
    pub fn apply(self, target: &mut HeaderMap) {
        for (name, value) in self.headers {
            // HeaderMap yields `None` for repeated values of the previous name,
            // which never happens here since each name holds one value.
            if let Some(name) = name {
                target.insert(name, value);
            }
        }
    }
}
