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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Signing tokens expected by the Hyper_ verifier.
pub const HYPER_HMAC_SHA256: &str = "HYPER-HMAC-SHA256";
pub const HYPER_REQUEST: &str = "hyper_request";
pub const HYPER_KEY_PREFIX: &str = "HYPER";

// Headers used in hyper services.
pub const X_HYPER_CONTENT_SHA256: &str = "x-hyper-content-sha256";
pub const X_HYPER_DATE: &str = "x-hyper-date";

// Env values used in hyper services.
pub const HYPER_ACCESS_KEY: &str = "HYPER_ACCESS_KEY";
pub const HYPER_SECRET_KEY: &str = "HYPER_SECRET_KEY";
pub const HYPER_REGION: &str = "HYPER_REGION";
pub const HYPER_SERVICE: &str = "HYPER_SERVICE";

pub const DEFAULT_REGION: &str = "us-west-1";
pub const DEFAULT_SERVICE: &str = "hyper";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// AsciiSet for canonical query values.
///
/// Percent-encode every byte except the unreserved characters:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static HYPER_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
