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

use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

use crate::{Error, Result};

/// The logical request to be signed.
///
/// SigningRequest is a plain description of the request: it knows nothing
/// about how the request was built or how it will be sent.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Target host, used as the `host` header.
    pub host: String,
    /// HTTP path, signed verbatim. Blank means `/`.
    pub path: String,
    /// HTTP query parameters, unencoded. Duplicated names are allowed.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Request body. `None` is signed the same as an empty body.
    pub body: Option<Bytes>,
}

impl SigningRequest {
    /// Create a new signing request for `method` against `host`.
    ///
    /// The method is upper-cased before parsing so `get` and `GET` are the
    /// same request.
    pub fn new(method: &str, host: &str) -> Result<Self> {
        let method = method.trim();
        if method.is_empty() {
            return Err(Error::malformed_input("request method is required"));
        }
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())?;

        if host.trim().is_empty() {
            return Err(Error::malformed_input("request host is required"));
        }

        Ok(Self {
            method,
            host: host.to_string(),
            path: String::new(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Build a signing request from http::request::Parts.
    ///
    /// The host (and port, if any) is taken from the uri, falling back to the
    /// `host` header. Userinfo is never part of the host. Query parameters
    /// are percent decoded.
    pub fn from_parts(parts: &http::request::Parts, body: Option<Bytes>) -> Result<Self> {
        let host = match (parts.uri.host(), parts.uri.port_u16()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => parts
                .headers
                .get(http::header::HOST)
                .map(|v| v.to_str())
                .transpose()?
                .ok_or_else(|| {
                    Error::malformed_input("request without authority is invalid for signing")
                })?
                .to_string(),
        };

        Ok(Self {
            method: parts.method.clone(),
            host,
            path: parts.uri.path().to_string(),
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            headers: parts.headers.clone(),
            body,
        })
    }

    /// Set the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Push a new query pair into query list.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a header value. Names are case-insensitive.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get the payload bytes, empty if the request has no body.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}
