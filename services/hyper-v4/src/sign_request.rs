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

use std::collections::BTreeMap;
use std::fmt::Write;

use bytes::Bytes;
use http::header::{self, HeaderName};
use http::request::Parts;
use http::HeaderValue;
use log::{debug, trace};
use percent_encoding::utf8_percent_encode;

use hypersign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use hypersign_core::time::{format_date, format_iso8601, now, DateTime};
use hypersign_core::{Error, HeaderSet, Result, SigningRequest};

use crate::constants::{
    DEFAULT_CONTENT_TYPE, HYPER_HMAC_SHA256, HYPER_KEY_PREFIX, HYPER_QUERY_ENCODE_SET,
    HYPER_REQUEST, X_HYPER_CONTENT_SHA256, X_HYPER_DATE,
};
use crate::{Config, Credential};

/// RequestSigner that implements Hyper_ `HYPER-HMAC-SHA256` signing.
///
/// The algorithm follows [AWS Signature Version 4](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
/// with hyper specific tokens.
///
/// RequestSigner is immutable after construction and can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
    region: String,
    service: String,
    content_type: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for `region` and `service`.
    pub fn new(credential: Credential, region: &str, service: &str) -> Self {
        Self {
            credential,
            region: region.into(),
            service: service.into(),
            content_type: DEFAULT_CONTENT_TYPE.into(),

            time: None,
        }
    }

    /// Create a new signer from config.
    ///
    /// Missing credentials are reported when signing, not here.
    pub fn from_config(config: &Config) -> Self {
        let credential = Credential {
            access_key_id: config.access_key_id.clone().unwrap_or_default(),
            secret_access_key: config.secret_access_key.clone().unwrap_or_default(),
        };

        Self::new(credential, config.region(), config.service())
            .with_content_type(config.content_type())
    }

    /// Specify the content type signed for requests without one.
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Pin the signing time for every request.
    ///
    /// # Note
    ///
    /// Without a pinned time the clock is read once per request, which is
    /// what long-lived signers want. A pinned time that falls behind the
    /// verifier's clock will get requests rejected as expired.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Compute the headers to merge into the outbound request.
    pub fn sign(&self, req: &SigningRequest) -> Result<HeaderSet> {
        self.sign_at(req, self.time.unwrap_or_else(now))
    }

    /// Compute the headers to merge into the outbound request at `time`.
    pub fn sign_at(&self, req: &SigningRequest, time: DateTime) -> Result<HeaderSet> {
        self.credential.check()?;
        check_scope_part("region", &self.region)?;
        check_scope_part("service", &self.service)?;

        let time = SigningTime::new(time);
        let payload_hash = hex_sha256(req.payload());
        let content_type = match req.headers.get(header::CONTENT_TYPE) {
            Some(v) => v.to_str()?.to_string(),
            None => self.content_type.clone(),
        };

        let headers = canonical_headers(req, &content_type, &payload_hash, &time)?;
        let creq = canonical_request(req, &headers, &payload_hash)?;
        trace!("calculated canonical request: {}", creq.value);

        // Scope: "20160712/<region>/<service>/hyper_request"
        let scope = format!(
            "{}/{}/{}/{}",
            time.date, self.region, self.service, HYPER_REQUEST
        );
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&time, &scope, &creq)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &self.credential.secret_access_key,
            &time.date,
            &self.region,
            &self.service,
        )?;
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes())?;

        let mut authorization = HeaderValue::from_str(&format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            HYPER_HMAC_SHA256,
            self.credential.access_key_id,
            scope,
            creq.signed_headers,
            signature
        ))?;
        authorization.set_sensitive(true);

        let mut output = HeaderSet::new();
        output.insert(header::CONTENT_TYPE, HeaderValue::from_str(&content_type)?);
        output.insert(
            HeaderName::from_static(X_HYPER_DATE),
            HeaderValue::from_str(&time.timestamp)?,
        );
        output.insert(
            HeaderName::from_static(X_HYPER_CONTENT_SHA256),
            HeaderValue::from_str(&payload_hash)?,
        );
        output.insert(header::HOST, HeaderValue::from_str(&req.host)?);
        output.insert(header::AUTHORIZATION, authorization);
        Ok(output)
    }

    /// Sign http request parts in place.
    ///
    /// Hyper_ endpoints are signed without the leading `/` of the path, so
    /// `/v1.23/version` is signed as `v1.23/version`. Signed headers
    /// overwrite any existing value of the same name.
    pub fn sign_parts(&self, parts: &mut Parts, body: Option<Bytes>) -> Result<()> {
        let mut req = SigningRequest::from_parts(parts, body)?;
        if let Some(path) = req.path.strip_prefix('/') {
            req.path = path.to_string();
        }
        debug!("signing request: {} {}", req.method, req.path);

        self.sign(&req)?.apply(&mut parts.headers);
        Ok(())
    }
}

/// Both renderings of one signing instant.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SigningTime {
    /// "20160712T033826Z"
    timestamp: String,
    /// "20160712"
    date: String,
}

impl SigningTime {
    fn new(time: DateTime) -> Self {
        Self {
            timestamp: format_iso8601(time),
            date: format_date(time),
        }
    }
}

#[derive(Debug)]
struct CanonicalRequest {
    value: String,
    signed_headers: String,
}

/// Percent-encode a query value for the canonical request.
///
/// Every byte except `A-Z a-z 0-9 - . _ ~` is escaped with uppercase hex,
/// space becomes `%20` rather than `+`.
pub fn canonical_percent_encode(value: &str) -> String {
    utf8_percent_encode(value, &HYPER_QUERY_ENCODE_SET).to_string()
}

/// Collect the headers to sign, sorted by lower-cased name.
///
/// The date, content hash, host and content type always overwrite whatever
/// the request carries. A stale `authorization` is never signed. Repeated
/// values of one name are joined with `,`.
fn canonical_headers(
    req: &SigningRequest,
    content_type: &str,
    payload_hash: &str,
    time: &SigningTime,
) -> Result<BTreeMap<String, String>> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in req.headers.iter() {
        if *name == header::AUTHORIZATION {
            continue;
        }
        let value = value.to_str()?;
        headers
            .entry(name.as_str().to_lowercase())
            .and_modify(|v| {
                v.push(',');
                v.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    headers.insert(header::CONTENT_TYPE.as_str().into(), content_type.into());
    headers.insert(header::HOST.as_str().into(), req.host.clone());
    headers.insert(X_HYPER_CONTENT_SHA256.into(), payload_hash.into());
    headers.insert(X_HYPER_DATE.into(), time.timestamp.clone());

    Ok(headers)
}

/// Region and service become `/` separated scope parts.
fn check_scope_part(name: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains('/') {
        return Err(Error::config_invalid(format!(
            "{name} {value:?} is not a valid scope part"
        )));
    }
    Ok(())
}

fn canonical_query_string(query: &[(String, String)]) -> String {
    let mut query = query.to_vec();
    // Sort by param name, then value for duplicated names.
    query.sort();

    query
        .iter()
        .map(|(k, v)| format!("{k}={}", canonical_percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn canonical_request(
    req: &SigningRequest,
    headers: &BTreeMap<String, String>,
    payload_hash: &str,
) -> Result<CanonicalRequest> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", req.method)?;
    // Insert path, signed as given
    let path = if req.path.trim().is_empty() {
        "/"
    } else {
        req.path.as_str()
    };
    writeln!(f, "{path}")?;
    // Insert query
    writeln!(f, "{}", canonical_query_string(&req.query))?;
    // Insert signed headers, collecting names in the same pass.
    let mut signed_headers = Vec::with_capacity(headers.len());
    for (name, value) in headers {
        writeln!(f, "{name}:{value}")?;
        signed_headers.push(name.as_str());
    }
    writeln!(f)?;
    let signed_headers = signed_headers.join(";");
    writeln!(f, "{signed_headers}")?;
    write!(f, "{payload_hash}")?;

    Ok(CanonicalRequest {
        value: f,
        signed_headers,
    })
}

// StringToSign:
//
// HYPER-HMAC-SHA256
// 20160712T033826Z
// 20160712/<region>/<service>/hyper_request
// <hashed_canonical_request>
fn string_to_sign(time: &SigningTime, scope: &str, creq: &CanonicalRequest) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{HYPER_HMAC_SHA256}")?;
    writeln!(f, "{}", time.timestamp)?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(creq.value.as_bytes()))?;
    Ok(f)
}

fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Result<Vec<u8>> {
    // Sign secret
    let secret = format!("{HYPER_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes())?;
    // Sign service
    let sign_service = hmac_sha256(&sign_region, service.as_bytes())?;
    // Sign request
    hmac_sha256(&sign_service, HYPER_REQUEST.as_bytes())
}
