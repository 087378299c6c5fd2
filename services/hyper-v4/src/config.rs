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

use std::fmt::{Debug, Formatter};

use hypersign_core::utils::Redact;
use hypersign_core::Env;
use log::debug;

use crate::constants::*;

/// Config for hyper services.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HYPER_ACCESS_KEY`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HYPER_SECRET_KEY`]
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HYPER_REGION`]
    /// - default to `us-west-1`
    pub region: Option<String>,
    /// `service` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HYPER_SERVICE`]
    /// - default to `hyper`
    pub service: Option<String>,
    /// `content_type` is signed for requests that carry no `Content-Type`.
    ///
    /// Default to `application/json`.
    pub content_type: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("service", &self.service)
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl Config {
    /// Load config from env, fields already set take precedence.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        if self.access_key_id.is_none() {
            self.access_key_id = env.var(HYPER_ACCESS_KEY);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = env.var(HYPER_SECRET_KEY);
        }
        if self.region.is_none() {
            self.region = env.var(HYPER_REGION);
        }
        if self.service.is_none() {
            self.service = env.var(HYPER_SERVICE);
        }

        debug!("config loaded from env: {self:?}");
        self
    }

    /// Fill `region` from the endpoint host if it's not set yet.
    ///
    /// See [`Config::region_from_host`].
    pub fn with_region_from_host(mut self, host: &str) -> Self {
        if self.region.is_none() {
            self.region = Self::region_from_host(host);
        }
        self
    }

    /// Region encoded as the first dns label of a hyper endpoint.
    ///
    /// ```
    /// use hypersign_hyper_v4::Config;
    ///
    /// assert_eq!(Config::region_from_host("us-west-1.hyper.sh").as_deref(), Some("us-west-1"));
    /// assert_eq!(Config::region_from_host("localhost"), None);
    /// ```
    pub fn region_from_host(host: &str) -> Option<String> {
        // Drop the port before looking at labels.
        let host = host.split(':').next().unwrap_or_default();
        match host.split_once('.') {
            Some((label, _)) if !label.is_empty() => Some(label.to_string()),
            _ => None,
        }
    }

    /// Region to sign with, falls back to `us-west-1`.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Service to sign with, falls back to `hyper`.
    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    /// Content type to sign with, falls back to `application/json`.
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypersign_core::{OsEnv, StaticEnv};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_from_env() {
        let env: StaticEnv = [
            (HYPER_ACCESS_KEY, "AKID"),
            (HYPER_SECRET_KEY, "testsecret"),
            (HYPER_REGION, "eu-central-1"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().from_env(&env);

        assert_eq!(config.region(), "eu-central-1");
        assert_eq!(config.service(), "hyper");
        assert_eq!(config.content_type(), "application/json");

        assert_eq!(config.access_key_id.as_deref(), Some("AKID"));
        assert_eq!(config.secret_access_key.as_deref(), Some("testsecret"));
    }

    #[test]
    fn test_config_fields_take_precedence() {
        let env: StaticEnv = [(HYPER_ACCESS_KEY, "from-env"), (HYPER_SERVICE, "other")]
            .into_iter()
            .collect();

        let config = Config {
            access_key_id: Some("from-field".to_string()),
            ..Default::default()
        }
        .from_env(&env);

        assert_eq!(config.access_key_id.as_deref(), Some("from-field"));
        assert_eq!(config.service(), "other");
    }

    #[test]
    fn test_config_from_os_env() {
        temp_env::with_vars(
            [
                (HYPER_ACCESS_KEY, Some("AKID")),
                (HYPER_SECRET_KEY, None),
                (HYPER_REGION, None),
                (HYPER_SERVICE, None),
            ],
            || {
                let config = Config::default().from_env(&OsEnv);

                assert_eq!(config.access_key_id.as_deref(), Some("AKID"));
                assert_eq!(config.secret_access_key, None);
                assert_eq!(config.region(), "us-west-1");
            },
        );
    }

    #[test]
    fn test_region_from_host() {
        let cases = vec![
            ("us-west-1.hyper.sh", Some("us-west-1")),
            ("eu-central-1.hyper.sh:443", Some("eu-central-1")),
            ("localhost", None),
            ("localhost:8080", None),
            (".hyper.sh", None),
        ];

        for (host, expected) in cases {
            assert_eq!(
                Config::region_from_host(host).as_deref(),
                expected,
                "Failed on host: {host}"
            );
        }

        let config = Config::default().with_region_from_host("eu-central-1.hyper.sh");
        assert_eq!(config.region(), "eu-central-1");

        let config = Config {
            region: Some("us-west-1".to_string()),
            ..Default::default()
        }
        .with_region_from_host("eu-central-1.hyper.sh");
        assert_eq!(config.region(), "us-west-1");
    }

    #[test]
    fn test_config_debug_is_redacted() {
        let config = Config {
            secret_access_key: Some("a-very-long-secret-key".to_string()),
            ..Default::default()
        };

        assert!(!format!("{config:?}").contains("a-very-long-secret-key"));
    }
}
