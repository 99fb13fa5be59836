// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Endpoint and envelope configuration.

use crate::error::{ProtocolError, Result};

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Prefix of the `X-Amz-Target` header value.
pub const DEFAULT_TARGET_PREFIX: &str = "AmazonSSM";

/// Maximum request body size (16 MB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for encoding Systems Manager requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// AWS region, e.g. `eu-west-1`.
    pub region: String,
    /// Endpoint override (VPC endpoint, local emulator).
    pub endpoint: Option<String>,
    /// Service name in the `X-Amz-Target` header.
    pub target_prefix: String,
    /// Largest request body `encode_request` accepts.
    pub max_body_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl ServiceConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION`, then `AWS_DEFAULT_REGION`: region (default: "us-east-1")
    /// - `SSM_ENDPOINT_URL`: endpoint override (default: regional endpoint)
    /// - `SSM_MAX_BODY_BYTES`: request body limit in bytes (default: 16777216)
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let region = var("AWS_REGION")
            .or_else(|| var("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let endpoint = var("SSM_ENDPOINT_URL");

        let max_body_size = match var("SSM_MAX_BODY_BYTES") {
            Some(raw) => raw.parse().map_err(|e| {
                ProtocolError::Config(format!("invalid SSM_MAX_BODY_BYTES: {}", e))
            })?,
            None => DEFAULT_MAX_BODY_SIZE,
        };

        Ok(Self {
            region,
            endpoint,
            max_body_size,
            ..Self::default()
        })
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the `X-Amz-Target` prefix.
    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    /// Set the request body limit.
    pub fn with_max_body_size(mut self, max: usize) -> Self {
        self.max_body_size = max;
        self
    }

    /// Endpoint requests are sent to.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://ssm.{}.amazonaws.com", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.target_prefix, "AmazonSSM");
        assert_eq!(config.max_body_size, 16 * 1024 * 1024);
        assert!(config.endpoint.is_none());
        assert_eq!(config.endpoint_url(), "https://ssm.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_builder_methods() {
        let config = ServiceConfig::new()
            .with_region("eu-central-1")
            .with_target_prefix("AmazonSSMTest")
            .with_max_body_size(1024);

        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.target_prefix, "AmazonSSMTest");
        assert_eq!(config.max_body_size, 1024);
        assert_eq!(
            config.endpoint_url(),
            "https://ssm.eu-central-1.amazonaws.com"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config = ServiceConfig::new().with_endpoint("http://localhost:4566");
        assert_eq!(config.endpoint_url(), "http://localhost:4566");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_from_lookup_region_fallback() {
        let config =
            ServiceConfig::from_lookup(lookup_from(&[("AWS_DEFAULT_REGION", "ap-south-1")]))
                .unwrap();
        assert_eq!(config.region, "ap-south-1");

        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "ap-south-1"),
        ]))
        .unwrap();
        assert_eq!(config.region, "us-west-2");
    }

    #[test]
    fn test_from_lookup_empty_values_are_unset() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "ap-south-1"),
            ("SSM_ENDPOINT_URL", ""),
            ("SSM_MAX_BODY_BYTES", ""),
        ]))
        .unwrap();
        assert_eq!(config.region, "ap-south-1");
        assert!(config.endpoint.is_none());
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
    }

    #[test]
    fn test_from_lookup_endpoint_and_size() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("SSM_ENDPOINT_URL", "http://127.0.0.1:4566"),
            ("SSM_MAX_BODY_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:4566");
        assert_eq!(config.max_body_size, 2048);
    }

    #[test]
    fn test_from_lookup_invalid_size() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("SSM_MAX_BODY_BYTES", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Config(_)));
        assert!(err.to_string().contains("SSM_MAX_BODY_BYTES"));
    }
}
