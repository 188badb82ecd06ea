//! Per-service generator configuration, read from a TOML file.
//!
//! ```toml
//! service = "waf"
//! title = "AWS WAF"
//! type_prefix = "Waf"
//! namespace = "com.amazonaws.waf"
//! api_version = "2015-08-24"
//! protocol = "awsJson1_1"
//! target_prefix = "AWSWAF_20150824"
//! crate_name = "autoboto_waf_model"
//! model = "smithy-model/waf.json"
//! output = "../crates/autoboto-waf-model/src"
//!
//! [operations]
//! web_acl = ["CreateWebACL", "GetWebACL"]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Generator settings for a single service.
#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    /// Lowercase service identifier (`mediaconvert`, `waf`).
    pub service: String,
    /// Human-readable service title.
    pub title: String,
    /// Prefix for generated service-level type names (`MediaConvertOperation`).
    pub type_prefix: String,
    /// Smithy namespace of the service shapes.
    pub namespace: String,
    /// API version string.
    pub api_version: String,
    /// Smithy protocol trait name (`restJson1`, `awsJson1_1`, ...).
    pub protocol: String,
    /// `X-Amz-Target` prefix for JSON-RPC protocols.
    #[serde(default)]
    pub target_prefix: Option<String>,
    /// Rust crate name of the generated model crate, used in doc examples.
    pub crate_name: String,
    /// Path of the Smithy JSON AST model.
    pub model: PathBuf,
    /// Directory the generated sources are written to.
    pub output: PathBuf,
    /// Operation categories: file name -> operation names.
    pub operations: BTreeMap<String, Vec<String>>,
}

impl ServiceConfig {
    /// Load a config file. Relative `model` and `output` paths are resolved
    /// against the directory containing the config's `services/` folder.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read service config: {}", path.display()))?;
        let mut config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse service config: {}", path.display()))?;

        let base = path
            .parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if config.model.is_relative() {
            config.model = base.join(&config.model);
        }
        if config.output.is_relative() {
            config.output = base.join(&config.output);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.operations.is_empty() {
            bail!("service {} lists no operations", self.service);
        }
        self.protocol_variant()?;
        if self.protocol.starts_with("awsJson") && self.target_prefix.is_none() {
            bail!(
                "service {} uses {} but sets no target_prefix",
                self.service,
                self.protocol
            );
        }
        let mut seen = BTreeSet::new();
        for op in self.operations.values().flatten() {
            if !seen.insert(op.as_str()) {
                bail!("operation {op} is listed in more than one category");
            }
        }
        Ok(())
    }

    /// Fully qualified shape ID for a short name.
    pub fn shape_id(&self, short: &str) -> String {
        format!("{}#{short}", self.namespace)
    }

    /// All configured operations, sorted by name.
    pub fn target_operations(&self) -> Vec<&str> {
        let ops: BTreeSet<&str> = self
            .operations
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        ops.into_iter().collect()
    }

    /// The `autoboto_core::Protocol` variant matching the configured protocol.
    pub fn protocol_variant(&self) -> Result<&'static str> {
        Ok(match self.protocol.as_str() {
            "restJson1" => "RestJson1",
            "awsJson1_0" => "AwsJson1_0",
            "awsJson1_1" => "AwsJson1_1",
            "restXml" => "RestXml",
            "awsQuery" => "AwsQuery",
            other => bail!("unsupported protocol: {other}"),
        })
    }

    /// Name of the generated error macro (`mediaconvert_error`).
    pub fn error_macro(&self) -> String {
        format!("{}_error", self.service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
service = "waf"
title = "AWS WAF"
type_prefix = "Waf"
namespace = "com.amazonaws.waf"
api_version = "2015-08-24"
protocol = "awsJson1_1"
target_prefix = "AWSWAF_20150824"
crate_name = "autoboto_waf_model"
model = "smithy-model/waf.json"
output = "../crates/autoboto-waf-model/src"

[operations]
web_acl = ["GetWebACL", "CreateWebACL"]
change_token = ["GetChangeToken"]
"#;

    #[test]
    fn test_should_parse_and_sort_operations() {
        let config: ServiceConfig = toml::from_str(SAMPLE).unwrap();
        config.validate().unwrap();
        assert_eq!(
            config.target_operations(),
            vec!["CreateWebACL", "GetChangeToken", "GetWebACL"]
        );
        assert_eq!(config.shape_id("WebACL"), "com.amazonaws.waf#WebACL");
        assert_eq!(config.protocol_variant().unwrap(), "AwsJson1_1");
        assert_eq!(config.error_macro(), "waf_error");
    }

    #[test]
    fn test_should_reject_json_protocol_without_target_prefix() {
        let raw = SAMPLE.replace("target_prefix = \"AWSWAF_20150824\"\n", "");
        let config: ServiceConfig = toml::from_str(&raw).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_should_reject_duplicate_operations() {
        let raw = SAMPLE.replace("[\"GetChangeToken\"]", "[\"GetChangeToken\", \"GetWebACL\"]");
        let config: ServiceConfig = toml::from_str(&raw).unwrap();
        assert!(config.validate().is_err());
    }
}
