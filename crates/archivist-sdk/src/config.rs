use std::path::Path;
use std::time::Duration;

use archivist_protocol::{DEFAULT_PAGE_SIZE, DEFAULT_URL};
use archivist_types::StorageIntegrity;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Connection settings for an [`Archivist`](crate::Archivist) client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub url: String,
    pub verify_tls: bool,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub confirm: ConfirmConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            verify_tls: true,
            timeout_secs: 30,
            page_size: DEFAULT_PAGE_SIZE,
            confirm: ConfirmConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SdkResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> SdkResult<()> {
        if self.page_size == 0 {
            return Err(SdkError::Config("page_size must be at least 1".into()));
        }
        if !self.confirm.multiplier.is_finite() || self.confirm.multiplier < 1.0 {
            return Err(SdkError::Config("confirm.multiplier must be a finite number >= 1.0".into()));
        }
        if self.confirm.initial_delay_ms == 0 {
            return Err(SdkError::Config("confirm.initial_delay_ms must be at least 1".into()));
        }
        Ok(())
    }
}

/// Backoff used while waiting for a resource to be confirmed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfirmConfig {
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub multiplier: f64,
    pub max_time_secs: u64,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1_000,
            max_delay_ms: 30_000,
            multiplier: 2.0,
            max_time_secs: 1_200,
        }
    }
}

impl ConfirmConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    pub fn max_time(&self) -> Duration {
        Duration::from_secs(self.max_time_secs)
    }
}

/// Default request-body fields merged into creates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub assets: AssetFixtures,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetFixtures {
    pub storage_integrity: Option<StorageIntegrity>,
}

impl Fixtures {
    pub fn with_storage_integrity(storage_integrity: StorageIntegrity) -> Self {
        Self {
            assets: AssetFixtures {
                storage_integrity: Some(storage_integrity),
            },
        }
    }
}
